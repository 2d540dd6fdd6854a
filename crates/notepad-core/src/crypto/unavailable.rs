//! Stand-ins used when the `crypto` feature is disabled.

use super::KEY_LEN;
use crate::error::{NotepadError, Result};

pub(crate) fn fill_random(_buf: &mut [u8]) -> Result<()> {
    Err(NotepadError::Unavailable)
}

pub(crate) fn pbkdf2_sha256(_password: &[u8], _salt: &[u8], _out: &mut [u8; KEY_LEN]) -> Result<()> {
    Err(NotepadError::Unavailable)
}

pub(crate) fn seal(_key: &[u8; KEY_LEN], _plaintext: &[u8]) -> Result<Vec<u8>> {
    Err(NotepadError::Unavailable)
}

pub(crate) fn open(_key: &[u8; KEY_LEN], _data: &[u8]) -> Result<Vec<u8>> {
    Err(NotepadError::Unavailable)
}
