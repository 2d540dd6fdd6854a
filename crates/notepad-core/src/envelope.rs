//! On-disk framing of encrypted notes.
//!
//! ```text
//! byte[0..16)   salt, raw
//! byte[16..end) ciphertext, opaque to this module
//! ```
//!
//! The ciphertext's internal layout belongs to the cipher; this module only
//! splits off the salt. There is no version or parameter header.

use crate::crypto::{self, PasswordCipher, Salt, SALT_LEN};
use crate::error::{NotepadError, Result};

/// A salt and the ciphertext sealed under the key it derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    salt: Salt,
    ciphertext: Vec<u8>,
}

impl Envelope {
    /// Frame a ciphertext with the salt it was produced with.
    pub fn new(salt: Salt, ciphertext: Vec<u8>) -> Self {
        Self { salt, ciphertext }
    }

    /// Split stored bytes into salt and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`NotepadError::CorruptFile`] if `bytes` is shorter than the salt.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < SALT_LEN {
            return Err(NotepadError::CorruptFile { len: bytes.len() });
        }
        let (salt, ciphertext) = bytes.split_at(SALT_LEN);
        let mut fixed = [0u8; SALT_LEN];
        fixed.copy_from_slice(salt);
        Ok(Self::new(fixed, ciphertext.to_vec()))
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Total framed length in bytes.
    pub fn len(&self) -> usize {
        SALT_LEN + self.ciphertext.len()
    }

    /// Always false: an envelope holds at least its salt.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Serialize as `salt || ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(&self.salt);
        bytes.extend_from_slice(&self.ciphertext);
        bytes
    }

    /// Decrypt the envelope's contents.
    pub fn open_with(&self, cipher: PasswordCipher, password: &str) -> Result<String> {
        cipher.decrypt(&self.ciphertext, password, &self.salt)
    }
}

/// Encrypt text and frame it for storage.
pub fn seal(plaintext: &str, password: &str) -> Result<Vec<u8>> {
    let (ciphertext, salt) = crypto::encrypt(plaintext, password)?;
    Ok(Envelope::new(salt, ciphertext).to_bytes())
}

/// Parse stored bytes and decrypt them.
///
/// The length check runs before key derivation, so a truncated file is
/// reported as [`NotepadError::CorruptFile`] without paying for the KDF.
pub fn open(bytes: &[u8], password: &str) -> Result<String> {
    let cipher = PasswordCipher::new()?;
    Envelope::parse(bytes)?.open_with(cipher, password)
}
