//! RustCrypto primitives behind the `crypto` feature.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use rand::RngCore;
use sha2::Sha256;

use super::{KEY_LEN, NONCE_LEN, PBKDF2_ITERATIONS, TAG_LEN};
use crate::error::{NotepadError, Result};

/// Fill `buf` from the operating system CSPRNG.
pub(crate) fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| NotepadError::Io {
            source: std::io::Error::other(format!("OS random source failed: {}", e)),
        })
}

/// Run PBKDF2-HMAC-SHA256 into `out`.
pub(crate) fn pbkdf2_sha256(password: &[u8], salt: &[u8], out: &mut [u8; KEY_LEN]) -> Result<()> {
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, out);
    Ok(())
}

/// Seal `plaintext`, returning `nonce || ciphertext || tag`.
pub(crate) fn seal(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let sealed = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| NotepadError::InvalidInput("Plaintext is too large to encrypt".to_string()))?;

    let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&sealed);
    Ok(out)
}

/// Open `nonce || ciphertext || tag`. Every failure is `Authentication`.
pub(crate) fn open(key: &[u8; KEY_LEN], data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < NONCE_LEN + TAG_LEN {
        return Err(NotepadError::Authentication);
    }
    let (nonce, sealed) = data.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| NotepadError::Authentication)
}
