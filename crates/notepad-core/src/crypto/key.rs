//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! This module turns a password and a per-file salt into the 32-byte key
//! used by the note cipher.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{backend, PasswordCipher, KEY_LEN, SALT_LEN};
use crate::error::{NotepadError, Result};

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped. Not `Clone`: a key
/// lives for one encrypt or decrypt call.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
thread_local! {
    /// Number of derivations run on this thread; lets tests prove a code
    /// path rejected input before paying for the KDF.
    pub(crate) static DERIVATIONS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Derive an encryption key from a password and salt.
///
/// # Arguments
///
/// * `password` - The password, used as its UTF-8 bytes
/// * `salt` - Exactly [`SALT_LEN`] bytes, unique per encryption
///
/// # Errors
///
/// - [`NotepadError::Unavailable`] if the backend is compiled out
/// - [`NotepadError::InvalidSalt`] if `salt` is not 16 bytes
///
/// # Examples
///
/// ```
/// use notepad_core::crypto::derive_key;
///
/// let salt = [7u8; 16];
/// let a = derive_key("correct-horse", &salt).unwrap();
/// let b = derive_key("correct-horse", &salt).unwrap();
/// assert_eq!(a.as_bytes(), b.as_bytes());
/// ```
pub fn derive_key(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    PasswordCipher::new()?.derive_key(password, salt)
}

/// Derivation without the availability check; callers hold a capability.
pub(crate) fn derive(password: &str, salt: &[u8]) -> Result<DerivedKey> {
    if salt.len() != SALT_LEN {
        return Err(NotepadError::InvalidSalt { len: salt.len() });
    }

    #[cfg(test)]
    DERIVATIONS.with(|count| count.set(count.get() + 1));

    let mut key = DerivedKey { key: [0u8; KEY_LEN] };
    backend::pbkdf2_sha256(password.as_bytes(), salt, &mut key.key)?;
    Ok(key)
}
