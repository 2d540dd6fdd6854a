//! Note encryption and decryption.

use zeroize::Zeroize;

use super::key::{self, DerivedKey};
use super::{backend, is_available, Salt, SALT_LEN};
use crate::error::{NotepadError, Result};

/// Proof that the encryption backend is present.
///
/// Obtain one at startup with [`PasswordCipher::new`] and pass it by value
/// to code that encrypts; holding one means no operation will fail with
/// [`NotepadError::Unavailable`]. The type carries no state, so it is free
/// to copy and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct PasswordCipher {
    _private: (),
}

impl PasswordCipher {
    /// Check for the backend.
    ///
    /// # Errors
    ///
    /// Returns [`NotepadError::Unavailable`] when the `crypto` feature is off.
    pub fn new() -> Result<Self> {
        if !is_available() {
            return Err(NotepadError::Unavailable);
        }
        Ok(Self { _private: () })
    }

    /// Derive the key for `password` and `salt`. See [`key::derive_key`].
    pub fn derive_key(&self, password: &str, salt: &[u8]) -> Result<DerivedKey> {
        key::derive(password, salt)
    }

    /// Encrypt `plaintext` under `password` with a fresh salt and nonce.
    ///
    /// Returns the opaque ciphertext and the salt that must be stored with
    /// it. The caller frames them as `salt || ciphertext`; see
    /// [`Envelope`](crate::envelope::Envelope).
    ///
    /// # Errors
    ///
    /// Returns [`NotepadError::InvalidInput`] for an empty password.
    pub fn encrypt(&self, plaintext: &str, password: &str) -> Result<(Vec<u8>, Salt)> {
        if password.is_empty() {
            return Err(NotepadError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }

        let mut salt = [0u8; SALT_LEN];
        backend::fill_random(&mut salt)?;

        let key = self.derive_key(password, &salt)?;
        let ciphertext = backend::seal(key.as_bytes(), plaintext.as_bytes())?;

        Ok((ciphertext, salt))
    }

    /// Decrypt `ciphertext` produced by [`encrypt`](Self::encrypt).
    ///
    /// # Errors
    ///
    /// - [`NotepadError::InvalidSalt`] if `salt` is not 16 bytes
    /// - [`NotepadError::Authentication`] for a wrong password or any
    ///   corruption or tampering of the ciphertext
    /// - [`NotepadError::InvalidText`] if the authenticated payload is not UTF-8
    pub fn decrypt(&self, ciphertext: &[u8], password: &str, salt: &[u8]) -> Result<String> {
        let key = self.derive_key(password, salt)?;
        let plaintext = backend::open(key.as_bytes(), ciphertext)?;

        String::from_utf8(plaintext).map_err(|err| {
            let mut bytes = err.into_bytes();
            bytes.zeroize();
            NotepadError::InvalidText
        })
    }
}

/// Encrypt a note's text with a password.
///
/// Convenience wrapper that checks availability first.
///
/// # Examples
///
/// ```
/// use notepad_core::crypto::{decrypt, encrypt};
///
/// let (ciphertext, salt) = encrypt("hello world", "correct-horse").unwrap();
/// assert_eq!(salt.len(), 16);
/// assert_eq!(decrypt(&ciphertext, "correct-horse", &salt).unwrap(), "hello world");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<(Vec<u8>, Salt)> {
    PasswordCipher::new()?.encrypt(plaintext, password)
}

/// Decrypt a note's ciphertext with a password and its stored salt.
pub fn decrypt(ciphertext: &[u8], password: &str, salt: &[u8]) -> Result<String> {
    PasswordCipher::new()?.decrypt(ciphertext, password, salt)
}

#[cfg(all(test, feature = "crypto"))]
mod tests {
    use super::*;
    use crate::crypto::{NONCE_LEN, TAG_LEN};

    const PASSWORD: &str = "correct-horse";

    #[test]
    fn test_hello_world_scenario() {
        let (ct, salt) = encrypt("hello world", PASSWORD).unwrap();
        assert_eq!(salt.len(), 16);
        assert_eq!(decrypt(&ct, PASSWORD, &salt).unwrap(), "hello world");
        assert!(matches!(
            decrypt(&ct, "wrong-password", &salt),
            Err(NotepadError::Authentication)
        ));
    }

    #[test]
    fn test_empty_plaintext_round_trip() {
        let (ct, salt) = encrypt("", PASSWORD).unwrap();
        assert_eq!(ct.len(), NONCE_LEN + TAG_LEN);
        assert_eq!(decrypt(&ct, PASSWORD, &salt).unwrap(), "");
    }

    #[test]
    fn test_unicode_round_trip() {
        let text = "Grüße, 世界! \u{1F512}\r\nsecond line\ttab";
        let (ct, salt) = encrypt(text, "pässwörd").unwrap();
        assert_eq!(decrypt(&ct, "pässwörd", &salt).unwrap(), text);
    }

    #[test]
    fn test_encryption_is_not_deterministic() {
        let (ct1, salt1) = encrypt("same text", PASSWORD).unwrap();
        let (ct2, salt2) = encrypt("same text", PASSWORD).unwrap();

        assert_ne!(salt1, salt2);
        assert_ne!(ct1, ct2);
    }

    #[test]
    fn test_ciphertext_hides_plaintext() {
        let (ct, _) = encrypt("PLAINTEXT_MARKER_123", PASSWORD).unwrap();
        let haystack = String::from_utf8_lossy(&ct);
        assert!(!haystack.contains("PLAINTEXT_MARKER_123"));
    }

    #[test]
    fn test_every_flipped_byte_fails_authentication() {
        let cipher = PasswordCipher::new().unwrap();
        let (ct, salt) = cipher.encrypt("tamper me", PASSWORD).unwrap();

        let mut first = ct.clone();
        first[0] ^= 0x01;
        assert!(matches!(
            cipher.decrypt(&first, PASSWORD, &salt),
            Err(NotepadError::Authentication)
        ));

        // The key does not depend on the ciphertext; derive it once.
        let key = cipher.derive_key(PASSWORD, &salt).unwrap();
        for index in 0..ct.len() {
            let mut tampered = ct.clone();
            tampered[index] ^= 0x01;
            let result = backend::open(key.as_bytes(), &tampered);
            assert!(
                matches!(result, Err(NotepadError::Authentication)),
                "flip at byte {} was not detected",
                index
            );
        }
    }

    #[test]
    fn test_flipped_salt_fails_authentication() {
        let (ct, mut salt) = encrypt("salted", PASSWORD).unwrap();
        salt[0] ^= 0x80;
        assert!(matches!(
            decrypt(&ct, PASSWORD, &salt),
            Err(NotepadError::Authentication)
        ));
    }

    #[test]
    fn test_truncated_ciphertext_fails_authentication() {
        let (ct, salt) = encrypt("truncate", PASSWORD).unwrap();
        for len in [0, 1, NONCE_LEN, NONCE_LEN + TAG_LEN - 1, ct.len() - 1] {
            assert!(matches!(
                decrypt(&ct[..len], PASSWORD, &salt),
                Err(NotepadError::Authentication)
            ));
        }
    }

    #[test]
    fn test_empty_password_rejected_for_encryption() {
        let result = encrypt("text", "");
        assert!(matches!(result, Err(NotepadError::InvalidInput(_))));
    }

    #[test]
    fn test_decrypt_rejects_bad_salt_length() {
        let (ct, _) = encrypt("text", PASSWORD).unwrap();
        assert!(matches!(
            decrypt(&ct, PASSWORD, &[0u8; 8]),
            Err(NotepadError::InvalidSalt { len: 8 })
        ));
    }

    #[test]
    fn test_non_utf8_payload_is_invalid_text() {
        let cipher = PasswordCipher::new().unwrap();
        let salt = [3u8; SALT_LEN];
        let key = cipher.derive_key(PASSWORD, &salt).unwrap();
        let ct = backend::seal(key.as_bytes(), &[0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            cipher.decrypt(&ct, PASSWORD, &salt),
            Err(NotepadError::InvalidText)
        ));
    }

    #[test]
    fn test_cipher_usable_from_many_threads() {
        let cipher = PasswordCipher::new().unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    scope.spawn(move || {
                        let text = format!("note {}", i);
                        let (ct, salt) = cipher.encrypt(&text, PASSWORD).unwrap();
                        assert_eq!(cipher.decrypt(&ct, PASSWORD, &salt).unwrap(), text);
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    }
}
