//! Password-based encryption for notes.
//!
//! A note is protected by deriving a per-file key from the user's password
//! and a fresh random salt, then sealing the text with an authenticated
//! cipher:
//! - **PBKDF2-HMAC-SHA256**: 480,000 rounds, 32-byte key
//! - **AES-256-GCM**: random 96-bit nonce, 128-bit tag
//!
//! ## Security Model
//!
//! - Salt and nonce are fresh for every encryption, so equal notes under
//!   equal passwords never produce equal bytes
//! - Any modification of the ciphertext fails closed with
//!   [`NotepadError::Authentication`](crate::NotepadError::Authentication)
//! - Derived keys are zeroized on drop and never leave this module's types
//!
//! ## Availability
//!
//! The backend is behind the `crypto` cargo feature (on by default). Without
//! it every operation fails with
//! [`NotepadError::Unavailable`](crate::NotepadError::Unavailable) and
//! [`is_available`] reports `false`, so hosts can offer plaintext-only saving
//! instead of attempting a doomed operation.

pub mod cipher;
pub mod key;
pub mod password;

#[cfg(feature = "crypto")]
mod backend;

#[cfg(not(feature = "crypto"))]
#[path = "unavailable.rs"]
mod backend;

pub use cipher::{decrypt, encrypt, PasswordCipher};
pub use key::{derive_key, DerivedKey};
pub use password::validate_password;

/// Salt length in bytes. Stored in the clear at the start of every envelope.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// PBKDF2 round count. Fixed: envelopes carry no parameter header.
pub const PBKDF2_ITERATIONS: u32 = 480_000;

/// Human-readable names of the primitives, for status output.
pub const KDF_NAME: &str = "PBKDF2-HMAC-SHA256";
pub const CIPHER_NAME: &str = "AES-256-GCM";

/// A 16-byte salt.
pub type Salt = [u8; SALT_LEN];

/// Report whether the encryption backend is compiled into this build.
///
/// Cheap and side-effect free; call it once at startup and hand the answer
/// (or a [`PasswordCipher`]) to whatever needs it.
pub fn is_available() -> bool {
    cfg!(feature = "crypto")
}
