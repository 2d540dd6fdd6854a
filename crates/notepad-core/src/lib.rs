//! # Notepad Core
//!
//! Core library for Secure Notepad - password-protected plain text notes.
//!
//! This crate owns everything that touches note bytes: key derivation,
//! authenticated encryption, the on-disk envelope, and atomic file writes.
//! It performs no logging and no prompting; hosts supply passwords and map
//! errors to their own messages.
//!
//! ## Architecture
//!
//! - **crypto**: PBKDF2 key derivation and AES-256-GCM sealing
//! - **envelope**: `salt || ciphertext` framing
//! - **note**: format detection, naming, reading and saving note files
//! - **fs**: atomic write helpers
//!
//! ## Example
//!
//! ```
//! use notepad_core::crypto::{decrypt, encrypt};
//!
//! let (ciphertext, salt) = encrypt("hello world", "correct-horse").unwrap();
//! let plaintext = decrypt(&ciphertext, "correct-horse", &salt).unwrap();
//! assert_eq!(plaintext, "hello world");
//! ```

pub mod crypto;
pub mod envelope;
pub mod error;
pub mod fs;
pub mod note;

pub use crypto::{is_available, PasswordCipher};
pub use envelope::Envelope;
pub use error::{NotepadError, Result};
pub use note::{NoteFormat, NoteStats, SaveMode};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
