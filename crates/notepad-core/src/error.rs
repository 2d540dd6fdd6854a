//! Error types for notepad core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes. Nothing in the core logs or
//! swallows an error.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for notepad operations.
pub type Result<T> = std::result::Result<T, NotepadError>;

/// Core error type for notepad operations.
#[derive(Debug, Error)]
pub enum NotepadError {
    /// The encryption backend was not compiled into this build
    #[error("Encryption backend is not available")]
    Unavailable,

    /// Salt passed to key derivation has the wrong length
    #[error("Invalid salt length: expected 16 bytes, got {len}")]
    InvalidSalt { len: usize },

    /// Stored envelope is too short to contain a salt
    #[error("Corrupt encrypted file: {len} bytes is shorter than the 16-byte salt")]
    CorruptFile { len: usize },

    /// Wrong password, tampered or corrupted ciphertext.
    ///
    /// The authentication tag is the only signal, so the two causes are
    /// indistinguishable.
    #[error("Authentication failed")]
    Authentication,

    /// Ciphertext authenticated but the payload is not UTF-8 text
    #[error("Decrypted content is not valid UTF-8 text")]
    InvalidText,

    /// An encrypted note was opened without a password
    #[error("A password is required to open an encrypted note")]
    PasswordRequired,

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Note file does not exist
    #[error("Note not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl NotepadError {
    /// True for failures the user can fix by retrying with another password.
    pub fn is_authentication(&self) -> bool {
        matches!(self, NotepadError::Authentication)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_do_not_distinguish_auth_causes() {
        let message = NotepadError::Authentication.to_string();
        assert!(!message.to_lowercase().contains("password"));
        assert!(!message.to_lowercase().contains("tamper"));
    }

    #[test]
    fn test_corrupt_file_reports_length() {
        let err = NotepadError::CorruptFile { len: 7 };
        assert!(err.to_string().contains("7 bytes"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: NotepadError = io.into();
        assert!(matches!(err, NotepadError::Io { .. }));
        assert!(!err.is_authentication());
    }
}
