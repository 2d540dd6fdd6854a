//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! and the translation from core errors to user-facing messages.

use std::fmt;

use notepad_core::NotepadError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (note, config)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password, too many attempts)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Encrypted file is not a valid envelope
    CorruptFile(String),

    /// Encryption backend missing from this build
    Unavailable { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::Unavailable { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::CorruptFile(message) | CliError::InvalidInput(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and optional hint.
    pub fn auth_failed(message: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn corrupt_file() -> Self {
        CliError::CorruptFile("File is corrupted or not a valid encrypted file.".to_string())
    }

    pub fn unavailable() -> Self {
        CliError::Unavailable {
            message: "Encryption support is not available in this build.".to_string(),
            hint: "Hint: Save the note as plaintext instead (use a name without .enc).".to_string(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::CorruptFile(_) => exit_codes::CORRUPT_FILE,
            CliError::Unavailable { .. } => exit_codes::UNAVAILABLE,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Translate a core error, or `None` for errors without a dedicated
    /// exit code (I/O).
    pub fn from_core(err: &NotepadError) -> Option<Self> {
        let mapped = match err {
            NotepadError::Unavailable => CliError::unavailable(),
            NotepadError::CorruptFile { .. } => CliError::corrupt_file(),
            NotepadError::Authentication => {
                CliError::auth_failed("Incorrect password or corrupted file.")
            }
            NotepadError::NotFound(path) => CliError::not_found(
                format!("Note not found: {}", path.display()),
                "Hint: Check the path, or create it with `notepad save`.",
            ),
            NotepadError::InvalidText => {
                CliError::invalid_input("File content is not valid UTF-8 text.")
            }
            NotepadError::PasswordRequired => {
                CliError::invalid_input("A password is required to open an encrypted note.")
            }
            NotepadError::InvalidInput(message) => CliError::invalid_input(message.clone()),
            NotepadError::InvalidSalt { .. } => CliError::invalid_input(err.to_string()),
            NotepadError::Io { .. } => return None,
        };
        Some(mapped)
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let cases = [
            (NotepadError::Unavailable, exit_codes::UNAVAILABLE),
            (NotepadError::CorruptFile { len: 3 }, exit_codes::CORRUPT_FILE),
            (NotepadError::Authentication, exit_codes::AUTH_FAILED),
            (
                NotepadError::NotFound("x.txt".into()),
                exit_codes::NOT_FOUND,
            ),
            (NotepadError::PasswordRequired, exit_codes::INVALID_INPUT),
        ];
        for (err, code) in cases {
            let mapped = CliError::from_core(&err).expect("mapped");
            assert_eq!(mapped.exit_code(), code, "{:?}", err);
        }
    }

    #[test]
    fn test_auth_message_does_not_pick_a_cause() {
        let mapped = CliError::from_core(&NotepadError::Authentication).unwrap();
        assert_eq!(mapped.to_string(), "Incorrect password or corrupted file.");
    }

    #[test]
    fn test_io_errors_fall_through() {
        let err = NotepadError::from(std::io::Error::other("disk"));
        assert!(CliError::from_core(&err).is_none());
    }

    #[test]
    fn test_corrupt_message() {
        assert_eq!(
            CliError::corrupt_file().to_string(),
            "File is corrupted or not a valid encrypted file."
        );
    }
}
