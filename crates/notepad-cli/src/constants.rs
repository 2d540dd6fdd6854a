//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (note file, config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, too many attempts, tampering).
    pub const AUTH_FAILED: i32 = 5;

    /// Encrypted file is truncated or not an envelope at all.
    pub const CORRUPT_FILE: i32 = 6;

    /// This build has no encryption backend.
    pub const UNAVAILABLE: i32 = 7;
}

/// Environment variable holding the note password.
pub const PASSWORD_ENV: &str = "NOTEPAD_PASSWORD";

/// Environment variable holding the replacement password for `passwd`.
pub const NEW_PASSWORD_ENV: &str = "NOTEPAD_NEW_PASSWORD";

/// Comma-separated password attempts for exercising the retry loop in tests.
#[cfg(feature = "test-support")]
pub const TEST_ATTEMPTS_ENV: &str = "NOTEPAD_TEST_PASSWORD_ATTEMPTS";
