//! Password validation.
//!
//! Applied when a password is being *set* (encrypted save, password change).
//! Decryption accepts whatever the user types; a wrong password simply fails
//! authentication.

use crate::error::{NotepadError, Result};

/// Validate a new password.
///
/// # Requirements
///
/// - Not empty or only whitespace
/// - At least `min_len` characters (counted as Unicode scalar values)
///
/// # Examples
///
/// ```
/// use notepad_core::crypto::validate_password;
///
/// assert!(validate_password("correct-horse", 8).is_ok());
/// assert!(validate_password("   ", 1).is_err());
/// ```
pub fn validate_password(password: &str, min_len: usize) -> Result<()> {
    if password.trim().is_empty() {
        return Err(NotepadError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    let len = password.chars().count();
    if len < min_len {
        return Err(NotepadError::InvalidInput(format!(
            "Password must be at least {} characters (got {})",
            min_len, len
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("correct-horse", 1).is_ok());
        assert!(validate_password("longer password with spaces!@#", 12).is_ok());
    }

    #[test]
    fn test_password_blank() {
        assert!(validate_password("", 1).is_err());
        assert!(validate_password("   ", 1).is_err());
        assert!(validate_password("\n\t", 1).is_err());
    }

    #[test]
    fn test_password_too_short() {
        let result = validate_password("short", 8);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least 8 characters"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Four characters, eight bytes.
        assert!(validate_password("ßßßß", 5).is_err());
        assert!(validate_password("ßßßß", 4).is_ok());
    }
}
