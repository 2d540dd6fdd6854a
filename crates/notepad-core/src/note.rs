//! Note files on disk.
//!
//! A note is UTF-8 text stored either as-is or sealed in an
//! [`Envelope`](crate::envelope::Envelope). The format is chosen by file
//! name: anything ending in `.enc` is encrypted.

use std::ffi::OsStr;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::crypto::{validate_password, PasswordCipher};
use crate::envelope::{self, Envelope};
use crate::error::{NotepadError, Result};
use crate::fs::write_atomic;

/// Suffix that marks an encrypted note.
pub const ENCRYPTED_SUFFIX: &str = ".enc";

/// Suffix given to plaintext notes.
pub const PLAINTEXT_SUFFIX: &str = ".txt";

/// Default file name for new encrypted notes.
pub const DEFAULT_ENCRYPTED_NAME: &str = "untitled.txt.enc";

/// Default file name for new plaintext notes.
pub const DEFAULT_PLAINTEXT_NAME: &str = "untitled.txt";

/// How a note is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFormat {
    Plaintext,
    Encrypted,
}

impl NoteFormat {
    /// Detect the format from a file name.
    pub fn detect(path: &Path) -> Self {
        let encrypted = path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|name| name.ends_with(ENCRYPTED_SUFFIX));
        if encrypted {
            Self::Encrypted
        } else {
            Self::Plaintext
        }
    }

    pub fn is_encrypted(&self) -> bool {
        matches!(self, Self::Encrypted)
    }

    /// Status label shown next to an open note.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Plaintext => "Plaintext",
            Self::Encrypted => "Encrypted (AES-256)",
        }
    }
}

impl fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plaintext => "plaintext",
            Self::Encrypted => "encrypted",
        })
    }
}

/// How to write a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Plaintext,
    Encrypted,
}

impl From<NoteFormat> for SaveMode {
    fn from(format: NoteFormat) -> Self {
        match format {
            NoteFormat::Plaintext => SaveMode::Plaintext,
            NoteFormat::Encrypted => SaveMode::Encrypted,
        }
    }
}

/// Where an encrypted copy of `path` goes: same directory, `<stem>.txt.enc`.
///
/// ```
/// use std::path::Path;
/// use notepad_core::note::encrypted_path_for;
///
/// assert_eq!(encrypted_path_for(Path::new("notes.txt")), Path::new("notes.txt.enc"));
/// assert_eq!(encrypted_path_for(Path::new("notes.txt.enc")), Path::new("notes.txt.enc"));
/// assert_eq!(encrypted_path_for(Path::new("todo")), Path::new("todo.txt.enc"));
/// ```
pub fn encrypted_path_for(path: &Path) -> PathBuf {
    let stem = base_name(path);
    let name = if stem.is_empty() {
        DEFAULT_ENCRYPTED_NAME.to_string()
    } else {
        format!("{}{}{}", stem, PLAINTEXT_SUFFIX, ENCRYPTED_SUFFIX)
    };
    path.with_file_name(name)
}

/// Where a decrypted copy of `path` goes: same directory, `<stem>.txt`.
///
/// ```
/// use std::path::Path;
/// use notepad_core::note::plaintext_path_for;
///
/// assert_eq!(plaintext_path_for(Path::new("notes.txt.enc")), Path::new("notes.txt"));
/// assert_eq!(plaintext_path_for(Path::new("diary.enc")), Path::new("diary.txt"));
/// ```
pub fn plaintext_path_for(path: &Path) -> PathBuf {
    let stem = base_name(path);
    let name = if stem.is_empty() {
        DEFAULT_PLAINTEXT_NAME.to_string()
    } else {
        format!("{}{}", stem, PLAINTEXT_SUFFIX)
    };
    path.with_file_name(name)
}

/// File name with any trailing `.enc` and then `.txt` removed.
fn base_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = name.strip_suffix(ENCRYPTED_SUFFIX).unwrap_or(&name);
    let name = name.strip_suffix(PLAINTEXT_SUFFIX).unwrap_or(name);
    name.to_string()
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => NotepadError::NotFound(path.to_path_buf()),
        _ => err.into(),
    })
}

/// Read a plaintext note.
pub fn read_plaintext(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).map_err(|_| NotepadError::InvalidText)
}

/// Read and decrypt an encrypted note.
///
/// # Errors
///
/// - [`NotepadError::NotFound`] if the file is missing
/// - [`NotepadError::CorruptFile`] if it is shorter than a salt
/// - [`NotepadError::Authentication`] for a wrong password or damaged file
pub fn read_encrypted(path: &Path, password: &str) -> Result<String> {
    let bytes = read_bytes(path)?;
    envelope::open(&bytes, password)
}

/// Read the envelope of an encrypted note without decrypting it.
pub fn read_envelope(path: &Path) -> Result<Envelope> {
    Envelope::parse(&read_bytes(path)?)
}

/// Read a note in whatever format its name indicates.
///
/// Returns [`NotepadError::PasswordRequired`] for an encrypted note when
/// `password` is `None`, before touching the file contents.
pub fn read_note(path: &Path, password: Option<&str>) -> Result<String> {
    match NoteFormat::detect(path) {
        NoteFormat::Plaintext => read_plaintext(path),
        NoteFormat::Encrypted => {
            let password = password.ok_or(NotepadError::PasswordRequired)?;
            read_encrypted(path, password)
        }
    }
}

/// Write a plaintext note atomically.
pub fn write_plaintext(path: &Path, text: &str) -> Result<()> {
    write_atomic(path, text.as_bytes(), false)?;
    Ok(())
}

/// Encrypt and write a note atomically, owner-only on Unix.
///
/// Every call draws a fresh salt and nonce, so re-saving unchanged text
/// still produces different bytes.
pub fn write_encrypted(path: &Path, text: &str, password: &str) -> Result<()> {
    let sealed = envelope::seal(text, password)?;
    write_atomic(path, &sealed, true)?;
    Ok(())
}

/// Save a note in the requested mode.
///
/// # Errors
///
/// Returns [`NotepadError::PasswordRequired`] for an encrypted save without
/// a password, and [`NotepadError::InvalidInput`] for a blank one.
pub fn save_note(path: &Path, text: &str, mode: SaveMode, password: Option<&str>) -> Result<()> {
    match mode {
        SaveMode::Plaintext => write_plaintext(path, text),
        SaveMode::Encrypted => {
            PasswordCipher::new()?;
            let password = password.ok_or(NotepadError::PasswordRequired)?;
            validate_password(password, 1)?;
            write_encrypted(path, text, password)
        }
    }
}

/// Re-encrypt an encrypted note under a new password.
///
/// The old password is verified by decrypting first; the file is only
/// replaced once the new envelope is complete.
pub fn change_password(path: &Path, old_password: &str, new_password: &str) -> Result<()> {
    validate_password(new_password, 1)?;
    let text = read_encrypted(path, old_password)?;
    write_encrypted(path, &text, new_password)
}

/// Summary of a note's text, as shown in a status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
    pub format: NoteFormat,
}

impl NoteStats {
    pub fn from_text(text: &str, format: NoteFormat) -> Self {
        Self {
            lines: text.lines().count().max(1),
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
            format,
        }
    }

    /// Text encoding label. Notes are always UTF-8.
    pub fn encoding(&self) -> &'static str {
        "UTF-8"
    }
}

impl fmt::Display for NoteStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {} | Words: {} | Length: {} | {} | {}",
            self.lines,
            self.words,
            self.chars,
            self.encoding(),
            self.format.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_detect_format() {
        assert_eq!(NoteFormat::detect(Path::new("a.txt")), NoteFormat::Plaintext);
        assert_eq!(NoteFormat::detect(Path::new("a.txt.enc")), NoteFormat::Encrypted);
        assert_eq!(NoteFormat::detect(Path::new("dir/a.enc")), NoteFormat::Encrypted);
        assert_eq!(NoteFormat::detect(Path::new("a.encrypted")), NoteFormat::Plaintext);
        assert_eq!(NoteFormat::detect(Path::new("a.enc/b.txt")), NoteFormat::Plaintext);
    }

    #[test]
    fn test_encrypted_path_keeps_directory() {
        assert_eq!(
            encrypted_path_for(Path::new("/tmp/notes/todo.txt")),
            PathBuf::from("/tmp/notes/todo.txt.enc")
        );
    }

    #[test]
    fn test_derived_names_fall_back_to_untitled() {
        assert_eq!(encrypted_path_for(Path::new(".txt")), PathBuf::from("untitled.txt.enc"));
        assert_eq!(plaintext_path_for(Path::new(".txt.enc")), PathBuf::from("untitled.txt"));
    }

    #[test]
    fn test_plaintext_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt");

        save_note(&path, "plain words", SaveMode::Plaintext, None).unwrap();

        assert_eq!(read_note(&path, None).unwrap(), "plain words");
    }

    #[test]
    fn test_missing_note_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(read_note(&path, None), Err(NotepadError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_encrypted_note_without_password() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt.enc");
        assert!(matches!(read_note(&path, None), Err(NotepadError::PasswordRequired)));
    }

    #[test]
    fn test_stats_counts() {
        let stats = NoteStats::from_text("one two\nthree\n", NoteFormat::Plaintext);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.chars, 14);
        assert!(stats.to_string().contains("Plaintext"));
    }

    #[test]
    fn test_stats_empty_text_has_one_line() {
        let stats = NoteStats::from_text("", NoteFormat::Encrypted);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.chars, 0);
        assert!(stats.to_string().contains("Encrypted (AES-256)"));
    }

    #[cfg(feature = "crypto")]
    #[test]
    fn test_encrypted_save_requires_password() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt.enc");
        assert!(matches!(
            save_note(&path, "x", SaveMode::Encrypted, None),
            Err(NotepadError::PasswordRequired)
        ));
        assert!(matches!(
            save_note(&path, "x", SaveMode::Encrypted, Some("  ")),
            Err(NotepadError::InvalidInput(_))
        ));
        assert!(!path.exists());
    }

    #[cfg(feature = "crypto")]
    #[test]
    fn test_change_password() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt.enc");
        write_encrypted(&path, "rotate me", "old-password").unwrap();

        change_password(&path, "old-password", "new-password").unwrap();

        assert_eq!(read_encrypted(&path, "new-password").unwrap(), "rotate me");
        assert!(matches!(
            read_encrypted(&path, "old-password"),
            Err(NotepadError::Authentication)
        ));
    }

    #[cfg(feature = "crypto")]
    #[test]
    fn test_change_password_with_wrong_old_password_keeps_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt.enc");
        write_encrypted(&path, "keep me", "right-password").unwrap();
        let before = std::fs::read(&path).unwrap();

        let result = change_password(&path, "wrong-password", "new-password");

        assert!(matches!(result, Err(NotepadError::Authentication)));
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[cfg(not(feature = "crypto"))]
    #[test]
    fn test_encrypted_save_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt.enc");
        assert!(matches!(
            save_note(&path, "x", SaveMode::Encrypted, Some("pw")),
            Err(NotepadError::Unavailable)
        ));
    }
}
