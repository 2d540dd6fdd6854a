#![cfg(feature = "crypto")]

use std::fs;

use notepad_core::crypto::SALT_LEN;
use notepad_core::note::{read_encrypted, read_envelope, read_note, save_note, write_encrypted};
use notepad_core::{NotepadError, SaveMode};
use tempfile::tempdir;

#[test]
fn test_encrypted_file_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("journal.txt.enc");
    let password = "test-password-secure-123";
    let plaintext = "journal entry: hello world";

    save_note(&path, plaintext, SaveMode::Encrypted, Some(password)).expect("save should succeed");

    let on_disk = fs::read(&path).expect("read should succeed");
    assert_ne!(on_disk, plaintext.as_bytes());

    let decrypted = read_note(&path, Some(password)).expect("decryption should succeed");
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_encrypted_file_wrong_password_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("secret.txt.enc");

    write_encrypted(&path, "secret entry", "correct-password-123").expect("write should succeed");

    let result = read_encrypted(&path, "wrong-password-456");
    assert!(matches!(result, Err(NotepadError::Authentication)));
}

#[test]
fn test_encrypted_file_does_not_contain_plaintext() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("marker.txt.enc");

    write_encrypted(&path, "secret with marker: PLAINTEXT_MARKER_123", "test-password")
        .expect("write should succeed");

    let on_disk = fs::read(&path).expect("read should succeed");
    let haystack = String::from_utf8_lossy(&on_disk);
    assert!(!haystack.contains("PLAINTEXT_MARKER_123"));
}

#[test]
fn test_resaving_uses_fresh_salt() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("resave.txt.enc");

    write_encrypted(&path, "same text", "test-password").expect("first write");
    let first = read_envelope(&path).expect("first envelope");
    write_encrypted(&path, "same text", "test-password").expect("second write");
    let second = read_envelope(&path).expect("second envelope");

    assert_ne!(first.salt(), second.salt());
    assert_ne!(first.ciphertext(), second.ciphertext());
}

#[test]
fn test_file_starts_with_salt() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("layout.txt.enc");

    write_encrypted(&path, "layout", "test-password").expect("write should succeed");

    let on_disk = fs::read(&path).expect("read should succeed");
    let envelope = read_envelope(&path).expect("envelope");
    assert_eq!(&on_disk[..SALT_LEN], envelope.salt());
    assert_eq!(&on_disk[SALT_LEN..], envelope.ciphertext());
}

#[test]
fn test_truncated_file_is_corrupt() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("short.txt.enc");
    fs::write(&path, b"too short").expect("write should succeed");

    let result = read_encrypted(&path, "test-password");
    assert!(matches!(result, Err(NotepadError::CorruptFile { len: 9 })));
}

#[test]
fn test_tampered_file_fails_authentication() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tamper.txt.enc");
    write_encrypted(&path, "do not touch", "test-password").expect("write should succeed");

    let mut bytes = fs::read(&path).expect("read should succeed");
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    fs::write(&path, &bytes).expect("write should succeed");

    let result = read_encrypted(&path, "test-password");
    assert!(matches!(result, Err(NotepadError::Authentication)));
}
