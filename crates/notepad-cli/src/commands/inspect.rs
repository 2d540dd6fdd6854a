//! `notepad inspect`: describe an encrypted note's layout without a password.

use std::path::Path;

use notepad_core::crypto::{NONCE_LEN, SALT_LEN, TAG_LEN};
use notepad_core::note::read_envelope;
use notepad_core::Envelope;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EnvelopeReport {
    pub path: String,
    pub file_size: usize,
    pub salt_hex: String,
    pub ciphertext_len: usize,
    pub payload_len: usize,
    /// Whether the ciphertext is long enough to hold a nonce and a tag.
    pub well_formed: bool,
}

impl EnvelopeReport {
    pub fn new(path: &Path, envelope: &Envelope) -> Self {
        let ciphertext_len = envelope.ciphertext().len();
        Self {
            path: path.display().to_string(),
            file_size: envelope.len(),
            salt_hex: hex::encode(envelope.salt()),
            ciphertext_len,
            payload_len: ciphertext_len.saturating_sub(NONCE_LEN + TAG_LEN),
            well_formed: ciphertext_len >= NONCE_LEN + TAG_LEN,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!(
            "File: {}\nSize: {} bytes\nSalt ({} bytes): {}\nCiphertext: {} bytes (nonce {} + payload {} + tag {})",
            self.path,
            self.file_size,
            SALT_LEN,
            self.salt_hex,
            self.ciphertext_len,
            NONCE_LEN,
            self.payload_len,
            TAG_LEN
        );
        if !self.well_formed {
            out.push_str("\nWarning: ciphertext is too short to decrypt");
        }
        out
    }
}

pub fn handle_inspect(path: &Path, json: bool) -> anyhow::Result<()> {
    let envelope = read_envelope(path)?;
    let report = EnvelopeReport::new(path, &envelope);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_splits_envelope() {
        let mut bytes = vec![0xAB; SALT_LEN];
        bytes.extend_from_slice(&[0u8; 40]);
        let envelope = Envelope::parse(&bytes).unwrap();

        let report = EnvelopeReport::new(Path::new("n.txt.enc"), &envelope);
        assert_eq!(report.file_size, 56);
        assert_eq!(report.salt_hex, "ab".repeat(SALT_LEN));
        assert_eq!(report.ciphertext_len, 40);
        assert_eq!(report.payload_len, 12);
        assert!(report.well_formed);
    }

    #[test]
    fn test_short_ciphertext_flagged() {
        let envelope = Envelope::parse(&[1u8; SALT_LEN + 5]).unwrap();
        let report = EnvelopeReport::new(Path::new("n.enc"), &envelope);
        assert_eq!(report.payload_len, 0);
        assert!(!report.well_formed);
        assert!(report.render_text().contains("too short"));
    }
}
