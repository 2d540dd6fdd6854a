//! `notepad status`: report what this build can do.

use notepad_core::crypto::{CIPHER_NAME, KDF_NAME, PBKDF2_ITERATIONS, SALT_LEN};
use notepad_core::VERSION;
use serde::Serialize;

use crate::app::AppContext;
use crate::ui::{badge, Badge};

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub version: &'static str,
    pub encryption_available: bool,
    pub kdf: &'static str,
    pub iterations: u32,
    pub cipher: &'static str,
    pub salt_len: usize,
}

impl StatusReport {
    pub fn new(encryption_available: bool) -> Self {
        Self {
            version: VERSION,
            encryption_available,
            kdf: KDF_NAME,
            iterations: PBKDF2_ITERATIONS,
            cipher: CIPHER_NAME,
            salt_len: SALT_LEN,
        }
    }

    pub fn render_text(&self) -> String {
        if self.encryption_available {
            format!(
                "Encryption: available\nKey derivation: {} ({} iterations, {}-byte salt)\nCipher: {}",
                self.kdf, self.iterations, self.salt_len, self.cipher
            )
        } else {
            "Encryption: not available in this build (plaintext notes only)".to_string()
        }
    }
}

pub fn handle_status(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let report = StatusReport::new(ctx.encryption_available());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if ctx.quiet() {
        println!(
            "{}",
            if report.encryption_available {
                "available"
            } else {
                "unavailable"
            }
        );
        return Ok(());
    }

    let kind = if report.encryption_available {
        Badge::Ok
    } else {
        Badge::Warn
    };
    eprintln!("{}", badge(ctx.ui(), kind, &format!("notepad {}", report.version)));
    println!("{}", report.render_text());
    Ok(())
}
