//! Unlocking encrypted notes with retry logic.

use std::path::Path;
use std::time::Instant;

use notepad_core::note::read_envelope;
use notepad_core::{Envelope, NotepadError, PasswordCipher};
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;
use crate::helpers::{env_password, prompt_password};
use crate::ui::{badge, with_spinner, Badge, UiContext};

use super::AppContext;

const AUTH_MESSAGE: &str = "Incorrect password or corrupted file.";
const EXHAUSTED_HINT: &str =
    "Hint: A forgotten password cannot be recovered; the note is unreadable without it.";

/// Decrypted note text and the password that opened it.
pub struct Unlocked {
    pub text: Zeroizing<String>,
    pub password: SecretString,
}

/// Decrypt the note at `path`.
///
/// A password from `NOTEPAD_PASSWORD` gets exactly one try. Prompted
/// passwords get `security.max_attempts` tries on a TTY and one otherwise.
/// The envelope is read and checked before any password is requested, so
/// missing or truncated files fail without a prompt.
pub fn unlock_note(ctx: &AppContext, path: &Path) -> anyhow::Result<Unlocked> {
    let cipher = ctx.cipher()?;
    let envelope = read_envelope(path)?;
    tracing::debug!(
        path = %path.display(),
        ciphertext_len = envelope.ciphertext().len(),
        "read envelope"
    );

    if let Some(password) = env_password(PASSWORD_ENV) {
        tracing::debug!("using password from environment");
        return match try_open(ctx, &envelope, cipher, &password) {
            Ok(text) => Ok(Unlocked { text, password }),
            Err(err) if err.is_authentication() => Err(CliError::auth_failed(AUTH_MESSAGE).into()),
            Err(err) => Err(err.into()),
        };
    }

    let scripted = scripted_attempts(ctx.interactive());
    let max_attempts = if ctx.interactive() || scripted.is_some() {
        ctx.config().security.max_attempts
    } else {
        1
    };
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let password = match scripted.as_ref() {
            Some(values) => values
                .get((attempts - 1) as usize)
                .cloned()
                .map(SecretString::from)
                .ok_or_else(|| anyhow::anyhow!("No password attempts remaining"))?,
            None => prompt_password(ctx.interactive(), PASSWORD_ENV)?,
        };

        match try_open(ctx, &envelope, cipher, &password) {
            Ok(text) => {
                tracing::debug!(attempts, "note unlocked");
                return Ok(Unlocked { text, password });
            }
            Err(err) if err.is_authentication() => {
                let remaining = max_attempts.saturating_sub(attempts);
                tracing::debug!(attempts, remaining, "authentication failed");
                if remaining == 0 {
                    return Err(CliError::auth_failed_with_hint(AUTH_MESSAGE, EXHAUSTED_HINT).into());
                }
                eprintln!("{}", retry_message(ctx.ui(), remaining));
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn retry_message(ui: &UiContext, remaining: u32) -> String {
    let message = format!(
        "{} {} attempt{} remaining.",
        AUTH_MESSAGE,
        remaining,
        if remaining == 1 { "" } else { "s" }
    );
    badge(ui, Badge::Err, &message)
}

fn try_open(
    ctx: &AppContext,
    envelope: &Envelope,
    cipher: PasswordCipher,
    password: &SecretString,
) -> Result<Zeroizing<String>, NotepadError> {
    let started = Instant::now();
    let result = with_spinner(ctx.ui(), "Deriving key", || {
        envelope
            .open_with(cipher, password.expose_secret())
            .map(Zeroizing::new)
    });
    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        ok = result.is_ok(),
        "decrypt attempt finished"
    );
    result
}

#[cfg(feature = "test-support")]
fn scripted_attempts(interactive: bool) -> Option<Vec<String>> {
    if interactive {
        return None;
    }
    std::env::var(crate::constants::TEST_ATTEMPTS_ENV)
        .ok()
        .map(|value| {
            value
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
}

#[cfg(not(feature = "test-support"))]
fn scripted_attempts(_interactive: bool) -> Option<Vec<String>> {
    None
}
