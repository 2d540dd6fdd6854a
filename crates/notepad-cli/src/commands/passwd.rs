//! `notepad passwd`: re-encrypt a note under a new password.

use std::path::Path;

use notepad_core::note::change_password;
use notepad_core::NoteFormat;
use secrecy::ExposeSecret;

use crate::app::{unlock_note, AppContext};
use crate::constants::NEW_PASSWORD_ENV;
use crate::errors::CliError;
use crate::helpers::prompt_new_password;
use crate::ui::with_spinner;

use super::display_name;

pub fn handle_passwd(ctx: &AppContext, path: &Path) -> anyhow::Result<()> {
    if !NoteFormat::detect(path).is_encrypted() {
        return Err(CliError::invalid_input(format!(
            "{} is not an encrypted note; only .enc notes have a password.",
            display_name(path)
        ))
        .into());
    }

    let unlocked = unlock_note(ctx, path)?;
    let new_password = prompt_new_password(ctx, NEW_PASSWORD_ENV)?;

    // The core re-verifies the old password and only replaces the file once
    // the new envelope is complete.
    with_spinner(ctx.ui(), "Re-encrypting", || {
        change_password(
            path,
            unlocked.password.expose_secret(),
            new_password.expose_secret(),
        )
    })?;
    tracing::debug!(path = %path.display(), "password changed");

    if !ctx.quiet() {
        println!("Password changed: {}", display_name(path));
    }
    Ok(())
}
