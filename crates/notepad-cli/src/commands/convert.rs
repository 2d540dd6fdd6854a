//! `notepad encrypt` / `notepad decrypt`: convert between formats.

use std::path::{Path, PathBuf};

use notepad_core::note::{
    encrypted_path_for, plaintext_path_for, read_plaintext, write_encrypted, write_plaintext,
};
use notepad_core::NoteFormat;
use secrecy::ExposeSecret;

use crate::app::{unlock_note, AppContext};
use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;
use crate::helpers::{confirm_overwrite, prompt_new_password};
use crate::ui::with_spinner;

use super::display_name;

pub fn encrypt_output(path: &Path, output: Option<&Path>) -> Result<PathBuf, CliError> {
    if NoteFormat::detect(path).is_encrypted() {
        return Err(CliError::invalid_input(format!(
            "{} is already encrypted.",
            display_name(path)
        )));
    }
    let target = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| encrypted_path_for(path));
    if !NoteFormat::detect(&target).is_encrypted() {
        return Err(CliError::invalid_input(
            "Encrypted notes must be saved with a .enc extension.",
        ));
    }
    Ok(target)
}

pub fn decrypt_output(path: &Path, output: Option<&Path>) -> Result<PathBuf, CliError> {
    if !NoteFormat::detect(path).is_encrypted() {
        return Err(CliError::invalid_input(format!(
            "{} is not an encrypted note (expected a .enc extension).",
            display_name(path)
        )));
    }
    let target = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| plaintext_path_for(path));
    if NoteFormat::detect(&target).is_encrypted() {
        return Err(CliError::invalid_input(
            "Decrypted output must not use a .enc extension.",
        ));
    }
    Ok(target)
}

pub fn handle_encrypt(
    ctx: &AppContext,
    path: &Path,
    output: Option<&Path>,
    remove_source: bool,
    force: bool,
) -> anyhow::Result<()> {
    let target = encrypt_output(path, output)?;
    ctx.cipher()?;
    let text = zeroize::Zeroizing::new(read_plaintext(path)?);
    confirm_overwrite(ctx, &target, force)?;
    let password = prompt_new_password(ctx, PASSWORD_ENV)?;

    with_spinner(ctx.ui(), "Encrypting", || {
        write_encrypted(&target, &text, password.expose_secret())
    })?;
    tracing::debug!(source = %path.display(), target = %target.display(), "encrypted note");

    if remove_source {
        std::fs::remove_file(path).map_err(|e| {
            anyhow::anyhow!(
                "Encrypted copy written, but failed to remove {}: {}",
                path.display(),
                e
            )
        })?;
    }

    if !ctx.quiet() {
        println!(
            "Encrypted: {} -> {}",
            display_name(path),
            display_name(&target)
        );
    }
    Ok(())
}

pub fn handle_decrypt(
    ctx: &AppContext,
    path: &Path,
    output: Option<&Path>,
    force: bool,
) -> anyhow::Result<()> {
    let target = decrypt_output(path, output)?;
    confirm_overwrite(ctx, &target, force)?;
    let unlocked = unlock_note(ctx, path)?;

    write_plaintext(&target, &unlocked.text)?;
    tracing::debug!(source = %path.display(), target = %target.display(), "decrypted note");

    if !ctx.quiet() {
        println!(
            "Decrypted: {} -> {}",
            display_name(path),
            display_name(&target)
        );
    }
    Ok(())
}
