//! `notepad save`: write text as a plaintext or encrypted note.

use std::path::{Path, PathBuf};

use notepad_core::note::{encrypted_path_for, save_note};
use notepad_core::{NoteFormat, SaveMode};
use secrecy::ExposeSecret;

use crate::app::AppContext;
use crate::constants::PASSWORD_ENV;
use crate::helpers::{confirm_overwrite, prompt_new_password, read_note_body};
use crate::ui::with_spinner;

use super::display_name;

/// Decide the save mode and final path.
///
/// A `.enc` name always means encrypted. `--encrypt` on any other name
/// saves to the matching `.txt.enc` path instead.
pub fn resolve_target(path: &Path, encrypt: bool) -> (SaveMode, PathBuf) {
    let format = NoteFormat::detect(path);
    if format.is_encrypted() {
        (SaveMode::Encrypted, path.to_path_buf())
    } else if encrypt {
        (SaveMode::Encrypted, encrypted_path_for(path))
    } else {
        (SaveMode::Plaintext, path.to_path_buf())
    }
}

pub fn handle_save(
    ctx: &AppContext,
    path: &Path,
    encrypt: bool,
    body: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    let (mode, target) = resolve_target(path, encrypt);
    tracing::debug!(target = %target.display(), ?mode, "saving note");

    let password = match mode {
        SaveMode::Encrypted => {
            ctx.cipher()?;
            confirm_overwrite(ctx, &target, force)?;
            Some(prompt_new_password(ctx, PASSWORD_ENV)?)
        }
        SaveMode::Plaintext => {
            confirm_overwrite(ctx, &target, force)?;
            None
        }
    };

    let text = read_note_body(ctx.no_input(), body, ctx.editor())?;

    match password {
        Some(password) => with_spinner(ctx.ui(), "Encrypting", || {
            save_note(&target, &text, mode, Some(password.expose_secret()))
        })?,
        None => save_note(&target, &text, mode, None)?,
    }

    if !ctx.quiet() {
        let label = match mode {
            SaveMode::Encrypted => "Encrypted",
            SaveMode::Plaintext => "Plaintext",
        };
        println!("Saved ({}): {}", label, display_name(&target));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enc_name_forces_encryption() {
        let (mode, target) = resolve_target(Path::new("a/secret.txt.enc"), false);
        assert_eq!(mode, SaveMode::Encrypted);
        assert_eq!(target, Path::new("a/secret.txt.enc"));
    }

    #[test]
    fn test_encrypt_flag_renames() {
        let (mode, target) = resolve_target(Path::new("a/notes.txt"), true);
        assert_eq!(mode, SaveMode::Encrypted);
        assert_eq!(target, Path::new("a/notes.txt.enc"));
    }

    #[test]
    fn test_plain_name_stays_plain() {
        let (mode, target) = resolve_target(Path::new("notes.txt"), false);
        assert_eq!(mode, SaveMode::Plaintext);
        assert_eq!(target, Path::new("notes.txt"));
    }
}
