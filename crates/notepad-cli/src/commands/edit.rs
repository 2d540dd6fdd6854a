//! `notepad edit`: round-trip a note through `$EDITOR`.

use std::path::Path;

use notepad_core::note::{read_plaintext, save_note};
use notepad_core::NoteFormat;
use secrecy::ExposeSecret;
use zeroize::Zeroizing;

use crate::app::{unlock_note, AppContext};
use crate::helpers::run_editor;
use crate::ui::with_spinner;

use super::display_name;

pub fn handle_edit(ctx: &AppContext, path: &Path) -> anyhow::Result<()> {
    let format = NoteFormat::detect(path);

    // Encrypted notes are re-sealed under the password that opened them.
    let (original, password) = match format {
        NoteFormat::Plaintext => (Zeroizing::new(read_plaintext(path)?), None),
        NoteFormat::Encrypted => {
            let unlocked = unlock_note(ctx, path)?;
            (unlocked.text, Some(unlocked.password))
        }
    };

    let edited = run_editor(ctx.editor(), &original)?;
    if *edited == *original {
        if !ctx.quiet() {
            println!("No changes: {}", display_name(path));
        }
        return Ok(());
    }

    let password = password.as_ref().map(|p| p.expose_secret());
    with_spinner(ctx.ui(), "Saving", || {
        save_note(path, &edited, format.into(), password)
    })?;

    if !ctx.quiet() {
        let label = if format.is_encrypted() {
            "Encrypted"
        } else {
            "Plaintext"
        };
        println!("Saved ({}): {}", label, display_name(path));
    }
    Ok(())
}
