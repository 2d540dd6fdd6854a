//! `notepad open`: print a note.

use std::path::Path;

use notepad_core::note::read_plaintext;
use notepad_core::{NoteFormat, NoteStats};
use zeroize::Zeroizing;

use crate::app::{unlock_note, AppContext};

use super::write_stdout;

/// Read a note in the format its name indicates.
pub fn load_note(ctx: &AppContext, path: &Path) -> anyhow::Result<Zeroizing<String>> {
    match NoteFormat::detect(path) {
        NoteFormat::Plaintext => Ok(Zeroizing::new(read_plaintext(path)?)),
        NoteFormat::Encrypted => Ok(unlock_note(ctx, path)?.text),
    }
}

pub fn handle_open(ctx: &AppContext, path: &Path, stats: bool) -> anyhow::Result<()> {
    let text = load_note(ctx, path)?;

    if stats {
        println!("{}", NoteStats::from_text(&text, NoteFormat::detect(path)));
        return Ok(());
    }

    write_stdout(&text)
}
