//! Command handlers, one module per subcommand family.

pub mod convert;
pub mod edit;
pub mod inspect;
pub mod misc;
pub mod open;
pub mod passwd;
pub mod save;
pub mod status;

use std::io::Write;

/// Write note text to stdout exactly as stored.
fn write_stdout(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))
}

/// Display name used in confirmations.
fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
