//! Input helpers: passwords, note bodies, the external editor.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;
use std::process::Command;

use dialoguer::{Confirm, Password};
use notepad_core::crypto::validate_password;
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::app::AppContext;
use crate::errors::CliError;

/// Read a password from an environment variable, ignoring blank values.
pub fn env_password(var: &str) -> Option<SecretString> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(SecretString::from)
}

/// Prompt for an existing note's password.
pub fn prompt_password(interactive: bool, env_var: &str) -> anyhow::Result<SecretString> {
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No password provided and no TTY available. Set {}.",
            env_var
        ))
        .into());
    }
    let value = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    Ok(SecretString::from(value))
}

/// Obtain a new password for encrypting, from `env_var` or a prompt.
///
/// Prompts ask twice when `security.confirm_password` is set. Either way
/// the result must satisfy `security.min_password_length`.
pub fn prompt_new_password(ctx: &AppContext, env_var: &str) -> anyhow::Result<SecretString> {
    let min_len = ctx.config().security.min_password_length;

    let password = match env_password(env_var) {
        Some(password) => password,
        None => {
            if !ctx.interactive() {
                return Err(CliError::invalid_input(format!(
                    "No password provided and no TTY available. Set {}.",
                    env_var
                ))
                .into());
            }
            let mut prompt = Password::new().with_prompt("New password");
            if ctx.config().security.confirm_password {
                prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
            }
            let value = prompt
                .interact()
                .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
            SecretString::from(value)
        }
    };

    validate_password(password.expose_secret(), min_len)?;
    Ok(password)
}

/// Read note text from `--body`, piped stdin, or `$EDITOR`.
///
/// Text is kept byte-for-byte; an empty note is a valid note.
pub fn read_note_body(
    no_input: bool,
    body: Option<String>,
    editor_override: Option<&str>,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = body {
        return Ok(Zeroizing::new(value));
    }

    if !io::stdin().is_terminal() {
        let mut buffer = Zeroizing::new(String::new());
        io::stdin()
            .read_to_string(&mut *buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return Ok(buffer);
    }

    if no_input {
        return Err(CliError::invalid_input("--no-input requires --body or content on stdin").into());
    }

    run_editor(editor_override, "")
}

/// Resolve the editor command: config override, then `$VISUAL`, then `$EDITOR`.
pub fn resolve_editor(editor_override: Option<&str>) -> anyhow::Result<String> {
    editor_override
        .map(|value| value.to_string())
        .or_else(|| std::env::var("VISUAL").ok().filter(|v| !v.trim().is_empty()))
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .ok_or_else(|| {
            CliError::invalid_input("$EDITOR is not set; use --body or pipe content via stdin")
                .into()
        })
}

/// Open `initial` in the editor and return what was saved.
///
/// The scratch file is owner-only and overwritten with zeros before it is
/// removed, since it holds decrypted text while the editor runs.
pub fn run_editor(editor_override: Option<&str>, initial: &str) -> anyhow::Result<Zeroizing<String>> {
    let editor = resolve_editor(editor_override)?;
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CliError::invalid_input("Editor command is empty"))?;
    let args: Vec<&str> = parts.collect();

    let mut scratch = tempfile::Builder::new()
        .prefix("notepad_")
        .suffix(".txt")
        .tempfile()
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;
    scratch
        .write_all(initial.as_bytes())
        .and_then(|_| scratch.flush())
        .map_err(|e| anyhow::anyhow!("Failed to write temp file: {}", e))?;

    tracing::debug!(editor = program, "launching editor");
    let status = Command::new(program)
        .args(&args)
        .arg(scratch.path())
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor: {}", e))?;

    let contents = std::fs::read(scratch.path())
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    scrub(scratch.path(), contents.len().max(initial.len()));

    if !status.success() {
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let text = std::str::from_utf8(&contents)
        .map_err(|_| CliError::invalid_input("Edited text is not valid UTF-8"))?;
    Ok(Zeroizing::new(text.to_string()))
}

/// Best-effort overwrite of whatever file now sits at `path`.
///
/// The path is reopened rather than reusing the handle from before the
/// editor ran: editors that save by renaming a new file into place leave
/// that handle on the replaced inode. The replaced inode itself is beyond
/// reach once the editor has unlinked it.
fn scrub(path: &Path, len: usize) {
    let Ok(mut file) = OpenOptions::new().write(true).open(path) else {
        return;
    };
    let zeros = vec![0u8; len];
    let _ = file.write_all(&zeros).and_then(|_| file.sync_all());
}

/// Refuse to clobber `path` unless forced or confirmed at a prompt.
pub fn confirm_overwrite(ctx: &AppContext, path: &Path, force: bool) -> anyhow::Result<()> {
    if force || !path.exists() {
        return Ok(());
    }
    if !ctx.interactive() {
        return Err(CliError::invalid_input(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }
    let overwrite = Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))?;
    if !overwrite {
        return Err(CliError::invalid_input("Aborted; nothing was written.").into());
    }
    Ok(())
}
