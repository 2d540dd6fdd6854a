//! Secure Notepad CLI - password-protected plain text notes
//!
//! Command-line front end for `notepad-core`: prompts for passwords, runs
//! the editor, and turns core errors into messages and exit codes.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use clap::Parser;
use notepad_core::NotepadError;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{convert, edit, inspect, misc, open, passwd, save, status};
use crate::config::load_config;
use crate::errors::CliError;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        if let Some(mapped) = err.downcast_ref::<NotepadError>().and_then(CliError::from_core) {
            mapped.exit();
        }
        return Err(err);
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Completions must work even with a broken config file.
    if let Commands::Completions { shell } = &cli.command {
        return misc::handle_completions(*shell);
    }

    let config = load_config(cli.config.as_deref())?;
    let ctx = AppContext::new(cli, config);
    tracing::debug!(command = command_name(&cli.command), "dispatching");

    match &cli.command {
        Commands::Status { json } => status::handle_status(&ctx, *json),
        Commands::Open { path, stats } => open::handle_open(&ctx, path, *stats),
        Commands::Save {
            path,
            encrypt,
            body,
            force,
        } => save::handle_save(&ctx, path, *encrypt, body.clone(), *force),
        Commands::Encrypt {
            path,
            output,
            remove_source,
            force,
        } => convert::handle_encrypt(&ctx, path, output.as_deref(), *remove_source, *force),
        Commands::Decrypt {
            path,
            output,
            force,
        } => convert::handle_decrypt(&ctx, path, output.as_deref(), *force),
        Commands::Edit { path } => edit::handle_edit(&ctx, path),
        Commands::Passwd { path } => passwd::handle_passwd(&ctx, path),
        Commands::Inspect { path, json } => inspect::handle_inspect(path, *json),
        Commands::Completions { .. } => Ok(()),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Status { .. } => "status",
        Commands::Open { .. } => "open",
        Commands::Save { .. } => "save",
        Commands::Encrypt { .. } => "encrypt",
        Commands::Decrypt { .. } => "decrypt",
        Commands::Edit { .. } => "edit",
        Commands::Passwd { .. } => "passwd",
        Commands::Inspect { .. } => "inspect",
        Commands::Completions { .. } => "completions",
    }
}
