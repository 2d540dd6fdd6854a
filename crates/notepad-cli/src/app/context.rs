//! Application context for the notepad CLI.
//!
//! Bundles the parsed flags with loaded configuration so handlers take a
//! single parameter.

use std::io::IsTerminal;

use notepad_core::PasswordCipher;

use crate::cli::Cli;
use crate::config::NotepadConfig;
use crate::errors::CliError;
use crate::ui::UiContext;

pub struct AppContext {
    quiet: bool,
    no_input: bool,
    interactive: bool,
    config: NotepadConfig,
    ui: UiContext,
    cipher: Option<PasswordCipher>,
}

impl AppContext {
    /// Build the context. Encryption capability is probed once here.
    pub fn new(cli: &Cli, config: NotepadConfig) -> Self {
        let ui = UiContext::from_env(config.ui.ascii);
        let cipher = PasswordCipher::new().ok();
        tracing::debug!(encryption = cipher.is_some(), "probed encryption backend");
        Self {
            quiet: cli.quiet,
            no_input: cli.no_input,
            interactive: std::io::stdin().is_terminal() && !cli.no_input,
            config,
            ui,
            cipher,
        }
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn no_input(&self) -> bool {
        self.no_input
    }

    /// Whether prompts are possible (stdin is a TTY and `--no-input` is off).
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn config(&self) -> &NotepadConfig {
        &self.config
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Configured editor override, if any.
    pub fn editor(&self) -> Option<&str> {
        self.config.ui.editor.as_deref()
    }

    pub fn encryption_available(&self) -> bool {
        self.cipher.is_some()
    }

    /// The cipher, or the "not available in this build" error.
    pub fn cipher(&self) -> Result<PasswordCipher, CliError> {
        self.cipher.ok_or_else(CliError::unavailable)
    }
}
