//! UI context for environment detection.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stderr is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
}

impl UiContext {
    /// Create context from environment and flags.
    ///
    /// # Arguments
    /// * `ascii` - Force ASCII symbols (from config)
    pub fn from_env(ascii: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            is_tty,
            color: is_tty && !no_color_env && !term_is_dumb,
            unicode: !ascii && !term_is_dumb,
        }
    }

    /// Plain context for tests and piped output.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            color: false,
            unicode: false,
        }
    }

    /// Check if animations (spinners) are allowed.
    pub fn allows_animation(&self) -> bool {
        self.is_tty
    }
}
