//! Badges and spinner frames.

use owo_colors::OwoColorize;

use super::UiContext;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",   // [✓]
            (Self::Warn, true) => "[\u{26A0}]", // [⚠]
            (Self::Err, true) => "[\u{2717}]",  // [✗]
            (Self::Ok, false) => "[OK]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, false) => "[ERR]",
        }
    }
}

/// Render a badge followed by a message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let text = kind.display(ctx.unicode);
    let rendered = if ctx.color {
        match kind {
            Badge::Ok => text.green().to_string(),
            Badge::Warn => text.yellow().to_string(),
            Badge::Err => text.red().to_string(),
        }
    } else {
        text.to_string()
    };

    if message.is_empty() {
        rendered
    } else {
        format!("{} {}", rendered, message)
    }
}

/// Spinner frames; the last entry is shown when the spinner finishes.
pub fn spinner_frames(unicode: bool) -> &'static [&'static str] {
    if unicode {
        // Braille spinner (smooth rotation)
        &[
            "\u{280B}", "\u{2819}", "\u{2839}", "\u{2838}", "\u{283C}", "\u{2834}", "\u{2826}",
            "\u{2827}", "\u{2807}", "\u{280F}", " ",
        ]
    } else {
        &["|", "/", "-", "\\", " "]
    }
}
