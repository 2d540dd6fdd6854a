//! Progress indication for slow key derivation.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::theme::spinner_frames;
use super::UiContext;

/// Run `work` while a spinner ticks on stderr.
///
/// Key stretching blocks the calling thread for a noticeable moment; the
/// spinner animates from indicatif's own tick thread. Without a TTY the work
/// runs silently.
pub fn with_spinner<T>(ctx: &UiContext, message: &str, work: impl FnOnce() -> T) -> T {
    if !ctx.allows_animation() {
        return work();
    }

    let style = ProgressStyle::with_template("{spinner} {msg}...")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(spinner_frames(ctx.unicode));
    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work();
    spinner.finish_and_clear();
    result
}
