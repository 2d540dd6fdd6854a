//! UI primitives for the notepad CLI.
//!
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Theme**: Badge tokens and spinner frames
//! - **Progress**: Spinner shown while a password is being stretched
//!
//! All decoration goes to stderr so stdout stays clean note text.

mod context;
pub mod progress;
pub mod theme;

pub use context::UiContext;
pub use progress::with_spinner;
pub use theme::{badge, Badge};
