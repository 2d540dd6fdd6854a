//! Application-level plumbing for the notepad CLI.
//!
//! This module provides:
//! - The per-invocation context (flags, config, UI, cipher capability)
//! - Password unlocking with retry logic

mod context;
mod password;

pub use context::AppContext;
pub use password::unlock_note;
