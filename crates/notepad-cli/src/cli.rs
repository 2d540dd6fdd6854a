//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use notepad_core::VERSION;

/// Secure Notepad - password-protected plain text notes
#[derive(Parser)]
#[command(name = "notepad")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file
    #[arg(long, global = true, env = "NOTEPAD_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Never prompt; fail instead
    #[arg(long, global = true)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show whether encrypted saving is available in this build
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a note to stdout, decrypting it if needed
    Open {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Print line/word/length counts instead of the text
        #[arg(long)]
        stats: bool,
    },

    /// Save text as a note (from --body, stdin, or $EDITOR)
    Save {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Encrypt the note (implied by a .enc path)
        #[arg(short, long)]
        encrypt: bool,

        /// Note text (overrides stdin/editor)
        #[arg(long)]
        body: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Encrypt a plaintext note into an encrypted copy
    Encrypt {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Destination (default: <name>.txt.enc next to the source)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Delete the plaintext source after encrypting
        #[arg(long)]
        remove_source: bool,

        /// Overwrite an existing destination without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Decrypt an encrypted note into a plaintext copy
    Decrypt {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Destination (default: <name>.txt next to the source)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Overwrite an existing destination without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Edit a note in $EDITOR, re-saving it in the same format
    Edit {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Change the password of an encrypted note
    Passwd {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Show the envelope layout of an encrypted note without decrypting it
    Inspect {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
