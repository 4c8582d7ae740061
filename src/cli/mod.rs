//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! the command handlers; the interactive loop itself lives in
//! [`crate::console`].

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let interactive = cli.interactive();

    match &cli.command {
        args::Command::Console(console_args) => {
            commands::console(console_args, verbosity, interactive)
        }
        args::Command::Completions { shell } => commands::completions(*shell),
    }
}
