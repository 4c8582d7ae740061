//! completions command - Generate shell completion scripts

use crate::cli::args::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Write the completion script for `shell` to stdout.
pub fn completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
