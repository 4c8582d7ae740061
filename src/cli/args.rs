//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Meridian CLI - operate a Meridian ledger node from the terminal
#[derive(Parser, Debug)]
#[command(name = "mrd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive prompts are allowed.
    ///
    /// Prompts are allowed when stdin is a TTY and `--quiet` was not set.
    pub fn interactive(&self) -> bool {
        !self.quiet && std::io::stdin().is_terminal()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Drop into an interactive console for a deployed contract
    #[command(
        name = "console",
        long_about = "Drop into an interactive console where you can call contract \
            functions directly.\n\n\
            The console loads a contract description (ABI) from a JSON file and then \
            reads one statement per line: either the 'abi' command, which prints the \
            loaded interface, or a function call such as set(\"key\", 42). Functions \
            tagged readonly in the ABI run as queries; everything else is submitted \
            as a transaction.",
        after_help = "\
ARGUMENT SYNTAX:
    my_func(1, -2.5, true, \"text\", f:\"./blob.bin\")

    Strings accept single or double quotes with JSON-style escapes. An
    argument written f:\"<path>\" sends the named file's contents, base64
    encoded, in that position.

WORKFLOW EXAMPLES:
    # Talk to a local node with the default channel
    mrd console ./abi.json

    # Pin the node, channel, and signing key
    mrd console ./abi.json --host http://node:8081 \\
        --channel 3a54...d99c --key-file ~/.meridian/key.hex

    # Type 'abi' inside the console to list callable functions"
    )]
    Console(ConsoleArgs),

    /// Generate shell completion scripts
    #[command(name = "completions")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the console command.
#[derive(clap::Args, Debug)]
pub struct ConsoleArgs {
    /// Path to the contract ABI JSON file
    pub abi: PathBuf,

    /// Web address of the node, default http://localhost:8081
    #[arg(long)]
    pub host: Option<String>,

    /// Channel id to direct calls at (64 hex characters)
    #[arg(long)]
    pub channel: Option<String>,

    /// Account to submit transactions on behalf of
    #[arg(long = "on-behalf-of", value_name = "ACCOUNT")]
    pub on_behalf_of: Option<String>,

    /// Read the hex signing key from this file
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Prompt for the signing key instead of reading a file
    #[arg(long, conflicts_with = "key_file")]
    pub key_prompt: bool,
}
