//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler validates its arguments, builds what it needs, and
//! runs. The console command is async at its heart (the remote-call
//! capability suspends); it bridges with `tokio::runtime::Runtime` so the
//! CLI surface stays synchronous.

mod completion;
mod console_cmd;

pub use completion::completions;
pub use console_cmd::console;
