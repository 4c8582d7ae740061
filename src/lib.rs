//! Meridian CLI - operate a Meridian ledger node from the terminal
//!
//! The tool's centerpiece is an interactive contract console: load a
//! contract description (ABI), then call its functions by typing
//! `name(arg, arg, ...)` statements that are parsed, dispatched to the
//! node, and printed.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`console`] - The interactive loop and its line grammar
//! - [`core`] - Domain types, schemas, and configuration
//! - [`client`] - Abstraction for the remote ledger node
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! 1. The line grammar is deterministic: a line has at most one parse
//! 2. A file-reference argument is never read during parsing, only at dispatch
//! 3. Nothing the user types inside the console terminates the loop; only
//!    end of input does
//! 4. At most one remote call is in flight at a time

pub mod cli;
pub mod client;
pub mod console;
pub mod core;
pub mod ui;
