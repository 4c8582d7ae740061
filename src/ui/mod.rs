//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`prompts`] - Interactive prompts
//!
//! # Design
//!
//! All output outside the console loop goes through this module to ensure
//! consistent formatting and proper handling of interactive vs
//! non-interactive modes. The console loop itself writes directly to its
//! output stream - its message formats are part of the interactive
//! protocol, not presentation.

pub mod output;
pub mod prompts;
