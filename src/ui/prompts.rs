//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message.

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    Io(String),
}

/// Prompt for masked input (e.g., signing keys).
///
/// The input is not echoed to the terminal.
///
/// Returns `Err(PromptError::NotInteractive)` if not in interactive mode.
pub fn password(message: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    rpassword::prompt_password(format!("{message}: ")).map_err(|e| PromptError::Io(e.to_string()))
}
