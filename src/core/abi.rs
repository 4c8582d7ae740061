//! core::abi
//!
//! Contract description (ABI) schema, loading, and display.
//!
//! # Overview
//!
//! A contract ABI is a JSON array of entries. Each entry names a callable,
//! tags it as a state-changing `function` or a `readonly` query, and lists
//! its typed inputs and (at most one) typed output:
//!
//! ```json
//! [
//!   {"type": "function", "name": "set", "inputs": [{"type": "uint32"}],
//!    "outputs": [{"type": "bool"}]},
//!   {"type": "readonly", "name": "get", "inputs": [],
//!    "outputs": [{"type": "uint32"}]}
//! ]
//! ```
//!
//! Entry order is preserved: it is the order the interface listing prints
//! in, and input order is positional-argument order for calls.
//!
//! # Example
//!
//! ```
//! use meridian_cli::core::abi::{Abi, AbiKind};
//!
//! let abi = Abi::from_json(r#"[
//!     {"type": "function", "name": "set",
//!      "inputs": [{"type": "uint32"}], "outputs": [{"type": "bool"}]}
//! ]"#).unwrap();
//!
//! let entry = abi.callable("set").unwrap();
//! assert_eq!(entry.kind, AbiKind::Function);
//! assert!(abi.callable("missing").is_none());
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from ABI loading.
#[derive(Debug, Error)]
pub enum AbiError {
    #[error("could not read file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse ABI '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// The kind of a contract entry.
///
/// `Function` entries mutate chain state and are submitted as transactions;
/// `Readonly` entries are queries. Anything else in the ABI (events, custom
/// type declarations) is carried as `Other` and is not callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiKind {
    Function,
    Readonly,
    #[serde(other)]
    Other,
}

/// A typed input or output slot on a contract entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiParam {
    /// Parameter name, if the contract author provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type name as declared by the contract (e.g. `uint32`, `string`).
    #[serde(rename = "type")]
    pub ty: String,
}

/// One callable entry in a contract description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    /// Entry kind tag (serialized as the `type` field).
    #[serde(rename = "type")]
    pub kind: AbiKind,

    /// Case-sensitive entry name.
    pub name: String,

    /// Ordered inputs; order is positional-argument order.
    #[serde(default)]
    pub inputs: Vec<AbiParam>,

    /// Outputs; only the first is meaningful.
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
}

impl AbiEntry {
    /// Format the entry as a single listing line.
    ///
    /// Shape: `  <name>(<comma-separated input types>)[ -> <output type>]`
    fn render(&self) -> String {
        let types: Vec<&str> = self.inputs.iter().map(|p| p.ty.as_str()).collect();
        let mut line = format!("  {}({})", self.name, types.join(", "));
        if let Some(output) = self.outputs.first() {
            line.push_str(&format!(" -> {}", output.ty));
        }
        line
    }
}

/// A loaded contract description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abi {
    entries: Vec<AbiEntry>,
}

impl Abi {
    /// Load an ABI from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AbiError> {
        let data = std::fs::read_to_string(path).map_err(|source| AbiError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|e| AbiError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse an ABI from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a callable entry by name (case-sensitive).
    ///
    /// Returns `None` for names the contract does not declare and for
    /// non-callable entry kinds.
    pub fn callable(&self, name: &str) -> Option<&AbiEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name && e.kind != AbiKind::Other)
    }

    /// Render the human-readable interface summary.
    ///
    /// Functions and read-only functions print under separate headers, each
    /// section followed by a blank line.
    pub fn render_listing(&self) -> String {
        let mut out = String::from("\nFunctions:\n");
        for entry in self.entries.iter().filter(|e| e.kind == AbiKind::Function) {
            out.push_str(&entry.render());
            out.push('\n');
        }
        out.push_str("\nReadOnly Functions:\n");
        for entry in self.entries.iter().filter(|e| e.kind == AbiKind::Readonly) {
            out.push_str(&entry.render());
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Abi {
        Abi::from_json(
            r#"[
                {"type": "function", "name": "set",
                 "inputs": [{"name": "x", "type": "int"}],
                 "outputs": [{"type": "bool"}]},
                {"type": "readonly", "name": "get",
                 "inputs": [], "outputs": [{"type": "int"}]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let abi = sample();
        assert!(abi.callable("set").is_some());
        assert!(abi.callable("Set").is_none());
        assert!(abi.callable("delete").is_none());
    }

    #[test]
    fn inputs_default_to_empty() {
        let abi = Abi::from_json(r#"[{"type": "readonly", "name": "ping"}]"#).unwrap();
        let entry = abi.callable("ping").unwrap();
        assert!(entry.inputs.is_empty());
        assert!(entry.outputs.is_empty());
    }

    #[test]
    fn unknown_kinds_are_not_callable() {
        let abi = Abi::from_json(
            r#"[{"type": "event", "name": "transferred",
                 "inputs": [{"type": "uint64"}]}]"#,
        )
        .unwrap();
        assert!(abi.callable("transferred").is_none());
    }

    #[test]
    fn listing_prints_two_sections() {
        assert_eq!(
            sample().render_listing(),
            "\nFunctions:\n  set(int) -> bool\n\nReadOnly Functions:\n  get() -> int\n\n"
        );
    }

    #[test]
    fn entry_without_output_omits_arrow() {
        let abi = Abi::from_json(
            r#"[{"type": "function", "name": "clear", "inputs": []}]"#,
        )
        .unwrap();
        let listing = abi.render_listing();
        assert!(listing.contains("  clear()\n"));
        assert!(!listing.contains("clear() ->"));
    }

    #[test]
    fn multiple_inputs_are_comma_separated() {
        let abi = Abi::from_json(
            r#"[{"type": "function", "name": "transfer",
                 "inputs": [{"type": "string"}, {"type": "uint64"}],
                 "outputs": [{"type": "bool"}]}]"#,
        )
        .unwrap();
        assert!(abi
            .render_listing()
            .contains("  transfer(string, uint64) -> bool"));
    }
}
