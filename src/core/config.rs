//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Settings that would otherwise be repeated on every invocation (node host,
//! channel, signing key location) can live in a TOML file.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$MERIDIAN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/meridian/config.toml` (via the platform config dir)
//!
//! A missing config file is not an error; every field has a default.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Example
//!
//! ```
//! use meridian_cli::core::config::Config;
//!
//! let config: Config = toml::from_str(r#"
//!     host = "http://node.example.com:8081"
//!     channel = "3a547668e859fb7b112a1e2dd7efcb739176ab8cfd1d9f224847fce362ebd99c"
//! "#).unwrap();
//!
//! assert_eq!(config.host(), "http://node.example.com:8081");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "MERIDIAN_CONFIG";

/// Default node host when neither flag nor config provides one.
pub const DEFAULT_HOST: &str = "http://localhost:8081";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// User-level configuration.
///
/// All fields are optional; absent fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Web address of the node, e.g. `http://localhost:8081`.
    pub host: Option<String>,

    /// Default channel id (64 hex characters).
    pub channel: Option<String>,

    /// Path to a file holding the hex signing key.
    pub key_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Returns the default (empty) config when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&data).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve the config file path without touching the filesystem.
    ///
    /// `$MERIDIAN_CONFIG` wins over the platform config directory.
    pub fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|dir| dir.join("meridian").join("config.toml"))
    }

    /// The node host, applying the built-in default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_empty() {
        let config = Config::default();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert!(config.channel.is_none());
        assert!(config.key_file.is_none());
    }

    #[test]
    fn parses_all_fields() {
        let config: Config = toml::from_str(
            r#"
            host = "http://node:9000"
            channel = "aa"
            key_file = "/tmp/key.hex"
            "#,
        )
        .unwrap();
        assert_eq!(config.host(), "http://node:9000");
        assert_eq!(config.channel.as_deref(), Some("aa"));
        assert_eq!(config.key_file.as_deref(), Some(Path::new("/tmp/key.hex")));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<Config>("hostname = \"oops\"").is_err());
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = [not toml").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn load_from_missing_file_is_a_read_error() {
        let err = Config::load_from(Path::new("/nonexistent/meridian.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
