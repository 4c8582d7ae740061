//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use meridian_cli::core::types::ChannelId;
//!
//! let channel = ChannelId::new(
//!     "3a547668e859fb7b112a1e2dd7efcb739176ab8cfd1d9f224847fce362ebd99c",
//! ).unwrap();
//! assert_eq!(channel.as_str().len(), 64);
//!
//! // The default channel is the all-zeros id.
//! assert_eq!(ChannelId::default().as_str(), "0".repeat(64));
//!
//! // Invalid constructions fail at creation time
//! assert!(ChannelId::new("abc123").is_err());
//! assert!(ChannelId::new("zz".repeat(32)).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid channel id: {0}")]
    InvalidChannelId(String),

    #[error("invalid signing key: {0}")]
    InvalidSigningKey(String),
}

/// A validated channel identifier.
///
/// Channel ids are 256-bit values rendered as 64 lowercase hex characters.
/// The node treats the all-zeros id as the default channel, so that is also
/// the `Default` here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelId(String);

impl ChannelId {
    /// Create a new validated channel id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidChannelId` if the value is not exactly
    /// 64 hex characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into().to_ascii_lowercase();
        if id.len() != 64 {
            return Err(TypeError::InvalidChannelId(format!(
                "expected 64 hex characters, got {}",
                id.len()
            )));
        }
        if hex::decode(&id).is_err() {
            return Err(TypeError::InvalidChannelId(
                "contains non-hex characters".into(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the channel id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self("0".repeat(64))
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ChannelId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ChannelId> for String {
    fn from(value: ChannelId) -> Self {
        value.0
    }
}

/// Key material identifying the submitting account.
///
/// 32 bytes as 64 hex characters, handed through to the signing capability
/// opaquely. `Debug` redacts the value so keys never land in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(String);

impl SigningKey {
    /// Create a new validated signing key.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidSigningKey` if the value is not exactly
    /// 64 hex characters.
    pub fn new(key: impl Into<String>) -> Result<Self, TypeError> {
        let key = key.into().trim().to_ascii_lowercase();
        if key.len() != 64 {
            return Err(TypeError::InvalidSigningKey(format!(
                "expected 64 hex characters, got {}",
                key.len()
            )));
        }
        if hex::decode(&key).is_err() {
            return Err(TypeError::InvalidSigningKey(
                "contains non-hex characters".into(),
            ));
        }
        Ok(Self(key))
    }

    /// Expose the key material. Callers are expected to hand this to the
    /// signing capability, not to print it.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

// Custom Debug to avoid exposing key material
impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningKey").field(&"<redacted>").finish()
    }
}
