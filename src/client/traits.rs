//! client::traits
//!
//! NodeClient trait definition for invoking contract functions on a
//! remote ledger node.
//!
//! # Design
//!
//! The `NodeClient` trait is async because node operations involve network
//! I/O. All methods return `Result` to handle API errors gracefully.
//!
//! State-changing functions and read-only queries travel different paths on
//! the node (a submitted transaction versus a query), so the trait exposes
//! them separately; the console picks the method from the ABI entry kind.
//! Arguments are positional and already resolved - file references have
//! been read and encoded by the time a call reaches this boundary.
//!
//! # Example
//!
//! ```ignore
//! use meridian_cli::client::{ClientError, NodeClient};
//!
//! async fn ping(client: &dyn NodeClient) -> Result<(), ClientError> {
//!     let result = client.readonly_call("ping", vec![]).await?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from node operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The node answered with a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the node
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// The node answered, but not with anything we can interpret.
    #[error("invalid response from node: {0}")]
    InvalidResponse(String),
}

/// Capability for invoking contract functions on a remote node.
///
/// One implementation talks HTTP to a real node
/// ([`HttpNodeClient`](crate::client::HttpNodeClient)); tests use
/// [`MockNodeClient`](crate::client::MockNodeClient).
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Submit a state-changing contract call as a transaction.
    ///
    /// Resolves with the transaction receipt, or whatever value the node
    /// reports for the submission.
    async fn transaction_call(
        &self,
        function: &str,
        args: Vec<Value>,
    ) -> Result<Value, ClientError>;

    /// Execute a read-only contract query.
    async fn readonly_call(&self, function: &str, args: Vec<Value>) -> Result<Value, ClientError>;
}
