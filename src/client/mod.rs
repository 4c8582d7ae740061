//! client
//!
//! Abstraction for the remote ledger node.
//!
//! # Architecture
//!
//! The `NodeClient` trait defines the remote-call capability the console
//! dispatches through. The console never imports a concrete client; the CLI
//! layer decides which implementation to construct.
//!
//! - Node failures surface as values to print, never as loop termination
//! - The client is read-only after construction; no locks are needed
//!
//! # Modules
//!
//! - `traits`: Core `NodeClient` trait and error type
//! - [`http`]: JSON-gateway implementation over reqwest
//! - [`mock`]: Mock implementation for deterministic testing

pub mod http;
pub mod mock;
mod traits;

pub use http::HttpNodeClient;
pub use mock::MockNodeClient;
pub use traits::{ClientError, NodeClient};
