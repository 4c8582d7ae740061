//! client::mock
//!
//! Mock node client for deterministic testing.
//!
//! # Design
//!
//! The mock client provides a deterministic implementation of the
//! `NodeClient` trait for use in tests. It serves canned results per
//! function name, records every call for later verification, and allows
//! configuring failure scenarios.
//!
//! # Example
//!
//! ```
//! use meridian_cli::client::{MockNodeClient, NodeClient};
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let client = MockNodeClient::new().with_result("get", json!(7));
//!
//! let value = client.readonly_call("get", vec![]).await.unwrap();
//! assert_eq!(value, json!(7));
//!
//! let calls = client.calls();
//! assert_eq!(calls.len(), 1);
//! assert_eq!(calls[0].function, "get");
//! assert!(calls[0].readonly);
//! # });
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::traits::{ClientError, NodeClient};

/// One call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Function name as dispatched.
    pub function: String,
    /// Positional arguments, already resolved.
    pub args: Vec<Value>,
    /// Whether the call went down the readonly path.
    pub readonly: bool,
}

/// Mock node client for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockNodeClient {
    inner: Arc<Mutex<MockInner>>,
}

#[derive(Debug, Default)]
struct MockInner {
    /// Canned results by function name.
    results: HashMap<String, Value>,
    /// Errors by function name; takes priority over results.
    failures: HashMap<String, ClientError>,
    /// Every call, in dispatch order.
    calls: Vec<RecordedCall>,
}

impl MockNodeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` whenever `function` is called.
    ///
    /// Functions without a canned result resolve to JSON null.
    pub fn with_result(self, function: impl Into<String>, value: Value) -> Self {
        self.inner
            .lock()
            .unwrap()
            .results
            .insert(function.into(), value);
        self
    }

    /// Reject calls to `function` with `error`.
    pub fn with_failure(self, function: impl Into<String>, error: ClientError) -> Self {
        self.inner
            .lock()
            .unwrap()
            .failures
            .insert(function.into(), error);
        self
    }

    /// All calls observed so far, in dispatch order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn dispatch(&self, function: &str, args: Vec<Value>, readonly: bool) -> Result<Value, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(RecordedCall {
            function: function.to_string(),
            args,
            readonly,
        });
        if let Some(error) = inner.failures.get(function) {
            return Err(error.clone());
        }
        Ok(inner.results.get(function).cloned().unwrap_or(Value::Null))
    }
}

#[async_trait]
impl NodeClient for MockNodeClient {
    async fn transaction_call(
        &self,
        function: &str,
        args: Vec<Value>,
    ) -> Result<Value, ClientError> {
        self.dispatch(function, args, false)
    }

    async fn readonly_call(&self, function: &str, args: Vec<Value>) -> Result<Value, ClientError> {
        self.dispatch(function, args, true)
    }
}
