//! client::http
//!
//! HTTP node client implementation.
//!
//! # Design
//!
//! This module implements the `NodeClient` trait against a node's JSON
//! gateway:
//! - `POST <host>/transaction/submit` for state-changing calls
//! - `POST <host>/readonly/submit` for read-only queries
//!
//! Transaction submissions carry the channel id, a freshly randomized
//! nonce, and optionally the account acted on behalf of. Key material is
//! handed through to the gateway's signing capability opaquely; this
//! client never inspects or derives from it.
//!
//! No retries happen at this layer - a rejected or unreachable submission
//! surfaces as a [`ClientError`] for the caller to report.
//!
//! # Example
//!
//! ```ignore
//! use meridian_cli::client::{HttpNodeClient, NodeClient};
//! use meridian_cli::core::types::ChannelId;
//!
//! let client = HttpNodeClient::new("http://localhost:8081", ChannelId::default());
//! let receipt = client.transaction_call("set", vec![42.into()]).await?;
//! println!("{receipt}");
//! ```

use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

use super::traits::{ClientError, NodeClient};
use crate::core::types::{ChannelId, SigningKey};

/// Largest nonce value; nonces are uniform in `[0, NONCE_SPACE)`.
const NONCE_SPACE: u64 = 1_000_000_000;

/// HTTP client for a node's JSON gateway.
pub struct HttpNodeClient {
    /// HTTP client for making requests
    client: Client,
    /// Node base address, e.g. `http://localhost:8081`
    host: String,
    /// Channel the calls are directed at
    channel: ChannelId,
    /// Key material for the gateway's signer
    signing_key: Option<SigningKey>,
    /// Account to submit transactions on behalf of
    on_behalf_of: Option<String>,
}

// Custom Debug to avoid exposing the signing key's wrapper contents
impl std::fmt::Debug for HttpNodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpNodeClient")
            .field("host", &self.host)
            .field("channel", &self.channel)
            .field("has_signing_key", &self.signing_key.is_some())
            .field("on_behalf_of", &self.on_behalf_of)
            .finish()
    }
}

/// Body for `POST /transaction/submit`.
#[derive(Debug, Serialize)]
struct TransactionSubmit<'a> {
    channel_id: &'a str,
    nonce: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    on_behalf_of: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signer: Option<&'a str>,
    call: CallBody<'a>,
}

/// Body for `POST /readonly/submit`.
#[derive(Debug, Serialize)]
struct ReadonlySubmit<'a> {
    channel_id: &'a str,
    call: CallBody<'a>,
}

#[derive(Debug, Serialize)]
struct CallBody<'a> {
    function: &'a str,
    parameters: Vec<Value>,
}

impl HttpNodeClient {
    /// Create a client for the given host and channel, without signing
    /// material. Sufficient for read-only use.
    pub fn new(host: impl Into<String>, channel: ChannelId) -> Self {
        Self {
            client: Client::new(),
            host: host.into().trim_end_matches('/').to_string(),
            channel,
            signing_key: None,
            on_behalf_of: None,
        }
    }

    /// Attach signing key material for transaction submission.
    pub fn with_signing_key(mut self, key: SigningKey) -> Self {
        self.signing_key = Some(key);
        self
    }

    /// Submit transactions on behalf of another account.
    pub fn with_on_behalf_of(mut self, account: impl Into<String>) -> Self {
        self.on_behalf_of = Some(account.into());
        self
    }

    /// Fresh nonce for a transaction submission.
    fn nonce(&self) -> String {
        rand::rng().random_range(0..NONCE_SPACE).to_string()
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.host, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::handle_response(response).await
    }

    async fn handle_response(response: Response) -> Result<Value, ClientError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(unreadable body: {e})"));
            Err(ClientError::ApiError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl NodeClient for HttpNodeClient {
    async fn transaction_call(
        &self,
        function: &str,
        args: Vec<Value>,
    ) -> Result<Value, ClientError> {
        let body = TransactionSubmit {
            channel_id: self.channel.as_str(),
            nonce: self.nonce(),
            on_behalf_of: self.on_behalf_of.as_deref(),
            signer: self.signing_key.as_ref().map(|k| k.reveal()),
            call: CallBody {
                function,
                parameters: args,
            },
        };
        self.post("/transaction/submit", &body).await
    }

    async fn readonly_call(&self, function: &str, args: Vec<Value>) -> Result<Value, ClientError> {
        let body = ReadonlySubmit {
            channel_id: self.channel.as_str(),
            call: CallBody {
                function,
                parameters: args,
            },
        };
        self.post("/readonly/submit", &body).await
    }
}
