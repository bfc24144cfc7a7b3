//! An implementation of the RPC client which speaks JSON-RPC 2.0 over HTTP.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod envelope;
mod error;

pub use envelope::{JSONRPC_VERSION, JsonRpcError, JsonRpcRequest, JsonRpcResponse, REQUEST_ID};
pub use error::Error;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use solgate_rpc::{BlockDetails, SolanaRpc};
use tracing::{debug, trace};
use url::Url;

/// Upper bound on a single round trip to the remote node.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`HttpSolanaRpc`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RpcClientConfig {
    /// JSON-RPC endpoint of the remote node.
    pub endpoint: Url,

    /// Timeout applied to every outbound call.
    pub timeout: Duration,
}

impl RpcClientConfig {
    /// Creates a config for `endpoint` with [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub const fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// An HTTP-based implementation of the `SolanaRpc` trait.
#[derive(Clone, Debug)]
pub struct HttpSolanaRpc {
    client: Client,
    config: Arc<RpcClientConfig>,
}

impl HttpSolanaRpc {
    /// Creates a new instance of `HttpSolanaRpc` with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: Url) -> Result<Self, Error> {
        Self::with_config(RpcClientConfig::new(endpoint))
    }

    /// Creates a new instance of `HttpSolanaRpc` from an explicit config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_config(config: RpcClientConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// The endpoint every call is sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    /// The timeout applied to every call.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Sends a single JSON-RPC call and decodes the reply envelope.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, on a body that is not a JSON-RPC envelope,
    /// and with [`Error::Remote`] when the node reports an error object.
    pub async fn send_request(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<JsonRpcResponse, Error> {
        let request = JsonRpcRequest::new(method, params);
        let body = serde_json::to_vec(&request).map_err(Error::Encode)?;

        debug!(method, endpoint = %self.config.endpoint, "sending rpc request");

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::Request)?;

        let bytes = response.bytes().await.map_err(Error::ReadBody)?;
        trace!(method, len = bytes.len(), "received rpc response");

        let mut envelope: JsonRpcResponse =
            serde_json::from_slice(&bytes).map_err(Error::Decode)?;

        if let Some(JsonRpcError { code, message }) = envelope.error.take() {
            return Err(Error::Remote { code, message });
        }

        Ok(envelope)
    }
}

#[async_trait]
impl SolanaRpc for HttpSolanaRpc {
    type Error = Error;

    async fn get_latest_slot(&self) -> Result<u64, Self::Error> {
        let result = self.send_request("getSlot", Vec::new()).await?.into_result()?;

        serde_json::from_str(result.get()).map_err(Error::SlotParse)
    }

    async fn get_block_details(&self, slot: u64) -> Result<BlockDetails, Self::Error> {
        self.send_request("getBlock", vec![Value::from(slot)])
            .await?
            .into_result()
    }
}
