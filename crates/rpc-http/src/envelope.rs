//! JSON-RPC 2.0 request and response envelopes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;

use crate::Error;

/// Protocol version tag carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Correlation id used for every call. Calls are never multiplexed on one
/// connection, so a constant is enough to pair a reply with its request.
pub const REQUEST_ID: u64 = 1;

/// Outbound JSON-RPC call.
#[derive(Debug, Deserialize, Serialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always `"2.0"` for requests built here.
    pub jsonrpc: String,

    /// Remote method name.
    pub method: String,

    /// Positional parameters. Left off the wire when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Value>,

    /// Correlation id.
    pub id: u64,
}

impl JsonRpcRequest {
    /// Builds a request for `method` with the fixed version tag and id.
    #[must_use]
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id: REQUEST_ID,
        }
    }
}

/// Error object reported by the remote node.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct JsonRpcError {
    /// JSON-RPC error code.
    pub code: i64,

    /// Human readable message.
    pub message: String,
}

/// Inbound JSON-RPC reply.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version echoed by the node.
    #[serde(default)]
    pub jsonrpc: String,

    /// Raw result payload. An explicit `null` is kept as `Some("null")`.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub result: Option<Box<RawValue>>,

    /// Error object, if the call failed remotely.
    #[serde(default)]
    pub error: Option<JsonRpcError>,

    /// Correlation id echoed by the node.
    #[serde(default)]
    pub id: Value,
}

impl JsonRpcResponse {
    /// Takes the raw result payload out of the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Remote`] if the envelope carries an error object and
    /// [`Error::MissingResult`] if it carries neither field.
    pub fn into_result(self) -> Result<Box<RawValue>, Error> {
        if let Some(JsonRpcError { code, message }) = self.error {
            return Err(Error::Remote { code, message });
        }

        self.result.ok_or(Error::MissingResult)
    }
}

// `Option<Box<RawValue>>` would collapse a literal `null` into `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Box::<RawValue>::deserialize(deserializer).map(Some)
}
