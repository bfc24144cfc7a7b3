use solgate_rpc::{ErrorKind, SolanaRpcError};
use thiserror::Error;

/// Errors that can occur in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The response body could not be decoded as a JSON-RPC envelope.
    #[error("failed to unmarshal response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request envelope could not be serialized.
    #[error("failed to marshal request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The envelope carried neither a result nor an error.
    #[error("response carried no result")]
    MissingResult,

    /// The response body could not be read in full.
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The remote node answered with an error object.
    #[error("RPC error: {code} - {message}")]
    Remote {
        /// JSON-RPC error code.
        code: i64,
        /// Message reported by the node.
        message: String,
    },

    /// The request never completed (connect failure, timeout, reset).
    #[error("RPC request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The `getSlot` result was not an unsigned 64-bit integer.
    #[error("failed to parse slot number: {0}")]
    SlotParse(#[source] serde_json::Error),
}

impl SolanaRpcError for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::ClientBuild(_) | Self::ReadBody(_) | Self::Request(_) => ErrorKind::Transport,
            Self::Decode(_) | Self::Encode(_) | Self::MissingResult | Self::SlotParse(_) => {
                ErrorKind::Parse
            }
            Self::Remote { .. } => ErrorKind::Remote,
        }
    }
}
