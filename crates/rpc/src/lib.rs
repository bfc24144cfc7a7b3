//! Abstract interface for reading ledger state from a Solana-style JSON-RPC node.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::value::RawValue;

/// Broad classification of RPC client failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The remote node could not be reached or the exchange was cut short.
    Transport,

    /// JSON in either direction was malformed or had the wrong shape.
    Parse,

    /// The remote node answered with a JSON-RPC error object.
    Remote,
}

/// Marker trait for RPC client errors.
pub trait SolanaRpcError: Error + Send + Sync + 'static {
    /// Classifies the failure.
    fn kind(&self) -> ErrorKind;
}

/// Block details exactly as the remote node returned them.
pub type BlockDetails = Box<RawValue>;

/// A trait representing a read-only RPC client with asynchronous operations.
#[async_trait]
pub trait SolanaRpc
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the RPC client.
    type Error: SolanaRpcError;

    /// Fetches the latest slot known to the remote node.
    async fn get_latest_slot(&self) -> Result<u64, Self::Error>;

    /// Fetches the details of the block at `slot`.
    ///
    /// The payload is returned untouched so callers can forward it byte-for-byte.
    async fn get_block_details(&self, slot: u64) -> Result<BlockDetails, Self::Error>;
}
