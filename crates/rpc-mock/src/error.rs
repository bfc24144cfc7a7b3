use solgate_rpc::{ErrorKind, SolanaRpcError};
use thiserror::Error;

/// Error type for the mock RPC client.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// No payload has been inserted for the slot.
    #[error("block not available for slot {0}")]
    BlockNotAvailable(u64),

    /// A failure forced through [`crate::MockSolanaRpc::fail_with`].
    #[error("{0}")]
    Forced(String),
}

impl SolanaRpcError for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::BlockNotAvailable(_) => ErrorKind::Remote,
            Self::Forced(_) => ErrorKind::Transport,
        }
    }
}
