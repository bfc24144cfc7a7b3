//! A mock implementation of the RPC client.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::value::RawValue;
use solgate_rpc::{BlockDetails, SolanaRpc};
use tokio::sync::Mutex;

mod error;
pub use error::Error;

#[derive(Debug, Default)]
struct MockState {
    latest_slot: u64,
    blocks: HashMap<u64, BlockDetails>,
    failure: Option<String>,
}

/// A mock implementation of the `SolanaRpc` trait. Used for testing.
///
/// Clones share state, so a test can keep a handle and reconfigure the mock
/// after handing a clone to the code under test.
#[derive(Clone, Debug, Default)]
pub struct MockSolanaRpc {
    state: Arc<Mutex<MockState>>,
}

impl MockSolanaRpc {
    /// Creates a new instance of `MockSolanaRpc` reporting slot 0 and no blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot returned by `get_latest_slot`.
    pub async fn set_latest_slot(&self, slot: u64) {
        self.state.lock().await.latest_slot = slot;
    }

    /// Stores the raw JSON payload returned for `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` is not well-formed JSON.
    pub async fn insert_block(
        &self,
        slot: u64,
        payload: impl Into<String> + Send,
    ) -> Result<(), serde_json::Error> {
        let payload = RawValue::from_string(payload.into())?;
        self.state.lock().await.blocks.insert(slot, payload);

        Ok(())
    }

    /// Makes every subsequent call fail with `message`.
    pub async fn fail_with(&self, message: impl Into<String> + Send) {
        self.state.lock().await.failure = Some(message.into());
    }

    /// Clears a failure set with [`Self::fail_with`].
    pub async fn recover(&self) {
        self.state.lock().await.failure = None;
    }
}

#[async_trait]
impl SolanaRpc for MockSolanaRpc {
    type Error = Error;

    async fn get_latest_slot(&self) -> Result<u64, Self::Error> {
        let state = self.state.lock().await;

        if let Some(message) = &state.failure {
            return Err(Error::Forced(message.clone()));
        }

        Ok(state.latest_slot)
    }

    async fn get_block_details(&self, slot: u64) -> Result<BlockDetails, Self::Error> {
        let state = self.state.lock().await;

        if let Some(message) = &state.failure {
            return Err(Error::Forced(message.clone()));
        }

        state
            .blocks
            .get(&slot)
            .cloned()
            .ok_or(Error::BlockNotAvailable(slot))
    }
}
