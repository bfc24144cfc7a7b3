//! Handler for the /latest-block endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use solgate_rpc::SolanaRpc;
use tracing::debug;

use crate::{ApiError, GatewayContext};

#[derive(Debug, Serialize)]
pub(crate) struct LatestBlock {
    latest_block: u64,
}

/// Handler for the `/latest-block` endpoint.
pub(crate) async fn latest_block_handler<R>(
    State(GatewayContext { rpc }): State<GatewayContext<R>>,
) -> Result<Json<LatestBlock>, ApiError>
where
    R: SolanaRpc,
{
    let latest_block = rpc.get_latest_slot().await.map_err(ApiError::rpc)?;
    debug!(latest_block, "fetched latest slot");

    Ok(Json(LatestBlock { latest_block }))
}
