//! Handler for the /block-details endpoint.

use axum::extract::{RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use solgate_rpc::SolanaRpc;
use tracing::debug;
use url::form_urlencoded;

use crate::{ApiError, GatewayContext};

/// Handler for the `/block-details` endpoint.
///
/// Forwards the node's block payload untouched.
pub(crate) async fn block_details_handler<R>(
    State(GatewayContext { rpc }): State<GatewayContext<R>>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError>
where
    R: SolanaRpc,
{
    let slot = parse_block_param(query.as_deref())?;

    let block = rpc.get_block_details(slot).await.map_err(ApiError::rpc)?;
    debug!(slot, len = block.get().len(), "fetched block details");

    Ok((
        [(CONTENT_TYPE, "application/json")],
        Box::<str>::from(block).into_string(),
    )
        .into_response())
}

/// Extracts the slot from the first `block` value of a raw query string.
fn parse_block_param(query: Option<&str>) -> Result<u64, ApiError> {
    let value = query
        .and_then(|query| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "block")
                .map(|(_, value)| value)
        })
        .unwrap_or_default();

    if value.is_empty() {
        return Err(ApiError::MissingBlock);
    }

    // `u64::from_str` tolerates a leading '+'.
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidBlock);
    }

    value.parse().map_err(|_| ApiError::InvalidBlock)
}
