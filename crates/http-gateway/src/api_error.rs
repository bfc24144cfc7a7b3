use axum::http::StatusCode;
use axum::http::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::response::{IntoResponse, Response};
use solgate_rpc::SolanaRpcError;
use thiserror::Error;
use tracing::warn;

/// Failures a handler reports back to the API client.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ApiError {
    /// The `block` query parameter was absent or empty.
    #[error("block parameter is required")]
    MissingBlock,

    /// The `block` query parameter was not a base-10 `u64`.
    #[error("invalid block number")]
    InvalidBlock,

    /// The RPC client failed. Carries the client's message unchanged.
    #[error("{0}")]
    Rpc(String),
}

impl ApiError {
    pub(crate) fn rpc<E: SolanaRpcError>(err: E) -> Self {
        warn!(kind = ?err.kind(), "rpc call failed: {err}");

        Self::Rpc(err.to_string())
    }

    /// Status code the error is reported with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingBlock | Self::InvalidBlock => StatusCode::BAD_REQUEST,
            Self::Rpc(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [
                (CONTENT_TYPE, "text/plain; charset=utf-8"),
                (X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            format!("{self}\n"),
        )
            .into_response()
    }
}
