//! HTTP gateway exposing ledger reads from a JSON-RPC node.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

mod api_error;
mod error;
mod handlers;
mod server;
mod state;

pub use api_error::ApiError;
pub use error::Error;
pub use server::GatewayServer;
pub use state::GatewayContext;

use axum::Router;
use axum::routing::get;
use solgate_rpc::SolanaRpc;
use tower_http::trace::TraceLayer;

use crate::handlers::{block_details_handler, latest_block_handler};

/// Path of the latest-slot endpoint.
pub const LATEST_BLOCK_PATH: &str = "/latest-block";

/// Path of the block-details endpoint.
pub const BLOCK_DETAILS_PATH: &str = "/block-details";

/// Builds the gateway router around `rpc`.
#[must_use]
pub fn router<R>(rpc: R) -> Router
where
    R: SolanaRpc,
{
    Router::new()
        .route(LATEST_BLOCK_PATH, get(latest_block_handler::<R>))
        .route(BLOCK_DETAILS_PATH, get(block_details_handler::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(GatewayContext { rpc })
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use solgate_rpc_mock::MockSolanaRpc;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    const BLOCK: &str = r#"{"parentSlot":12345677,"transactions":[{"meta":{"fee":5000},"transaction":{"message":{"accountKeys":["abc123"]}}}]}"#;

    async fn fetch(rpc: &MockSolanaRpc, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = router(rpc.clone())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_latest_block() {
        let rpc = MockSolanaRpc::new();

        for slot in [0, 1, 12_345_678, u64::from(u32::MAX) + 1, u64::MAX] {
            rpc.set_latest_slot(slot).await;

            let (status, content_type, body) = fetch(&rpc, "/latest-block").await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(content_type.as_deref(), Some("application/json"));
            assert_eq!(body, format!(r#"{{"latest_block":{slot}}}"#));
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_latest_block_rpc_error() {
        let rpc = MockSolanaRpc::new();

        for message in ["RPC connection failed", "RPC error: -32005 - Node is behind", "x"] {
            rpc.fail_with(message).await;

            let (status, content_type, body) = fetch(&rpc, "/latest-block").await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
            assert_eq!(body, format!("{message}\n"));
        }

        assert!(logs_contain("rpc call failed"));
    }

    #[tokio::test]
    async fn test_block_details() {
        let rpc = MockSolanaRpc::new();
        rpc.insert_block(12_345_678, BLOCK).await.unwrap();

        let (status, content_type, body) = fetch(&rpc, "/block-details?block=12345678").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, BLOCK);
    }

    #[tokio::test]
    async fn test_block_details_keeps_payload_whitespace() {
        let rpc = MockSolanaRpc::new();
        rpc.insert_block(3, "{ \"blockHeight\" : null }").await.unwrap();

        let (status, _, body) = fetch(&rpc, "/block-details?block=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "{ \"blockHeight\" : null }");
    }

    #[tokio::test]
    async fn test_block_details_missing_parameter() {
        let rpc = MockSolanaRpc::new();

        for uri in ["/block-details", "/block-details?block=", "/block-details?slot=1"] {
            let (status, content_type, body) = fetch(&rpc, uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
            assert_eq!(body, "block parameter is required\n");
        }
    }

    #[tokio::test]
    async fn test_block_details_invalid_number() {
        let rpc = MockSolanaRpc::new();

        for uri in [
            "/block-details?block=invalid",
            "/block-details?block=-5",
            "/block-details?block=99999999999999999999",
        ] {
            let (status, _, body) = fetch(&rpc, uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, "invalid block number\n");
        }
    }

    #[tokio::test]
    async fn test_block_details_rpc_error() {
        let rpc = MockSolanaRpc::new();
        rpc.fail_with("RPC connection failed").await;

        let (status, _, body) = fetch(&rpc, "/block-details?block=12345678").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "RPC connection failed\n");
    }

    #[tokio::test]
    async fn test_block_details_unknown_block() {
        let rpc = MockSolanaRpc::new();

        let (status, _, body) = fetch(&rpc, "/block-details?block=77").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "block not available for slot 77\n");
    }

    #[tokio::test]
    async fn test_rejects_other_methods() {
        let response = router(MockSolanaRpc::new())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/latest-block")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
