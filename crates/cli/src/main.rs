//! CLI binary running the ledger gateway.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use solgate_gateway::{GatewayServer, router};
use solgate_rpc_http::{HttpSolanaRpc, RpcClientConfig};
use tracing::{Level, info};
use url::Url;

/// CLI-specific error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Gateway server error
    #[error(transparent)]
    Gateway(#[from] solgate_gateway::Error),

    /// Waiting for the shutdown signal failed
    #[error("signal error: {0}")]
    Signal(#[source] std::io::Error),

    /// RPC client construction error
    #[error(transparent)]
    Rpc(#[from] solgate_rpc_http::Error),
}

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address the HTTP API listens on
    #[arg(long, default_value = "0.0.0.0:8080", env = "SOLGATE_LISTEN_ADDR")]
    listen_addr: SocketAddr,

    /// Log level
    #[arg(long, default_value = "info", env = "SOLGATE_LOG_LEVEL")]
    log_level: Level,

    /// JSON-RPC endpoint of the remote node
    #[arg(
        long,
        default_value = "https://api.mainnet-beta.solana.com",
        env = "SOLGATE_RPC_ENDPOINT"
    )]
    rpc_endpoint: Url,

    /// Timeout for each call to the remote node, in seconds
    #[arg(long, default_value_t = 10, env = "SOLGATE_RPC_TIMEOUT_SECS")]
    rpc_timeout_secs: u64,
}

impl Args {
    fn rpc_config(&self) -> RpcClientConfig {
        RpcClientConfig {
            endpoint: self.rpc_endpoint.clone(),
            timeout: Duration::from_secs(self.rpc_timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let rpc = HttpSolanaRpc::with_config(args.rpc_config())?;
    info!(
        "forwarding to {} with a {:?} timeout",
        rpc.endpoint(),
        rpc.timeout()
    );

    let server = GatewayServer::new(args.listen_addr);
    server.start(router(rpc)).await?;

    tokio::signal::ctrl_c().await.map_err(Error::Signal)?;

    info!("shutting down...");
    server.shutdown().await;
    info!("shutdown");

    Ok(())
}
