use std::net::SocketAddr;

use axum::Router;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::info;

use crate::Error;

/// Plain HTTP server for the gateway router.
pub struct GatewayServer {
    listen_addr: SocketAddr,
    local_addr: RwLock<Option<SocketAddr>>,
    shutdown_token: CancellationToken,
    task_tracker: TaskTracker,
}

impl GatewayServer {
    /// Creates a new instance of `GatewayServer`.
    #[must_use]
    pub fn new(listen_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            local_addr: RwLock::new(None),
            shutdown_token: CancellationToken::new(),
            task_tracker: TaskTracker::new(),
        }
    }

    /// Address actually bound, once started. Differs from the listen address
    /// when port 0 was requested.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        *self.local_addr.read()
    }

    /// Binds the listen address and serves `router` on a background task.
    ///
    /// # Errors
    ///
    /// Fails if the server was already started or the address cannot be bound.
    pub async fn start(&self, router: Router) -> Result<JoinHandle<()>, Error> {
        if self.task_tracker.is_closed() {
            return Err(Error::AlreadyStarted);
        }

        let listener = tokio::net::TcpListener::bind(self.listen_addr).await?;
        let local_addr = listener.local_addr()?;
        *self.local_addr.write() = Some(local_addr);

        let shutdown_token = self.shutdown_token.clone();
        let handle = self.task_tracker.spawn(async move {
            let result = axum::serve(listener, router.into_make_service())
                .with_graceful_shutdown(shutdown_token.cancelled_owned())
                .await;

            info!("http server exited {:?}", result);
        });

        self.task_tracker.close();
        info!("http server listening on {}", local_addr);

        Ok(handle)
    }

    /// Stops accepting connections and waits for in-flight requests to finish.
    pub async fn shutdown(&self) {
        info!("http server shutting down...");

        self.shutdown_token.cancel();
        self.task_tracker.close();
        self.task_tracker.wait().await;

        info!("http server shutdown");
    }
}
