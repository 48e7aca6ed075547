pub mod extract;
pub mod handlers;
pub mod router;

use crate::domain::ports::{ConfigProvider, ContactSink};
use crate::utils::error::Result;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use router::{create_router, CONTACT_PATH};

/// State shared by all handlers. Immutable for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn ContactSink>,
}

impl AppState {
    pub fn new(sink: Arc<dyn ContactSink>) -> Self {
        Self { sink }
    }
}

pub struct ContactServer<C: ConfigProvider> {
    config: C,
    sink: Arc<dyn ContactSink>,
}

impl<C: ConfigProvider> ContactServer<C> {
    pub fn new(config: C, sink: Arc<dyn ContactSink>) -> Self {
        Self { config, sink }
    }

    pub fn router(&self) -> Router {
        create_router(AppState::new(Arc::clone(&self.sink)), self.config.body_limit())
    }

    /// Binds the listener. Port 0 picks an ephemeral port.
    pub async fn bind(&self) -> Result<BoundServer> {
        let listener = TcpListener::bind((self.config.host(), self.config.port())).await?;
        let local_addr = listener.local_addr()?;
        tracing::debug!("Listener bound to {}", local_addr);

        Ok(BoundServer {
            listener,
            local_addr,
            router: self.router(),
        })
    }

    /// Binds and serves until Ctrl-C or SIGTERM.
    pub async fn run(&self) -> Result<()> {
        let bound = self.bind().await?;
        tracing::info!("🚀 Server running on port {}", bound.local_addr().port());

        bound.serve(shutdown_signal()).await?;
        tracing::info!("👋 Server stopped");
        Ok(())
    }
}

pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl BoundServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves until `shutdown` resolves, then waits for in-flight requests.
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
