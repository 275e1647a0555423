//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with the echo handler on every route
//! - Wire up request tracing middleware
//! - Serve on a bound listener until shutdown is signalled

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::EchoConfig;
use crate::http::echo::echo_handler;

/// HTTP server for the echo service.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
}

impl EchoServer {
    /// Create a new server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router.
    ///
    /// A single handler is registered for all HTTP methods on `/` and on
    /// every other path, the explicit equivalent of per-verb dispatch.
    fn build_router() -> Router {
        Router::new()
            .route("/{*path}", any(echo_handler))
            .route("/", any(echo_handler))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve connections on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let port = listener.local_addr()?.port();
        tracing::info!("listening on port: {}", port);

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }
}
