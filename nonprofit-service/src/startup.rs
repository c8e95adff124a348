//! Application startup and lifecycle management.
//!
//! The nonprofit service serves the string operations alongside `/fetch`;
//! any other path falls through to the whoami page.

use crate::config::NonprofitConfig;
use crate::handlers::{health, whoami::whoami};
use crate::services::{NonprofitSearch, ProPublicaClient};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::lifecycle::shutdown_signal;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use service_core::observability::init_metrics;
use std::net::SocketAddr;
use std::sync::Arc;
use string_service::services::BasicStringService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Build the full router around a search backend.
pub fn build_router<P: NonprofitSearch>(search: Arc<P>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .merge(string_service::routes(BasicStringService))
        .merge(crate::endpoints::routes(search))
        .fallback(whoami)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: NonprofitConfig) -> Result<Self, AppError> {
        init_metrics();

        let search = ProPublicaClient::new(config.propublica.clone())?;
        tracing::info!(
            base_url = %search.base_url(),
            timeout_secs = config.propublica.timeout_secs,
            "Initialized ProPublica client"
        );

        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Nonprofit service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(Arc::new(search)),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
