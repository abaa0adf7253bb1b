//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the five delay endpoints
//! - Wire up middleware (tracing, request ID)
//! - Build the outbound client used by the self-proxy endpoint
//! - Serve on the bounded listener with graceful shutdown
//!
//! Deliberately absent: any per-request timeout. The server finishes its
//! delay and attempts its write no matter what the client does, which is
//! the behavior the lab observes.

use std::time::Duration;

use axum::body::Body;
use axum::routing::get;
use axum::Router;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::{DelayDefaults, LabConfig};
use crate::http::handlers;
use crate::lifecycle::Shutdown;
use crate::net::BoundedListener;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client for the self-proxy endpoint.
    pub client: Client<HttpConnector, Body>,
    /// Defaults for omitted query parameters.
    pub defaults: DelayDefaults,
    /// Shutdown handle; handlers subscribe per request to make their
    /// suspends cancellable.
    pub shutdown: Shutdown,
    /// This server's own host:port, the self-proxy target authority.
    pub authority: String,
}

/// HTTP server for the delay endpoints.
pub struct HttpServer {
    config: LabConfig,
    shutdown: Shutdown,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: LabConfig, shutdown: Shutdown) -> Self {
        Self { config, shutdown }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/sleep1", get(handlers::sleep1))
            .route("/sleep2", get(handlers::sleep2))
            .route("/sleep3", get(handlers::sleep3))
            .route("/proxy-sleep", get(handlers::proxy_sleep))
            .route("/sleep-proxied", get(handlers::sleep_proxied))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: BoundedListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(
            self.config.upstream.connect_timeout_secs,
        )));
        let client: Client<HttpConnector, Body> =
            Client::builder(TokioExecutor::new()).build(connector);

        let state = AppState {
            client,
            defaults: self.config.delays,
            shutdown: self.shutdown.clone(),
            authority: addr.to_string(),
        };
        let app = Self::build_router(state);

        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let mut shutdown_rx = self.shutdown.subscribe();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                tracing::info!("shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &LabConfig {
        &self.config
    }
}
