//! # HTTP Server
//!
//! Binds the listener and serves the inventory router with CORS and
//! request tracing applied.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::InventoryStore;

use super::config::HttpServerConfig;
use super::routes::inventory_router;

/// HTTP server for the inventory API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store accessor with default configuration
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn InventoryStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the router with CORS and tracing layers
    fn build_router(config: &HttpServerConfig, store: Arc<dyn InventoryStore>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, the API fronts a public form
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        inventory_router(store)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server; runs until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("invalid bind address: {e}")))?;

        tracing::info!(%addr, "inventory API listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}
