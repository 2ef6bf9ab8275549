//! # HTTP Server
//!
//! Binds the catalog routes, CORS, and request tracing into one axum
//! server.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::PlanetService;
use crate::store::PlanetStore;

use super::config::ServerConfig;
use super::routes::{health_routes, planet_routes};

/// HTTP server for the planet catalog
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new<S: PlanetStore + 'static>(service: PlanetService<S>) -> Self {
        Self::with_config(ServerConfig::default(), service)
    }

    /// Create a server with custom configuration
    pub fn with_config<S: PlanetStore + 'static>(
        config: ServerConfig,
        service: PlanetService<S>,
    ) -> Self {
        let router = Self::build_router(&config, Arc::new(service));
        Self { config, router }
    }

    /// Build the router with all endpoints and middleware
    fn build_router<S: PlanetStore + 'static>(
        config: &ServerConfig,
        service: Arc<PlanetService<S>>,
    ) -> Router {
        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
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

        Router::new()
            .merge(health_routes())
            .merge(planet_routes(service))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        info!(%addr, "planet catalog listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
