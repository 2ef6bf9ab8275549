//! # Catalog HTTP Module
//!
//! The axum transport: routes, status-code mapping, CORS, and the server
//! itself.
//!
//! # Endpoints
//!
//! - `POST /planets` - create a planet
//! - `GET /planets/{id}` - fetch by id
//! - `GET /planets/name/{name}` - fetch by name
//! - `GET /planets?terrain=&climate=` - list with optional exact-match terms
//! - `DELETE /planets/{id}` - remove by id
//! - `GET /health` - health check

pub mod config;
pub mod errors;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{health_routes, planet_routes};
pub use server::HttpServer;
