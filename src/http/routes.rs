//! Planet HTTP Routes
//!
//! Endpoints for creating, fetching, listing, and removing catalog records.
//! Bodies are the bare entity or array, no envelope.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::domain::{Planet, PlanetService};
use crate::store::PlanetStore;

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Handler state: the service behind every route
pub type CatalogState<S> = Arc<PlanetService<S>>;

// ==================
// Request/Response Types
// ==================

/// Body of `POST /planets`
///
/// Every field is optional at the wire level so that missing and null
/// fields reach the service's validity rule instead of dying in
/// deserialization; they are rejected there with a structured 422.
#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub climate: Option<String>,

    #[serde(default)]
    pub terrain: Option<String>,
}

impl CreatePlanetRequest {
    /// Convert into an unsaved planet, absent fields becoming empty
    pub fn into_planet(self) -> Planet {
        Planet::new(
            self.name.unwrap_or_default(),
            self.climate.unwrap_or_default(),
            self.terrain.unwrap_or_default(),
        )
    }
}

/// Query parameters of `GET /planets`
#[derive(Debug, Deserialize)]
pub struct ListPlanetsQuery {
    #[serde(default)]
    pub terrain: Option<String>,

    #[serde(default)]
    pub climate: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ==================
// Planet Routes
// ==================

/// Create the catalog routes
pub fn planet_routes<S: PlanetStore + 'static>(service: CatalogState<S>) -> Router {
    Router::new()
        .route("/planets", post(create_planet_handler))
        .route("/planets", get(list_planets_handler))
        .route("/planets/{id}", get(get_planet_handler))
        .route("/planets/{id}", delete(remove_planet_handler))
        .route("/planets/name/{name}", get(get_planet_by_name_handler))
        .with_state(service)
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

async fn create_planet_handler<S: PlanetStore + 'static>(
    State(service): State<CatalogState<S>>,
    Json(request): Json<CreatePlanetRequest>,
) -> ApiResult<(StatusCode, Json<Planet>)> {
    let created = service.create(request.into_planet())?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_planet_handler<S: PlanetStore + 'static>(
    State(service): State<CatalogState<S>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Planet>> {
    match service.get(id)? {
        Some(planet) => Ok(Json(planet)),
        None => Err(ApiError::NotFound(format!("no planet with id {id}"))),
    }
}

async fn get_planet_by_name_handler<S: PlanetStore + 'static>(
    State(service): State<CatalogState<S>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Planet>> {
    match service.get_by_name(&name)? {
        Some(planet) => Ok(Json(planet)),
        None => Err(ApiError::NotFound(format!("no planet named {name}"))),
    }
}

async fn list_planets_handler<S: PlanetStore + 'static>(
    State(service): State<CatalogState<S>>,
    Query(query): Query<ListPlanetsQuery>,
) -> ApiResult<Json<Vec<Planet>>> {
    let planets = service.list(query.terrain.as_deref(), query.climate.as_deref())?;

    Ok(Json(planets))
}

async fn remove_planet_handler<S: PlanetStore + 'static>(
    State(service): State<CatalogState<S>>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    service.remove(id)?;

    Ok(StatusCode::NO_CONTENT)
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
