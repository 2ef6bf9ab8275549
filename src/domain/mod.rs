//! # Catalog Domain Module
//!
//! The planet entity, the filter builder, and the record service.
//! Everything here is pure or store-delegating; no transport concerns.

pub mod errors;
pub mod filter;
pub mod planet;
pub mod service;

pub use errors::{DomainError, DomainResult};
pub use filter::{FieldMatch, PlanetField, PlanetFilter};
pub use planet::{Planet, PlanetExample};
pub use service::PlanetService;
