//! # Planet Store Module
//!
//! Abstract persistence for the catalog plus the in-memory backend.
//! Constraints (unique name, non-empty fields) are enforced here and
//! nowhere else; callers never pre-check.

pub mod errors;
pub mod memory;
pub mod seed;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryPlanetStore;

use crate::domain::filter::PlanetFilter;
use crate::domain::planet::Planet;

/// Persistence seam for planet records
pub trait PlanetStore: Send + Sync {
    /// Insert a planet, assigning its id
    ///
    /// The constraint checks and the write are one atomic step; under
    /// concurrent duplicate inserts exactly one caller succeeds. Any id
    /// already set on the input is replaced by the assigned one.
    fn insert(&self, planet: Planet) -> StoreResult<Planet>;

    /// Look up a planet by id
    fn find_by_id(&self, id: i64) -> StoreResult<Option<Planet>>;

    /// Look up a planet by exact name
    fn find_by_name(&self, name: &str) -> StoreResult<Option<Planet>>;

    /// All planets matching the filter, id-ascending
    fn find_matching(&self, filter: &PlanetFilter) -> StoreResult<Vec<Planet>>;

    /// Delete a planet by id, failing when it does not exist
    fn delete_by_id(&self, id: i64) -> StoreResult<()>;
}
