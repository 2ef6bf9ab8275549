//! # Seed Catalog
//!
//! The classic starter records, loaded by `serve --seed` and reused by the
//! integration suites.

use crate::domain::planet::Planet;

use super::errors::StoreResult;
use super::PlanetStore;

/// The starter records, unsaved and in insertion order
pub fn starter_catalog() -> Vec<Planet> {
    vec![
        Planet::new("Tatooine", "arid", "desert"),
        Planet::new("Alderaan", "temperate", "grasslands, mountains"),
        Planet::new("Yavin IV", "temperate, tropical", "jungle, rainforests"),
    ]
}

/// Insert the starter catalog into a store, returning the count
pub fn seed<S: PlanetStore>(store: &S) -> StoreResult<usize> {
    let planets = starter_catalog();
    let count = planets.len();

    for planet in planets {
        store.insert(planet)?;
    }

    Ok(count)
}
