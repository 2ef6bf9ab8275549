//! Shared fixtures for the integration suites.

use planet_api::domain::Planet;
use planet_api::store::{seed, InMemoryPlanetStore};

/// A store preloaded with the starter catalog (Tatooine, Alderaan, Yavin IV)
pub fn seeded_store() -> InMemoryPlanetStore {
    let store = InMemoryPlanetStore::new();
    seed::seed(&store).unwrap();
    store
}

/// The first starter record, unsaved
pub fn tatooine() -> Planet {
    Planet::new("Tatooine", "arid", "desert")
}
