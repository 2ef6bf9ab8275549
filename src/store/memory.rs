//! # In-Memory Planet Store
//!
//! The default backend: rows in a `BTreeMap` keyed by id (scans come back
//! id-ascending, which is insertion order) with a unique name index.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::domain::filter::{PlanetField, PlanetFilter};
use crate::domain::planet::Planet;

use super::errors::{StoreError, StoreResult};
use super::PlanetStore;

/// In-memory planet store
pub struct InMemoryPlanetStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    /// Rows keyed by id
    rows: BTreeMap<i64, Planet>,

    /// Unique index: name to id
    names: HashMap<String, i64>,

    /// Next id to assign, starting at 1
    next_id: i64,
}

impl InMemoryPlanetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                rows: BTreeMap::new(),
                names: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPlanetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanetStore for InMemoryPlanetStore {
    fn insert(&self, mut planet: Planet) -> StoreResult<Planet> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        // Constraint checks and the write happen under one lock, so a
        // concurrent duplicate insert cannot slip between them.
        if let Some(&field) = planet.empty_fields().first() {
            return Err(StoreError::ConstraintViolation(field));
        }
        if inner.names.contains_key(&planet.name) {
            return Err(StoreError::unique_violation(
                PlanetField::Name.as_str(),
                &planet.name,
            ));
        }

        let id = inner.next_id;
        inner.next_id += 1;
        planet.id = Some(id);

        inner.names.insert(planet.name.clone(), id);
        inner.rows.insert(id, planet.clone());

        Ok(planet)
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Option<Planet>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        Ok(inner.rows.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Planet>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        // The empty string is never indexed, so "" misses without a
        // special case.
        let planet = inner
            .names
            .get(name)
            .and_then(|id| inner.rows.get(id))
            .cloned();

        Ok(planet)
    }

    fn find_matching(&self, filter: &PlanetFilter) -> StoreResult<Vec<Planet>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        let matches = inner
            .rows
            .values()
            .filter(|planet| filter.matches(planet))
            .cloned()
            .collect();

        Ok(matches)
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;

        match inner.rows.remove(&id) {
            Some(planet) => {
                inner.names.remove(&planet.name);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}
