//! # Planet Service
//!
//! Orchestration over the store: validity gating on create, filter
//! construction on list, error-kind translation everywhere. No storage
//! logic lives here, and there is deliberately no duplicate-name pre-check;
//! the store's unique constraint is the single authority, so a concurrent
//! duplicate create cannot race past a stale check.

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::filter::PlanetFilter;
use crate::domain::planet::Planet;
use crate::store::PlanetStore;

/// Catalog operations over an abstract store
pub struct PlanetService<S: PlanetStore> {
    store: S,
}

impl<S: PlanetStore> PlanetService<S> {
    /// Create a service over a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a planet
    ///
    /// Invalid input is rejected before the store is touched; a duplicate
    /// name surfaces as a conflict from the store itself.
    pub fn create(&self, planet: Planet) -> DomainResult<Planet> {
        if !planet.is_valid() {
            let empty = planet.empty_fields().join(", ");
            return Err(DomainError::Validation(format!(
                "required fields are empty: {empty}"
            )));
        }

        let created = self.store.insert(planet)?;
        info!(id = ?created.id, name = %created.name, "planet created");

        Ok(created)
    }

    /// Look up a planet by id; a miss is an empty result, not an error
    pub fn get(&self, id: i64) -> DomainResult<Option<Planet>> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Look up a planet by exact name; a miss is an empty result
    pub fn get_by_name(&self, name: &str) -> DomainResult<Option<Planet>> {
        Ok(self.store.find_by_name(name)?)
    }

    /// List planets matching the optional terrain and climate terms
    ///
    /// Both terms absent (or empty) lists the whole catalog in insertion
    /// order. No matches is an empty list, never an error.
    pub fn list(&self, terrain: Option<&str>, climate: Option<&str>) -> DomainResult<Vec<Planet>> {
        let filter = PlanetFilter::build(None, climate, terrain);
        Ok(self.store.find_matching(&filter)?)
    }

    /// Remove a planet by id
    ///
    /// The one read-miss that is an error: removing a planet that does not
    /// exist fails with `NotFound`.
    pub fn remove(&self, id: i64) -> DomainResult<()> {
        self.store.delete_by_id(id)?;
        info!(id, "planet removed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryPlanetStore;

    fn service() -> PlanetService<InMemoryPlanetStore> {
        PlanetService::new(InMemoryPlanetStore::new())
    }

    #[test]
    fn test_create_valid_planet() {
        let service = service();

        let created = service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.name, "Tatooine");
    }

    #[test]
    fn test_create_rejects_invalid_planet_before_store() {
        let service = service();

        let err = service.create(Planet::new("", "", "")).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("name, climate, terrain"));
        assert!(service.list(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_partially_empty_planet() {
        let service = service();

        let err = service
            .create(Planet::new("Tatooine", "", "desert"))
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::Validation("required fields are empty: climate".to_string())
        );
    }

    #[test]
    fn test_create_duplicate_name_conflicts() {
        let service = service();
        service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();

        let err = service
            .create(Planet::new("Tatooine", "frozen", "tundra"))
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));

        // The first record is untouched by the failed attempt.
        let kept = service.get_by_name("Tatooine").unwrap().unwrap();
        assert_eq!(kept.climate, "arid");
    }

    #[test]
    fn test_create_then_get_roundtrip() {
        let service = service();
        let created = service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();

        let fetched = service.get(created.id.unwrap()).unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[test]
    fn test_get_miss_is_none() {
        let service = service();

        assert_eq!(service.get(99).unwrap(), None);
    }

    #[test]
    fn test_get_by_name_miss_is_none() {
        let service = service();
        service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();

        assert_eq!(service.get_by_name("Hoth").unwrap(), None);
        assert_eq!(service.get_by_name("").unwrap(), None);
    }

    #[test]
    fn test_list_without_terms_returns_all() {
        let service = service();
        service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();
        service.create(Planet::new("Alderaan", "temperate", "grasslands")).unwrap();

        let all = service.list(None, None).unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Tatooine");
        assert_eq!(all[1].name, "Alderaan");
    }

    #[test]
    fn test_list_applies_both_terms() {
        let service = service();
        service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();
        service.create(Planet::new("Jakku", "arid", "desert, canyons")).unwrap();
        service.create(Planet::new("Hoth", "frozen", "tundra")).unwrap();

        let matches = service.list(Some("desert"), Some("arid")).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Tatooine");
    }

    #[test]
    fn test_list_empty_terms_equal_absent_terms() {
        let service = service();
        service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();

        let absent = service.list(None, None).unwrap();
        let empty = service.list(Some(""), Some("")).unwrap();

        assert_eq!(absent, empty);
    }

    #[test]
    fn test_list_no_match_is_empty() {
        let service = service();
        service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();

        let matches = service.list(Some("ocean"), None).unwrap();

        assert!(matches.is_empty());
    }

    #[test]
    fn test_remove_then_gone() {
        let service = service();
        let created = service.create(Planet::new("Tatooine", "arid", "desert")).unwrap();
        let id = created.id.unwrap();

        service.remove(id).unwrap();

        assert_eq!(service.get(id).unwrap(), None);
        assert!(service.list(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let service = service();

        let err = service.remove(99).unwrap_err();

        assert_eq!(err, DomainError::NotFound(99));
    }
}
