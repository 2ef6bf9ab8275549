//! # Planet Entity
//!
//! The catalog record and the criteria value used for example-based lookups.

use serde::{Deserialize, Serialize};

/// A planet record
///
/// Records are immutable once created; the only mutation the catalog
/// supports is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Identifier assigned by the store; absent until persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Display name, unique across the catalog
    pub name: String,

    /// Climate description
    pub climate: String,

    /// Terrain description
    pub terrain: String,
}

impl Planet {
    /// Create an unsaved planet (no id yet)
    pub fn new(name: impl Into<String>, climate: impl Into<String>, terrain: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }

    /// Check that every required field is non-empty
    pub fn is_valid(&self) -> bool {
        self.empty_fields().is_empty()
    }

    /// Names of the required fields that are empty
    pub fn empty_fields(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.name.is_empty() {
            empty.push("name");
        }
        if self.climate.is_empty() {
            empty.push("climate");
        }
        if self.terrain.is_empty() {
            empty.push("terrain");
        }
        empty
    }
}

/// Search criteria for example-based lookups
///
/// Carries only the fields a caller may constrain; the id is structurally
/// absent and can never participate in matching. An unset or empty field
/// constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetExample {
    /// Name term, exact match when set
    pub name: Option<String>,

    /// Climate term, exact match when set
    pub climate: Option<String>,

    /// Terrain term, exact match when set
    pub terrain: Option<String>,
}

impl PlanetExample {
    /// Create criteria from climate and terrain terms only
    pub fn of(climate: Option<String>, terrain: Option<String>) -> Self {
        Self {
            name: None,
            climate,
            terrain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_planet_has_no_id() {
        let planet = Planet::new("Tatooine", "arid", "desert");

        assert_eq!(planet.id, None);
        assert_eq!(planet.name, "Tatooine");
        assert_eq!(planet.climate, "arid");
        assert_eq!(planet.terrain, "desert");
    }

    #[test]
    fn test_valid_planet() {
        let planet = Planet::new("Tatooine", "arid", "desert");

        assert!(planet.is_valid());
        assert!(planet.empty_fields().is_empty());
    }

    #[test]
    fn test_all_empty_fields_invalid() {
        let planet = Planet::new("", "", "");

        assert!(!planet.is_valid());
        assert_eq!(planet.empty_fields(), vec!["name", "climate", "terrain"]);
    }

    #[test]
    fn test_single_empty_field_invalid() {
        let planet = Planet::new("Tatooine", "", "desert");

        assert!(!planet.is_valid());
        assert_eq!(planet.empty_fields(), vec!["climate"]);
    }

    #[test]
    fn test_whitespace_counts_as_non_empty() {
        let planet = Planet::new(" ", "arid", "desert");

        assert!(planet.is_valid());
    }

    #[test]
    fn test_serialize_skips_unset_id() {
        let planet = Planet::new("Tatooine", "arid", "desert");
        let json = serde_json::to_value(&planet).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Tatooine");
    }

    #[test]
    fn test_serialize_includes_assigned_id() {
        let mut planet = Planet::new("Tatooine", "arid", "desert");
        planet.id = Some(1);
        let json = serde_json::to_value(&planet).unwrap();

        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_deserialize_without_id() {
        let planet: Planet =
            serde_json::from_str(r#"{"name":"Tatooine","climate":"arid","terrain":"desert"}"#)
                .unwrap();

        assert_eq!(planet.id, None);
        assert_eq!(planet.name, "Tatooine");
    }

    #[test]
    fn test_example_of_sets_no_name() {
        let example = PlanetExample::of(Some("arid".to_string()), Some("desert".to_string()));

        assert_eq!(example.name, None);
        assert_eq!(example.climate.as_deref(), Some("arid"));
        assert_eq!(example.terrain.as_deref(), Some("desert"));
    }
}
