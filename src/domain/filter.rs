//! # Planet Filter
//!
//! Predicate construction for catalog searches. Every search term is an
//! exact, case-sensitive equality clause; clauses combine with AND. Terms
//! that are absent or empty add no clause, so a filter built from nothing
//! matches every record.

use crate::domain::planet::{Planet, PlanetExample};

/// Fields a filter may constrain
///
/// The id is deliberately not representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetField {
    /// Planet name
    Name,

    /// Climate description
    Climate,

    /// Terrain description
    Terrain,
}

impl PlanetField {
    /// Get the field name as used in the wire shape
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetField::Name => "name",
            PlanetField::Climate => "climate",
            PlanetField::Terrain => "terrain",
        }
    }
}

/// A single exact-equality clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Field to compare
    pub field: PlanetField,

    /// Expected value, matched literally
    pub value: String,
}

impl FieldMatch {
    /// Create a new equality clause
    pub fn new(field: PlanetField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Check if a planet satisfies this clause
    pub fn matches(&self, planet: &Planet) -> bool {
        let actual = match self.field {
            PlanetField::Name => &planet.name,
            PlanetField::Climate => &planet.climate,
            PlanetField::Terrain => &planet.terrain,
        };

        actual == &self.value
    }
}

/// A set of clauses combined with AND logic
///
/// An empty set matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    clauses: Vec<FieldMatch>,
}

impl PlanetFilter {
    /// Create an unconstrained filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause
    pub fn and(mut self, field: PlanetField, value: impl Into<String>) -> Self {
        self.clauses.push(FieldMatch::new(field, value));
        self
    }

    /// Build a filter from optional search terms
    ///
    /// Each field gets its own branch: a term that is `None` or empty
    /// constrains nothing, anything else becomes an exact-equality clause.
    pub fn build(name: Option<&str>, climate: Option<&str>, terrain: Option<&str>) -> Self {
        let mut filter = PlanetFilter::new();

        if let Some(name) = constraint(name) {
            filter = filter.and(PlanetField::Name, name);
        }
        if let Some(climate) = constraint(climate) {
            filter = filter.and(PlanetField::Climate, climate);
        }
        if let Some(terrain) = constraint(terrain) {
            filter = filter.and(PlanetField::Terrain, terrain);
        }

        filter
    }

    /// Build a filter from a criteria value
    ///
    /// Produces the same predicate as [`PlanetFilter::build`] given the
    /// same terms.
    pub fn from_example(example: &PlanetExample) -> Self {
        Self::build(
            example.name.as_deref(),
            example.climate.as_deref(),
            example.terrain.as_deref(),
        )
    }

    /// Check if a planet matches all clauses
    pub fn matches(&self, planet: &Planet) -> bool {
        self.clauses.iter().all(|clause| clause.matches(planet))
    }

    /// True when no clause constrains the search
    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clauses in application order
    pub fn clauses(&self) -> &[FieldMatch] {
        &self.clauses
    }
}

/// Empty strings and absent terms both mean "no constraint"
fn constraint(term: Option<&str>) -> Option<&str> {
    term.filter(|value| !value.is_empty())
}
