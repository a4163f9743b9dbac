// Formula Data Models

use serde::{Deserialize, Serialize};

// ============================================================================
// Stoichiometry Map
// ============================================================================

/// Species -> coefficient mapping for one side of a reaction.
///
/// Keys are unique; inserting an existing species overwrites its
/// coefficient in place (last write wins, first position kept), matching
/// how curated duplicates have always been folded. Insertion order is
/// preserved so downstream species references come out source-ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoichiometryMap(Vec<(String, String)>);

impl StoichiometryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a (species, coefficient) pair, overwriting any existing
    /// coefficient for the species
    pub fn insert(&mut self, species: String, coefficient: String) {
        match self.0.iter_mut().find(|(existing, _)| *existing == species) {
            Some((_, value)) => *value = coefficient,
            None => self.0.push((species, coefficient)),
        }
    }

    /// Look up the coefficient for a species
    pub fn get(&self, species: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == species)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the species appears on this side
    pub fn contains(&self, species: &str) -> bool {
        self.get(species).is_some()
    }

    /// Iterate over (species, coefficient) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    /// Number of species on this side
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this side has no species
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Parsed Reaction
// ============================================================================

/// A parsed reaction equation: both sides as coefficient maps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReaction {
    pub reactants: StoichiometryMap,
    pub products: StoichiometryMap,
}

// ============================================================================
// Tests
// ============================================================================
