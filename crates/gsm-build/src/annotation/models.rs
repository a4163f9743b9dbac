// Annotation Data Models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback URI prefix for databases absent from the reference table
pub const IDENTIFIERS_ORG_BASE: &str = "https://identifiers.org/";

// ============================================================================
// Relation Kind
// ============================================================================

/// How an entity relates to a referenced external concept: the entity
/// *is* the concept, or merely *occurs within* it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Relation {
    #[default]
    Is,
    IsPartOf,
}

impl Relation {
    /// Parse the curated classification vocabulary ("Is" / "In")
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim() {
            "Is" | "is" => Ok(Relation::Is),
            "In" | "in" | "IsPartOf" | "isPartOf" => Ok(Relation::IsPartOf),
            _ => Err(format!("Unknown relation kind: {}", s)),
        }
    }

    /// Biology-qualifier name used by the document assembler
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Is => "is",
            Relation::IsPartOf => "isPartOf",
        }
    }
}

// ============================================================================
// Reference Table
// ============================================================================

/// One reference-database row: the canonical URI prefix and the relation
/// kind its identifiers carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub uri_prefix: String,
    pub relation: Relation,
}

/// The read-only reference-database table, keyed by database name.
///
/// Supplied once per build and shared by every record; lookups never
/// fail, they fall back to identifiers.org and `Is`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    entries: HashMap<String, ReferenceEntry>,
}

impl ReferenceTable {
    /// Empty table: every lookup resolves through the fallback
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (database name, entry) pairs
    pub fn from_entries(entries: impl IntoIterator<Item = (String, ReferenceEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Insert or replace one database row
    pub fn insert(&mut self, database: impl Into<String>, entry: ReferenceEntry) {
        self.entries.insert(database.into(), entry);
    }

    /// Number of databases in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a database name to its URI prefix and relation kind,
    /// falling back permissively for unknown databases.
    pub fn resolve(&self, database: &str) -> (String, Relation) {
        match self.entries.get(database) {
            Some(entry) => (entry.uri_prefix.clone(), entry.relation),
            None => (
                format!("{}{}", IDENTIFIERS_ORG_BASE, database),
                Relation::Is,
            ),
        }
    }
}

// ============================================================================
// Annotation Groups
// ============================================================================

/// Resolved resource URIs for one record, grouped by relation kind.
///
/// Order within each group follows the record's column order and the
/// source order of the `|`-delimited identifier lists. Either group may
/// be empty; an empty group produces no container downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationGroups {
    pub is: Vec<String>,
    pub is_part_of: Vec<String>,
}

impl AnnotationGroups {
    /// Append a resource URI to the group for `relation`
    pub fn push(&mut self, relation: Relation, uri: String) {
        match relation {
            Relation::Is => self.is.push(uri),
            Relation::IsPartOf => self.is_part_of.push(uri),
        }
    }

    /// Whether both groups are empty
    pub fn is_empty(&self) -> bool {
        self.is.is_empty() && self.is_part_of.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
