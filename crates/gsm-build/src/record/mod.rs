// Per-Record Build Driver
//
// Ties the three kernel components together over one curated reaction
// record and surfaces an explicit per-record result, so the host build
// driver decides skip-vs-abort instead of the kernel.
//
// Policy per failure kind:
// - malformed gene association: record-scoped; logged with the record id
//   and raw expression, the record builds without an association node
// - malformed reaction formula: fatal for the record; returned as a
//   `RecordError` carrying the record id and raw text

pub mod builder;
pub mod models;

// Re-export main types
pub use builder::{active_genes, ModelBuilder};
pub use models::{
    ReactionBuild, ReactionRecord, FIELD_GENE_ASSOCIATION, FIELD_IS_REVERSIBLE, FIELD_NAME,
    FIELD_PATHWAY, FIELD_REACTION_FORMULA,
};

use crate::formula::FormulaError;
use crate::gpr::GprError;

/// Result type for per-record operations
pub type Result<T> = std::result::Result<T, RecordError>;

/// A component failure bound to the record it occurred in.
///
/// Always carries the record id and the raw offending text, so every
/// per-record failure is individually diagnosable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("reaction {record_id}: gene association \"{raw}\": {source}")]
    GeneAssociation {
        record_id: String,
        raw: String,
        #[source]
        source: GprError,
    },

    #[error("reaction {record_id}: reaction formula \"{raw}\": {source}")]
    Formula {
        record_id: String,
        raw: String,
        #[source]
        source: FormulaError,
    },
}

impl RecordError {
    /// The id of the record the failure belongs to
    pub fn record_id(&self) -> &str {
        match self {
            RecordError::GeneAssociation { record_id, .. } => record_id,
            RecordError::Formula { record_id, .. } => record_id,
        }
    }
}
