// Reaction Formula Parser
//
// Curators write reaction equations as free text,
// "GLC + ATP <=> G6P + ADP", with optional leading coefficients on each
// term. This module parses one equation into typed reactant/product
// coefficient maps for the document assembler's species references.

pub mod models;
pub mod parser;

// Re-export main types
pub use models::{ParsedReaction, StoichiometryMap};
pub use parser::{FormulaParser, FORMULA_SEPARATOR};

/// Result type for formula operations
pub type Result<T> = std::result::Result<T, FormulaError>;

/// Error types for formula parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormulaError {
    #[error("reaction formula has no '<=>' separator: {0}")]
    MissingSeparator(String),

    #[error("reaction formula has more than one '<=>' separator: {0}")]
    ExtraSeparator(String),
}
