// Gene-Protein-Reaction (GPR) Association Compiler
//
// Curators record which gene products catalyze a reaction as a boolean
// expression over gene identifiers, e.g. "(acn-1 and gpd-2) or gpd-3".
// This module compiles that text into a canonical logical tree and
// serializes the tree into the nested group structure the model document
// uses for gene-product associations.
//
// Pipeline: tokenize (parenthesis nesting) -> normalize (canonical
// AND/OR/Leaf tree) -> serialize (host document structure).
//
// Parsing is recursive at arbitrary depth and never mutates its input;
// the token sequence is discarded after normalization.

pub mod models;
pub mod parser;
pub mod serializer;

// Re-export main types
pub use models::{
    AssociationElement, GeneProductAssociation, LogicalNode, Token, GENE_PRODUCT_PREFIX,
    SBO_LOGICAL_AND, SBO_LOGICAL_OR,
};
pub use parser::{GprCompiler, Normalizer, Tokenizer};
pub use serializer::AssociationSerializer;

/// Result type for GPR operations
pub type Result<T> = std::result::Result<T, GprError>;

/// Error types for GPR compilation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GprError {
    #[error("unbalanced parentheses in gene association: {expr}")]
    UnbalancedParentheses { expr: String },

    #[error("ambiguous gene association, unparenthesized 'and'/'or' mix: {level}")]
    AmbiguousOperators { level: String },

    #[error("missing operator between terms in gene association: {level}")]
    MissingOperator { level: String },

    #[error("operator without operands in gene association: {level}")]
    DanglingOperator { level: String },

    #[error("empty group in gene association")]
    EmptyGroup,
}
