//! GSM Build Library
//!
//! The transformation kernel of the GSM build pipeline: turns curated,
//! spreadsheet-style reaction records into the logical and numeric
//! structures a systems-biology model document is assembled from.
//!
//! # Components
//!
//! - **gpr**: compiles gene-association text (`"(g1 and g2) or g3"`) into a
//!   canonical AND/OR tree and serializes it into the host document's
//!   nested gene-product-association structure
//! - **annotation**: classifies `Identifiers:<db>` fields against a
//!   reference-database table and groups resource URIs by relation kind
//! - **formula**: parses stoichiometric equations (`"A + 2 B <=> C"`) into
//!   reactant/product coefficient maps
//! - **record**: the per-record driver tying the three together, with
//!   explicit per-record results
//!
//! Table loading, document assembly, and build notifications live in the
//! surrounding pipeline; this crate only transforms one record at a time.
//!
//! # Example
//!
//! ```
//! use gsm_build::gpr::GprCompiler;
//! use gsm_build::formula::FormulaParser;
//!
//! let tree = GprCompiler::compile("(g1 and g2) or g3").unwrap();
//! assert!(tree.is_some());
//!
//! let reaction = FormulaParser::parse("A + 2 B <=> C").unwrap();
//! assert_eq!(reaction.reactants.get("B"), Some("2.0"));
//! ```

pub mod annotation;
pub mod config;
pub mod formula;
pub mod gpr;
pub mod record;

// Re-export the driver surface
pub use config::BuildSettings;
pub use record::{active_genes, ModelBuilder, ReactionBuild, ReactionRecord, RecordError};
