// Cross-Reference Annotation Resolver
//
// Curators attach external-database identifiers to every kind of record
// (genes, compounds, pathways, reactions) through columns named
// "Identifiers:<db>". This module classifies those fields against the
// reference-database table and groups the resulting resource URIs by
// relation kind, ready for the document assembler's annotation bags.
//
// Resolution is deliberately permissive: a database missing from the
// reference table falls back to an identifiers.org prefix and the Is
// relation, so unknown databases never fail a build.

pub mod models;
pub mod resolver;

// Re-export main types
pub use models::{
    AnnotationGroups, ReferenceEntry, ReferenceTable, Relation, IDENTIFIERS_ORG_BASE,
};
pub use resolver::{AnnotationResolver, IDENTIFIER_FIELD_PREFIX};
