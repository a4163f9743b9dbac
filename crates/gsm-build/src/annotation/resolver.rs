// Annotation Resolver

use gsm_common::types::CurationRecord;

use super::models::{AnnotationGroups, ReferenceTable};

/// Column-name prefix marking a cross-reference identifier field
pub const IDENTIFIER_FIELD_PREFIX: &str = "Identifiers:";

/// Resolver from curated identifier fields to relation-typed URI groups
pub struct AnnotationResolver;

impl AnnotationResolver {
    /// Resolve every non-empty `Identifiers:<db>` field of a record.
    ///
    /// Field values are `|`-delimited identifier lists; each identifier
    /// becomes `uri_prefix + ":" + identifier` in the group chosen by the
    /// database's relation kind. Databases missing from the table resolve
    /// through the permissive identifiers.org fallback.
    pub fn resolve(record: &CurationRecord, table: &ReferenceTable) -> AnnotationGroups {
        let mut groups = AnnotationGroups::default();

        for (column, value) in record.fields() {
            let Some(database) = column.strip_prefix(IDENTIFIER_FIELD_PREFIX) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            let (uri_prefix, relation) = table.resolve(database);
            for identifier in value.split('|') {
                groups.push(relation, format!("{}:{}", uri_prefix, identifier));
            }
        }

        groups
    }
}

// ============================================================================
// Tests
// ============================================================================
