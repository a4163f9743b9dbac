// Model Builder
//
// The per-record driver: one curated reaction record in, one explicit
// result out. Holds the build settings and the shared read-only
// reference table; carries no other state, so records may be processed
// in any order (or in parallel by the host).

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::annotation::{AnnotationResolver, ReferenceTable};
use crate::config::BuildSettings;
use crate::formula::FormulaParser;
use crate::gpr::{AssociationSerializer, GeneProductAssociation, GprCompiler};

use super::models::{ReactionBuild, ReactionRecord};
use super::{RecordError, Result};

/// Builder turning reaction records into model structures
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    references: ReferenceTable,
}

impl ModelBuilder {
    /// Builder with default settings
    pub fn new(references: ReferenceTable) -> Self {
        Self::with_settings(BuildSettings::default(), references)
    }

    /// Builder with explicit settings.
    ///
    /// With the reference table disabled every database resolves through
    /// the permissive fallback, exactly as if the table were empty.
    pub fn with_settings(settings: BuildSettings, references: ReferenceTable) -> Self {
        let references = if settings.reference_table_enabled {
            references
        } else {
            ReferenceTable::new()
        };
        Self { references }
    }

    /// The reference table the builder resolves against
    pub fn references(&self) -> &ReferenceTable {
        &self.references
    }

    /// Compile and serialize one record's gene association, binding any
    /// failure to the record.
    ///
    /// Hosts that want malformed associations to abort the build call
    /// this directly; `build_reaction` applies the skip policy instead.
    pub fn compile_association(
        record: &ReactionRecord,
    ) -> Result<Option<GeneProductAssociation>> {
        let tree = GprCompiler::compile(record.gene_association()).map_err(|source| {
            RecordError::GeneAssociation {
                record_id: record.id().to_string(),
                raw: record.gene_association().to_string(),
                source,
            }
        })?;
        Ok(AssociationSerializer::serialize(tree.as_ref()))
    }

    /// Build one reaction record.
    ///
    /// A malformed gene association is logged and skipped (the build
    /// succeeds without an association node); a malformed formula fails
    /// the record.
    pub fn build_reaction(&self, record: &ReactionRecord) -> Result<ReactionBuild> {
        let association = match Self::compile_association(record) {
            Ok(association) => association,
            Err(error) => {
                warn!(record = %record.id(), %error, "Skipping malformed gene association");
                None
            },
        };

        let annotations = AnnotationResolver::resolve(record.record(), &self.references);

        let reaction =
            FormulaParser::parse(record.formula()).map_err(|source| RecordError::Formula {
                record_id: record.id().to_string(),
                raw: record.formula().to_string(),
                source,
            })?;

        Ok(ReactionBuild {
            id: record.id().to_string(),
            name: record.name().to_string(),
            reversible: record.is_reversible(),
            association,
            annotations,
            reaction,
        })
    }

    /// Build every record, surfacing one result per record.
    ///
    /// Failures never block the remaining records; skip-vs-abort stays
    /// with the caller.
    pub fn build_reactions(&self, records: &[ReactionRecord]) -> Vec<Result<ReactionBuild>> {
        let results: Vec<Result<ReactionBuild>> = records
            .iter()
            .map(|record| self.build_reaction(record))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        debug!(
            records = records.len(),
            failed, "Built reaction records"
        );
        results
    }
}

/// The distinct gene identifiers referenced by any record's association.
///
/// Used downstream to filter the gene-product listing to genes that
/// actually regulate a reaction. Malformed associations contribute
/// nothing; they are reported when the record itself is built.
pub fn active_genes(records: &[ReactionRecord]) -> BTreeSet<String> {
    let mut genes = BTreeSet::new();
    for record in records {
        if let Ok(Some(tree)) = GprCompiler::compile(record.gene_association()) {
            genes.extend(tree.gene_ids().into_iter().map(String::from));
        }
    }
    debug!(genes = genes.len(), "Collected active gene set");
    genes
}

// ============================================================================
// Tests
// ============================================================================
