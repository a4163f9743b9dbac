// Reaction Record Models

use gsm_common::types::CurationRecord;
use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationGroups;
use crate::formula::ParsedReaction;
use crate::gpr::GeneProductAssociation;

/// Required reaction-table columns
pub const FIELD_GENE_ASSOCIATION: &str = "GeneAssociation";
pub const FIELD_REACTION_FORMULA: &str = "ReactionFormula";
pub const FIELD_IS_REVERSIBLE: &str = "IsReversible";
pub const FIELD_NAME: &str = "Name";

/// Optional reaction-table columns
pub const FIELD_PATHWAY: &str = "Pathway";

// ============================================================================
// Reaction Record
// ============================================================================

/// Typed view over one curated reaction row.
///
/// Missing columns read as empty; downstream parsing decides what empty
/// means (no association, malformed formula, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    record: CurationRecord,
}

impl ReactionRecord {
    pub fn new(record: CurationRecord) -> Self {
        Self { record }
    }

    /// The reaction id
    pub fn id(&self) -> &str {
        self.record.id()
    }

    /// Raw gene-association expression
    pub fn gene_association(&self) -> &str {
        self.record.get_or_empty(FIELD_GENE_ASSOCIATION)
    }

    /// Raw reaction-formula text
    pub fn formula(&self) -> &str {
        self.record.get_or_empty(FIELD_REACTION_FORMULA)
    }

    /// Curated reversibility flag; anything but case-insensitive "true"
    /// reads as irreversible
    pub fn is_reversible(&self) -> bool {
        self.record
            .get_or_empty(FIELD_IS_REVERSIBLE)
            .eq_ignore_ascii_case("true")
    }

    /// Display name of the reaction
    pub fn name(&self) -> &str {
        self.record.get_or_empty(FIELD_NAME)
    }

    /// Pathway the reaction belongs to, if curated
    pub fn pathway(&self) -> Option<&str> {
        self.record.get(FIELD_PATHWAY).filter(|p| !p.is_empty())
    }

    /// The underlying curation record (for annotation resolution and
    /// notes assembly)
    pub fn record(&self) -> &CurationRecord {
        &self.record
    }
}

// ============================================================================
// Reaction Build Output
// ============================================================================

/// Everything the kernel derives from one reaction record, handed to the
/// document assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionBuild {
    /// Reaction id, unchanged from the record
    pub id: String,

    /// Display name
    pub name: String,

    /// Whether the reaction runs both ways (selects the lower flux bound)
    pub reversible: bool,

    /// Serialized gene-product association, absent when the record has
    /// none (or its association was skipped as malformed)
    pub association: Option<GeneProductAssociation>,

    /// Resolved cross-reference annotation groups
    pub annotations: AnnotationGroups,

    /// Parsed reactant/product coefficient maps
    pub reaction: ParsedReaction,
}

// ============================================================================
// Tests
// ============================================================================
