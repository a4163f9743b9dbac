// GPR Data Models

use serde::{Deserialize, Serialize};

/// SBO term carried on serialized AND groups
pub const SBO_LOGICAL_AND: &str = "SBO:0000173";

/// SBO term carried on serialized OR groups
pub const SBO_LOGICAL_OR: &str = "SBO:0000174";

/// Prefix turning a curated gene identifier into a gene-product reference id
pub const GENE_PRODUCT_PREFIX: &str = "G_";

// ============================================================================
// Tokens
// ============================================================================

/// One element of the tokenized association expression.
///
/// Mirrors the parenthesis structure of the source text exactly; operator
/// keywords are ordinary `Ident` tokens until normalization classifies
/// them. Discarded once the logical tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A whitespace-delimited word (gene identifier or operator keyword)
    Ident(String),
    /// A parenthesized subsequence
    Group(Vec<Token>),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Ident(word) => write!(f, "{}", word),
            Token::Group(inner) => {
                write!(f, "(")?;
                for (i, token) in inner.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", token)?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Render a token level for diagnostics, e.g. "g1 and (g2 or g3)"
pub(crate) fn render_level(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Logical Tree
// ============================================================================

/// A canonical gene-association tree.
///
/// `And`/`Or` nodes always have at least one child, and single-child
/// groups collapse to the child during normalization, so degenerate unary
/// operators cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalNode {
    /// A single gene identifier
    Leaf(String),
    /// Conjunction: every child association is required
    And(Vec<LogicalNode>),
    /// Disjunction: any child association suffices
    Or(Vec<LogicalNode>),
}

impl LogicalNode {
    /// Collect every gene identifier in the tree, in encounter order.
    ///
    /// Duplicates are kept; callers wanting the distinct active-gene set
    /// collect into a set.
    pub fn gene_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_gene_ids(&mut ids);
        ids
    }

    fn collect_gene_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        match self {
            LogicalNode::Leaf(id) => ids.push(id.as_str()),
            LogicalNode::And(children) | LogicalNode::Or(children) => {
                for child in children {
                    child.collect_gene_ids(ids);
                }
            },
        }
    }
}

// ============================================================================
// Host Document Structure
// ============================================================================

/// The gene-product-association group structure handed to the document
/// assembler. Wraps the serialized root element of one reaction's GPR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneProductAssociation {
    pub root: AssociationElement,
}

/// One node of the serialized association structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssociationElement {
    /// Reference to a gene product, e.g. "G_gpd-2"
    GeneProductRef { gene_product: String },
    /// Conjunction group
    And { children: Vec<AssociationElement> },
    /// Disjunction group
    Or { children: Vec<AssociationElement> },
}

impl AssociationElement {
    /// The SBO qualifier the document assembler attaches to boolean
    /// groups; gene-product references carry none.
    pub fn sbo_term(&self) -> Option<&'static str> {
        match self {
            AssociationElement::GeneProductRef { .. } => None,
            AssociationElement::And { .. } => Some(SBO_LOGICAL_AND),
            AssociationElement::Or { .. } => Some(SBO_LOGICAL_OR),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
