// GPR Tree Serializer
//
// Renders a canonical logical tree into the nested gene-product
// association structure the document assembler consumes. Purely
// structural: the tree is walked as-is, never re-derived or re-balanced.

use super::models::{
    AssociationElement, GeneProductAssociation, LogicalNode, GENE_PRODUCT_PREFIX,
};

/// Serializer from logical trees to host document structures
pub struct AssociationSerializer;

impl AssociationSerializer {
    /// Serialize a normalized association.
    ///
    /// An absent association produces no node at all.
    pub fn serialize(node: Option<&LogicalNode>) -> Option<GeneProductAssociation> {
        node.map(|root| GeneProductAssociation {
            root: Self::element(root),
        })
    }

    fn element(node: &LogicalNode) -> AssociationElement {
        match node {
            LogicalNode::Leaf(id) => AssociationElement::GeneProductRef {
                gene_product: format!("{}{}", GENE_PRODUCT_PREFIX, id),
            },
            LogicalNode::And(children) => AssociationElement::And {
                children: children.iter().map(Self::element).collect(),
            },
            LogicalNode::Or(children) => AssociationElement::Or {
                children: children.iter().map(Self::element).collect(),
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
