//! Integration tests for the GPR association compiler

use gsm_build::gpr::{
    AssociationElement, AssociationSerializer, GprCompiler, GprError, LogicalNode,
    SBO_LOGICAL_AND, SBO_LOGICAL_OR,
};

fn leaf(id: &str) -> LogicalNode {
    LogicalNode::Leaf(id.to_string())
}

fn gene_ref(id: &str) -> AssociationElement {
    AssociationElement::GeneProductRef {
        gene_product: format!("G_{}", id),
    }
}

#[test]
fn test_single_identifier_compiles_to_leaf() {
    assert_eq!(GprCompiler::compile("gpd-2").unwrap(), Some(leaf("gpd-2")));
}

#[test]
fn test_flat_and_chain_preserves_order() {
    assert_eq!(
        GprCompiler::compile("g1 and g2 and g3").unwrap(),
        Some(LogicalNode::And(vec![leaf("g1"), leaf("g2"), leaf("g3")]))
    );
}

#[test]
fn test_flat_or_chain() {
    assert_eq!(
        GprCompiler::compile("g1 or g2").unwrap(),
        Some(LogicalNode::Or(vec![leaf("g1"), leaf("g2")]))
    );
}

#[test]
fn test_nested_two_level_expression() {
    assert_eq!(
        GprCompiler::compile("(g1 and g2) or (g3 and g4)").unwrap(),
        Some(LogicalNode::Or(vec![
            LogicalNode::And(vec![leaf("g1"), leaf("g2")]),
            LogicalNode::And(vec![leaf("g3"), leaf("g4")]),
        ]))
    );
}

#[test]
fn test_empty_expression_is_absent() {
    assert_eq!(GprCompiler::compile("").unwrap(), None);
    assert_eq!(GprCompiler::compile("()").unwrap(), None);
    assert_eq!(
        AssociationSerializer::serialize(GprCompiler::compile("").unwrap().as_ref()),
        None
    );
}

#[test]
fn test_ambiguous_mixed_operators_rejected() {
    assert!(matches!(
        GprCompiler::compile("g1 and g2 or g3"),
        Err(GprError::AmbiguousOperators { .. })
    ));
}

#[test]
fn test_unbalanced_parentheses_rejected() {
    assert!(matches!(
        GprCompiler::compile("((g1 and g2) or g3"),
        Err(GprError::UnbalancedParentheses { .. })
    ));
}

#[test]
fn test_serializer_prefixes_and_qualifies() {
    let tree = GprCompiler::compile("(g1 and g2) or g3").unwrap();
    let gpa = AssociationSerializer::serialize(tree.as_ref()).unwrap();

    let AssociationElement::Or { children } = &gpa.root else {
        panic!("expected an Or group at the root");
    };
    assert_eq!(gpa.root.sbo_term(), Some(SBO_LOGICAL_OR));
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].sbo_term(), Some(SBO_LOGICAL_AND));
    assert_eq!(children[1], gene_ref("g3"));

    let AssociationElement::And { children: inner } = &children[0] else {
        panic!("expected an And group first");
    };
    assert_eq!(inner, &vec![gene_ref("g1"), gene_ref("g2")]);
}

#[test]
fn test_compile_is_deterministic() {
    let expr = "((g1 and g2) or (g3 and (g4 or g5))) or g6";
    let first = AssociationSerializer::serialize(GprCompiler::compile(expr).unwrap().as_ref());
    let second = AssociationSerializer::serialize(GprCompiler::compile(expr).unwrap().as_ref());
    assert_eq!(first, second);
}

#[test]
fn test_deeply_nested_expression_round_trips() {
    // The curators have only needed three levels; the compiler does not care
    let mut expr = "g0".to_string();
    for i in 1..=10 {
        expr = format!("(g{} and {})", i, expr);
    }

    let tree = GprCompiler::compile(&expr).unwrap().unwrap();
    let ids = tree.gene_ids();
    assert_eq!(ids.len(), 11);
    assert!(AssociationSerializer::serialize(Some(&tree)).is_some());
}
