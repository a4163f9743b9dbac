//! Integration tests for the cross-reference annotation resolver

use gsm_build::annotation::{
    AnnotationResolver, ReferenceEntry, ReferenceTable, Relation,
};
use gsm_common::types::CurationRecord;

fn record(fields: Vec<(&str, &str)>) -> CurationRecord {
    CurationRecord::new(
        "G0001",
        fields
            .into_iter()
            .map(|(col, val)| (col.to_string(), val.to_string()))
            .collect(),
    )
}

fn curated_table() -> ReferenceTable {
    ReferenceTable::from_entries(vec![
        (
            "wormbase".to_string(),
            ReferenceEntry {
                uri_prefix: "https://identifiers.org/wormbase".to_string(),
                relation: Relation::Is,
            },
        ),
        (
            "kegg.pathway".to_string(),
            ReferenceEntry {
                uri_prefix: "https://identifiers.org/kegg.pathway".to_string(),
                relation: Relation::IsPartOf,
            },
        ),
    ])
}

#[test]
fn test_unknown_database_defaults_into_is_group() {
    let record = record(vec![("Identifiers:kegg.compound", "C001|C002")]);
    let groups = AnnotationResolver::resolve(&record, &ReferenceTable::new());

    assert_eq!(
        groups.is,
        vec![
            "https://identifiers.org/kegg.compound:C001",
            "https://identifiers.org/kegg.compound:C002",
        ]
    );
    assert!(groups.is_part_of.is_empty());
}

#[test]
fn test_is_part_of_never_lands_in_is_group() {
    let record = record(vec![
        ("Identifiers:wormbase", "WBGene00001687"),
        ("Identifiers:kegg.pathway", "map00010|map00020"),
    ]);
    let groups = AnnotationResolver::resolve(&record, &curated_table());

    assert_eq!(groups.is, vec!["https://identifiers.org/wormbase:WBGene00001687"]);
    assert_eq!(
        groups.is_part_of,
        vec![
            "https://identifiers.org/kegg.pathway:map00010",
            "https://identifiers.org/kegg.pathway:map00020",
        ]
    );
}

#[test]
fn test_record_without_identifier_fields_is_empty() {
    let record = record(vec![("Name", "gpd-2"), ("Locus", "K10B3.8")]);
    let groups = AnnotationResolver::resolve(&record, &curated_table());
    assert!(groups.is_empty());
}

#[test]
fn test_blank_identifier_fields_are_skipped() {
    let record = record(vec![
        ("Identifiers:wormbase", ""),
        ("Identifiers:doi", "10.1038/nature24646"),
    ]);
    let groups = AnnotationResolver::resolve(&record, &curated_table());

    assert_eq!(groups.is, vec!["https://identifiers.org/doi:10.1038/nature24646"]);
}

#[test]
fn test_identifier_order_follows_columns_then_pipes() {
    let record = record(vec![
        ("Identifiers:kegg.compound", "C00031|C00002"),
        ("Identifiers:wormbase", "WBGene00001687"),
    ]);
    let groups = AnnotationResolver::resolve(&record, &curated_table());

    assert_eq!(
        groups.is,
        vec![
            "https://identifiers.org/kegg.compound:C00031",
            "https://identifiers.org/kegg.compound:C00002",
            "https://identifiers.org/wormbase:WBGene00001687",
        ]
    );
}
