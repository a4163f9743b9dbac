//! Common types used across GSM

use serde::{Deserialize, Serialize};

/// A single curated record: one row of a curation table.
///
/// The table-loading layer hands records to the kernel as ordered
/// column-name -> cell-value pairs keyed by record identifier. Column order
/// is preserved from the source table so that everything derived from a
/// record (annotation groups in particular) comes out deterministic and
/// source-ordered.
///
/// Lookups are linear scans; curation rows carry a few dozen columns at
/// most.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationRecord {
    /// Record identifier (e.g., a reaction id like "R0001")
    id: String,

    /// Ordered (column name, cell value) pairs
    fields: Vec<(String, String)>,
}

impl CurationRecord {
    /// Create a record from an id and ordered field pairs
    pub fn new(id: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// The record identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a field value by column name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, val)| val.as_str())
    }

    /// Look up a field value, treating a missing column as empty
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Iterate over (column name, cell value) pairs in source order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(col, val)| (col.as_str(), val.as_str()))
    }

    /// Number of columns in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurationRecord {
        CurationRecord::new(
            "R0001",
            vec![
                ("Name".to_string(), "hexokinase".to_string()),
                ("IsReversible".to_string(), "false".to_string()),
                ("Pathway".to_string(), "Glycolysis".to_string()),
            ],
        )
    }

    #[test]
    fn test_get_field() {
        let record = sample();
        assert_eq!(record.id(), "R0001");
        assert_eq!(record.get("Name"), Some("hexokinase"));
        assert_eq!(record.get("Missing"), None);
        assert_eq!(record.get_or_empty("Missing"), "");
    }

    #[test]
    fn test_fields_preserve_order() {
        let record = sample();
        let cols: Vec<&str> = record.fields().map(|(col, _)| col).collect();
        assert_eq!(cols, vec!["Name", "IsReversible", "Pathway"]);
    }
}
