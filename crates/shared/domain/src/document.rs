//! Schemaless document record.
//!
//! Used where the record type isn't known at compile time, e.g. from the
//! command line. Every field except the identifier lives in `fields`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::{FieldMap, Record, RecordPatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Document {
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub id: String,
    #[serde(flatten)]
    pub fields: FieldMap,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

impl Record for Document {
    type Patch = DocumentPatch;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Partial document. Every key present in `fields` counts as set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    pub id: String,
    #[serde(flatten)]
    pub fields: FieldMap,
}

impl RecordPatch for DocumentPatch {
    fn id(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_parses_flat_json() {
        let doc: Document =
            serde_json::from_value(json!({"id": "d1", "title": "Hello", "n": 1})).unwrap();

        assert_eq!(doc.id, "d1");
        assert_eq!(doc.fields.get("title"), Some(&json!("Hello")));
        assert!(!doc.fields.contains_key("id"));
    }

    #[test]
    fn test_document_patch_merges_nested() {
        let doc: Document =
            serde_json::from_value(json!({"id": "d1", "meta": {"a": 1, "b": 2}})).unwrap();
        let patch: DocumentPatch =
            serde_json::from_value(json!({"id": "d1", "meta": {"b": 3}})).unwrap();

        let merged = doc.merge(&patch).unwrap();
        assert_eq!(merged.fields.get("meta"), Some(&json!({"a": 1, "b": 3})));
    }

    #[test]
    fn test_empty_id_is_invalid() {
        let err = Document::from_field_map(
            serde_json::from_value(json!({"id": ""})).unwrap(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Validation"));
    }
}
