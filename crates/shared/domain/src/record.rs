//! Record contract shared by every repository backend.
//!
//! A record crosses the repository boundary in two shapes: as its typed
//! value and as an untyped [`FieldMap`]. Backends only store field maps;
//! the conversions below are resolved at compile time through serde.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::constants::DEFAULT_ID_FIELD;
use crate::error::{DomainError, DomainResult};
use crate::merge::deep_merge;

/// Untyped key/value representation of a record.
pub type FieldMap = Map<String, Value>;

/// A partial record carrying only the fields a caller explicitly set.
///
/// Patch types are plain structs of `Option` fields annotated with
/// `#[serde(skip_serializing_if = "Option::is_none")]`, so serializing a
/// patch yields exactly the set fields. Nested patch structs follow the
/// same rule, which is what makes [`Record::merge`] key-by-key.
pub trait RecordPatch: Serialize + Send + Sync + 'static {
    /// Identifier of the record this patch applies to
    fn id(&self) -> String;

    /// Explicitly set fields, recursively
    fn set_fields(&self) -> DomainResult<FieldMap> {
        to_field_map(self)
    }
}

/// A typed, validated value stored in a table.
pub trait Record:
    Serialize + DeserializeOwned + Validate + Clone + Send + Sync + 'static
{
    /// Name of the field holding the identifier
    const ID_FIELD: &'static str = DEFAULT_ID_FIELD;

    /// Partial update type for this record
    type Patch: RecordPatch;

    /// Identifier value of this record
    fn id(&self) -> String;

    /// Serialize to a field map.
    fn to_field_map(&self) -> DomainResult<FieldMap> {
        to_field_map(self)
    }

    /// Construct from a field map and validate the result.
    fn from_field_map(fields: FieldMap) -> DomainResult<Self> {
        let record: Self = serde_json::from_value(Value::Object(fields))?;
        record.validate()?;
        Ok(record)
    }

    /// Deep-merge a patch onto this record, producing a new validated record.
    fn merge(&self, patch: &Self::Patch) -> DomainResult<Self> {
        let mut fields = self.to_field_map()?;
        deep_merge(&mut fields, patch.set_fields()?);
        Self::from_field_map(fields)
    }
}

/// Serialize any value that maps to a JSON object into a field map.
pub fn to_field_map<T: Serialize + ?Sized>(value: &T) -> DomainResult<FieldMap> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(DomainError::serialization(format!(
            "expected an object, got {}",
            value_kind(&other)
        ))),
    }
}

/// Read the identifier out of a field map.
///
/// Strings are used as-is and numbers are stringified. Anything else
/// cannot address a record.
pub fn identifier_of(fields: &FieldMap, id_field: &str) -> DomainResult<String> {
    match fields.get(id_field) {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(other) => Err(DomainError::missing_identifier(format!(
            "field '{}' holds {}, expected a string or number",
            id_field,
            value_kind(other)
        ))),
        None => Err(DomainError::missing_identifier(format!(
            "field '{}' is not set",
            id_field
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_identifier_of_string() {
        let map = fields(json!({"id": "u1", "name": "Alice"}));
        assert_eq!(identifier_of(&map, "id").unwrap(), "u1");
    }

    #[test]
    fn test_identifier_of_number_is_stringified() {
        let map = fields(json!({"sku": 42}));
        assert_eq!(identifier_of(&map, "sku").unwrap(), "42");
    }

    #[test]
    fn test_identifier_of_missing() {
        let map = fields(json!({"name": "Alice"}));
        let err = identifier_of(&map, "id").unwrap_err();
        assert!(matches!(err, DomainError::MissingIdentifier(_)));
    }

    #[test]
    fn test_identifier_of_rejects_objects() {
        let map = fields(json!({"id": {"nested": true}}));
        let err = identifier_of(&map, "id").unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_to_field_map_rejects_scalars() {
        let err = to_field_map(&7).unwrap_err();
        assert_eq!(
            err,
            DomainError::Serialization("expected an object, got a number".to_string())
        );
    }
}
