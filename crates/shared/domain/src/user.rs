//! User record and its partial update types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::record::{Record, RecordPatch};

/// Free-form profile metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Postal address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub zip: String,
}

/// User record stored in the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub meta: Meta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl User {
    /// Create a user with a freshly generated identifier
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, age)
    }

    /// Create a user with a known identifier
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            meta: Meta {
                age,
                nickname: None,
            },
            address: None,
        }
    }

    /// Attach an email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attach a postal address
    pub fn address(mut self, city: impl Into<String>, zip: impl Into<String>) -> Self {
        self.address = Some(Address {
            city: city.into(),
            zip: zip.into(),
        });
        self
    }
}

impl Record for User {
    type Patch = UserPatch;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Partial update of [`Meta`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Partial update of [`Address`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

/// Partial update of [`User`]; only `Some` fields are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressPatch>,
}

impl UserPatch {
    /// Start an empty patch for the given user
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.meta.get_or_insert_with(MetaPatch::default).age = Some(age);
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(MetaPatch::default).nickname = Some(nickname.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.address.get_or_insert_with(AddressPatch::default).city = Some(city.into());
        self
    }
}

impl RecordPatch for UserPatch {
    fn id(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use serde_json::{json, Value};

    #[test]
    fn test_new_user_gets_generated_id() {
        let a = User::new("Alice", 30);
        let b = User::new("Alice", 30);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_field_map_omits_unset_optionals() {
        let user = User::with_id("u1", "Alice", 30);
        let fields = user.to_field_map().unwrap();

        assert_eq!(
            Value::Object(fields),
            json!({"id": "u1", "name": "Alice", "meta": {"age": 30}})
        );
    }

    #[test]
    fn test_from_field_map_validates() {
        let mut fields = User::with_id("u1", "Alice", 30).to_field_map().unwrap();
        fields.insert("email".to_string(), json!("not-an-email"));

        let err = User::from_field_map(fields).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_from_field_map_rejects_wrong_shape() {
        let mut fields = User::with_id("u1", "Alice", 30).to_field_map().unwrap();
        fields.remove("meta");

        let err = User::from_field_map(fields).unwrap_err();
        assert!(matches!(err, DomainError::Serialization(_)));
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = UserPatch::for_id("u1").age(31);
        let fields = patch.set_fields().unwrap();

        assert_eq!(Value::Object(fields), json!({"id": "u1", "meta": {"age": 31}}));
    }

    #[test]
    fn test_merge_scenario() {
        let stored = User::with_id("u1", "Alice", 30);
        let merged = stored.merge(&UserPatch::for_id("u1").age(31)).unwrap();

        assert_eq!(merged, User::with_id("u1", "Alice", 31));
    }

    #[test]
    fn test_merge_keeps_sibling_nested_fields() {
        let stored = User::with_id("u1", "Alice", 30).address("A", "1");
        let merged = stored.merge(&UserPatch::for_id("u1").city("X")).unwrap();

        assert_eq!(
            merged.address,
            Some(Address {
                city: "X".to_string(),
                zip: "1".to_string()
            })
        );
        assert_eq!(merged.meta.age, 30);
    }

    #[test]
    fn test_merge_rejects_invalid_result() {
        let stored = User::with_id("u1", "Alice", 30);
        let err = stored.merge(&UserPatch::for_id("u1").name("")).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }
}
