//! Shared fixtures for repository integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use common::AppResult;
use domain::FieldMap;
use record_store::DocumentClient;

/// Document client keeping bodies in a map keyed by (collection, id)
#[derive(Default)]
pub struct FakeDocumentClient {
    documents: Mutex<HashMap<(String, String), FieldMap>>,
}

impl FakeDocumentClient {
    pub fn body(&self, collection: &str, id: &str) -> Option<FieldMap> {
        self.documents
            .lock()
            .unwrap()
            .get(&(collection.to_string(), id.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentClient for FakeDocumentClient {
    async fn get_document(&self, collection: &str, id: &str) -> AppResult<Option<FieldMap>> {
        Ok(self.body(collection, id))
    }

    async fn set_document(&self, collection: &str, id: &str, fields: FieldMap) -> AppResult<()> {
        self.documents
            .lock()
            .unwrap()
            .insert((collection.to_string(), id.to_string()), fields);
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> AppResult<()> {
        self.documents
            .lock()
            .unwrap()
            .remove(&(collection.to_string(), id.to_string()));
        Ok(())
    }
}

pub fn body(value: Value) -> FieldMap {
    match value {
        Value::Object(map) => map,
        _ => panic!("test fixture must be an object"),
    }
}
