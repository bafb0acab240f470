//! Repository over one collection of a remote document store.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use common::{AppResult, OptionExt};
use domain::{identifier_of, Record, RecordPatch};

use super::{DocumentClient, DocumentClientExt};
use crate::base::{apply_patch, Repository};

/// Document-store repository.
///
/// The identifier is the document's address. String identifiers are
/// stripped from the stored body on `save` and put back on read. Other
/// identifier values stay in the body so reads restore their JSON type.
pub struct DocumentRepository<R, C: ?Sized = dyn DocumentClient> {
    client: Arc<C>,
    table: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, C: DocumentClient + ?Sized> DocumentRepository<R, C> {
    /// Create new repository instance
    pub fn new(client: Arc<C>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
            _record: PhantomData,
        }
    }

    /// Client this repository talks to
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }
}

#[async_trait]
impl<R: Record, C: DocumentClient + ?Sized> Repository<R> for DocumentRepository<R, C> {
    fn table(&self) -> &str {
        &self.table
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<R>> {
        tracing::debug!(collection = %self.table, id = %id, "Document get");

        let body = self
            .client
            .collection(&self.table)
            .document(id)
            .get()
            .await?;

        match body {
            Some(mut fields) => {
                fields
                    .entry(R::ID_FIELD)
                    .or_insert_with(|| Value::String(id.to_string()));
                Ok(Some(R::from_field_map(fields)?))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, record: R) -> AppResult<R> {
        let mut fields = record.to_field_map()?;
        let id = identifier_of(&fields, R::ID_FIELD)?;
        if matches!(fields.get(R::ID_FIELD), Some(Value::String(_))) {
            fields.remove(R::ID_FIELD);
        }
        tracing::debug!(collection = %self.table, id = %id, "Document save");

        self.client
            .collection(&self.table)
            .document(&id)
            .set(fields)
            .await?;

        Ok(record)
    }

    async fn update(&self, patch: R::Patch) -> AppResult<R> {
        let existing = self.get_by_id(&patch.id()).await?;
        let merged = apply_patch(&self.table, existing, &patch)?;
        self.save(merged).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        tracing::debug!(collection = %self.table, id = %id, "Document delete");
        self.client.collection(&self.table).document(id).delete().await
    }

    async fn get_many_by_id(&self, ids: &[String]) -> AppResult<Vec<R>> {
        tracing::debug!(collection = %self.table, count = ids.len(), "Document get many");

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            let record = self.get_by_id(id).await?.ok_or_not_found(id)?;
            records.push(record);
        }
        Ok(records)
    }
}
