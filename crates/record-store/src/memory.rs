//! In-memory backend.
//!
//! [`MemoryStore`] owns a mapping of table name to identifier to field map.
//! It is constructed explicitly and injected into repositories; clones share
//! the same underlying data. [`MemoryStore::global`] hands out the
//! process-wide instance for callers that want one shared mapping.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use common::{AppResult, OptionExt};
use domain::{identifier_of, FieldMap, Record, RecordPatch};

use crate::base::{apply_patch, Repository};

type Table = HashMap<String, FieldMap>;

static GLOBAL_STORE: Lazy<MemoryStore> = Lazy::new(MemoryStore::new);

/// Shared process-local storage.
///
/// Each method takes the lock for a single map access only.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl MemoryStore {
    /// Create an empty, independent store
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide store, created on first use and dropped at exit
    pub fn global() -> Self {
        GLOBAL_STORE.clone()
    }

    /// Read a copy of the stored fields
    pub fn get(&self, table: &str, id: &str) -> Option<FieldMap> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(table).and_then(|rows| rows.get(id)).cloned()
    }

    /// Store fields under `id`, replacing whatever was there
    pub fn insert(&self, table: &str, id: String, fields: FieldMap) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.entry(table.to_string()).or_default().insert(id, fields);
    }

    /// Remove and return the stored fields, if any
    pub fn remove(&self, table: &str, id: &str) -> Option<FieldMap> {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.get_mut(table).and_then(|rows| rows.remove(id))
    }

    /// Number of records in a table
    pub fn len(&self, table: &str) -> usize {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(table).map_or(0, HashMap::len)
    }

    /// Whether a table holds no records
    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }

    /// Names of every table that has ever been written to
    pub fn tables(&self) -> Vec<String> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Drop every table
    pub fn clear(&self) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Repository over one table of a [`MemoryStore`].
pub struct InMemoryRepository<R> {
    store: MemoryStore,
    table: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> InMemoryRepository<R> {
    /// Create new repository instance
    pub fn new(store: MemoryStore, table: impl Into<String>) -> Self {
        Self {
            store,
            table: table.into(),
            _record: PhantomData,
        }
    }

    /// Store this repository writes to
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}

#[async_trait]
impl<R: Record> Repository<R> for InMemoryRepository<R> {
    fn table(&self) -> &str {
        &self.table
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<R>> {
        tracing::debug!(table = %self.table, id = %id, "Memory get");

        match self.store.get(&self.table, id) {
            Some(fields) => Ok(Some(R::from_field_map(fields)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, record: R) -> AppResult<R> {
        let fields = record.to_field_map()?;
        let id = identifier_of(&fields, R::ID_FIELD)?;
        tracing::debug!(table = %self.table, id = %id, "Memory save");

        self.store.insert(&self.table, id, fields);
        Ok(record)
    }

    async fn update(&self, patch: R::Patch) -> AppResult<R> {
        let existing = self.get_by_id(&patch.id()).await?;
        let merged = apply_patch(&self.table, existing, &patch)?;
        self.save(merged).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let removed = self.store.remove(&self.table, id).is_some();
        tracing::debug!(table = %self.table, id = %id, removed, "Memory delete");
        Ok(())
    }

    async fn get_many_by_id(&self, ids: &[String]) -> AppResult<Vec<R>> {
        tracing::debug!(table = %self.table, count = ids.len(), "Memory get many");

        ids.iter()
            .map(|id| -> AppResult<R> {
                let fields = self.store.get(&self.table, id).ok_or_not_found(id)?;
                Ok(R::from_field_map(fields)?)
            })
            .collect()
    }
}
