//! Remote document store backend.
//!
//! The store itself is an external collaborator reached through a
//! [`DocumentClient`]. Documents live in named collections and are
//! addressed by identifier; their bodies are field maps.

mod redis_client;
mod repository;

use async_trait::async_trait;

use common::AppResult;
use domain::FieldMap;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use redis_client::{document_key, RedisDocumentClient};
pub use repository::DocumentRepository;

/// Client for an external document database.
///
/// Connection setup and authentication belong to the implementation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DocumentClient: Send + Sync {
    /// Read a document body. A document that doesn't exist is `Ok(None)`.
    async fn get_document(&self, collection: &str, id: &str) -> AppResult<Option<FieldMap>>;

    /// Replace a document body entirely.
    async fn set_document(&self, collection: &str, id: &str, fields: FieldMap) -> AppResult<()>;

    /// Delete a document.
    async fn delete_document(&self, collection: &str, id: &str) -> AppResult<()>;
}

/// Handle on one collection of a [`DocumentClient`].
pub struct CollectionRef<'a, C: ?Sized> {
    client: &'a C,
    name: &'a str,
}

impl<'a, C: DocumentClient + ?Sized> CollectionRef<'a, C> {
    pub fn new(client: &'a C, name: &'a str) -> Self {
        Self { client, name }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Address a document in this collection
    pub fn document(&self, id: &'a str) -> DocumentRef<'a, C> {
        DocumentRef {
            client: self.client,
            collection: self.name,
            id,
        }
    }
}

/// Handle on one document of a collection.
pub struct DocumentRef<'a, C: ?Sized> {
    client: &'a C,
    collection: &'a str,
    id: &'a str,
}

impl<'a, C: DocumentClient + ?Sized> DocumentRef<'a, C> {
    pub fn id(&self) -> &str {
        self.id
    }

    pub async fn get(&self) -> AppResult<Option<FieldMap>> {
        self.client.get_document(self.collection, self.id).await
    }

    pub async fn set(&self, fields: FieldMap) -> AppResult<()> {
        self.client.set_document(self.collection, self.id, fields).await
    }

    pub async fn delete(&self) -> AppResult<()> {
        self.client.delete_document(self.collection, self.id).await
    }
}

/// `client.collection(name).document(id)` addressing for any client
pub trait DocumentClientExt: DocumentClient {
    fn collection<'a>(&'a self, name: &'a str) -> CollectionRef<'a, Self> {
        CollectionRef::new(self, name)
    }
}

impl<C: DocumentClient + ?Sized> DocumentClientExt for C {}
