//! Record Store Library
//!
//! A generic repository contract with two interchangeable backends:
//!
//! - **memory**: a process-local mapping of table name to records
//! - **document**: a remote document store reached through a
//!   [`DocumentClient`], with a Redis-backed client included
//!
//! Both backends share the same semantics for `get_by_id`, `save`,
//! `update` (deep merge of a patch), `delete` and `get_many_by_id`.
//!
//! ```no_run
//! use domain::{User, UserPatch, USERS_TABLE};
//! use record_store::{InMemoryRepository, MemoryStore, Repository};
//!
//! # async fn run() -> common::AppResult<()> {
//! let users = InMemoryRepository::<User>::new(MemoryStore::new(), USERS_TABLE);
//! users.save(User::with_id("u1", "Alice", 30)).await?;
//! let updated = users.update(UserPatch::for_id("u1").age(31)).await?;
//! assert_eq!(updated.meta.age, 31);
//! # Ok(())
//! # }
//! ```

mod base;
pub mod document;
mod factory;
pub mod memory;

pub use base::Repository;
pub use document::{
    CollectionRef, DocumentClient, DocumentClientExt, DocumentRef, DocumentRepository,
    RedisDocumentClient,
};
pub use factory::open_repository;
pub use memory::{InMemoryRepository, MemoryStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use base::MockRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use document::MockDocumentClient;
