//! Backend selection from configuration.

use std::sync::Arc;

use common::{AppResult, Backend, StoreConfig};
use domain::Record;

use crate::base::Repository;
use crate::document::{DocumentRepository, RedisDocumentClient};
use crate::memory::{InMemoryRepository, MemoryStore};

/// Open a repository for `table` on the configured backend.
///
/// The memory backend uses the process-wide [`MemoryStore::global`], so
/// repositories opened here for the same table see the same records.
pub async fn open_repository<R: Record>(
    config: &StoreConfig,
    table: &str,
) -> AppResult<Arc<dyn Repository<R>>> {
    tracing::debug!(backend = %config.backend, table = %table, "Opening repository");

    match config.backend {
        Backend::Memory => Ok(Arc::new(InMemoryRepository::<R>::new(
            MemoryStore::global(),
            table,
        ))),
        Backend::Redis => {
            let client = Arc::new(RedisDocumentClient::connect(config).await?);
            Ok(Arc::new(DocumentRepository::<R, RedisDocumentClient>::new(
                client, table,
            )))
        }
    }
}
