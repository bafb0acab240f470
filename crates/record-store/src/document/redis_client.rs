//! Redis-backed document client.
//!
//! Each document is one JSON string under `{prefix}{collection}:{id}`.
//! Documents never expire.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};

use common::{AppError, AppResult, StoreConfig};
use domain::FieldMap;

use super::DocumentClient;

/// Redis document client with a managed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisDocumentClient {
    connection: ConnectionManager,
    key_prefix: String,
}

impl RedisDocumentClient {
    /// Connect to the Redis instance named in the config.
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        let client = Client::open(config.redis_url.as_str()).map_err(store_error)?;
        let connection = ConnectionManager::new(client).await.map_err(store_error)?;

        tracing::info!(prefix = %config.key_prefix, "Redis document store connected");

        Ok(Self {
            connection,
            key_prefix: config.key_prefix.clone(),
        })
    }

    /// Key a document is stored under
    pub fn key(&self, collection: &str, id: &str) -> String {
        document_key(&self.key_prefix, collection, id)
    }
}

#[async_trait]
impl DocumentClient for RedisDocumentClient {
    async fn get_document(&self, collection: &str, id: &str) -> AppResult<Option<FieldMap>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(self.key(collection, id)).await.map_err(store_error)?;

        match value {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn set_document(&self, collection: &str, id: &str, fields: FieldMap) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let json = serde_json::to_string(&fields)?;

        conn.set::<_, _, ()>(self.key(collection, id), json)
            .await
            .map_err(store_error)?;

        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(self.key(collection, id)).await.map_err(store_error)?;
        Ok(())
    }
}

/// Build the Redis key for a document.
pub fn document_key(prefix: &str, collection: &str, id: &str) -> String {
    format!("{}{}:{}", prefix, collection, id)
}

/// Convert Redis error to AppError.
fn store_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::Cache(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::DEFAULT_KEY_PREFIX;

    #[test]
    fn test_document_key_layout() {
        assert_eq!(document_key("doc:", "users", "u1"), "doc:users:u1");
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(
            document_key(DEFAULT_KEY_PREFIX, "users", "u1"),
            "doc:users:u1"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_url() {
        let config = StoreConfig {
            redis_url: "not a url".to_string(),
            ..Default::default()
        };

        let err = RedisDocumentClient::connect(&config).await.err();
        assert!(matches!(err, Some(AppError::Cache(_))));
    }
}
