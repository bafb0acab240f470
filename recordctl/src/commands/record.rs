//! Record commands - get, save, update and delete documents.

use serde_json::Value;

use common::AppResult;
use domain::{Document, DocumentPatch, FieldMap, Record};
use record_store::Repository;

use crate::cli::RecordCommand;

/// Execute a record command, returning the JSON to print (if any).
pub async fn execute(repo: &dyn Repository<Document>, command: RecordCommand) -> AppResult<Option<Value>> {
    match command {
        RecordCommand::Get { id } => {
            let found = repo.get_by_id(&id).await?;
            Ok(Some(serde_json::to_value(found)?))
        }
        RecordCommand::GetMany { ids } => {
            let found = repo.get_many_by_id(&ids).await?;
            Ok(Some(serde_json::to_value(found)?))
        }
        RecordCommand::Save { json } => {
            let saved = repo.save(parse_document(&json)?).await?;
            tracing::info!(id = %saved.id, "Record saved");
            Ok(Some(serde_json::to_value(saved)?))
        }
        RecordCommand::Update { json } => {
            let patch: DocumentPatch = serde_json::from_str(&json)?;
            let updated = repo.update(patch).await?;
            tracing::info!(id = %updated.id, "Record updated");
            Ok(Some(serde_json::to_value(updated)?))
        }
        RecordCommand::Delete { id } => {
            repo.delete(&id).await?;
            tracing::info!(id = %id, "Record deleted");
            Ok(None)
        }
    }
}

/// Parse and validate a full document from JSON text.
fn parse_document(json: &str) -> AppResult<Document> {
    let fields: FieldMap = serde_json::from_str(json)?;
    Ok(Document::from_field_map(fields)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use record_store::{InMemoryRepository, MemoryStore, MockRepository};
    use serde_json::json;

    fn repo() -> InMemoryRepository<Document> {
        InMemoryRepository::new(MemoryStore::new(), "docs")
    }

    #[tokio::test]
    async fn test_save_then_get_prints_document() {
        let repo = repo();
        let saved = execute(
            &repo,
            RecordCommand::Save {
                json: r#"{"id": "d1", "title": "Hello"}"#.to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(saved, Some(json!({"id": "d1", "title": "Hello"})));

        let found = execute(&repo, RecordCommand::Get { id: "d1".to_string() })
            .await
            .unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn test_get_missing_prints_null() {
        let mut mock = MockRepository::<Document>::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        let out = execute(&mock, RecordCommand::Get { id: "x".to_string() })
            .await
            .unwrap();
        assert_eq!(out, Some(Value::Null));
    }

    #[tokio::test]
    async fn test_update_merges() {
        let repo = repo();
        execute(
            &repo,
            RecordCommand::Save {
                json: r#"{"id": "d1", "meta": {"a": 1, "b": 2}}"#.to_string(),
            },
        )
        .await
        .unwrap();

        let out = execute(
            &repo,
            RecordCommand::Update {
                json: r#"{"id": "d1", "meta": {"b": 5}}"#.to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(out, Some(json!({"id": "d1", "meta": {"a": 1, "b": 5}})));
    }

    #[tokio::test]
    async fn test_save_rejects_missing_id() {
        let repo = repo();
        let err = execute(
            &repo,
            RecordCommand::Save {
                json: r#"{"title": "no id"}"#.to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.code(), "INVALID_RECORD");
    }

    #[tokio::test]
    async fn test_save_rejects_malformed_json() {
        let repo = repo();
        let err = execute(
            &repo,
            RecordCommand::Save {
                json: "{not json".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_delete_prints_nothing() {
        let mut mock = MockRepository::<Document>::new();
        mock.expect_delete()
            .withf(|id| id == "d1")
            .times(1)
            .returning(|_| Ok(()));

        let out = execute(&mock, RecordCommand::Delete { id: "d1".to_string() })
            .await
            .unwrap();
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn test_get_many_surfaces_not_found() {
        let mut mock = MockRepository::<Document>::new();
        mock.expect_get_many_by_id()
            .returning(|ids| Err(AppError::not_found(ids[0].clone())));

        let err = execute(
            &mock,
            RecordCommand::GetMany {
                ids: vec!["gone".to_string()],
            },
        )
        .await
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
