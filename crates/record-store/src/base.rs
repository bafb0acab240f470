//! Repository contract shared by every backend.

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{Record, RecordPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Repository over one table of records of type `R`.
///
/// Each call performs at most one read and one write against the backing
/// store. Nothing here is atomic across calls: concurrent writers to the
/// same identifier race and the last write wins.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Table (or collection) this repository is bound to
    fn table(&self) -> &str;

    /// Find a record by identifier. Absent records are `Ok(None)`.
    async fn get_by_id(&self, id: &str) -> AppResult<Option<R>>;

    /// Insert a record, or fully overwrite the one sharing its identifier.
    async fn save(&self, record: R) -> AppResult<R>;

    /// Deep-merge the set fields of `patch` onto the stored record.
    ///
    /// Fails with [`AppError::NotFound`] when no record has the patch's
    /// identifier.
    async fn update(&self, patch: R::Patch) -> AppResult<R>;

    /// Remove a record. Removing an absent record succeeds.
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Fetch several records in input order.
    ///
    /// All-or-nothing: any missing identifier fails the whole call with
    /// [`AppError::NotFound`].
    async fn get_many_by_id(&self, ids: &[String]) -> AppResult<Vec<R>>;
}

/// Merge a patch onto the record an update read back, or report it missing.
pub(crate) fn apply_patch<R: Record>(
    table: &str,
    existing: Option<R>,
    patch: &R::Patch,
) -> AppResult<R> {
    let id = patch.id();
    let existing = existing.ok_or_else(|| {
        tracing::warn!(table = %table, id = %id, "Update on missing record");
        AppError::not_found(id.clone())
    })?;

    Ok(existing.merge(patch)?)
}
