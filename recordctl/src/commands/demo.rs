//! Demo command - exercises every repository operation on a sample user.

use common::{AppResult, OptionExt};
use domain::{User, UserPatch};
use record_store::Repository;

/// Identifier of the sample user
pub const DEMO_USER_ID: &str = "u1";

/// Save a user, bump their age through a patch, read them back, delete them.
///
/// Returns the record as read back after the update.
pub async fn execute(users: &dyn Repository<User>) -> AppResult<User> {
    let saved = users.save(User::with_id(DEMO_USER_ID, "Alice", 30)).await?;
    tracing::info!(id = %saved.id, age = saved.meta.age, "Saved");

    let updated = users.update(UserPatch::for_id(DEMO_USER_ID).age(31)).await?;
    tracing::info!(id = %updated.id, age = updated.meta.age, "Updated");

    let found = users
        .get_by_id(DEMO_USER_ID)
        .await?
        .ok_or_not_found(DEMO_USER_ID)?;

    users.delete(DEMO_USER_ID).await?;
    let gone = users.get_by_id(DEMO_USER_ID).await?.is_none();
    tracing::info!(id = DEMO_USER_ID, gone, "Deleted");

    Ok(found)
}
