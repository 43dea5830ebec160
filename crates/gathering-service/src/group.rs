//! Group creation, editing and deletion.

use diesel_async::AsyncConnection;
use diesel_async::scoped_futures::ScopedFutureExt;
use gathering_core::constants::{GROUP_SLUG_CONSTRAINT, MAX_SLUG_ATTEMPTS};
use gathering_core::util::slug::next_available_slug;
use gathering_db::db::connection::DbConnection;
use gathering_db::db::query::{event, group, membership};
use gathering_db::model::group::{Group, GroupDraft, GroupEdit};

use crate::error::{ServiceError, ServiceResult, is_unique_violation};

/// Rows removed by [`delete_group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedGroup {
    pub group_id: uuid::Uuid,
    pub events: usize,
    pub memberships: usize,
}

/// ## Summary
/// Validates a draft, assigns it a unique slug and inserts it.
///
/// The slug is derived from the name. If it is taken, the lowest free
/// numeric suffix is used. A concurrent creation that claims the same slug
/// first causes the unique constraint to reject the insert; the slug is then
/// recomputed and the insert retried.
///
/// ## Side Effects
/// - Inserts one `group` row
///
/// ## Errors
/// Returns:
/// - `ValidationError` if the name or time zone is missing or invalid
/// - `Conflict` if no free slug is found or every retry loses a race
/// - a database error if any query fails
#[tracing::instrument(skip(conn, draft), fields(name = %draft.name))]
pub async fn create_group(conn: &mut DbConnection<'_>, draft: GroupDraft) -> ServiceResult<Group> {
    let mut unslugged = draft.validate()?;

    for attempt in 1..=MAX_SLUG_ATTEMPTS {
        let base = unslugged.base_slug();
        let taken = group::taken_slugs(conn, base.as_str()).await?;
        let slug = next_available_slug(&base, &taken)
            .ok_or_else(|| ServiceError::Conflict(format!("no free slug for '{base}'")))?;

        let slugged = unslugged.assign_slug(slug);
        let row = slugged.new_row()?;

        match group::create_group(conn, &row).await {
            Ok(created) => {
                tracing::info!(group_id = %created.id, slug = %created.slug, "Group created");
                return Ok(created);
            }
            Err(e) if is_unique_violation(&e, GROUP_SLUG_CONSTRAINT) => {
                tracing::warn!(
                    attempt,
                    slug = %slugged.slug(),
                    "Slug claimed concurrently, retrying"
                );
                unslugged = slugged.release_slug();
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(ServiceError::Conflict(format!(
        "slug still taken after {MAX_SLUG_ATTEMPTS} attempts"
    )))
}

/// ## Summary
/// Applies a validated edit to a group. The slug is never changed.
///
/// ## Errors
/// Returns `ValidationError` for invalid fields, `NotFound` if the group does
/// not exist, or a database error.
#[tracing::instrument(skip(conn, edit))]
pub async fn rename_group(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
    edit: GroupEdit,
) -> ServiceResult<Group> {
    let changes = edit.validate()?;

    if changes.is_empty() {
        return group::get_group(conn, group_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("group {group_id}")));
    }

    match group::update_group(conn, group_id, &changes).await {
        Ok(updated) => {
            tracing::debug!(group_id = %updated.id, "Group updated");
            Ok(updated)
        }
        Err(diesel::result::Error::NotFound) => {
            Err(ServiceError::NotFound(format!("group {group_id}")))
        }
        Err(e) => Err(e.into()),
    }
}

/// ## Summary
/// Deletes a group together with its events and memberships.
///
/// Dependent rows are removed explicitly inside one transaction; the foreign
/// keys also cascade, so no orphan can survive either path.
///
/// ## Side Effects
/// - Deletes the group's `membership` and `event` rows, then the `group` row
///
/// ## Errors
/// Returns `NotFound` if the group does not exist (nothing is deleted), or a
/// database error.
#[tracing::instrument(skip(conn))]
pub async fn delete_group(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
) -> ServiceResult<DeletedGroup> {
    let deleted = conn
        .transaction::<_, ServiceError, _>(move |tx| {
            async move {
                let memberships = membership::delete_for_group(tx, group_id).await?;
                let events = event::delete_for_group(tx, group_id).await?;
                let groups = group::delete_group(tx, group_id).await?;

                if groups == 0 {
                    return Err(ServiceError::NotFound(format!("group {group_id}")));
                }

                Ok(DeletedGroup {
                    group_id,
                    events,
                    memberships,
                })
            }
            .scope_boxed()
        })
        .await?;

    tracing::info!(
        group_id = %deleted.group_id,
        events = deleted.events,
        memberships = deleted.memberships,
        "Group deleted"
    );

    Ok(deleted)
}
