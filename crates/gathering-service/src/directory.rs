//! Read-side queries over the group directory.

use chrono::{DateTime, Utc};
use gathering_core::activity::ActivityWindow;
use gathering_db::db::connection::DbConnection;
use gathering_db::db::query::{event, group};
use gathering_db::model::event::Event;
use gathering_db::model::group::{Group, GroupIdentifier};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Returns the groups that had at least one event end in the trailing
/// 30-day window ending at `now`, each exactly once.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn active_groups(
    conn: &mut DbConnection<'_>,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<Group>> {
    let window = ActivityWindow::trailing(now);
    let groups = group::active_groups(conn, window).await?;

    tracing::debug!(count = groups.len(), "Loaded active groups");

    Ok(groups)
}

/// ## Summary
/// Returns the groups `user_id` is a member of, each exactly once.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(conn))]
pub async fn groups_with_member(
    conn: &mut DbConnection<'_>,
    user_id: uuid::Uuid,
) -> ServiceResult<Vec<Group>> {
    let groups = group::groups_with_member(conn, user_id).await?;

    tracing::trace!(
        user_id = %user_id,
        group_count = groups.len(),
        "Loaded member groups"
    );

    Ok(groups)
}

/// ## Summary
/// Looks a group up by id or slug.
///
/// ## Errors
/// Returns `NotFound` if no group matches, or a database error.
pub async fn find_group(
    conn: &mut DbConnection<'_>,
    identifier: impl Into<GroupIdentifier>,
) -> ServiceResult<Group> {
    let identifier = identifier.into();
    group::find_group(conn, &identifier)
        .await?
        .ok_or_else(|| match identifier {
            GroupIdentifier::Id(id) => ServiceError::NotFound(format!("group {id}")),
            GroupIdentifier::Slug(slug) => ServiceError::NotFound(format!("group '{slug}'")),
        })
}

/// ## Summary
/// Lists a group's events that have not ended before `now`, in start order.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn upcoming_events(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
    now: DateTime<Utc>,
) -> ServiceResult<Vec<Event>> {
    Ok(event::list_upcoming(conn, group_id, now).await?)
}
