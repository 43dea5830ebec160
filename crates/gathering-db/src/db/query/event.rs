//! Query functions for events.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use gathering_core::activity::ActivityWindow;

use crate::db::connection::DbConnection;
use crate::db::schema::event;
use crate::model::event::{Event, NewEvent};

type BoxedQuery<'a> = event::BoxedQuery<'a, diesel::pg::Pg>;

/// ## Summary
/// Returns a query for the events of a group, in start order.
#[must_use]
pub fn for_group(group_id: uuid::Uuid) -> BoxedQuery<'static> {
    event::table
        .filter(event::group_id.eq(group_id))
        .order((event::start_at.asc(), event::id.asc()))
        .into_boxed()
}

/// ## Summary
/// Returns a query for a group's events that have not ended before `now`.
#[must_use]
pub fn upcoming_for_group(group_id: uuid::Uuid, now: DateTime<Utc>) -> BoxedQuery<'static> {
    for_group(group_id).filter(event::end_at.ge(now))
}

/// ## Summary
/// Returns a query for the distinct ids of groups owning an event that ended
/// inside `window` (lower bound exclusive, upper bound inclusive).
#[must_use]
pub fn active_group_ids(
    window: ActivityWindow,
) -> event::BoxedQuery<'static, diesel::pg::Pg, diesel::sql_types::Uuid> {
    event::table
        .filter(event::end_at.gt(window.start))
        .filter(event::end_at.le(window.end))
        .select(event::group_id)
        .distinct()
        .into_boxed()
}

/// ## Summary
/// Inserts a new event and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_event(
    conn: &mut DbConnection<'_>,
    new_event: &NewEvent,
) -> diesel::QueryResult<Event> {
    diesel::insert_into(event::table)
        .values(new_event)
        .returning(Event::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Lists a group's upcoming events.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_upcoming(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
    now: DateTime<Utc>,
) -> diesel::QueryResult<Vec<Event>> {
    upcoming_for_group(group_id, now)
        .select(Event::as_select())
        .load::<Event>(conn)
        .await
}

/// ## Summary
/// Counts the events owned by a group.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count_for_group(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
) -> diesel::QueryResult<i64> {
    event::table
        .filter(event::group_id.eq(group_id))
        .count()
        .get_result(conn)
        .await
}

/// ## Summary
/// Deletes every event owned by a group, returning the number removed.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_for_group(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
) -> diesel::QueryResult<usize> {
    diesel::delete(event::table.filter(event::group_id.eq(group_id)))
        .execute(conn)
        .await
}
