//! Query functions for group memberships.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::membership;
use crate::model::user::membership::NewMembership;

/// ## Summary
/// Returns a query for the distinct ids of the groups a user belongs to.
#[must_use]
pub fn group_ids_for_user(
    user_id: uuid::Uuid,
) -> membership::BoxedQuery<'static, diesel::pg::Pg, diesel::sql_types::Uuid> {
    membership::table
        .filter(membership::user_id.eq(user_id))
        .select(membership::group_id)
        .distinct()
        .into_boxed()
}

/// ## Summary
/// Adds a user to a group. Adding an existing member is a no-op.
///
/// Returns `true` when a new membership row was written.
///
/// ## Errors
/// Returns a database error if the insert fails, e.g. for an unknown user or group.
pub async fn create_membership(
    conn: &mut DbConnection<'_>,
    new_membership: &NewMembership,
) -> diesel::QueryResult<bool> {
    let inserted = diesel::insert_into(membership::table)
        .values(new_membership)
        .on_conflict_do_nothing()
        .execute(conn)
        .await?;
    Ok(inserted > 0)
}

/// ## Summary
/// Removes a user from a group, returning `true` if a membership existed.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_membership(
    conn: &mut DbConnection<'_>,
    user_id: uuid::Uuid,
    group_id: uuid::Uuid,
) -> diesel::QueryResult<bool> {
    let deleted = diesel::delete(
        membership::table
            .filter(membership::user_id.eq(user_id))
            .filter(membership::group_id.eq(group_id)),
    )
    .execute(conn)
    .await?;
    Ok(deleted > 0)
}

/// ## Summary
/// Counts the memberships of a group.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count_for_group(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
) -> diesel::QueryResult<i64> {
    membership::table
        .filter(membership::group_id.eq(group_id))
        .count()
        .get_result(conn)
        .await
}

/// ## Summary
/// Deletes every membership of a group, returning the number removed.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_for_group(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
) -> diesel::QueryResult<usize> {
    diesel::delete(membership::table.filter(membership::group_id.eq(group_id)))
        .execute(conn)
        .await
}
