//! Query functions for groups.

use std::collections::HashSet;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use gathering_core::activity::ActivityWindow;

use crate::db::connection::DbConnection;
use crate::db::query::{event, membership};
use crate::db::schema::group;
use crate::model::group::{Group, GroupChanges, GroupIdentifier, NewGroup};

type BoxedQuery<'a> = group::BoxedQuery<'a, diesel::pg::Pg>;

/// ## Summary
/// Returns a query to select all groups, ordered by name.
#[must_use]
pub fn all() -> BoxedQuery<'static> {
    group::table
        .order((group::name.asc(), group::id.asc()))
        .into_boxed()
}

/// ## Summary
/// Returns a query to find a group by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> BoxedQuery<'static> {
    all().filter(group::id.eq(id))
}

/// ## Summary
/// Returns a query to find a group by slug.
#[must_use]
pub fn by_slug(slug: &str) -> BoxedQuery<'_> {
    all().filter(group::slug.eq(slug))
}

/// ## Summary
/// Returns a query to find a group by either ID or slug.
#[must_use]
pub fn by_identifier(identifier: &GroupIdentifier) -> BoxedQuery<'_> {
    match identifier {
        GroupIdentifier::Id(id) => by_id(*id),
        GroupIdentifier::Slug(slug) => by_slug(slug),
    }
}

/// ## Summary
/// Returns a query to find the groups with the given IDs.
#[must_use]
pub fn by_ids(ids: Vec<uuid::Uuid>) -> BoxedQuery<'static> {
    all().filter(group::id.eq_any(ids))
}

/// ## Summary
/// Returns a query for every stored slug equal to `base` or of the form
/// `base-<suffix>`.
#[must_use]
pub fn slugs_with_base(
    base: &str,
) -> group::BoxedQuery<'static, diesel::pg::Pg, diesel::sql_types::Text> {
    group::table
        .filter(
            group::slug
                .eq(base.to_string())
                .or(group::slug.like(format!("{base}-%"))),
        )
        .select(group::slug)
        .into_boxed()
}

/// ## Summary
/// Inserts a new group and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails, including a unique
/// violation on `group_slug_key` when the slug is already taken.
pub async fn create_group(
    conn: &mut DbConnection<'_>,
    new_group: &NewGroup<'_>,
) -> diesel::QueryResult<Group> {
    diesel::insert_into(group::table)
        .values(new_group)
        .returning(Group::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Retrieves a group by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_group(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> diesel::QueryResult<Option<Group>> {
    by_id(id)
        .select(Group::as_select())
        .get_result::<Group>(conn)
        .await
        .optional()
}

/// ## Summary
/// Retrieves a group by ID or slug.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find_group(
    conn: &mut DbConnection<'_>,
    identifier: &GroupIdentifier,
) -> diesel::QueryResult<Option<Group>> {
    by_identifier(identifier)
        .select(Group::as_select())
        .get_result::<Group>(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists all groups.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_groups(conn: &mut DbConnection<'_>) -> diesel::QueryResult<Vec<Group>> {
    all().select(Group::as_select()).load::<Group>(conn).await
}

/// ## Summary
/// Loads the slugs that compete with `base` for disambiguation.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn taken_slugs(
    conn: &mut DbConnection<'_>,
    base: &str,
) -> diesel::QueryResult<HashSet<String>> {
    let slugs = slugs_with_base(base).load::<String>(conn).await?;
    Ok(slugs.into_iter().collect())
}

/// ## Summary
/// Applies a changeset to a group and returns the updated record.
///
/// ## Errors
/// Returns a database error if the update fails or the group does not exist.
pub async fn update_group(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    changes: &GroupChanges,
) -> diesel::QueryResult<Group> {
    diesel::update(group::table.filter(group::id.eq(id)))
        .set(changes)
        .returning(Group::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Deletes a group row, returning the number of rows removed.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_group(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> diesel::QueryResult<usize> {
    diesel::delete(group::table.filter(group::id.eq(id)))
        .execute(conn)
        .await
}

/// ## Summary
/// Loads the groups that had an event end inside `window`.
///
/// Group ids are made distinct first, then the groups are loaded by id, so
/// a group with several qualifying events is returned once.
///
/// ## Errors
/// Returns a database error if either query fails.
pub async fn active_groups(
    conn: &mut DbConnection<'_>,
    window: ActivityWindow,
) -> diesel::QueryResult<Vec<Group>> {
    let group_ids = event::active_group_ids(window)
        .load::<uuid::Uuid>(conn)
        .await?;

    if group_ids.is_empty() {
        return Ok(Vec::new());
    }

    by_ids(group_ids)
        .select(Group::as_select())
        .load::<Group>(conn)
        .await
}

/// ## Summary
/// Loads the groups `user_id` is a member of, each once.
///
/// ## Errors
/// Returns a database error if either query fails.
pub async fn groups_with_member(
    conn: &mut DbConnection<'_>,
    user_id: uuid::Uuid,
) -> diesel::QueryResult<Vec<Group>> {
    let group_ids = membership::group_ids_for_user(user_id)
        .load::<uuid::Uuid>(conn)
        .await?;

    if group_ids.is_empty() {
        return Ok(Vec::new());
    }

    by_ids(group_ids)
        .select(Group::as_select())
        .load::<Group>(conn)
        .await
}
