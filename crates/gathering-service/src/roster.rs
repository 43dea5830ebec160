//! Users, memberships and event scheduling.

use gathering_core::validation::{FieldError, ValidationErrors};
use gathering_db::db::connection::DbConnection;
use gathering_db::db::query::{event, group, membership, user};
use gathering_db::model::event::{Event, EventDraft};
use gathering_db::model::user::membership::NewMembership;
use gathering_db::model::user::{NewUser, User};

use crate::error::{ServiceError, ServiceResult, is_foreign_key_violation};

/// ## Summary
/// Creates a user.
///
/// ## Errors
/// Returns `ValidationError` for a blank name or email, or a database error.
pub async fn create_user(
    conn: &mut DbConnection<'_>,
    name: &str,
    email: &str,
) -> ServiceResult<User> {
    let mut errors = ValidationErrors::new();
    if name.trim().is_empty() {
        errors.push(FieldError::blank("name"));
    }
    if email.trim().is_empty() {
        errors.push(FieldError::blank("email"));
    }
    errors.into_result()?;

    Ok(user::create_user(conn, &NewUser::new(name.trim(), email.trim())).await?)
}

/// ## Summary
/// Adds a user to a group. Returns `false` if they were already a member.
///
/// ## Errors
/// Returns `NotFound` if the user or group does not exist, or a database error.
#[tracing::instrument(skip(conn))]
pub async fn add_member(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
    user_id: uuid::Uuid,
) -> ServiceResult<bool> {
    let new_membership = NewMembership { user_id, group_id };
    match membership::create_membership(conn, &new_membership).await {
        Ok(inserted) => Ok(inserted),
        Err(e) if is_foreign_key_violation(&e) => Err(ServiceError::NotFound(format!(
            "user {user_id} or group {group_id}"
        ))),
        Err(e) => Err(e.into()),
    }
}

/// ## Summary
/// Removes a user from a group. Returns `false` if they were not a member.
///
/// ## Errors
/// Returns a database error if the delete fails.
#[tracing::instrument(skip(conn))]
pub async fn remove_member(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
    user_id: uuid::Uuid,
) -> ServiceResult<bool> {
    Ok(membership::delete_membership(conn, user_id, group_id).await?)
}

/// ## Summary
/// Validates and stores an event for a group.
///
/// ## Errors
/// Returns `ValidationError` for invalid fields, `NotFound` if the group
/// does not exist, or a database error.
#[tracing::instrument(skip(conn, draft))]
pub async fn schedule_event(
    conn: &mut DbConnection<'_>,
    group_id: uuid::Uuid,
    draft: EventDraft,
) -> ServiceResult<Event> {
    let new_event = draft.validate(group_id)?;

    if group::get_group(conn, group_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("group {group_id}")));
    }

    let created = event::create_event(conn, &new_event).await?;
    tracing::debug!(event_id = %created.id, "Event scheduled");

    Ok(created)
}
