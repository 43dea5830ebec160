//! Query functions for users.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::user;
use crate::model::user::{NewUser, User};

/// ## Summary
/// Inserts a new user and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_user(
    conn: &mut DbConnection<'_>,
    new_user: &NewUser<'_>,
) -> diesel::QueryResult<User> {
    diesel::insert_into(user::table)
        .values(new_user)
        .returning(User::as_returning())
        .get_result(conn)
        .await
}
