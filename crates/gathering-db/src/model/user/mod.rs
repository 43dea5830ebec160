pub mod membership;

use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Identifiable, Queryable, Selectable)]
#[diesel(table_name = schema::user)]
#[diesel(check_for_backend(Pg))]
pub struct User {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Insertable)]
#[diesel(table_name = schema::user)]
pub struct NewUser<'a> {
    pub id: uuid::Uuid,
    pub name: &'a str,
    pub email: &'a str,
}

impl<'a> NewUser<'a> {
    #[must_use]
    pub fn new(name: &'a str, email: &'a str) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            name,
            email,
        }
    }
}
