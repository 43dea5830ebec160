pub mod draft;
pub mod identifier;

use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::pg_types::GroupTimeZone;
use crate::db::schema;

pub use draft::{GroupDraft, GroupEdit, SluggedGroup, UnsluggedGroup};
pub use identifier::GroupIdentifier;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::group)]
#[diesel(check_for_backend(Pg))]
pub struct Group {
    pub id: uuid::Uuid,
    pub name: String,
    pub slug: String,
    pub time_zone: GroupTimeZone,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Group {
    #[must_use]
    pub fn summary(&self) -> GroupSummary {
        GroupSummary { id: self.id }
    }
}

/// Insert row for a group. Only obtainable from a [`SluggedGroup`], so a
/// group can't be written without its slug.
#[derive(Debug, Insertable)]
#[diesel(table_name = schema::group)]
pub struct NewGroup<'a> {
    id: uuid::Uuid,
    name: &'a str,
    slug: &'a str,
    time_zone: GroupTimeZone,
    image: Option<&'a str>,
}

impl NewGroup<'_> {
    #[must_use]
    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        self.slug
    }
}

/// Editable group columns. `slug` is assigned once at creation and never
/// rewritten, so it has no column here.
#[derive(Debug, Clone, Default, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = schema::group)]
pub struct GroupChanges {
    pub name: Option<String>,
    pub time_zone: Option<GroupTimeZone>,
    pub image: Option<Option<String>>,
}

impl GroupChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.time_zone.is_none() && self.image.is_none()
    }
}

/// Public serialised form of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub id: uuid::Uuid,
}
