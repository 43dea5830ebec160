use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use diesel::{pg::Pg, prelude::*};
use gathering_core::validation::{FieldError, ValidationErrors};

use crate::db::pg_types::GroupTimeZone;
use crate::{db::schema, model};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::event)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(model::group::Group, foreign_key = group_id))]
pub struct Event {
    pub id: uuid::Uuid,
    pub group_id: uuid::Uuid,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: Option<String>,
    pub location_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// An event is past once its end instant is before `now`.
    #[must_use]
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.end_at < now
    }

    #[must_use]
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        !self.is_past(now)
    }

    #[must_use]
    pub fn local_start(&self, time_zone: GroupTimeZone) -> DateTime<Tz> {
        time_zone.localize(self.start_at)
    }

    #[must_use]
    pub fn local_end(&self, time_zone: GroupTimeZone) -> DateTime<Tz> {
        time_zone.localize(self.end_at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = schema::event)]
pub struct NewEvent {
    pub id: uuid::Uuid,
    pub group_id: uuid::Uuid,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: Option<String>,
    pub location_url: Option<String>,
}

/// Unvalidated event input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub location: Option<String>,
    pub location_url: Option<String>,
}

impl EventDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            start_at,
            end_at,
            location: None,
            location_url: None,
        }
    }

    #[must_use]
    pub fn at_location(mut self, location: impl Into<String>, url: Option<String>) -> Self {
        self.location = Some(location.into());
        self.location_url = url;
        self
    }

    /// ## Summary
    /// Validates the draft and binds it to `group_id`.
    ///
    /// ## Errors
    /// Returns field errors for a blank name or an end before the start.
    pub fn validate(self, group_id: uuid::Uuid) -> Result<NewEvent, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push(FieldError::blank("name"));
        }
        if self.end_at < self.start_at {
            errors.push(FieldError::new("end_at", "must be after start_at"));
        }
        errors.into_result()?;

        Ok(NewEvent {
            id: uuid::Uuid::now_v7(),
            group_id,
            name,
            start_at: self.start_at,
            end_at: self.end_at,
            location: self.location,
            location_url: self.location_url,
        })
    }
}
