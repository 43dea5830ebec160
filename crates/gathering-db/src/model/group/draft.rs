//! Group creation lifecycle.
//!
//! ## Summary
//! A group moves through three states before it is written:
//!
//! - [`GroupDraft`]: raw form input, nothing checked yet
//! - [`UnsluggedGroup`]: validated name and time zone, no slug assigned
//! - [`SluggedGroup`]: slug assigned exactly once, ready to insert
//!
//! The only way to obtain a [`NewGroup`] is through [`SluggedGroup`], so a
//! row without a slug can't be built and an existing slug can't be replaced.

use gathering_core::util::slug::{Slug, is_valid_slug};
use gathering_core::validation::{FieldError, ValidationErrors};

use super::{GroupChanges, NewGroup};
use crate::db::pg_types::GroupTimeZone;

/// Unvalidated group input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub time_zone: String,
    pub image: Option<String>,
}

impl GroupDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_zone: time_zone.into(),
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// ## Summary
    /// Checks every field and collects all failures.
    ///
    /// ## Errors
    /// Returns the field errors when the name is blank or the time zone is
    /// blank or not an IANA identifier.
    pub fn validate(self) -> Result<UnsluggedGroup, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push(FieldError::blank("name"));
        }

        let time_zone = match GroupTimeZone::parse(&self.time_zone) {
            Ok(tz) => Some(tz),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        errors.into_result()?;

        match time_zone {
            Some(time_zone) => Ok(UnsluggedGroup {
                name,
                time_zone,
                image: self.image,
            }),
            None => Err(FieldError::blank("time_zone").into()),
        }
    }
}

/// A validated group that has not been given a slug yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsluggedGroup {
    name: String,
    time_zone: GroupTimeZone,
    image: Option<String>,
}

impl UnsluggedGroup {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn time_zone(&self) -> GroupTimeZone {
        self.time_zone
    }

    /// The slug this group would get if nothing else had claimed it.
    #[must_use]
    pub fn base_slug(&self) -> Slug {
        Slug::derive(&self.name)
    }

    /// Assigns the slug. Consumes `self`, so it can happen only once.
    #[must_use]
    pub fn assign_slug(self, slug: Slug) -> SluggedGroup {
        SluggedGroup {
            id: uuid::Uuid::now_v7(),
            name: self.name,
            slug,
            time_zone: self.time_zone,
            image: self.image,
        }
    }
}

/// A validated group with its permanent slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SluggedGroup {
    id: uuid::Uuid,
    name: String,
    slug: Slug,
    time_zone: GroupTimeZone,
    image: Option<String>,
}

impl SluggedGroup {
    #[must_use]
    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    #[must_use]
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Gives the slug back, returning the group to the unslugged state. Used
    /// when the store rejects the slug and another candidate must be picked.
    #[must_use]
    pub fn release_slug(self) -> UnsluggedGroup {
        UnsluggedGroup {
            name: self.name,
            time_zone: self.time_zone,
            image: self.image,
        }
    }

    /// ## Summary
    /// Builds the insert row after re-checking the required columns.
    ///
    /// ## Errors
    /// Returns field errors if the name is blank or the slug is malformed.
    pub fn new_row(&self) -> Result<NewGroup<'_>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::blank("name"));
        }
        if !is_valid_slug(self.slug.as_str()) {
            errors.push(FieldError::invalid("slug"));
        }
        errors.into_result()?;

        Ok(NewGroup {
            id: self.id,
            name: &self.name,
            slug: self.slug.as_str(),
            time_zone: self.time_zone,
            image: self.image.as_deref(),
        })
    }
}

/// Unvalidated edit of an existing group. Fields left `None` are unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupEdit {
    pub name: Option<String>,
    pub time_zone: Option<String>,
    pub image: Option<Option<String>>,
}

impl GroupEdit {
    /// ## Summary
    /// Validates the provided fields and builds the changeset.
    ///
    /// ## Errors
    /// Returns field errors for a blank name or an unknown time zone.
    pub fn validate(self) -> Result<GroupChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.map(|n| n.trim().to_string());
        if name.as_deref().is_some_and(str::is_empty) {
            errors.push(FieldError::blank("name"));
        }

        let time_zone = match self.time_zone.as_deref().map(GroupTimeZone::parse) {
            Some(Ok(tz)) => Some(tz),
            Some(Err(e)) => {
                errors.push(e);
                None
            }
            None => None,
        };

        errors.into_result()?;

        Ok(GroupChanges {
            name,
            time_zone,
            image: self.image,
        })
    }
}
