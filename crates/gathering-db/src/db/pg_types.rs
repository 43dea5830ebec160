//! Custom `PostgreSQL` type mappings for Diesel
//!
//! Wraps domain values that are stored as plain text but must always hold a
//! validated value once loaded into Rust.

use std::fmt;
use std::io::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use gathering_core::time_zone::parse_time_zone;
use gathering_core::validation::FieldError;

/// IANA time zone stored in `group.time_zone`.
///
/// Construction goes through [`GroupTimeZone::parse`], so an unknown
/// identifier never reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub struct GroupTimeZone(Tz);

impl GroupTimeZone {
    /// ## Summary
    /// Parses an IANA identifier for the `time_zone` field.
    ///
    /// ## Errors
    /// Returns a field error when the identifier is blank or unknown.
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        parse_time_zone("time_zone", value).map(Self)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Converts an instant into this zone's wall-clock time.
    #[must_use]
    pub fn localize(self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.0)
    }
}

impl From<Tz> for GroupTimeZone {
    fn from(tz: Tz) -> Self {
        Self(tz)
    }
}

impl fmt::Display for GroupTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ToSql<Text, Pg> for GroupTimeZone {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.name().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for GroupTimeZone {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let value = std::str::from_utf8(bytes.as_bytes())?;
        value
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| format!("Unrecognized time zone: {value}").into())
    }
}
