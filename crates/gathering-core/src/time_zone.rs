//! IANA time zone parsing for group settings.

use chrono_tz::Tz;

use crate::validation::FieldError;

/// ## Summary
/// Parses an IANA time zone identifier such as `"America/New_York"`.
///
/// Blank input and unknown identifiers are reported as field errors on
/// `field` rather than as faults.
///
/// ## Errors
/// Returns a [`FieldError`] when the value is blank or not a known zone.
pub fn parse_time_zone(field: &'static str, value: &str) -> Result<Tz, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::blank(field));
    }

    value
        .parse::<Tz>()
        .map_err(|_| FieldError::new(field, "is not included in the list"))
}
