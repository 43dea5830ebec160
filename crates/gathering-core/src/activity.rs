//! The trailing window used to decide whether a group is active.

use chrono::{DateTime, TimeDelta, Utc};

use crate::constants::ACTIVE_WINDOW_DAYS;

/// Half-open instant range `(start, end]`.
///
/// An event counts toward activity when its end instant falls strictly after
/// `start` and at or before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ActivityWindow {
    /// ## Summary
    /// The window of the last [`ACTIVE_WINDOW_DAYS`] days ending at `now`.
    #[must_use]
    pub fn trailing(now: DateTime<Utc>) -> Self {
        Self {
            start: now - TimeDelta::days(ACTIVE_WINDOW_DAYS),
            end: now,
        }
    }

    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant > self.start && instant <= self.end
    }
}
