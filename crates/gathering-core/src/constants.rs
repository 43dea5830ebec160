/// Length of the trailing window, in days, used to classify a group as active.
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

/// Base used when a group name produces no slug characters at all.
pub const FALLBACK_SLUG_BASE: &str = "group";

/// Highest numeric suffix tried when disambiguating a taken slug.
pub const MAX_SLUG_SUFFIX: u32 = 1000;

/// Insert attempts before a slug race against concurrent creations is reported.
pub const MAX_SLUG_ATTEMPTS: u32 = 5;

/// Name of the storage-level uniqueness constraint on `group.slug`.
pub const GROUP_SLUG_CONSTRAINT: &str = "group_slug_key";
