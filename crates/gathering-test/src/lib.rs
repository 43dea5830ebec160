//! Gathering directory - integration test support.
//!
//! Re-exports the workspace crates as one module tree so integration tests
//! reach everything through `gathering_test::` paths.

pub use gathering_core::{activity, constants, time_zone, util, validation};
pub use gathering_db::{db, model};
pub use gathering_service::{directory, error, group, roster};
