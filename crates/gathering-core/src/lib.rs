//! Domain primitives shared across the gathering workspace.
//!
//! Nothing in this crate touches the database: slug derivation, time zone
//! parsing, the activity window and field validation are all pure.

pub mod activity;
pub mod config;
pub mod constants;
pub mod time_zone;
pub mod util;
pub mod validation;
