//! Persistence layer: schema, migrations, models and query builders.

pub mod db;
pub mod error;
pub mod model;
