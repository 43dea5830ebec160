//! Group directory operations: creation with slug assignment, editing,
//! cascade deletion, and the activity and membership reads.

pub mod directory;
pub mod error;
pub mod group;
pub mod roster;
