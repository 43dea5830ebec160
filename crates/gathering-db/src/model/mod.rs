pub mod event;
pub mod group;
pub mod user;
