pub mod event;
pub mod group;
pub mod membership;
pub mod user;
