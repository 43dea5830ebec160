mod events;
mod helpers;
mod membership;
