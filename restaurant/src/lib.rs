pub mod api;
pub mod config;
pub mod errors;
pub mod messages;
pub mod restaurant_actors;
