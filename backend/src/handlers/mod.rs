//! HTTP handlers for the Trip Weather Advisory service

pub mod advisory;
pub mod geo;
pub mod health;

pub use advisory::get_advisory;
pub use geo::{geocode, solve_route};
pub use health::health_check;
