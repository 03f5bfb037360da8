//! Domain models for the Trip Weather Advisory service

mod advisory;
mod forecast;
mod location;

pub use advisory::*;
pub use forecast::*;
pub use location::*;
