//! Domain models for the Trip Weather Advisory service
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
