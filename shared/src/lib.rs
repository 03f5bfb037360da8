//! Shared types and models for the Trip Weather Advisory service
//!
//! This crate contains types shared between the backend and any future
//! front-end components of the system.

pub mod alignment;
pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
