//! Business logic services for the Trip Weather Advisory service

pub mod advisory;

pub use advisory::AdvisoryService;
