//! Structured logging for the lookout service.

pub mod tracing_setup;

pub use tracing_setup::*;
