//! Core telemetry types for the lookout recorder.

pub mod error;
pub mod limits;
pub mod request;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use request::*;
pub use session::*;
pub use store::*;
