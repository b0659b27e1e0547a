//! HTTP viewer and recording middleware for the lookout recorder.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
