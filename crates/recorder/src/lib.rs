//! Request logging: the capability contract, the in-memory implementation,
//! and the idle-session sweeper.

pub mod logger;
pub mod memory;
pub mod sweeper;

pub use logger::{NullRequestLogger, RequestLogger};
pub use memory::{InMemoryRequestLogger, RecorderConfig};
pub use sweeper::{SessionSweeper, SweeperConfig};
