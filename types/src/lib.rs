//! Fundamental types for the heartbeat stats watcher.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! timestamps, the fixed time-unit table, the stats feed payload and the
//! formatting error.

pub mod error;
pub mod stats;
pub mod time;
pub mod unit;

pub use error::FormatError;
pub use stats::{Device, Stats};
pub use time::Timestamp;
pub use unit::TimeUnit;
