//! Shared utilities for the heartbeat stats watcher.

pub mod humanize;
pub mod logging;
pub mod number;
pub mod time;

pub use humanize::{Accuracy, HumanTime, Tense};
pub use logging::{init_logging, LogFormat};
pub use number::group_thousands;
pub use time::{
    format_absolute_date, format_duration, format_whole_seconds, DurationFormatter, ZERO_DURATION,
};
