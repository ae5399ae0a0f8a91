//! Error returned when a value cannot be formatted.

use thiserror::Error;

/// Rejected input to one of the time formatters.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum FormatError {
    #[error("value is not a finite number")]
    NotFinite,

    #[error("negative duration: {0}s")]
    Negative(f64),

    #[error("duration too large: {0}s")]
    TooLarge(f64),

    #[error("timestamp {0} is outside the representable range")]
    OutOfRange(i64),
}
