//! Timestamp type used for absolute-date formatting.
//!
//! Timestamps are Unix epoch seconds (UTC). They are signed so that instants
//! before 1970 stay representable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::FormatError;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// Convert a floating count of seconds, discarding the sub-second part.
    ///
    /// NaN and infinities are rejected; values beyond the `i64` range are
    /// reported as out of range.
    pub fn from_secs_f64(secs: f64) -> Result<Self, FormatError> {
        if !secs.is_finite() {
            return Err(FormatError::NotFinite);
        }
        let floored = secs.floor();
        if floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
            return Err(FormatError::OutOfRange(if floored < 0.0 { i64::MIN } else { i64::MAX }));
        }
        Ok(Self(floored as i64))
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        };
        Self(secs)
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Signed seconds from this timestamp to `now` (positive when `now` is later).
    pub fn seconds_until(&self, now: Timestamp) -> i64 {
        now.0.saturating_sub(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
