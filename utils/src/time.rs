//! Duration and date formatting.
//!
//! Durations are broken down greedily over the fixed [`TimeUnit`] table and
//! joined as an English list: `"1 hour, 1 minute, and 1 second"`. Dates are
//! always rendered in UTC: `"05 March 2023 14:06:09 UTC"`.

use std::borrow::Cow;

use chrono::{DateTime, Datelike, Month, Timelike, Utc};
use heartbeat_types::{FormatError, TimeUnit, Timestamp};

/// Text for a duration with no whole second in it.
pub const ZERO_DURATION: &str = "just now";

/// Formats counts of seconds as human-readable durations.
///
/// The only configurable part is the text used for zero-length durations;
/// every call site of one deployment should share a single formatter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationFormatter {
    zero_text: Cow<'static, str>,
}

impl DurationFormatter {
    pub const fn new() -> Self {
        Self {
            zero_text: Cow::Borrowed(ZERO_DURATION),
        }
    }

    pub fn with_zero_text(zero_text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            zero_text: zero_text.into(),
        }
    }

    pub fn zero_text(&self) -> &str {
        &self.zero_text
    }

    /// Format `secs` seconds, discarding any sub-second remainder.
    ///
    /// NaN, infinite and negative input is rejected, as is anything that
    /// does not fit in a `u64` count of whole seconds.
    pub fn format(&self, secs: f64) -> Result<String, FormatError> {
        if !secs.is_finite() {
            return Err(FormatError::NotFinite);
        }
        if secs < 0.0 {
            return Err(FormatError::Negative(secs));
        }
        // `u64::MAX as f64` rounds up to 2^64, which is already out of range.
        if secs >= u64::MAX as f64 {
            return Err(FormatError::TooLarge(secs));
        }
        Ok(self.format_whole(secs.floor() as u64))
    }

    pub fn format_whole(&self, secs: u64) -> String {
        let phrases: Vec<String> = decompose(secs)
            .into_iter()
            .map(|(count, unit)| plural(count, unit.name()))
            .collect();
        join_phrases(&phrases).unwrap_or_else(|| self.zero_text.clone().into_owned())
    }
}

impl Default for DurationFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format `secs` seconds with the default zero text.
pub fn format_duration(secs: f64) -> Result<String, FormatError> {
    DurationFormatter::new().format(secs)
}

/// Infallible variant of [`format_duration`] for whole seconds.
pub fn format_whole_seconds(secs: u64) -> String {
    DurationFormatter::new().format_whole(secs)
}

/// Break `secs` into `(count, unit)` pairs, largest unit first, skipping
/// units with a zero count.
pub fn decompose(mut secs: u64) -> Vec<(u64, TimeUnit)> {
    let mut parts = Vec::new();
    for unit in TimeUnit::DESCENDING {
        let count = secs / unit.seconds();
        if count > 0 {
            parts.push((count, unit));
            secs -= count * unit.seconds();
        }
    }
    parts
}

/// `"1 day"`, `"2 days"`, `"0 days"`.
pub fn plural(n: u64, singular: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

/// Join phrases as an English list with a serial comma.
///
/// Returns `None` for an empty slice so the caller picks its own empty text.
pub fn join_phrases<S: AsRef<str>>(phrases: &[S]) -> Option<String> {
    match phrases {
        [] => None,
        [only] => Some(only.as_ref().to_owned()),
        [first, second] => Some(format!("{} and {}", first.as_ref(), second.as_ref())),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            Some(format!("{}, and {}", head.join(", "), last.as_ref()))
        }
    }
}

/// Render a Unix timestamp as `"DD MonthName YYYY HH:MM:SS UTC"`.
pub fn format_absolute_date(ts: Timestamp) -> Result<String, FormatError> {
    let dt: DateTime<Utc> = DateTime::from_timestamp(ts.as_secs(), 0)
        .ok_or(FormatError::OutOfRange(ts.as_secs()))?;
    let month = Month::try_from(dt.month() as u8)
        .map_err(|_| FormatError::OutOfRange(ts.as_secs()))?;
    Ok(format!(
        "{:02} {} {} {:02}:{:02}:{:02} UTC",
        dt.day(),
        month.name(),
        dt.year(),
        dt.hour(),
        dt.minute(),
        dt.second(),
    ))
}
