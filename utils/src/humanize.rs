//! Human-friendly rendering of signed time offsets.
//!
//! A [`HumanTime`] is a signed number of seconds relative to now: negative
//! values lie in the past. Rough output picks a single approximate period
//! ("an hour", "3 weeks ago"); precise output lists every unit the way
//! [`format_duration`](crate::format_duration) does.

use std::fmt;

use heartbeat_types::unit::{DAY, HOUR, MINUTE, MONTH, WEEK, YEAR};
use heartbeat_types::Timestamp;

use crate::time::{decompose, join_phrases, plural};

/// Offsets within this many seconds read as "now" in rough output.
const NOW_WINDOW: u64 = 10;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Tense {
    Past,
    Present,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Accuracy {
    Rough,
    Precise,
}

#[derive(Clone, Copy, Debug)]
enum Period {
    Now,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Weeks(u64),
    Months(u64),
    Years(u64),
}

impl Period {
    fn rough_text(self) -> String {
        match self {
            Self::Now => "now".to_owned(),
            Self::Seconds(n) => rough(n, "a", "second"),
            Self::Minutes(n) => rough(n, "a", "minute"),
            Self::Hours(n) => rough(n, "an", "hour"),
            Self::Days(n) => rough(n, "a", "day"),
            Self::Weeks(n) => rough(n, "a", "week"),
            Self::Months(n) => rough(n, "a", "month"),
            Self::Years(n) => rough(n, "a", "year"),
        }
    }

    /// The single period closest to `secs`.
    fn approximate(secs: u64) -> Self {
        match secs {
            n if n > 547 * DAY => Self::Years((n / YEAR).max(2)),
            n if n > 345 * DAY => Self::Years(1),
            n if n > 45 * DAY => Self::Months((n / MONTH).max(2)),
            n if n > 29 * DAY => Self::Months(1),
            n if n > 10 * DAY + 12 * HOUR => Self::Weeks((n / WEEK).max(2)),
            n if n > 6 * DAY + 12 * HOUR => Self::Weeks(1),
            n if n > 36 * HOUR => Self::Days((n / DAY).max(2)),
            n if n > 22 * HOUR => Self::Days(1),
            n if n > 90 * MINUTE => Self::Hours((n / HOUR).max(2)),
            n if n > 45 * MINUTE => Self::Hours(1),
            n if n > 90 => Self::Minutes((n / MINUTE).max(2)),
            n if n > 45 => Self::Minutes(1),
            n if n > NOW_WINDOW => Self::Seconds(n),
            _ => Self::Now,
        }
    }
}

fn rough(n: u64, article: &str, singular: &str) -> String {
    if n == 1 {
        format!("{article} {singular}")
    } else {
        plural(n, singular)
    }
}

/// A signed offset in seconds, rendered for people.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HumanTime(i64);

impl HumanTime {
    pub fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// The offset of `at` as seen from `now`.
    pub fn between(now: Timestamp, at: Timestamp) -> Self {
        Self(now.seconds_until(at))
    }

    /// The offset of `at` from the system clock.
    pub fn from_now(at: Timestamp) -> Self {
        Self::between(Timestamp::now(), at)
    }

    pub fn as_secs(self) -> i64 {
        self.0
    }

    /// The tense output gets when none is given explicitly.
    pub fn tense(self, accuracy: Accuracy) -> Tense {
        if accuracy == Accuracy::Rough && self.0.unsigned_abs() <= NOW_WINDOW {
            Tense::Present
        } else if self.0 < 0 {
            Tense::Past
        } else {
            Tense::Present
        }
    }

    pub fn to_text(self, accuracy: Accuracy, tense: Tense) -> String {
        let magnitude = self.0.unsigned_abs();
        let text = match accuracy {
            Accuracy::Rough => Period::approximate(magnitude).rough_text(),
            Accuracy::Precise => {
                let phrases: Vec<String> = decompose(magnitude)
                    .into_iter()
                    .map(|(count, unit)| plural(count, unit.name()))
                    .collect();
                join_phrases(&phrases).unwrap_or_else(|| plural(0, "second"))
            }
        };
        match tense {
            Tense::Past => format!("{text} ago"),
            Tense::Present => text,
        }
    }
}

impl From<i64> for HumanTime {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl fmt::Display for HumanTime {
    /// Rough by default; `{:#}` renders precisely.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accuracy = if f.alternate() {
            Accuracy::Precise
        } else {
            Accuracy::Rough
        };
        f.pad(&self.to_text(accuracy, self.tense(accuracy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rough(secs: i64) -> String {
        format!("{}", HumanTime::from_secs(secs))
    }

    fn precise(secs: i64) -> String {
        format!("{:#}", HumanTime::from_secs(secs))
    }

    #[test]
    fn rough_near_zero_is_now() {
        assert_eq!(rough(0), "now");
        assert_eq!(rough(10), "now");
        assert_eq!(rough(-10), "now");
    }

    #[test]
    fn rough_uses_articles_for_one() {
        assert_eq!(rough(50), "a minute");
        assert_eq!(rough(50 * 60), "an hour");
        assert_eq!(rough(23 * 3600), "a day");
        assert_eq!(rough(7 * 86_400), "a week");
        assert_eq!(rough(30 * 86_400), "a month");
        assert_eq!(rough(350 * 86_400), "a year");
    }

    #[test]
    fn rough_counts_have_a_floor_of_two() {
        assert_eq!(rough(11), "11 seconds");
        assert_eq!(rough(91), "2 minutes");
        assert_eq!(rough(37 * 3600), "2 days");
        assert_eq!(rough(600 * 86_400), "2 years");
        assert_eq!(rough(3 * 365 * 86_400), "3 years");
    }

    #[test]
    fn past_offsets_read_as_ago() {
        assert_eq!(rough(-3 * 3600), "3 hours ago");
        assert_eq!(precise(-90), "1 minute and 30 seconds ago");
    }

    #[test]
    fn precise_matches_duration_grammar() {
        assert_eq!(precise(3661), "1 hour, 1 minute, and 1 second");
        assert_eq!(precise(0), "0 seconds");
    }

    #[test]
    fn extreme_offsets_do_not_overflow() {
        assert!(rough(i64::MIN).ends_with("years ago"));
        assert!(rough(i64::MAX).ends_with("years"));
    }

    #[test]
    fn instants_before_now_are_past() {
        let now = Timestamp::new(1_678_025_169);
        let earlier = HumanTime::between(now, Timestamp::new(1_678_025_169 - 90));
        assert_eq!(earlier.as_secs(), -90);
        assert_eq!(format!("{earlier:#}"), "1 minute and 30 seconds ago");
        let later = HumanTime::between(now, Timestamp::new(1_678_025_169 + 7200));
        assert_eq!(format!("{later}"), "2 hours");
    }

    #[test]
    fn from_now_reads_the_system_clock() {
        let at = Timestamp::new(Timestamp::now().as_secs() - 3 * 3600);
        assert_eq!(HumanTime::from_now(at).to_string(), "3 hours ago");
    }

    #[test]
    fn explicit_tense_overrides_default() {
        let t = HumanTime::from(120);
        assert_eq!(t.to_text(Accuracy::Rough, Tense::Past), "2 minutes ago");
        assert_eq!(t.tense(Accuracy::Precise), Tense::Present);
    }
}
