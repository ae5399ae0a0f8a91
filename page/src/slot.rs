//! Named display slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PageError;

/// A named location on a page where one formatted value is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Slot {
    Visits,
    Devices,
    TotalBeats,
    Uptime,
    LastSeen,
    TimeDifference,
    LongestAbsence,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Self::Visits,
        Self::Devices,
        Self::TotalBeats,
        Self::Uptime,
        Self::LastSeen,
        Self::TimeDifference,
        Self::LongestAbsence,
    ];

    /// Stable string key of the slot.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Visits => "visits",
            Self::Devices => "devices",
            Self::TotalBeats => "total-beats",
            Self::Uptime => "uptime",
            Self::LastSeen => "last-seen",
            Self::TimeDifference => "time-difference",
            Self::LongestAbsence => "longest-absence",
        }
    }

    /// Short label for terminal output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visits => "Visits",
            Self::Devices => "Devices",
            Self::TotalBeats => "Total beats",
            Self::Uptime => "Uptime",
            Self::LastSeen => "Last seen",
            Self::TimeDifference => "Time since last beat",
            Self::LongestAbsence => "Longest absence",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Slot {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| PageError::UnknownSlot(s.to_owned()))
    }
}

impl TryFrom<String> for Slot {
    type Error = PageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.key().to_owned()
    }
}
