//! The index and stats page views.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use heartbeat_types::{FormatError, Stats};
use heartbeat_utils::{format_absolute_date, group_thousands, DurationFormatter};

use crate::{PageError, Slot, SlotMap};

/// Shown in `last-seen` before the first beat was ever received.
///
/// The server sends `null` in that case. Formatting it as a timestamp would
/// claim a beat at the Unix epoch ("01 January 1970 00:00:00 UTC"), so the
/// slot gets this word instead.
pub const NEVER_SEEN: &str = "never";

/// Which page is being kept up to date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Last-seen summary, served at `/`.
    Index,
    /// Visit, device and beat counters; every other path.
    Stats,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path == "/" {
            Self::Index
        } else {
            Self::Stats
        }
    }

    /// Slots this page writes, in display order.
    pub const fn slots(self) -> &'static [Slot] {
        match self {
            Self::Index => &[
                Slot::LastSeen,
                Slot::TimeDifference,
                Slot::LongestAbsence,
                Slot::TotalBeats,
            ],
            Self::Stats => &[Slot::Visits, Slot::Devices, Slot::TotalBeats, Slot::Uptime],
        }
    }

    /// Format every slot of this page for one snapshot.
    ///
    /// Fails on the first value that cannot be formatted.
    pub fn texts(
        self,
        stats: &Stats,
        durations: &DurationFormatter,
    ) -> Result<Vec<(Slot, String)>, PageError> {
        self.slots()
            .iter()
            .map(|&slot| {
                slot_text(slot, stats, durations)
                    .map(|text| (slot, text))
                    .map_err(|source| PageError::Format { slot, source })
            })
            .collect()
    }
}

fn slot_text(slot: Slot, stats: &Stats, durations: &DurationFormatter) -> Result<String, FormatError> {
    match slot {
        Slot::Visits => Ok(group_thousands(stats.num_visits)),
        Slot::Devices => Ok(group_thousands(stats.num_devices())),
        Slot::TotalBeats => Ok(group_thousands(stats.total_beats)),
        Slot::Uptime => durations.format(stats.uptime),
        Slot::LastSeen => match stats.last_seen {
            Some(ts) => format_absolute_date(ts),
            None => Ok(NEVER_SEEN.to_owned()),
        },
        Slot::TimeDifference => durations.format(stats.last_seen_relative),
        Slot::LongestAbsence => durations.format(stats.longest_absence),
    }
}

/// Writes stats snapshots into the slots of one page.
#[derive(Debug)]
pub struct PageRenderer {
    page: Page,
    slots: SlotMap,
    durations: DurationFormatter,
}

impl PageRenderer {
    pub fn new(page: Page, slots: SlotMap) -> Self {
        Self {
            page,
            slots,
            durations: DurationFormatter::new(),
        }
    }

    pub fn with_formatter(mut self, durations: DurationFormatter) -> Self {
        self.durations = durations;
        self
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn slots(&self) -> &SlotMap {
        &self.slots
    }

    /// Update the page from a snapshot and return how many slots were written.
    ///
    /// Either every bound slot is updated or, when a value is rejected, none.
    pub fn render(&self, stats: &Stats) -> Result<usize, PageError> {
        let texts = self.page.texts(stats, &self.durations)?;
        let mut written = 0;
        for (slot, text) in &texts {
            if self.slots.set(*slot, text) {
                trace!(%slot, %text, "slot updated");
                written += 1;
            } else {
                debug!(%slot, "slot not bound, skipping");
            }
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_index() {
        assert_eq!(Page::from_path("/"), Page::Index);
        assert_eq!(Page::from_path("/stats"), Page::Stats);
        assert_eq!(Page::from_path(""), Page::Stats);
        assert_eq!(Page::from_path("/index.html"), Page::Stats);
    }

    #[test]
    fn stats_page_texts() {
        let stats = Stats {
            num_visits: 1_234_567,
            total_beats: 4_200,
            uptime: 3661.0,
            ..Stats::default()
        };
        let texts = Page::Stats.texts(&stats, &DurationFormatter::new()).unwrap();
        assert_eq!(
            texts,
            vec![
                (Slot::Visits, "1,234,567".to_owned()),
                (Slot::Devices, "0".to_owned()),
                (Slot::TotalBeats, "4,200".to_owned()),
                (Slot::Uptime, "1 hour, 1 minute, and 1 second".to_owned()),
            ]
        );
    }

    #[test]
    fn index_page_without_beats_shows_never() {
        let texts = Page::Index
            .texts(&Stats::default(), &DurationFormatter::new())
            .unwrap();
        assert_eq!(texts[0], (Slot::LastSeen, NEVER_SEEN.to_owned()));
        assert_eq!(texts[1], (Slot::TimeDifference, "just now".to_owned()));
    }

    #[test]
    fn rejected_value_names_its_slot() {
        let stats = Stats {
            longest_absence: -5.0,
            ..Stats::default()
        };
        let err = Page::Index
            .texts(&stats, &DurationFormatter::new())
            .unwrap_err();
        assert_eq!(
            err,
            PageError::Format {
                slot: Slot::LongestAbsence,
                source: FormatError::Negative(-5.0),
            }
        );
    }

    #[test]
    fn stats_page_ignores_index_only_fields() {
        let stats = Stats {
            last_seen_relative: f64::NAN,
            ..Stats::default()
        };
        assert!(Page::Stats.texts(&stats, &DurationFormatter::new()).is_ok());
    }
}
