//! Payload published on the stats feed.
//!
//! Durations arrive as counts of seconds and are kept as `f64` so that the
//! formatters see exactly what the feed sent, including values they must
//! reject. The three durations are required: a snapshot without one fails
//! to decode instead of rendering as zero.

use serde::{Deserialize, Deserializer, Serialize};

use crate::Timestamp;

/// A registered device and its beat history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Snowflake id. The feed may send it as a string or a number.
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_beat: Option<Timestamp>,
    #[serde(default)]
    pub num_beats: u64,
}

/// One snapshot of the server statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub num_visits: u64,
    #[serde(default)]
    pub total_beats: u64,
    /// Server uptime in seconds.
    pub uptime: f64,
    /// Most recent beat from any device; `None` before the first beat.
    #[serde(default)]
    pub last_seen: Option<Timestamp>,
    /// Seconds since `last_seen`.
    pub last_seen_relative: f64,
    /// Longest gap between two beats, in seconds.
    pub longest_absence: f64,
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl Stats {
    pub fn num_devices(&self) -> usize {
        self.devices.len()
    }
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Unsigned(n) => n.to_string(),
        Id::Signed(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "num_visits": 1234,
        "total_beats": 98765,
        "uptime": 3661,
        "last_seen": 1678025169,
        "last_seen_relative": 90,
        "longest_absence": 31708800,
        "devices": [
            {"id": "1092387409823749120", "name": "desktop", "last_beat": 1678025169, "num_beats": 500},
            {"id": 42, "name": null, "last_beat": null, "num_beats": 0}
        ]
    }"#;

    #[test]
    fn decodes_full_payload() {
        let stats: Stats = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(stats.num_visits, 1234);
        assert_eq!(stats.total_beats, 98765);
        assert_eq!(stats.uptime, 3661.0);
        assert_eq!(stats.last_seen, Some(Timestamp::new(1_678_025_169)));
        assert_eq!(stats.num_devices(), 2);
        assert_eq!(stats.devices[0].id, "1092387409823749120");
        assert_eq!(stats.devices[1].id, "42");
        assert_eq!(stats.devices[1].name, None);
    }

    #[test]
    fn missing_counts_use_defaults() {
        let stats: Stats = serde_json::from_str(
            r#"{"uptime": 0, "last_seen": null, "last_seen_relative": 0, "longest_absence": 0}"#,
        )
        .unwrap();
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn missing_durations_are_rejected() {
        assert!(serde_json::from_str::<Stats>(r#"{"num_visits": 5}"#).is_err());
        assert!(serde_json::from_str::<Stats>(
            r#"{"uptime": 1, "last_seen_relative": 2}"#
        )
        .is_err());
        assert!(serde_json::from_str::<Stats>(
            r#"{"last_seen_relative": 2, "longest_absence": 3}"#
        )
        .is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let stats: Stats = serde_json::from_str(
            r#"{"total_beats": 3, "uptime": 0, "last_seen_relative": 0, "longest_absence": 0, "extra": true}"#,
        )
        .unwrap();
        assert_eq!(stats.total_beats, 3);
    }

    #[test]
    fn negative_device_id_is_accepted() {
        let dev: Device = serde_json::from_str(r#"{"id": -7}"#).unwrap();
        assert_eq!(dev.id, "-7");
    }
}
