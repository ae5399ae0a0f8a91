//! Watcher configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use heartbeat_page::Slot;
use heartbeat_utils::{DurationFormatter, LogFormat, ZERO_DURATION};

use crate::{feed_url, parse_page_url, FeedError, DEFAULT_FEED_PATH};

/// Where formatted slot values are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// One `label: value` line per update on stdout.
    #[default]
    Stdout,
    /// One structured log event per update.
    Log,
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "log" => Ok(Self::Log),
            other => Err(format!("unknown sink `{other}` (expected `stdout` or `log`)")),
        }
    }
}

/// Configuration for the stats watcher.
///
/// Can be loaded from a TOML file via [`WatchConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// URL of the page being watched. Its path selects the page kind and its
    /// origin the feed endpoint.
    #[serde(default = "default_page_url")]
    pub page_url: String,

    /// Feed path on the page origin.
    #[serde(default = "default_feed_path")]
    pub feed_path: String,

    /// Text shown for zero-length durations.
    #[serde(default = "default_zero_duration_text")]
    pub zero_duration_text: String,

    #[serde(default)]
    pub sink: SinkKind,

    /// Slot keys to show. All slots of the page when absent.
    #[serde(default)]
    pub slots: Option<Vec<Slot>>,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_page_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_feed_path() -> String {
    DEFAULT_FEED_PATH.to_string()
}

fn default_zero_duration_text() -> String {
    ZERO_DURATION.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WatchConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FeedError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, FeedError> {
        toml::from_str(s).map_err(|e| FeedError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, FeedError> {
        toml::to_string_pretty(self).map_err(|e| FeedError::Config(e.to_string()))
    }

    /// Check that the page URL and feed path produce a usable endpoint.
    pub fn validate(&self) -> Result<(), FeedError> {
        let page = parse_page_url(&self.page_url)?;
        feed_url(&page, &self.feed_path)?;
        if self.slots.as_ref().is_some_and(Vec::is_empty) {
            return Err(FeedError::Config("`slots` must not be empty".into()));
        }
        Ok(())
    }

    pub fn duration_formatter(&self) -> DurationFormatter {
        DurationFormatter::with_zero_text(self.zero_duration_text.clone())
    }

    /// Whether `slot` should be shown.
    pub fn shows(&self, slot: Slot) -> bool {
        self.slots.as_ref().map_or(true, |slots| slots.contains(&slot))
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            feed_path: default_feed_path(),
            zero_duration_text: default_zero_duration_text(),
            sink: SinkKind::default(),
            slots: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
