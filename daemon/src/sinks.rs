//! Concrete display sinks for the terminal.

use std::io::Write;
use std::sync::{Arc, Mutex};

use heartbeat_page::{DisplaySink, Page, Slot, SlotMap};
use heartbeat_websocket::{SinkKind, WatchConfig};

/// Writes `label: text` lines to a shared writer.
pub struct LineSink<W> {
    label: &'static str,
    out: Arc<Mutex<W>>,
}

impl<W> LineSink<W> {
    pub fn new(label: &'static str, out: Arc<Mutex<W>>) -> Self {
        Self { label, out }
    }
}

impl<W: Write + Send> DisplaySink for LineSink<W> {
    fn set_text(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}: {}", self.label, text).and_then(|()| out.flush()) {
            tracing::warn!(label = self.label, "failed to write display line: {e}");
        }
    }
}

/// Emits one structured log event per update.
pub struct LogSink {
    slot: Slot,
}

impl LogSink {
    pub fn new(slot: Slot) -> Self {
        Self { slot }
    }
}

impl DisplaySink for LogSink {
    fn set_text(&self, text: &str) {
        tracing::info!(slot = %self.slot, text, "display updated");
    }
}

/// Bind every slot of `page` that the config shows to the configured sink.
pub fn bind_slots(config: &WatchConfig, page: Page) -> SlotMap {
    bind_slots_to(config, page, Arc::new(Mutex::new(std::io::stdout())))
}

fn bind_slots_to<W: Write + Send + 'static>(
    config: &WatchConfig,
    page: Page,
    out: Arc<Mutex<W>>,
) -> SlotMap {
    let mut slots = SlotMap::new();
    for &slot in page.slots().iter().filter(|&&s| config.shows(s)) {
        match config.sink {
            SinkKind::Stdout => slots.bind(slot, LineSink::new(slot.label(), out.clone())),
            SinkKind::Log => slots.bind(slot, LogSink::new(slot)),
        };
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartbeat_page::PageRenderer;
    use heartbeat_types::Stats;

    fn buffer() -> Arc<Mutex<Vec<u8>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn every_page_slot_is_bound_by_default() {
        let slots = bind_slots_to(&WatchConfig::default(), Page::Index, buffer());
        assert_eq!(slots.len(), 4);
        assert!(slots.is_bound(Slot::LastSeen));
        assert!(!slots.is_bound(Slot::Visits));
    }

    #[test]
    fn allow_list_limits_bound_slots() {
        let config = WatchConfig {
            slots: Some(vec![Slot::Uptime, Slot::LastSeen]),
            ..WatchConfig::default()
        };
        let slots = bind_slots_to(&config, Page::Stats, buffer());
        assert_eq!(slots.len(), 1);
        assert!(slots.is_bound(Slot::Uptime));
    }

    #[test]
    fn line_sink_writes_labelled_lines() {
        let out = buffer();
        let slots = bind_slots_to(&WatchConfig::default(), Page::Stats, out.clone());
        let renderer = PageRenderer::new(Page::Stats, slots);
        let stats = Stats {
            num_visits: 2_500,
            uptime: 90.0,
            ..Stats::default()
        };

        renderer.render(&stats).unwrap();

        let text = String::from_utf8(out.lock().unwrap().clone()).unwrap();
        assert_eq!(
            text,
            "Visits: 2,500\nDevices: 0\nTotal beats: 0\nUptime: 1 minute and 30 seconds\n"
        );
    }

    #[test]
    fn log_sinks_are_bound_when_configured() {
        let config = WatchConfig {
            sink: SinkKind::Log,
            ..WatchConfig::default()
        };
        let slots = bind_slots_to(&config, Page::Stats, buffer());
        assert_eq!(slots.len(), 4);
        // No subscriber is installed; logging must not panic.
        assert!(slots.set(Slot::Uptime, "1 second"));
    }
}
