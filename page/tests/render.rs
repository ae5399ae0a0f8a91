//! Rendering whole pages into recording displays.

use heartbeat_nullables::NullPage;
use heartbeat_page::{Page, PageError, PageRenderer, Slot, NEVER_SEEN};
use heartbeat_types::{Device, FormatError, Stats, Timestamp};
use heartbeat_utils::DurationFormatter;

fn device(id: &str, beats: u64) -> Device {
    Device {
        id: id.to_owned(),
        name: Some(format!("device-{id}")),
        last_beat: Some(Timestamp::new(1_678_025_169)),
        num_beats: beats,
    }
}

fn sample() -> Stats {
    Stats {
        num_visits: 48_213,
        total_beats: 1_500_000,
        uptime: 90.0,
        last_seen: Some(Timestamp::new(1_678_025_169)),
        last_seen_relative: 3661.0,
        longest_absence: 31_536_000.0 + 2.0 * 86_400.0,
        devices: vec![device("1", 1_000_000), device("2", 500_000)],
    }
}

#[test]
fn index_page_fills_its_slots() {
    let page = NullPage::new();
    let renderer = PageRenderer::new(Page::Index, page.slot_map());

    assert_eq!(renderer.render(&sample()), Ok(4));
    assert_eq!(
        page.text(Slot::LastSeen).as_deref(),
        Some("05 March 2023 14:06:09 UTC")
    );
    assert_eq!(
        page.text(Slot::TimeDifference).as_deref(),
        Some("1 hour, 1 minute, and 1 second")
    );
    assert_eq!(
        page.text(Slot::LongestAbsence).as_deref(),
        Some("1 year and 2 days")
    );
    assert_eq!(page.text(Slot::TotalBeats).as_deref(), Some("1,500,000"));
    // Stats-only slots are untouched.
    assert_eq!(page.text(Slot::Visits), None);
    assert_eq!(page.text(Slot::Uptime), None);
}

#[test]
fn stats_page_fills_its_slots() {
    let page = NullPage::new();
    let renderer = PageRenderer::new(Page::from_path("/stats"), page.slot_map());

    assert_eq!(renderer.render(&sample()), Ok(4));
    assert_eq!(page.text(Slot::Visits).as_deref(), Some("48,213"));
    assert_eq!(page.text(Slot::Devices).as_deref(), Some("2"));
    assert_eq!(page.text(Slot::TotalBeats).as_deref(), Some("1,500,000"));
    assert_eq!(
        page.text(Slot::Uptime).as_deref(),
        Some("1 minute and 30 seconds")
    );
    assert_eq!(page.text(Slot::LastSeen), None);
}

#[test]
fn unbound_slots_are_skipped() {
    let page = NullPage::with_slots(&[Slot::Uptime]);
    let renderer = PageRenderer::new(Page::Stats, page.slot_map());

    assert_eq!(renderer.render(&sample()), Ok(1));
    assert_eq!(page.writes(), 1);
}

#[test]
fn rejected_snapshot_writes_nothing() {
    let page = NullPage::new();
    let renderer = PageRenderer::new(Page::Index, page.slot_map());
    let stats = Stats {
        last_seen_relative: f64::INFINITY,
        ..sample()
    };

    assert_eq!(
        renderer.render(&stats),
        Err(PageError::Format {
            slot: Slot::TimeDifference,
            source: FormatError::NotFinite,
        })
    );
    assert_eq!(page.writes(), 0);
}

#[test]
fn missing_last_seen_renders_never() {
    let page = NullPage::new();
    let renderer = PageRenderer::new(Page::Index, page.slot_map());
    let stats = Stats {
        last_seen: None,
        last_seen_relative: 0.0,
        ..sample()
    };

    renderer.render(&stats).unwrap();
    assert_eq!(page.text(Slot::LastSeen).as_deref(), Some(NEVER_SEEN));
    assert_eq!(page.text(Slot::TimeDifference).as_deref(), Some("just now"));
}

#[test]
fn configured_zero_text_reaches_every_duration_slot() {
    let page = NullPage::new();
    let renderer = PageRenderer::new(Page::Index, page.slot_map())
        .with_formatter(DurationFormatter::with_zero_text("0 seconds"));
    let stats = Stats {
        last_seen_relative: 0.0,
        longest_absence: 0.4,
        ..sample()
    };

    renderer.render(&stats).unwrap();
    assert_eq!(page.text(Slot::TimeDifference).as_deref(), Some("0 seconds"));
    assert_eq!(page.text(Slot::LongestAbsence).as_deref(), Some("0 seconds"));
}

#[test]
fn successive_snapshots_overwrite() {
    let page = NullPage::new();
    let renderer = PageRenderer::new(Page::Stats, page.slot_map());

    renderer.render(&Stats { uptime: 1.0, ..sample() }).unwrap();
    renderer.render(&Stats { uptime: 2.0, ..sample() }).unwrap();

    let uptime = page.display(Slot::Uptime).unwrap();
    assert_eq!(uptime.history(), vec!["1 second", "2 seconds"]);
}
