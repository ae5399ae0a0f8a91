//! Page views for the heartbeat stats feed.
//!
//! A page is a set of named display slots. Each stats snapshot is formatted
//! and written into the slots the current page shows:
//! - the index page shows when a beat was last seen and the longest absence;
//! - the stats page shows visit, device and beat counts and server uptime.
//!
//! Slots are bound explicitly through a [`SlotMap`]; nothing is looked up
//! globally.

pub mod error;
pub mod sink;
pub mod slot;
pub mod view;

pub use error::PageError;
pub use sink::{DisplaySink, SlotMap};
pub use slot::Slot;
pub use view::{Page, PageRenderer, NEVER_SEEN};
