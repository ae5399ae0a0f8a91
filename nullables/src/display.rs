//! Nullable display: record slot writes instead of showing them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use heartbeat_page::{DisplaySink, Slot, SlotMap};

/// A display sink that remembers everything written to it.
///
/// Clones share the same record, so one clone can be bound into a
/// [`SlotMap`] while the test keeps the other.
#[derive(Clone, Default)]
pub struct NullDisplay {
    history: Arc<Mutex<Vec<String>>>,
}

impl NullDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed text, if anything was written.
    pub fn text(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    /// Every text written, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn writes(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panicking writer cannot leave the Vec half-updated.
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DisplaySink for NullDisplay {
    fn set_text(&self, text: &str) {
        self.lock().push(text.to_owned());
    }
}

/// A whole page of [`NullDisplay`]s, one per bound slot.
#[derive(Clone, Default)]
pub struct NullPage {
    displays: HashMap<Slot, NullDisplay>,
}

impl NullPage {
    /// A page with every slot bound.
    pub fn new() -> Self {
        Self::with_slots(&Slot::ALL)
    }

    pub fn with_slots(slots: &[Slot]) -> Self {
        Self {
            displays: slots.iter().map(|&s| (s, NullDisplay::new())).collect(),
        }
    }

    /// A [`SlotMap`] writing into this page's displays.
    pub fn slot_map(&self) -> SlotMap {
        let mut map = SlotMap::new();
        for (&slot, display) in &self.displays {
            map.bind(slot, display.clone());
        }
        map
    }

    pub fn text(&self, slot: Slot) -> Option<String> {
        self.displays.get(&slot).and_then(NullDisplay::text)
    }

    pub fn display(&self, slot: Slot) -> Option<&NullDisplay> {
        self.displays.get(&slot)
    }

    /// Total number of writes across all slots.
    pub fn writes(&self) -> usize {
        self.displays.values().map(NullDisplay::writes).sum()
    }
}
