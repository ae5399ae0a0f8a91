//! Display sinks and the slot-to-sink mapping.

use std::collections::HashMap;
use std::fmt;

use crate::Slot;

/// Something a formatted value can be written into.
pub trait DisplaySink: Send + Sync {
    /// Replace the displayed text.
    fn set_text(&self, text: &str);
}

impl<F> DisplaySink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn set_text(&self, text: &str) {
        self(text)
    }
}

/// Explicit binding of display slots to sinks.
///
/// Slots without a sink are not shown; writes to them are dropped.
#[derive(Default)]
pub struct SlotMap {
    sinks: HashMap<Slot, Box<dyn DisplaySink>>,
}

impl SlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `slot` to `sink`, replacing any previous binding.
    pub fn bind(&mut self, slot: Slot, sink: impl DisplaySink + 'static) -> &mut Self {
        self.sinks.insert(slot, Box::new(sink));
        self
    }

    pub fn unbind(&mut self, slot: Slot) -> bool {
        self.sinks.remove(&slot).is_some()
    }

    pub fn is_bound(&self, slot: Slot) -> bool {
        self.sinks.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Write `text` into `slot`. Returns `false` when the slot is unbound.
    pub fn set(&self, slot: Slot, text: &str) -> bool {
        match self.sinks.get(&slot) {
            Some(sink) => {
                sink.set_text(text);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for SlotMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<Slot> = self.sinks.keys().copied().collect();
        bound.sort();
        f.debug_struct("SlotMap").field("bound", &bound).finish()
    }
}
