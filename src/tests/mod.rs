
use std::cell::RefCell;

use crate::{Digest, EventLevel, EventSink};

/// Digests of the single-byte chunks `"a"`, `"b"`, ... (test convenience).
pub(crate) fn letter_digests(count: usize) -> Vec<Digest> {
    assert!(count <= 26);
    (0..count)
        .map(|i| Digest::hash(&[b'a' + i as u8]))
        .collect()
}

/// Digests of little-endian encoded integers (test convenience).
pub(crate) fn numbered_digests(count: usize) -> Vec<Digest> {
    (0..count)
        .map(|i| Digest::hash(&(i as u64).to_le_bytes()))
        .collect()
}

/// Sink that records every event for assertions.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub events: RefCell<Vec<(EventLevel, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages_at(&self, level: EventLevel) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn on_event(&self, level: EventLevel, message: &str) {
        self.events.borrow_mut().push((level, message.to_string()));
    }
}
