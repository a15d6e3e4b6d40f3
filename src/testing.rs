//! Test utilities and fake collectors.
//!
//! [`RecordingCollector`] keeps every invocation it receives so tests can
//! assert on exactly what the bridge UI reported, in order, without any
//! analytics backend.

use std::sync::{Arc, Mutex};

use crate::analytics::EventData;
use crate::traits::Collector;

/// One collector invocation as it was received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub name: String,
    pub data: Option<EventData>,
}

/// A fake collector that records events instead of sending them.
///
/// Clones share the same log, so hand one clone to
/// [`Analytics`](crate::Analytics) and keep another for assertions.
#[derive(Clone, Debug, Default)]
pub struct RecordingCollector {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded event, oldest first
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of times `track` was called
    pub fn call_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// The most recently recorded event
    pub fn last(&self) -> Option<RecordedEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    /// Recorded events with the given name
    pub fn events_named(&self, name: &str) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.name == name)
            .cloned()
            .collect()
    }

    /// Clear the event log
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Collector for RecordingCollector {
    fn track(&self, event_name: &str, event_data: Option<&EventData>) {
        self.events.lock().unwrap().push(RecordedEvent {
            name: event_name.to_string(),
            data: event_data.cloned(),
        });
    }
}
