//! Event sink adapters.

use crate::ports::EventSink;
use parking_lot::Mutex;
use shared_types::ProtocolEvent;
use tracing::{info, warn};

/// Keeps every published event in memory.
#[derive(Debug, Default)]
pub struct InMemoryEventSink {
    events: Mutex<Vec<ProtocolEvent>>,
}

impl InMemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    pub fn events(&self) -> Vec<ProtocolEvent> {
        self.events.lock().clone()
    }

    /// Names of published events, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(ProtocolEvent::name).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return everything published so far.
    pub fn drain(&self) -> Vec<ProtocolEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for InMemoryEventSink {
    fn publish(&self, event: &ProtocolEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Writes each event as one JSON line through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&self, event: &ProtocolEvent) {
        match event.to_json() {
            Ok(json) => info!(target: "social_graph::events", event = event.name(), %json),
            Err(e) => warn!(event = event.name(), error = %e, "Failed to encode event"),
        }
    }
}
