//! # Hub Ports
//!
//! Outbound interfaces of the hub: where committed events go and where the
//! current time comes from.

use shared_types::{ProtocolEvent, Timestamp};

/// Receives every event of a committed call, in emission order.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: &ProtocolEvent);
}

/// Source of the timestamp used for deadlines, module windows and events.
pub trait Clock: Send + Sync {
    /// Seconds since the unix epoch.
    fn now(&self) -> Timestamp;
}
