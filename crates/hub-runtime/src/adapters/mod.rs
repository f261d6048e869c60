//! Port implementations: clocks, event sinks, and the gates that connect
//! the publication graph and interaction engine to the rest of the hub.

mod clock;
mod events;
mod gates;

pub use clock::{ManualClock, SystemClock};
pub use events::{InMemoryEventSink, TracingEventSink};
pub use gates::{CollectGateAdapter, FollowGateAdapter, HubView, PublicationGateAdapter};
