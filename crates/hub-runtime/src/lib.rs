//! # Social Graph Hub Runtime
//!
//! Wires the hub components into [`SocialHub`], the single entry point
//! through which all profile, publication, follow and collect state changes.
//!
//! ## Modular Structure
//!
//! - `container/` - Hub configuration and the complete hub state
//! - `ports/` - Event sink and clock interfaces
//! - `adapters/` - Port implementations and the gates connecting components
//! - `hub/` - Operations (direct and delegated), governance and views
//!
//! ## Call Flow
//!
//! ```text
//! caller / signer ──→ SocialHub::transact
//!                         │  clone state
//!                         ↓
//!                   state gate → signature (WithSig) → owner/dispatcher
//!                         │
//!       ┌─────────────────┼──────────────────┐
//!       ↓                 ↓                  ↓
//!  ProfileRegistry  PublicationGraph  InteractionEngine
//!                         │                  │
//!                         └──→ policy modules ←┘
//!                         │
//!                 Ok: swap state, publish events
//!                 Err: drop working copy
//! ```

pub mod adapters;
pub mod container;
pub mod hub;
pub mod ports;

pub use adapters::{InMemoryEventSink, ManualClock, SystemClock, TracingEventSink};
pub use container::{ConfigError, HubConfig, HubState};
pub use hub::{payloads, ProfileView, SharedHub, SocialHub};
pub use ports::{Clock, EventSink};
