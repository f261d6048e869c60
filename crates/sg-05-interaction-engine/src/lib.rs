//! # Interaction Engine (SG-05)
//!
//! Follow and collect. A follow mints a receipt from the followed profile's
//! follow collection; a collect resolves mirrors to the root publication and
//! mints from the root's collect collection. Collections are instantiated
//! lazily at addresses derived from their parent's identity.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::collection::{CollectionParent, ReceiptCollection};
pub use domain::factory::{
    collect_collection_address, collect_collection_name, follow_collection_address,
    follow_collection_name,
};
pub use ports::outbound::{CollectGate, CollectTarget, FollowGate, FollowTarget};
pub use service::{CollectReceipt, FollowReceipt, InteractionEngine};
