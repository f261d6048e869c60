//! # Hub State
//!
//! The complete mutable state of the hub. Components are owned here and
//! only ever borrowed by the gate adapters for the duration of one call.
//!
//! Each component sits behind an `Arc`, so a working copy costs one pointer
//! per component; a component is deep-copied only when a call mutates it
//! (`Arc::make_mut`).

use shared_types::{EventPayload, ProtocolEvent, Timestamp};
use sg_01_signature_authority::SignatureAuthority;
use sg_02_module_registry::ModuleRegistry;
use sg_03_profile_registry::ProfileRegistry;
use sg_04_publication_graph::PublicationGraph;
use sg_05_interaction_engine::InteractionEngine;
use sg_06_protocol_state::ProtocolStateMachine;

use super::config::HubConfig;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct HubState {
    pub authority: Arc<SignatureAuthority>,
    pub modules: Arc<ModuleRegistry>,
    pub profiles: Arc<ProfileRegistry>,
    pub publications: Arc<PublicationGraph>,
    pub engine: Arc<InteractionEngine>,
    pub protocol: Arc<ProtocolStateMachine>,
    /// Timestamp of the call in flight.
    pub now: Timestamp,
    /// Events of the call in flight, published on commit.
    pub journal: Vec<ProtocolEvent>,
}

impl HubState {
    /// Fresh state: paused, no governance, empty allow-lists.
    pub fn new(config: &HubConfig) -> Self {
        Self {
            authority: Arc::new(SignatureAuthority::new(config.domain())),
            modules: Arc::new(ModuleRegistry::new()),
            profiles: Arc::new(ProfileRegistry::new(config.profile_limits())),
            publications: Arc::new(PublicationGraph::new()),
            engine: Arc::new(InteractionEngine::new()),
            protocol: Arc::new(ProtocolStateMachine::new()),
            now: 0,
            journal: Vec::new(),
        }
    }

    /// Buffer an event stamped with the current call's timestamp.
    pub fn emit(&mut self, payload: EventPayload) {
        self.journal.push(ProtocolEvent {
            timestamp: self.now,
            payload,
        });
    }
}
