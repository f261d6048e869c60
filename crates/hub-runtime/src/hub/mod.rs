//! # Social Hub
//!
//! The single entry point of the protocol. Every mutating call:
//!
//! 1. Takes a working copy of the live [`HubState`] (components are shared
//!    until written)
//! 2. Checks the protocol state gate, then the caller (directly, or the
//!    signer of a delegated operation after signature verification)
//! 3. Delegates to the owning component
//! 4. On success swaps the working copy in and publishes its events; on
//!    failure drops it, so nothing (nonces, pointers, lazily created
//!    collections) survives a rejected call

mod governance;
mod interactions;
pub mod payloads;
mod profiles;
mod publications;
mod views;

pub use views::ProfileView;

use crate::container::{HubConfig, HubState};
use crate::ports::{Clock, EventSink};
use parking_lot::{Mutex, MutexGuard};
use shared_types::{
    Address, ErrorCategory, EventPayload, ProtocolError, ProtocolEvent, ProtocolResult,
};
use sg_01_signature_authority::{DelegatedAuthorizationApi, Eip712Signature, TypedPayload};
use social_telemetry::metrics::{
    COLLECTS, EVENTS_EMITTED, FOLLOWS, PROFILES_CREATED, PUBLICATIONS_CREATED,
    REJECTED_OPERATIONS, SIGNATURE_FAILURES,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Who is acting: a direct caller, or a signer authorizing a delegated call.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Principal<'a> {
    Caller(Address),
    Signer(Address, &'a Eip712Signature),
}

impl HubState {
    /// Resolve the acting address. Delegated calls verify the signature
    /// over `payload` and consume the signer's nonce.
    pub(crate) fn authenticate(
        &mut self,
        principal: Principal<'_>,
        payload: impl FnOnce() -> TypedPayload,
    ) -> ProtocolResult<Address> {
        match principal {
            Principal::Caller(caller) => Ok(caller),
            Principal::Signer(signer, signature) => {
                Arc::make_mut(&mut self.authority)
                    .verify_and_consume(signer, &payload(), signature, self.now)?;
                Ok(signer)
            }
        }
    }
}

pub struct SocialHub {
    config: HubConfig,
    state: HubState,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn EventSink>,
}

impl SocialHub {
    /// A fresh hub: paused, uninitialized, with empty allow-lists.
    pub fn new(config: HubConfig, clock: Arc<dyn Clock>, sink: Arc<dyn EventSink>) -> Self {
        info!(
            chain_id = config.chain_id,
            hub = %config.hub_address,
            domain = %config.domain_name,
            "Creating social graph hub"
        );
        let state = HubState::new(&config);
        Self {
            config,
            state,
            clock,
            sink,
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Run `f` against a working copy of the state and commit only on success.
    /// The copy shares every component with the live state until `f` mutates it.
    #[instrument(level = "debug", skip(self, f))]
    fn transact<T, F>(&mut self, operation: &'static str, f: F) -> ProtocolResult<T>
    where
        F: FnOnce(&mut HubState) -> ProtocolResult<T>,
    {
        let mut working = self.state.clone();
        working.now = self.clock.now();

        match f(&mut working) {
            Ok(value) => {
                let events = std::mem::take(&mut working.journal);
                self.state = working;
                debug!(operation, events = events.len(), "Committed");
                for event in &events {
                    record_committed(event);
                    self.sink.publish(event);
                }
                Ok(value)
            }
            Err(err) => {
                record_rejected(operation, &err);
                Err(err)
            }
        }
    }
}

fn record_committed(event: &ProtocolEvent) {
    EVENTS_EMITTED.with_label_values(&[event.name()]).inc();
    match &event.payload {
        EventPayload::ProfileCreated { .. } => PROFILES_CREATED.inc(),
        EventPayload::PostCreated { .. } => PUBLICATIONS_CREATED.with_label_values(&["post"]).inc(),
        EventPayload::CommentCreated { .. } => {
            PUBLICATIONS_CREATED.with_label_values(&["comment"]).inc()
        }
        EventPayload::MirrorCreated { .. } => {
            PUBLICATIONS_CREATED.with_label_values(&["mirror"]).inc()
        }
        EventPayload::FollowReceiptMinted { .. } => FOLLOWS.inc(),
        EventPayload::CollectReceiptMinted { .. } => COLLECTS.inc(),
        _ => {}
    }
}

fn record_rejected(operation: &'static str, err: &ProtocolError) {
    let category = err.category();
    warn!(
        operation,
        error = %err,
        kind = err.label(),
        category = category.as_str(),
        "Operation rejected"
    );
    REJECTED_OPERATIONS
        .with_label_values(&[operation, category.as_str()])
        .inc();
    if category == ErrorCategory::Signature {
        SIGNATURE_FAILURES.inc();
    }
}

/// A hub shared between threads. Calls are serialized by the lock.
#[derive(Clone)]
pub struct SharedHub {
    inner: Arc<Mutex<SocialHub>>,
}

impl SharedHub {
    pub fn new(hub: SocialHub) -> Self {
        Self {
            inner: Arc::new(Mutex::new(hub)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, SocialHub> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the hub.
    pub fn with<T>(&self, f: impl FnOnce(&mut SocialHub) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
