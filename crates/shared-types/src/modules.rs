//! # Policy Module Capability Contracts
//!
//! Follow, collect and reference modules are untrusted plugins installed at
//! addresses. Each kind exposes an `initialize` hook (run when the module is
//! attached) and one or more `process_*` hooks (run on every gated action).
//!
//! Modules are stateless: the bytes returned by `initialize` are persisted by
//! the hub next to the profile or publication and handed back on every
//! `process_*` call as `config`. Whatever a module needs to know about the
//! rest of the protocol it reads through [`ProtocolView`].

use crate::entities::{Address, ProfileId, PubId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque module configuration / payload bytes.
pub type ModuleData = Vec<u8>;

/// The three module families, each with its own allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    Follow,
    Collect,
    Reference,
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Follow => "follow",
            Self::Collect => "collect",
            Self::Reference => "reference",
        };
        f.write_str(name)
    }
}

/// Explicit refusal from a module.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct ModuleRejection {
    pub reason: String,
}

impl ModuleRejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Read-only protocol facts available to `process_*` hooks.
///
/// Reflects the state of the in-flight call, including effects of earlier
/// elements of the same batch.
pub trait ProtocolView {
    /// Timestamp of the current call.
    fn now(&self) -> Timestamp;

    /// Current owner of a live profile.
    fn owner_of(&self, profile_id: ProfileId) -> Option<Address>;

    /// Number of follow receipts of `profile_id` held by `holder`.
    fn follow_receipt_balance(&self, profile_id: ProfileId, holder: Address) -> u64;

    /// Number of collect receipts minted so far for a root publication.
    fn collect_count(&self, profile_id: ProfileId, pub_id: PubId) -> u64;
}

/// Input to every `initialize` hook.
#[derive(Debug, Clone, Copy)]
pub struct InitContext<'a> {
    pub profile_id: ProfileId,
    /// `None` for follow modules.
    pub pub_id: Option<PubId>,
    pub timestamp: Timestamp,
    pub data: &'a [u8],
}

/// Input to [`FollowModule::process_follow`].
#[derive(Debug, Clone, Copy)]
pub struct FollowContext<'a> {
    pub follower: Address,
    pub profile_id: ProfileId,
    /// Bytes returned by `initialize` for this profile.
    pub config: &'a [u8],
    pub data: &'a [u8],
}

/// Input to [`CollectModule::process_collect`].
#[derive(Debug, Clone, Copy)]
pub struct CollectContext<'a> {
    pub collector: Address,
    /// Publication the collect was addressed to (a mirror or the root itself).
    pub referrer_profile_id: ProfileId,
    pub referrer_pub_id: PubId,
    /// Resolved root publication being collected.
    pub profile_id: ProfileId,
    pub pub_id: PubId,
    pub config: &'a [u8],
    pub data: &'a [u8],
}

/// Input to [`ReferenceModule::process_comment`] / [`ReferenceModule::process_mirror`].
#[derive(Debug, Clone, Copy)]
pub struct ReferenceContext<'a> {
    /// Author and sequence number of the new comment or mirror.
    pub profile_id: ProfileId,
    pub pub_id: PubId,
    pub profile_id_pointed: ProfileId,
    pub pub_id_pointed: PubId,
    /// Bytes returned by `initialize` for the pointed publication.
    pub config: &'a [u8],
    pub data: &'a [u8],
}

/// Gates who may follow a profile.
pub trait FollowModule: Send + Sync {
    /// Human-readable module name.
    fn name(&self) -> &str;

    fn initialize(&self, ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection>;

    fn process_follow(
        &self,
        ctx: &FollowContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection>;
}

/// Gates who may collect a publication.
pub trait CollectModule: Send + Sync {
    /// Human-readable module name.
    fn name(&self) -> &str;

    fn initialize(&self, ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection>;

    fn process_collect(
        &self,
        ctx: &CollectContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection>;
}

/// Gates who may comment on or mirror a publication.
pub trait ReferenceModule: Send + Sync {
    /// Human-readable module name.
    fn name(&self) -> &str;

    fn initialize(&self, ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection>;

    fn process_comment(
        &self,
        ctx: &ReferenceContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection>;

    fn process_mirror(
        &self,
        ctx: &ReferenceContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection>;
}
