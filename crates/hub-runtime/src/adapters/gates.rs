//! # Component Gates
//!
//! Adapters implementing the outbound ports of the publication graph and
//! the interaction engine. Each borrows only the components it reads, so
//! the hub can lend them alongside a mutable borrow of the component
//! doing the work.

use shared_types::{
    Address, CollectContext, FollowContext, InitContext, ModuleData, ModuleKind, ProfileId,
    ProtocolError, ProtocolResult, ProtocolView, PubId, ReferenceContext, Timestamp,
};
use sg_02_module_registry::ModuleRegistry;
use sg_03_profile_registry::ProfileRegistry;
use sg_04_publication_graph::{PublicationGraph, PublicationHooks};
use sg_05_interaction_engine::{
    CollectGate, CollectTarget, FollowGate, FollowTarget, InteractionEngine,
};

/// Read-only protocol facts handed to module `process_*` hooks.
pub struct HubView<'a> {
    pub profiles: &'a ProfileRegistry,
    pub engine: &'a InteractionEngine,
    pub now: Timestamp,
}

impl ProtocolView for HubView<'_> {
    fn now(&self) -> Timestamp {
        self.now
    }

    fn owner_of(&self, profile_id: ProfileId) -> Option<Address> {
        self.profiles.owner_of(profile_id)
    }

    fn follow_receipt_balance(&self, profile_id: ProfileId, holder: Address) -> u64 {
        self.engine.follow_receipt_balance(profile_id, &holder)
    }

    fn collect_count(&self, profile_id: ProfileId, pub_id: PubId) -> u64 {
        self.engine.collect_count(profile_id, pub_id)
    }
}

// =============================================================================
// PUBLICATIONS
// =============================================================================

pub struct PublicationGateAdapter<'a> {
    pub modules: &'a ModuleRegistry,
    pub profiles: &'a ProfileRegistry,
    pub engine: &'a InteractionEngine,
    pub now: Timestamp,
}

impl PublicationGateAdapter<'_> {
    fn view(&self) -> HubView<'_> {
        HubView {
            profiles: self.profiles,
            engine: self.engine,
            now: self.now,
        }
    }
}

impl PublicationHooks for PublicationGateAdapter<'_> {
    fn profile_created(&self, profile_id: ProfileId) -> bool {
        self.profiles.was_created(profile_id)
    }

    fn require_whitelisted(&self, kind: ModuleKind, module: Option<Address>) -> ProtocolResult<()> {
        self.modules.require_whitelisted(kind, module)
    }

    fn initialize_collect(&self, module: Address, ctx: &InitContext<'_>) -> ProtocolResult<ModuleData> {
        self.modules.initialize_collect(module, ctx)
    }

    fn initialize_reference(
        &self,
        module: Address,
        ctx: &InitContext<'_>,
    ) -> ProtocolResult<ModuleData> {
        self.modules.initialize_reference(module, ctx)
    }

    fn process_comment(&self, module: Address, ctx: &ReferenceContext<'_>) -> ProtocolResult<()> {
        self.modules.process_comment(module, ctx, &self.view())
    }

    fn process_mirror(&self, module: Address, ctx: &ReferenceContext<'_>) -> ProtocolResult<()> {
        self.modules.process_mirror(module, ctx, &self.view())
    }
}

// =============================================================================
// FOLLOW
// =============================================================================

pub struct FollowGateAdapter<'a> {
    pub modules: &'a ModuleRegistry,
    pub profiles: &'a ProfileRegistry,
    pub now: Timestamp,
}

impl FollowGate for FollowGateAdapter<'_> {
    fn follow_target(&self, profile_id: ProfileId) -> ProtocolResult<FollowTarget> {
        if !self.profiles.is_live(profile_id) {
            return Err(ProtocolError::ProfileDoesNotExist(profile_id));
        }
        let profile = self
            .profiles
            .get_profile(profile_id)
            .ok_or(ProtocolError::ProfileDoesNotExist(profile_id))?;
        Ok(FollowTarget {
            handle: profile.handle.clone(),
            follow_module: profile.follow_module,
        })
    }

    fn process_follow(
        &self,
        engine: &InteractionEngine,
        module: Address,
        follower: Address,
        profile_id: ProfileId,
        data: &[u8],
    ) -> ProtocolResult<()> {
        let profile = self
            .profiles
            .get_profile(profile_id)
            .ok_or(ProtocolError::ProfileDoesNotExist(profile_id))?;
        let ctx = FollowContext {
            follower,
            profile_id,
            config: &profile.follow_module_data,
            data,
        };
        let view = HubView {
            profiles: self.profiles,
            engine,
            now: self.now,
        };
        self.modules.process_follow(module, &ctx, &view)
    }
}

// =============================================================================
// COLLECT
// =============================================================================

pub struct CollectGateAdapter<'a> {
    pub modules: &'a ModuleRegistry,
    pub profiles: &'a ProfileRegistry,
    pub publications: &'a PublicationGraph,
    pub now: Timestamp,
}

impl CollectGate for CollectGateAdapter<'_> {
    fn collect_target(&self, profile_id: ProfileId, pub_id: PubId) -> ProtocolResult<CollectTarget> {
        let root = self.publications.resolve_root(profile_id, pub_id)?;
        let author = self
            .profiles
            .get_profile(root.profile_id)
            .ok_or(ProtocolError::ProfileDoesNotExist(root.profile_id))?;
        Ok(CollectTarget {
            root_profile_id: root.profile_id,
            root_pub_id: root.pub_id,
            handle: author.handle.clone(),
            collect_module: root.collect_module,
        })
    }

    fn process_collect(
        &self,
        engine: &InteractionEngine,
        module: Address,
        collector: Address,
        referrer: (ProfileId, PubId),
        root: (ProfileId, PubId),
        data: &[u8],
    ) -> ProtocolResult<()> {
        let publication = self.publications.get(root.0, root.1).ok_or(
            ProtocolError::PublicationDoesNotExist {
                profile_id: root.0,
                pub_id: root.1,
            },
        )?;
        let ctx = CollectContext {
            collector,
            referrer_profile_id: referrer.0,
            referrer_pub_id: referrer.1,
            profile_id: root.0,
            pub_id: root.1,
            config: &publication.collect_module_data,
            data,
        };
        let view = HubView {
            profiles: self.profiles,
            engine,
            now: self.now,
        };
        self.modules.process_collect(module, &ctx, &view)
    }
}
