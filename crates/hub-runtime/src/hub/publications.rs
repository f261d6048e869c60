//! Publication operations: post, comment, mirror.

use super::{payloads, Principal, SocialHub};
use crate::adapters::PublicationGateAdapter;
use crate::container::HubState;
use shared_types::{Address, EventPayload, ProfileId, ProtocolError, ProtocolResult, PubId};
use sg_01_signature_authority::Eip712Signature;
use sg_04_publication_graph::{CommentParams, MirrorParams, PostParams, Publication};
use std::sync::Arc;
use tracing::info;

impl HubState {
    fn stored(&self, profile_id: ProfileId, pub_id: PubId) -> ProtocolResult<&Publication> {
        self.publications
            .get(profile_id, pub_id)
            .ok_or(ProtocolError::PublicationDoesNotExist { profile_id, pub_id })
    }

    fn post(&mut self, principal: Principal<'_>, params: &PostParams) -> ProtocolResult<PubId> {
        self.protocol.require_publishing_allowed()?;
        let caller = self.authenticate(principal, || payloads::post(params))?;
        self.profiles
            .require_owner_or_dispatcher(caller, params.profile_id)?;

        let gate = PublicationGateAdapter {
            modules: &self.modules,
            profiles: &self.profiles,
            engine: &self.engine,
            now: self.now,
        };
        let pub_id = Arc::make_mut(&mut self.publications).create_post(params, self.now, &gate)?;

        let post = self.stored(params.profile_id, pub_id)?;
        let payload = EventPayload::PostCreated {
            profile_id: params.profile_id,
            pub_id,
            content_uri: post.content_uri.clone(),
            collect_module: post.collect_module,
            collect_module_return_data: post.collect_module_data.clone(),
            reference_module: post.reference_module,
            reference_module_return_data: post.reference_module_data.clone(),
        };
        info!(profile_id = params.profile_id, pub_id, content_uri = %params.content_uri, "Post created");
        self.emit(payload);
        Ok(pub_id)
    }

    fn comment(&mut self, principal: Principal<'_>, params: &CommentParams) -> ProtocolResult<PubId> {
        self.protocol.require_publishing_allowed()?;
        let caller = self.authenticate(principal, || payloads::comment(params))?;
        self.profiles
            .require_owner_or_dispatcher(caller, params.profile_id)?;

        let gate = PublicationGateAdapter {
            modules: &self.modules,
            profiles: &self.profiles,
            engine: &self.engine,
            now: self.now,
        };
        let pub_id = Arc::make_mut(&mut self.publications).create_comment(params, self.now, &gate)?;

        let comment = self.stored(params.profile_id, pub_id)?;
        let payload = EventPayload::CommentCreated {
            profile_id: params.profile_id,
            pub_id,
            content_uri: comment.content_uri.clone(),
            profile_id_pointed: params.profile_id_pointed,
            pub_id_pointed: params.pub_id_pointed,
            reference_module_data: params.reference_module_data.clone(),
            collect_module: comment.collect_module,
            collect_module_return_data: comment.collect_module_data.clone(),
            reference_module: comment.reference_module,
            reference_module_return_data: comment.reference_module_data.clone(),
        };
        info!(
            profile_id = params.profile_id,
            pub_id,
            pointed = ?(params.profile_id_pointed, params.pub_id_pointed),
            "Comment created"
        );
        self.emit(payload);
        Ok(pub_id)
    }

    fn mirror(&mut self, principal: Principal<'_>, params: &MirrorParams) -> ProtocolResult<PubId> {
        self.protocol.require_publishing_allowed()?;
        let caller = self.authenticate(principal, || payloads::mirror(params))?;
        self.profiles
            .require_owner_or_dispatcher(caller, params.profile_id)?;

        let gate = PublicationGateAdapter {
            modules: &self.modules,
            profiles: &self.profiles,
            engine: &self.engine,
            now: self.now,
        };
        let pub_id = Arc::make_mut(&mut self.publications).create_mirror(params, self.now, &gate)?;

        let mirror = self.stored(params.profile_id, pub_id)?;
        let payload = EventPayload::MirrorCreated {
            profile_id: params.profile_id,
            pub_id,
            profile_id_pointed: params.profile_id_pointed,
            pub_id_pointed: params.pub_id_pointed,
            reference_module_data: params.reference_module_data.clone(),
            reference_module: mirror.reference_module,
            reference_module_return_data: mirror.reference_module_data.clone(),
        };
        info!(
            profile_id = params.profile_id,
            pub_id,
            pointed = ?(params.profile_id_pointed, params.pub_id_pointed),
            "Mirror created"
        );
        self.emit(payload);
        Ok(pub_id)
    }
}

impl SocialHub {
    /// Publish a post as the profile owner or its dispatcher.
    pub fn post(&mut self, caller: Address, params: &PostParams) -> ProtocolResult<PubId> {
        self.transact("post", |s| s.post(Principal::Caller(caller), params))
    }

    pub fn post_with_sig(
        &mut self,
        signer: Address,
        params: &PostParams,
        signature: &Eip712Signature,
    ) -> ProtocolResult<PubId> {
        self.transact("post_with_sig", |s| {
            s.post(Principal::Signer(signer, signature), params)
        })
    }

    /// Comment on an existing publication. The pointed publication's
    /// reference module (if any) is consulted first.
    pub fn comment(&mut self, caller: Address, params: &CommentParams) -> ProtocolResult<PubId> {
        self.transact("comment", |s| s.comment(Principal::Caller(caller), params))
    }

    pub fn comment_with_sig(
        &mut self,
        signer: Address,
        params: &CommentParams,
        signature: &Eip712Signature,
    ) -> ProtocolResult<PubId> {
        self.transact("comment_with_sig", |s| {
            s.comment(Principal::Signer(signer, signature), params)
        })
    }

    /// Re-share an existing publication. Mirrors carry no content.
    pub fn mirror(&mut self, caller: Address, params: &MirrorParams) -> ProtocolResult<PubId> {
        self.transact("mirror", |s| s.mirror(Principal::Caller(caller), params))
    }

    pub fn mirror_with_sig(
        &mut self,
        signer: Address,
        params: &MirrorParams,
        signature: &Eip712Signature,
    ) -> ProtocolResult<PubId> {
        self.transact("mirror_with_sig", |s| {
            s.mirror(Principal::Signer(signer, signature), params)
        })
    }
}
