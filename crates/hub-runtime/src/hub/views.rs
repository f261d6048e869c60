//! Read-only queries against the committed state.

use super::SocialHub;
use serde::{Deserialize, Serialize};
use shared_types::{
    Address, Hash, ModuleData, ModuleKind, ProfileId, ProtocolResult, ProtocolState, PubId,
    PubType, TokenId, Timestamp,
};
use sg_01_signature_authority::{DelegatedAuthorizationApi, TypedPayload};
use sg_04_publication_graph::Publication;

/// A profile record joined with its ownership and publication counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub id: ProfileId,
    /// `None` once burned.
    pub owner: Option<Address>,
    pub handle: String,
    pub image_uri: String,
    pub pub_count: PubId,
    pub follow_module: Option<Address>,
    pub follow_module_data: ModuleData,
    pub follow_nft: Option<Address>,
    pub follow_nft_uri: String,
    pub dispatcher: Option<Address>,
}

impl SocialHub {
    // =========================================================================
    // PROFILES
    // =========================================================================

    /// Burned profiles are still returned, with no owner.
    pub fn get_profile(&self, profile_id: ProfileId) -> Option<ProfileView> {
        let profile = self.state.profiles.get_profile(profile_id)?;
        Some(ProfileView {
            id: profile.id,
            owner: self.state.profiles.owner_of(profile_id),
            handle: profile.handle.clone(),
            image_uri: profile.image_uri.clone(),
            pub_count: self.state.publications.pub_count(profile_id),
            follow_module: profile.follow_module,
            follow_module_data: profile.follow_module_data.clone(),
            follow_nft: self.state.engine.follow_nft(profile_id),
            follow_nft_uri: profile.follow_nft_uri.clone(),
            dispatcher: profile.dispatcher,
        })
    }

    pub fn get_profile_id_by_handle(&self, handle: &str) -> Option<ProfileId> {
        self.state.profiles.profile_id_by_handle(handle)
    }

    pub fn get_handle(&self, profile_id: ProfileId) -> Option<&str> {
        self.state
            .profiles
            .get_profile(profile_id)
            .map(|p| p.handle.as_str())
    }

    pub fn owner_of(&self, profile_id: ProfileId) -> Option<Address> {
        self.state.profiles.owner_of(profile_id)
    }

    /// Number of live profiles held by `holder`.
    pub fn balance_of(&self, holder: &Address) -> u64 {
        self.state.profiles.balance_of(holder)
    }

    /// Number of profile ids assigned so far, burned ones included.
    pub fn profile_count(&self) -> ProfileId {
        self.state.profiles.profile_count()
    }

    pub fn default_profile(&self, wallet: &Address) -> Option<ProfileId> {
        self.state.profiles.default_profile(wallet)
    }

    pub fn get_dispatcher(&self, profile_id: ProfileId) -> Option<Address> {
        self.state.profiles.dispatcher(profile_id)
    }

    pub fn get_follow_module(&self, profile_id: ProfileId) -> Option<Address> {
        self.state
            .profiles
            .get_profile(profile_id)
            .and_then(|p| p.follow_module)
    }

    pub fn get_follow_nft_uri(&self, profile_id: ProfileId) -> Option<&str> {
        self.state
            .profiles
            .get_profile(profile_id)
            .map(|p| p.follow_nft_uri.as_str())
    }

    // =========================================================================
    // PUBLICATIONS
    // =========================================================================

    pub fn get_pub(&self, profile_id: ProfileId, pub_id: PubId) -> Option<&Publication> {
        self.state.publications.get(profile_id, pub_id)
    }

    pub fn get_pub_type(&self, profile_id: ProfileId, pub_id: PubId) -> PubType {
        self.state.publications.pub_type(profile_id, pub_id)
    }

    pub fn get_pub_count(&self, profile_id: ProfileId) -> PubId {
        self.state.publications.pub_count(profile_id)
    }

    /// Content of the publication, following mirrors to their root.
    pub fn get_content_uri(&self, profile_id: ProfileId, pub_id: PubId) -> ProtocolResult<String> {
        self.state.publications.resolve_content(profile_id, pub_id)
    }

    /// `(profile_id, pub_id)` of the Post or Comment a publication resolves to.
    pub fn get_root(&self, profile_id: ProfileId, pub_id: PubId) -> ProtocolResult<(ProfileId, PubId)> {
        self.state
            .publications
            .resolve_root(profile_id, pub_id)
            .map(|root| (root.profile_id, root.pub_id))
    }

    pub fn get_collect_module(&self, profile_id: ProfileId, pub_id: PubId) -> Option<Address> {
        self.get_pub(profile_id, pub_id)
            .and_then(|p| p.collect_module)
    }

    pub fn get_reference_module(&self, profile_id: ProfileId, pub_id: PubId) -> Option<Address> {
        self.get_pub(profile_id, pub_id)
            .and_then(|p| p.reference_module)
    }

    // =========================================================================
    // INTERACTIONS
    // =========================================================================

    pub fn get_follow_nft(&self, profile_id: ProfileId) -> Option<Address> {
        self.state.engine.follow_nft(profile_id)
    }

    /// Collect collection of a Post or Comment. Mirrors never have one.
    pub fn get_collect_nft(&self, profile_id: ProfileId, pub_id: PubId) -> Option<Address> {
        self.state.engine.collect_nft(profile_id, pub_id)
    }

    pub fn follow_receipt_balance(&self, profile_id: ProfileId, holder: &Address) -> u64 {
        self.state.engine.follow_receipt_balance(profile_id, holder)
    }

    pub fn follow_receipt_owner(&self, profile_id: ProfileId, token_id: TokenId) -> Option<Address> {
        self.state.engine.follow_receipt_owner(profile_id, token_id)
    }

    pub fn collect_count(&self, profile_id: ProfileId, pub_id: PubId) -> u64 {
        self.state.engine.collect_count(profile_id, pub_id)
    }

    pub fn collect_receipt_owner(
        &self,
        profile_id: ProfileId,
        pub_id: PubId,
        token_id: TokenId,
    ) -> Option<Address> {
        self.state
            .engine
            .collect_receipt_owner(profile_id, pub_id, token_id)
    }

    // =========================================================================
    // GOVERNANCE & MODULES
    // =========================================================================

    pub fn get_governance(&self) -> Option<Address> {
        self.state.protocol.governance()
    }

    pub fn get_emergency_admin(&self) -> Option<Address> {
        self.state.protocol.emergency_admin()
    }

    pub fn get_state(&self) -> ProtocolState {
        self.state.protocol.state()
    }

    pub fn is_profile_creator_whitelisted(&self, creator: &Address) -> bool {
        self.state.protocol.is_profile_creator_whitelisted(creator)
    }

    pub fn is_module_whitelisted(&self, kind: ModuleKind, module: &Address) -> bool {
        self.state.modules.is_whitelisted(kind, module)
    }

    pub fn is_follow_module_whitelisted(&self, module: &Address) -> bool {
        self.is_module_whitelisted(ModuleKind::Follow, module)
    }

    pub fn is_collect_module_whitelisted(&self, module: &Address) -> bool {
        self.is_module_whitelisted(ModuleKind::Collect, module)
    }

    pub fn is_reference_module_whitelisted(&self, module: &Address) -> bool {
        self.is_module_whitelisted(ModuleKind::Reference, module)
    }

    pub fn installed_module_name(&self, kind: ModuleKind, module: &Address) -> Option<&str> {
        self.state.modules.module_name(kind, module)
    }

    // =========================================================================
    // SIGNATURES
    // =========================================================================

    pub fn nonce_of(&self, signer: &Address) -> u64 {
        self.state.authority.nonce_of(signer)
    }

    pub fn domain_separator(&self) -> Hash {
        self.state.authority.domain().separator()
    }

    /// Digest `signer` must sign now to authorize `payload` until `deadline`.
    pub fn digest_for(&self, signer: Address, payload: &TypedPayload, deadline: Timestamp) -> Hash {
        self.state.authority.digest_for(&signer, payload, deadline)
    }
}
