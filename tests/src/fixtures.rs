//! Shared test fixtures.

use hub_runtime::{payloads, HubConfig, InMemoryEventSink, ManualClock, SocialHub};
use k256::ecdsa::SigningKey;
use sg_01_signature_authority::{address_from_pubkey, sign_digest, Eip712Signature, TypedPayload};
use sg_02_module_registry::adapters::{
    AllowlistFollowModule, FollowerOnlyReferenceModule, FreeCollectModule, LimitedCollectModule,
    RevertCollectModule, RevertFollowModule, TimedCollectModule,
};
use sg_03_profile_registry::CreateProfileParams;
use sg_04_publication_graph::{MirrorParams, PostParams};
use shared_types::{Address, ProfileId, ProtocolState, PubId, Timestamp};
use std::sync::Arc;

pub const START: Timestamp = 1_700_000_000;
pub const DEADLINE: Timestamp = START + 3_600;

pub const REVERT_FOLLOW: Address = Address([0xf1; 20]);
pub const ALLOWLIST_FOLLOW: Address = Address([0xf2; 20]);
pub const FREE_COLLECT: Address = Address([0xc1; 20]);
pub const LIMITED_COLLECT: Address = Address([0xc2; 20]);
pub const TIMED_COLLECT: Address = Address([0xc3; 20]);
pub const REVERT_COLLECT: Address = Address([0xc4; 20]);
pub const FOLLOWER_ONLY_REFERENCE: Address = Address([0xe1; 20]);

/// A participant able to sign delegated operations.
pub struct Wallet {
    pub key: SigningKey,
    pub address: Address,
}

impl Wallet {
    pub fn random() -> Self {
        let key = SigningKey::random(&mut rand::thread_rng());
        let address = address_from_pubkey(key.verifying_key());
        Self { key, address }
    }
}

/// Initialized, unpaused hub with every built-in module installed and
/// allow-listed, and governance allowed to create profiles.
pub struct World {
    pub hub: SocialHub,
    pub sink: Arc<InMemoryEventSink>,
    pub clock: Arc<ManualClock>,
    pub governance: Address,
}

impl World {
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    pub fn with_config(config: HubConfig) -> Self {
        let sink = Arc::new(InMemoryEventSink::new());
        let clock = Arc::new(ManualClock::new(START));
        let mut hub = SocialHub::new(config, clock.clone(), sink.clone());
        let governance = Address::repeat_byte(0x60);

        hub.initialize(governance).unwrap();
        hub.set_state(governance, ProtocolState::Unpaused).unwrap();
        hub.whitelist_profile_creator(governance, governance, true)
            .unwrap();

        hub.install_follow_module(REVERT_FOLLOW, Arc::new(RevertFollowModule))
            .unwrap();
        hub.install_follow_module(ALLOWLIST_FOLLOW, Arc::new(AllowlistFollowModule))
            .unwrap();
        hub.install_collect_module(FREE_COLLECT, Arc::new(FreeCollectModule))
            .unwrap();
        hub.install_collect_module(LIMITED_COLLECT, Arc::new(LimitedCollectModule))
            .unwrap();
        hub.install_collect_module(TIMED_COLLECT, Arc::new(TimedCollectModule))
            .unwrap();
        hub.install_collect_module(REVERT_COLLECT, Arc::new(RevertCollectModule))
            .unwrap();
        hub.install_reference_module(
            FOLLOWER_ONLY_REFERENCE,
            Arc::new(FollowerOnlyReferenceModule),
        )
        .unwrap();
        for module in [REVERT_FOLLOW, ALLOWLIST_FOLLOW] {
            hub.whitelist_follow_module(governance, module, true).unwrap();
        }
        for module in [FREE_COLLECT, LIMITED_COLLECT, TIMED_COLLECT, REVERT_COLLECT] {
            hub.whitelist_collect_module(governance, module, true).unwrap();
        }
        hub.whitelist_reference_module(governance, FOLLOWER_ONLY_REFERENCE, true)
            .unwrap();

        sink.drain();
        Self {
            hub,
            sink,
            clock,
            governance,
        }
    }

    pub fn profile(&mut self, to: Address, handle: &str) -> ProfileId {
        self.hub
            .create_profile(
                self.governance,
                &CreateProfileParams {
                    to,
                    handle: handle.to_string(),
                    ..CreateProfileParams::default()
                },
            )
            .unwrap()
    }

    pub fn post(&mut self, author: Address, profile_id: ProfileId, content_uri: &str) -> PubId {
        self.hub
            .post(
                author,
                &PostParams {
                    profile_id,
                    content_uri: content_uri.to_string(),
                    ..PostParams::default()
                },
            )
            .unwrap()
    }

    pub fn mirror(
        &mut self,
        author: Address,
        profile_id: ProfileId,
        pointed: (ProfileId, PubId),
    ) -> PubId {
        self.hub
            .mirror(
                author,
                &MirrorParams {
                    profile_id,
                    profile_id_pointed: pointed.0,
                    pub_id_pointed: pointed.1,
                    ..MirrorParams::default()
                },
            )
            .unwrap()
    }

    /// Signature by `wallet` over `payload` at its current nonce.
    pub fn sign(&self, wallet: &Wallet, payload: &TypedPayload) -> Eip712Signature {
        self.sign_until(wallet, payload, DEADLINE)
    }

    pub fn sign_until(
        &self,
        wallet: &Wallet,
        payload: &TypedPayload,
        deadline: Timestamp,
    ) -> Eip712Signature {
        let digest = self.hub.digest_for(wallet.address, payload, deadline);
        Eip712Signature::new(sign_digest(&digest, &wallet.key).unwrap(), deadline)
    }

    pub fn sign_follow(
        &self,
        wallet: &Wallet,
        profile_ids: &[ProfileId],
        datas: &[Vec<u8>],
    ) -> Eip712Signature {
        self.sign(wallet, &payloads::follow(profile_ids, datas))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

pub fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}
