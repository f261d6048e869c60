//! Follow and collect.

use super::{payloads, Principal, SocialHub};
use crate::adapters::{CollectGateAdapter, FollowGateAdapter};
use crate::container::HubState;
use shared_types::{
    Address, EventPayload, ModuleData, ProfileId, ProtocolResult, PubId, TokenId,
};
use sg_01_signature_authority::Eip712Signature;
use std::sync::Arc;
use tracing::info;

impl HubState {
    fn follow(
        &mut self,
        principal: Principal<'_>,
        profile_ids: &[ProfileId],
        datas: &[ModuleData],
    ) -> ProtocolResult<Vec<TokenId>> {
        self.protocol.require_not_paused()?;
        let follower = self.authenticate(principal, || payloads::follow(profile_ids, datas))?;

        let gate = FollowGateAdapter {
            modules: &self.modules,
            profiles: &self.profiles,
            now: self.now,
        };
        let receipts = Arc::make_mut(&mut self.engine).follow(follower, profile_ids, datas, &gate)?;

        let mut token_ids = Vec::with_capacity(receipts.len());
        for receipt in receipts {
            if let Some(follow_nft) = receipt.deployed {
                self.emit(EventPayload::FollowNftDeployed {
                    profile_id: receipt.profile_id,
                    follow_nft,
                });
            }
            self.emit(EventPayload::FollowReceiptMinted {
                profile_id: receipt.profile_id,
                token_id: receipt.token_id,
                to: follower,
            });
            token_ids.push(receipt.token_id);
        }

        info!(%follower, profiles = ?profile_ids, "Followed");
        self.emit(EventPayload::Followed {
            follower,
            profile_ids: profile_ids.to_vec(),
            follow_module_datas: datas.to_vec(),
        });
        Ok(token_ids)
    }

    fn collect(
        &mut self,
        principal: Principal<'_>,
        profile_id: ProfileId,
        pub_id: PubId,
        data: &[u8],
    ) -> ProtocolResult<TokenId> {
        self.protocol.require_not_paused()?;
        let collector =
            self.authenticate(principal, || payloads::collect(profile_id, pub_id, data))?;

        let gate = CollectGateAdapter {
            modules: &self.modules,
            profiles: &self.profiles,
            publications: &self.publications,
            now: self.now,
        };
        let receipt = Arc::make_mut(&mut self.engine)
            .collect(collector, profile_id, pub_id, data, &gate)?;

        if let Some(collect_nft) = receipt.deployed {
            self.emit(EventPayload::CollectNftDeployed {
                profile_id: receipt.root_profile_id,
                pub_id: receipt.root_pub_id,
                collect_nft,
            });
        }
        self.emit(EventPayload::CollectReceiptMinted {
            profile_id: receipt.root_profile_id,
            pub_id: receipt.root_pub_id,
            token_id: receipt.token_id,
            to: collector,
        });

        info!(
            %collector,
            profile_id,
            pub_id,
            root = ?(receipt.root_profile_id, receipt.root_pub_id),
            token_id = receipt.token_id,
            "Collected"
        );
        self.emit(EventPayload::Collected {
            collector,
            profile_id,
            pub_id,
            root_profile_id: receipt.root_profile_id,
            root_pub_id: receipt.root_pub_id,
            data: data.to_vec(),
        });
        Ok(receipt.token_id)
    }
}

impl SocialHub {
    /// Follow every profile in `profile_ids`; `datas[i]` goes to the i-th
    /// profile's follow module. All or nothing. Returns the minted receipt
    /// token ids in order.
    pub fn follow(
        &mut self,
        follower: Address,
        profile_ids: &[ProfileId],
        datas: &[ModuleData],
    ) -> ProtocolResult<Vec<TokenId>> {
        self.transact("follow", |s| {
            s.follow(Principal::Caller(follower), profile_ids, datas)
        })
    }

    pub fn follow_with_sig(
        &mut self,
        follower: Address,
        profile_ids: &[ProfileId],
        datas: &[ModuleData],
        signature: &Eip712Signature,
    ) -> ProtocolResult<Vec<TokenId>> {
        self.transact("follow_with_sig", |s| {
            s.follow(Principal::Signer(follower, signature), profile_ids, datas)
        })
    }

    /// Collect the publication at `(profile_id, pub_id)`. Mirrors are
    /// resolved to their root; the receipt comes from the root's collection.
    pub fn collect(
        &mut self,
        collector: Address,
        profile_id: ProfileId,
        pub_id: PubId,
        data: &[u8],
    ) -> ProtocolResult<TokenId> {
        self.transact("collect", |s| {
            s.collect(Principal::Caller(collector), profile_id, pub_id, data)
        })
    }

    pub fn collect_with_sig(
        &mut self,
        collector: Address,
        profile_id: ProfileId,
        pub_id: PubId,
        data: &[u8],
        signature: &Eip712Signature,
    ) -> ProtocolResult<TokenId> {
        self.transact("collect_with_sig", |s| {
            s.collect(Principal::Signer(collector, signature), profile_id, pub_id, data)
        })
    }
}
