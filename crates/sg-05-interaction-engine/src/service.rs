//! # Interaction Engine Service
//!
//! Follow and collect. Receipt collections are created on first use at a
//! deterministic address and memoized per parent.

use crate::domain::collection::{CollectionParent, ReceiptCollection};
use crate::domain::factory::{
    collect_collection_address, collect_collection_name, follow_collection_address,
    follow_collection_name,
};
use crate::ports::outbound::{CollectGate, FollowGate};
use shared_types::{
    Address, ModuleData, ProfileId, ProtocolError, ProtocolResult, PubId, TokenId,
};
use std::collections::HashMap;
use tracing::debug;

/// One minted follow receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowReceipt {
    pub profile_id: ProfileId,
    pub token_id: TokenId,
    /// Set when this follow instantiated the profile's follow collection.
    pub deployed: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectReceipt {
    pub root_profile_id: ProfileId,
    pub root_pub_id: PubId,
    pub token_id: TokenId,
    /// Set when this collect instantiated the root's collect collection.
    pub deployed: Option<Address>,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionEngine {
    follow_collections: HashMap<ProfileId, ReceiptCollection>,
    collect_collections: HashMap<(ProfileId, PubId), ReceiptCollection>,
    parents: HashMap<Address, CollectionParent>,
}

impl InteractionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow every profile in `profile_ids`, in order. Any failure fails
    /// the whole batch; callers discard partial effects.
    pub fn follow(
        &mut self,
        follower: Address,
        profile_ids: &[ProfileId],
        datas: &[ModuleData],
        gate: &dyn FollowGate,
    ) -> ProtocolResult<Vec<FollowReceipt>> {
        if profile_ids.len() != datas.len() {
            return Err(ProtocolError::ArrayLengthMismatch {
                left: profile_ids.len(),
                right: datas.len(),
            });
        }

        let mut receipts = Vec::with_capacity(profile_ids.len());
        for (&profile_id, data) in profile_ids.iter().zip(datas) {
            let target = gate.follow_target(profile_id)?;
            let deployed = self.instantiate_follow_collection(profile_id, &target.handle);
            if let Some(module) = target.follow_module {
                gate.process_follow(self, module, follower, profile_id, data)?;
            }
            let token_id = self
                .follow_collection_mut(profile_id, &target.handle)
                .mint(follower);
            receipts.push(FollowReceipt {
                profile_id,
                token_id,
                deployed,
            });
        }
        Ok(receipts)
    }

    /// Collect the root behind `(profile_id, pub_id)`.
    pub fn collect(
        &mut self,
        collector: Address,
        profile_id: ProfileId,
        pub_id: PubId,
        data: &[u8],
        gate: &dyn CollectGate,
    ) -> ProtocolResult<CollectReceipt> {
        let target = gate.collect_target(profile_id, pub_id)?;
        let root = (target.root_profile_id, target.root_pub_id);
        let deployed = self.instantiate_collect_collection(root, &target.handle);
        if let Some(module) = target.collect_module {
            gate.process_collect(self, module, collector, (profile_id, pub_id), root, data)?;
        }
        let token_id = self
            .collect_collection_mut(root, &target.handle)
            .mint(collector);
        Ok(CollectReceipt {
            root_profile_id: root.0,
            root_pub_id: root.1,
            token_id,
            deployed,
        })
    }

    fn follow_collection_mut(&mut self, profile_id: ProfileId, handle: &str) -> &mut ReceiptCollection {
        let parents = &mut self.parents;
        self.follow_collections.entry(profile_id).or_insert_with(|| {
            let address = follow_collection_address(profile_id);
            let (name, symbol) = follow_collection_name(handle);
            let parent = CollectionParent::Profile(profile_id);
            debug!(profile_id, %address, %name, "Instantiating follow collection");
            parents.insert(address, parent);
            ReceiptCollection::new(address, parent, name, symbol)
        })
    }

    fn collect_collection_mut(
        &mut self,
        (profile_id, pub_id): (ProfileId, PubId),
        handle: &str,
    ) -> &mut ReceiptCollection {
        let parents = &mut self.parents;
        self.collect_collections
            .entry((profile_id, pub_id))
            .or_insert_with(|| {
                let address = collect_collection_address(profile_id, pub_id);
                let (name, symbol) = collect_collection_name(handle, pub_id);
                let parent = CollectionParent::Publication(profile_id, pub_id);
                debug!(profile_id, pub_id, %address, %name, "Instantiating collect collection");
                parents.insert(address, parent);
                ReceiptCollection::new(address, parent, name, symbol)
            })
    }

    /// Returns the address if the collection was created by this call.
    fn instantiate_follow_collection(&mut self, profile_id: ProfileId, handle: &str) -> Option<Address> {
        if self.follow_collections.contains_key(&profile_id) {
            return None;
        }
        Some(self.follow_collection_mut(profile_id, handle).address)
    }

    fn instantiate_collect_collection(
        &mut self,
        root: (ProfileId, PubId),
        handle: &str,
    ) -> Option<Address> {
        if self.collect_collections.contains_key(&root) {
            return None;
        }
        Some(self.collect_collection_mut(root, handle).address)
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    pub fn follow_nft(&self, profile_id: ProfileId) -> Option<Address> {
        self.follow_collections.get(&profile_id).map(|c| c.address)
    }

    pub fn collect_nft(&self, profile_id: ProfileId, pub_id: PubId) -> Option<Address> {
        self.collect_collections
            .get(&(profile_id, pub_id))
            .map(|c| c.address)
    }

    /// Collection instantiated at `address`, if any.
    pub fn collection(&self, address: &Address) -> Option<&ReceiptCollection> {
        match self.parents.get(address)? {
            CollectionParent::Profile(profile_id) => self.follow_collections.get(profile_id),
            CollectionParent::Publication(profile_id, pub_id) => {
                self.collect_collections.get(&(*profile_id, *pub_id))
            }
        }
    }

    pub fn follow_receipt_balance(&self, profile_id: ProfileId, holder: &Address) -> u64 {
        self.follow_collections
            .get(&profile_id)
            .map_or(0, |c| c.balance_of(holder))
    }

    pub fn follow_receipt_owner(&self, profile_id: ProfileId, token_id: TokenId) -> Option<Address> {
        self.follow_collections
            .get(&profile_id)
            .and_then(|c| c.owner_of(token_id))
    }

    /// Receipts minted so far for a root publication.
    pub fn collect_count(&self, profile_id: ProfileId, pub_id: PubId) -> u64 {
        self.collect_collections
            .get(&(profile_id, pub_id))
            .map_or(0, ReceiptCollection::total_minted)
    }

    pub fn collect_receipt_owner(
        &self,
        profile_id: ProfileId,
        pub_id: PubId,
        token_id: TokenId,
    ) -> Option<Address> {
        self.collect_collections
            .get(&(profile_id, pub_id))
            .and_then(|c| c.owner_of(token_id))
    }
}
