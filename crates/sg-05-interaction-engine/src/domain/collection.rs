//! # Receipt Collections
//!
//! Non-fungible receipts minted to followers and collectors. Token ids are
//! dense from 1 within each collection.

use serde::{Deserialize, Serialize};
use shared_types::{Address, ProfileId, PubId, TokenId};
use std::collections::{BTreeMap, HashMap};

/// What a collection was instantiated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionParent {
    /// Follow receipts of a profile.
    Profile(ProfileId),
    /// Collect receipts of a root publication.
    Publication(ProfileId, PubId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptCollection {
    pub address: Address,
    pub parent: CollectionParent,
    pub name: String,
    pub symbol: String,
    next_token_id: TokenId,
    owners: BTreeMap<TokenId, Address>,
    balances: HashMap<Address, u64>,
}

impl ReceiptCollection {
    pub fn new(address: Address, parent: CollectionParent, name: String, symbol: String) -> Self {
        Self {
            address,
            parent,
            name,
            symbol,
            next_token_id: 1,
            owners: BTreeMap::new(),
            balances: HashMap::new(),
        }
    }

    /// Mint the next receipt to `to`.
    pub fn mint(&mut self, to: Address) -> TokenId {
        let token_id = self.next_token_id;
        self.next_token_id += 1;
        self.owners.insert(token_id, to);
        *self.balances.entry(to).or_insert(0) += 1;
        token_id
    }

    pub fn owner_of(&self, token_id: TokenId) -> Option<Address> {
        self.owners.get(&token_id).copied()
    }

    pub fn balance_of(&self, holder: &Address) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    pub fn total_minted(&self) -> u64 {
        self.next_token_id - 1
    }
}
