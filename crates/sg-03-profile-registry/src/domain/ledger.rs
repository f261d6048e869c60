//! # Profile Ownership Ledger
//!
//! Non-fungible ownership of profile ids. Callers run the transfer hook
//! before every mutation here.

use shared_types::{Address, ProfileId, ProtocolError, ProtocolResult};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ProfileNft {
    owners: HashMap<ProfileId, Address>,
    balances: HashMap<Address, u64>,
}

impl ProfileNft {
    pub fn owner_of(&self, id: ProfileId) -> Option<Address> {
        self.owners.get(&id).copied()
    }

    pub fn balance_of(&self, holder: &Address) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> usize {
        self.owners.len()
    }

    pub fn mint(&mut self, to: Address, id: ProfileId) -> ProtocolResult<()> {
        if to.is_zero() {
            return Err(ProtocolError::ZeroAddress);
        }
        self.owners.insert(id, to);
        *self.balances.entry(to).or_insert(0) += 1;
        Ok(())
    }

    pub fn transfer(&mut self, from: Address, to: Address, id: ProfileId) -> ProtocolResult<()> {
        if to.is_zero() {
            return Err(ProtocolError::ZeroAddress);
        }
        match self.owners.get_mut(&id) {
            Some(owner) if *owner == from => *owner = to,
            Some(_) => return Err(ProtocolError::NotProfileOwner),
            None => return Err(ProtocolError::ProfileDoesNotExist(id)),
        }
        self.decrement(from);
        *self.balances.entry(to).or_insert(0) += 1;
        Ok(())
    }

    /// Retire ownership of `id`, returning the last owner.
    pub fn burn(&mut self, id: ProfileId) -> ProtocolResult<Address> {
        let owner = self
            .owners
            .remove(&id)
            .ok_or(ProtocolError::ProfileDoesNotExist(id))?;
        self.decrement(owner);
        Ok(owner)
    }

    fn decrement(&mut self, holder: Address) {
        if let Some(balance) = self.balances.get_mut(&holder) {
            *balance = balance.saturating_sub(1);
            if *balance == 0 {
                self.balances.remove(&holder);
            }
        }
    }
}
