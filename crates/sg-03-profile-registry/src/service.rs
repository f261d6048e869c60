//! # Profile Registry Service
//!
//! Owns profile records, the handle index, the ownership ledger, default
//! profiles and dispatchers. Follow-module initialization is supplied by the
//! caller as a closure so this crate stays independent of module code.

use crate::domain::entities::{CreateProfileParams, Profile, ProfileLimits};
use crate::domain::handle::{handle_hash, validate_handle};
use crate::domain::ledger::ProfileNft;
use shared_types::{Address, Hash, ModuleData, ProfileId, ProtocolError, ProtocolResult};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    limits: ProfileLimits,
    profiles: HashMap<ProfileId, Profile>,
    handles: HashMap<Hash, ProfileId>,
    ledger: ProfileNft,
    default_profiles: HashMap<Address, ProfileId>,
    profile_counter: ProfileId,
}

impl ProfileRegistry {
    pub fn new(limits: ProfileLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    // =========================================================================
    // AUTHORIZATION
    // =========================================================================

    /// Returns the owner if `caller` owns the live profile.
    pub fn require_owner(&self, caller: Address, profile_id: ProfileId) -> ProtocolResult<Address> {
        let owner = self
            .ledger
            .owner_of(profile_id)
            .ok_or(ProtocolError::ProfileDoesNotExist(profile_id))?;
        if owner != caller {
            return Err(ProtocolError::NotProfileOwner);
        }
        Ok(owner)
    }

    pub fn require_owner_or_dispatcher(
        &self,
        caller: Address,
        profile_id: ProfileId,
    ) -> ProtocolResult<()> {
        let owner = self
            .ledger
            .owner_of(profile_id)
            .ok_or(ProtocolError::ProfileDoesNotExist(profile_id))?;
        let dispatcher = self.profiles.get(&profile_id).and_then(|p| p.dispatcher);
        if caller == owner || Some(caller) == dispatcher {
            Ok(())
        } else {
            Err(ProtocolError::NotProfileOwnerOrDispatcher)
        }
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Create a profile. `init_follow` runs with the id about to be assigned
    /// and returns the follow module's config; it is only called when a
    /// follow module is given. Nothing is written unless every check passes.
    pub fn create_profile<F>(
        &mut self,
        params: &CreateProfileParams,
        init_follow: F,
    ) -> ProtocolResult<(ProfileId, ModuleData)>
    where
        F: FnOnce(ProfileId, Address) -> ProtocolResult<ModuleData>,
    {
        if params.to.is_zero() {
            return Err(ProtocolError::ZeroAddress);
        }
        validate_handle(&params.handle, self.limits.max_handle_length)?;
        self.check_image_uri(&params.image_uri)?;
        let key = handle_hash(&params.handle);
        if self.handles.contains_key(&key) {
            return Err(ProtocolError::HandleTaken(params.handle.clone()));
        }

        let profile_id = self.profile_counter + 1;
        let follow_module_data = match params.follow_module {
            Some(module) => init_follow(profile_id, module)?,
            None => Vec::new(),
        };

        self.profile_counter = profile_id;
        self.ledger.mint(params.to, profile_id)?;
        self.handles.insert(key, profile_id);
        self.profiles.insert(
            profile_id,
            Profile {
                id: profile_id,
                handle: params.handle.clone(),
                image_uri: params.image_uri.clone(),
                follow_module: params.follow_module,
                follow_module_data: follow_module_data.clone(),
                follow_nft_uri: params.follow_nft_uri.clone(),
                dispatcher: None,
            },
        );
        debug!(profile_id, handle = %params.handle, to = %params.to, "Profile minted");
        Ok((profile_id, follow_module_data))
    }

    /// Replace (or detach, with `None`) the follow module.
    pub fn set_follow_module<F>(
        &mut self,
        profile_id: ProfileId,
        follow_module: Option<Address>,
        init_follow: F,
    ) -> ProtocolResult<ModuleData>
    where
        F: FnOnce(Address) -> ProtocolResult<ModuleData>,
    {
        let data = match follow_module {
            Some(module) => init_follow(module)?,
            None => Vec::new(),
        };
        let profile = self.profile_mut(profile_id)?;
        profile.follow_module = follow_module;
        profile.follow_module_data = data.clone();
        Ok(data)
    }

    pub fn set_dispatcher(
        &mut self,
        profile_id: ProfileId,
        dispatcher: Option<Address>,
    ) -> ProtocolResult<()> {
        self.profile_mut(profile_id)?.dispatcher = dispatcher;
        Ok(())
    }

    pub fn set_image_uri(&mut self, profile_id: ProfileId, image_uri: &str) -> ProtocolResult<()> {
        self.check_image_uri(image_uri)?;
        self.profile_mut(profile_id)?.image_uri = image_uri.to_string();
        Ok(())
    }

    pub fn set_follow_nft_uri(
        &mut self,
        profile_id: ProfileId,
        follow_nft_uri: &str,
    ) -> ProtocolResult<()> {
        self.profile_mut(profile_id)?.follow_nft_uri = follow_nft_uri.to_string();
        Ok(())
    }

    /// Point `wallet` at one of its profiles, or clear with `0`.
    pub fn set_default_profile(&mut self, wallet: Address, profile_id: ProfileId) -> ProtocolResult<()> {
        if profile_id == 0 {
            self.default_profiles.remove(&wallet);
            return Ok(());
        }
        if self.ledger.owner_of(profile_id) != Some(wallet) {
            return Err(ProtocolError::NotProfileOwner);
        }
        self.default_profiles.insert(wallet, profile_id);
        Ok(())
    }

    /// Move ownership. Runs the transfer hook.
    pub fn transfer(&mut self, profile_id: ProfileId, from: Address, to: Address) -> ProtocolResult<()> {
        if to.is_zero() {
            return Err(ProtocolError::ZeroAddress);
        }
        self.require_owner(from, profile_id)?;
        self.before_transfer(profile_id, from);
        self.ledger.transfer(from, to, profile_id)
    }

    /// Retire ownership and free the handle. The record persists and the id
    /// is never reassigned. Returns the last owner.
    pub fn burn(&mut self, profile_id: ProfileId) -> ProtocolResult<Address> {
        let owner = self
            .ledger
            .owner_of(profile_id)
            .ok_or(ProtocolError::ProfileDoesNotExist(profile_id))?;
        self.before_transfer(profile_id, owner);
        self.ledger.burn(profile_id)?;
        if let Some(profile) = self.profiles.get(&profile_id) {
            self.handles.remove(&handle_hash(&profile.handle));
        }
        Ok(owner)
    }

    /// Clears the dispatcher and the previous owner's default profile when it
    /// points at `profile_id`.
    fn before_transfer(&mut self, profile_id: ProfileId, from: Address) {
        if let Some(profile) = self.profiles.get_mut(&profile_id) {
            profile.dispatcher = None;
        }
        if self.default_profiles.get(&from) == Some(&profile_id) {
            self.default_profiles.remove(&from);
        }
    }

    fn profile_mut(&mut self, profile_id: ProfileId) -> ProtocolResult<&mut Profile> {
        self.profiles
            .get_mut(&profile_id)
            .ok_or(ProtocolError::ProfileDoesNotExist(profile_id))
    }

    fn check_image_uri(&self, image_uri: &str) -> ProtocolResult<()> {
        if image_uri.len() > self.limits.max_image_uri_length {
            return Err(ProtocolError::ProfileImageUriTooLong {
                length: image_uri.len(),
                max: self.limits.max_image_uri_length,
            });
        }
        Ok(())
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    pub fn get_profile(&self, profile_id: ProfileId) -> Option<&Profile> {
        self.profiles.get(&profile_id)
    }

    pub fn owner_of(&self, profile_id: ProfileId) -> Option<Address> {
        self.ledger.owner_of(profile_id)
    }

    pub fn balance_of(&self, holder: &Address) -> u64 {
        self.ledger.balance_of(holder)
    }

    /// Profile currently holding `handle`.
    pub fn profile_id_by_handle(&self, handle: &str) -> Option<ProfileId> {
        self.handles.get(&handle_hash(handle)).copied()
    }

    pub fn default_profile(&self, wallet: &Address) -> Option<ProfileId> {
        self.default_profiles.get(wallet).copied()
    }

    pub fn dispatcher(&self, profile_id: ProfileId) -> Option<Address> {
        self.profiles.get(&profile_id).and_then(|p| p.dispatcher)
    }

    /// True if the profile exists and has not been burned.
    pub fn is_live(&self, profile_id: ProfileId) -> bool {
        self.ledger.owner_of(profile_id).is_some()
    }

    /// True if the id was ever assigned, burned or not.
    pub fn was_created(&self, profile_id: ProfileId) -> bool {
        profile_id != 0 && profile_id <= self.profile_counter
    }

    /// Number of profile ids assigned so far.
    pub fn profile_count(&self) -> ProfileId {
        self.profile_counter
    }

    pub fn limits(&self) -> ProfileLimits {
        self.limits
    }
}
