//! Profile operations.

use super::{payloads, Principal, SocialHub};
use crate::container::HubState;
use shared_types::{
    Address, EventPayload, InitContext, ModuleKind, ProfileId, ProtocolResult,
};
use sg_01_signature_authority::Eip712Signature;
use sg_03_profile_registry::CreateProfileParams;
use std::sync::Arc;
use tracing::info;

impl HubState {
    fn create_profile(
        &mut self,
        caller: Address,
        params: &CreateProfileParams,
    ) -> ProtocolResult<ProfileId> {
        self.protocol.require_not_paused()?;
        self.protocol.require_profile_creator(caller)?;

        let modules = &self.modules;
        let now = self.now;
        let (profile_id, follow_module_return_data) =
            Arc::make_mut(&mut self.profiles).create_profile(params, |profile_id, module| {
                modules.require_whitelisted(ModuleKind::Follow, Some(module))?;
                modules.initialize_follow(
                    module,
                    &InitContext {
                        profile_id,
                        pub_id: None,
                        timestamp: now,
                        data: &params.follow_module_init_data,
                    },
                )
            })?;

        info!(profile_id, handle = %params.handle, to = %params.to, "Profile created");
        self.emit(EventPayload::ProfileCreated {
            profile_id,
            creator: caller,
            to: params.to,
            handle: params.handle.clone(),
            image_uri: params.image_uri.clone(),
            follow_module: params.follow_module,
            follow_module_return_data,
            follow_nft_uri: params.follow_nft_uri.clone(),
        });
        Ok(profile_id)
    }

    fn set_follow_module(
        &mut self,
        principal: Principal<'_>,
        profile_id: ProfileId,
        follow_module: Option<Address>,
        init_data: &[u8],
    ) -> ProtocolResult<()> {
        self.protocol.require_not_paused()?;
        let caller = self.authenticate(principal, || {
            payloads::set_follow_module(profile_id, follow_module, init_data)
        })?;
        self.profiles.require_owner(caller, profile_id)?;

        let modules = &self.modules;
        let now = self.now;
        let follow_module_return_data =
            Arc::make_mut(&mut self.profiles)
                .set_follow_module(profile_id, follow_module, |module| {
                    modules.require_whitelisted(ModuleKind::Follow, Some(module))?;
                    modules.initialize_follow(
                        module,
                        &InitContext {
                            profile_id,
                            pub_id: None,
                            timestamp: now,
                            data: init_data,
                        },
                    )
                })?;

        info!(profile_id, follow_module = ?follow_module, "Follow module set");
        self.emit(EventPayload::FollowModuleSet {
            profile_id,
            follow_module,
            follow_module_return_data,
        });
        Ok(())
    }

    fn set_dispatcher(
        &mut self,
        principal: Principal<'_>,
        profile_id: ProfileId,
        dispatcher: Option<Address>,
    ) -> ProtocolResult<()> {
        self.protocol.require_not_paused()?;
        let caller = self.authenticate(principal, || {
            payloads::set_dispatcher(profile_id, dispatcher)
        })?;
        self.profiles.require_owner(caller, profile_id)?;
        Arc::make_mut(&mut self.profiles).set_dispatcher(profile_id, dispatcher)?;

        info!(profile_id, dispatcher = ?dispatcher, "Dispatcher set");
        self.emit(EventPayload::DispatcherSet {
            profile_id,
            dispatcher,
        });
        Ok(())
    }

    fn set_profile_image_uri(
        &mut self,
        principal: Principal<'_>,
        profile_id: ProfileId,
        image_uri: &str,
    ) -> ProtocolResult<()> {
        self.protocol.require_not_paused()?;
        let caller = self.authenticate(principal, || {
            payloads::set_profile_image_uri(profile_id, image_uri)
        })?;
        self.profiles.require_owner_or_dispatcher(caller, profile_id)?;
        Arc::make_mut(&mut self.profiles).set_image_uri(profile_id, image_uri)?;

        self.emit(EventPayload::ProfileImageUriSet {
            profile_id,
            image_uri: image_uri.to_string(),
        });
        Ok(())
    }

    fn set_follow_nft_uri(
        &mut self,
        principal: Principal<'_>,
        profile_id: ProfileId,
        follow_nft_uri: &str,
    ) -> ProtocolResult<()> {
        self.protocol.require_not_paused()?;
        let caller = self.authenticate(principal, || {
            payloads::set_follow_nft_uri(profile_id, follow_nft_uri)
        })?;
        self.profiles.require_owner_or_dispatcher(caller, profile_id)?;
        Arc::make_mut(&mut self.profiles).set_follow_nft_uri(profile_id, follow_nft_uri)?;

        self.emit(EventPayload::FollowNftUriSet {
            profile_id,
            follow_nft_uri: follow_nft_uri.to_string(),
        });
        Ok(())
    }

    /// `wallet` is the caller, or the signer of a delegated call.
    fn set_default_profile(
        &mut self,
        principal: Principal<'_>,
        profile_id: ProfileId,
    ) -> ProtocolResult<()> {
        self.protocol.require_not_paused()?;
        let wallet = match principal {
            Principal::Caller(wallet) | Principal::Signer(wallet, _) => wallet,
        };
        let wallet = self.authenticate(principal, || {
            payloads::set_default_profile(wallet, profile_id)
        })?;
        Arc::make_mut(&mut self.profiles).set_default_profile(wallet, profile_id)?;

        self.emit(EventPayload::DefaultProfileSet { wallet, profile_id });
        Ok(())
    }

    fn burn(&mut self, principal: Principal<'_>, profile_id: ProfileId) -> ProtocolResult<()> {
        self.protocol.require_not_paused()?;
        let caller = self.authenticate(principal, || payloads::burn(profile_id))?;
        self.profiles.require_owner(caller, profile_id)?;

        let cleared = self.transfer_hook_effects(profile_id, caller);
        let owner = Arc::make_mut(&mut self.profiles).burn(profile_id)?;

        info!(profile_id, %owner, "Profile burned");
        for payload in cleared {
            self.emit(payload);
        }
        self.emit(EventPayload::ProfileBurned { profile_id, owner });
        Ok(())
    }

    fn transfer_profile(
        &mut self,
        caller: Address,
        to: Address,
        profile_id: ProfileId,
    ) -> ProtocolResult<()> {
        self.protocol.require_not_paused()?;
        let cleared = self.transfer_hook_effects(profile_id, caller);
        Arc::make_mut(&mut self.profiles).transfer(profile_id, caller, to)?;

        info!(profile_id, from = %caller, %to, "Profile transferred");
        for payload in cleared {
            self.emit(payload);
        }
        self.emit(EventPayload::ProfileTransferred {
            profile_id,
            from: caller,
            to,
        });
        Ok(())
    }

    /// Events for what the ownership-change hook is about to clear.
    fn transfer_hook_effects(&self, profile_id: ProfileId, from: Address) -> Vec<EventPayload> {
        let mut effects = Vec::new();
        if self.profiles.dispatcher(profile_id).is_some() {
            effects.push(EventPayload::DispatcherSet {
                profile_id,
                dispatcher: None,
            });
        }
        if self.profiles.default_profile(&from) == Some(profile_id) {
            effects.push(EventPayload::DefaultProfileSet {
                wallet: from,
                profile_id: 0,
            });
        }
        effects
    }
}

impl SocialHub {
    /// Mint a new profile to `params.to`. The caller must be an allow-listed
    /// profile creator.
    pub fn create_profile(
        &mut self,
        caller: Address,
        params: &CreateProfileParams,
    ) -> ProtocolResult<ProfileId> {
        self.transact("create_profile", |s| s.create_profile(caller, params))
    }

    /// Attach, replace or (with `None`) detach the follow module.
    pub fn set_follow_module(
        &mut self,
        caller: Address,
        profile_id: ProfileId,
        follow_module: Option<Address>,
        init_data: &[u8],
    ) -> ProtocolResult<()> {
        self.transact("set_follow_module", |s| {
            s.set_follow_module(Principal::Caller(caller), profile_id, follow_module, init_data)
        })
    }

    pub fn set_follow_module_with_sig(
        &mut self,
        signer: Address,
        profile_id: ProfileId,
        follow_module: Option<Address>,
        init_data: &[u8],
        signature: &Eip712Signature,
    ) -> ProtocolResult<()> {
        self.transact("set_follow_module_with_sig", |s| {
            s.set_follow_module(
                Principal::Signer(signer, signature),
                profile_id,
                follow_module,
                init_data,
            )
        })
    }

    pub fn set_dispatcher(
        &mut self,
        caller: Address,
        profile_id: ProfileId,
        dispatcher: Option<Address>,
    ) -> ProtocolResult<()> {
        self.transact("set_dispatcher", |s| {
            s.set_dispatcher(Principal::Caller(caller), profile_id, dispatcher)
        })
    }

    pub fn set_dispatcher_with_sig(
        &mut self,
        signer: Address,
        profile_id: ProfileId,
        dispatcher: Option<Address>,
        signature: &Eip712Signature,
    ) -> ProtocolResult<()> {
        self.transact("set_dispatcher_with_sig", |s| {
            s.set_dispatcher(Principal::Signer(signer, signature), profile_id, dispatcher)
        })
    }

    pub fn set_profile_image_uri(
        &mut self,
        caller: Address,
        profile_id: ProfileId,
        image_uri: &str,
    ) -> ProtocolResult<()> {
        self.transact("set_profile_image_uri", |s| {
            s.set_profile_image_uri(Principal::Caller(caller), profile_id, image_uri)
        })
    }

    pub fn set_profile_image_uri_with_sig(
        &mut self,
        signer: Address,
        profile_id: ProfileId,
        image_uri: &str,
        signature: &Eip712Signature,
    ) -> ProtocolResult<()> {
        self.transact("set_profile_image_uri_with_sig", |s| {
            s.set_profile_image_uri(Principal::Signer(signer, signature), profile_id, image_uri)
        })
    }

    pub fn set_follow_nft_uri(
        &mut self,
        caller: Address,
        profile_id: ProfileId,
        follow_nft_uri: &str,
    ) -> ProtocolResult<()> {
        self.transact("set_follow_nft_uri", |s| {
            s.set_follow_nft_uri(Principal::Caller(caller), profile_id, follow_nft_uri)
        })
    }

    pub fn set_follow_nft_uri_with_sig(
        &mut self,
        signer: Address,
        profile_id: ProfileId,
        follow_nft_uri: &str,
        signature: &Eip712Signature,
    ) -> ProtocolResult<()> {
        self.transact("set_follow_nft_uri_with_sig", |s| {
            s.set_follow_nft_uri(
                Principal::Signer(signer, signature),
                profile_id,
                follow_nft_uri,
            )
        })
    }

    /// Point `wallet`'s default profile at `profile_id`; `0` clears it.
    pub fn set_default_profile(
        &mut self,
        wallet: Address,
        profile_id: ProfileId,
    ) -> ProtocolResult<()> {
        self.transact("set_default_profile", |s| {
            s.set_default_profile(Principal::Caller(wallet), profile_id)
        })
    }

    pub fn set_default_profile_with_sig(
        &mut self,
        wallet: Address,
        profile_id: ProfileId,
        signature: &Eip712Signature,
    ) -> ProtocolResult<()> {
        self.transact("set_default_profile_with_sig", |s| {
            s.set_default_profile(Principal::Signer(wallet, signature), profile_id)
        })
    }

    /// Retire ownership of a profile. Its handle becomes available again;
    /// its id and publications remain.
    pub fn burn(&mut self, caller: Address, profile_id: ProfileId) -> ProtocolResult<()> {
        self.transact("burn", |s| s.burn(Principal::Caller(caller), profile_id))
    }

    pub fn burn_with_sig(
        &mut self,
        signer: Address,
        profile_id: ProfileId,
        signature: &Eip712Signature,
    ) -> ProtocolResult<()> {
        self.transact("burn_with_sig", |s| {
            s.burn(Principal::Signer(signer, signature), profile_id)
        })
    }

    pub fn transfer_profile(
        &mut self,
        caller: Address,
        to: Address,
        profile_id: ProfileId,
    ) -> ProtocolResult<()> {
        self.transact("transfer_profile", |s| {
            s.transfer_profile(caller, to, profile_id)
        })
    }
}
