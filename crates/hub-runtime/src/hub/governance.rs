//! Governance surface and module installation.

use super::SocialHub;
use crate::container::HubState;
use shared_types::{
    Address, CollectModule, EventPayload, FollowModule, ModuleKind, ProtocolResult,
    ProtocolState, ReferenceModule,
};
use std::sync::Arc;
use tracing::info;

impl HubState {
    fn whitelist_module(
        &mut self,
        caller: Address,
        kind: ModuleKind,
        module: Address,
        whitelisted: bool,
    ) -> ProtocolResult<()> {
        self.protocol.require_governance(caller)?;
        Arc::make_mut(&mut self.modules).set_whitelisted(kind, module, whitelisted);
        info!(%kind, %module, whitelisted, "Module allow-list updated");
        self.emit(EventPayload::ModuleWhitelisted {
            kind,
            module,
            whitelisted,
        });
        Ok(())
    }

    fn module_installed(&mut self, kind: ModuleKind, module: Address, name: String) {
        info!(%kind, %module, %name, "Module installed");
        self.emit(EventPayload::ModuleInstalled { kind, module, name });
    }
}

impl SocialHub {
    /// One-shot bootstrap. The hub stays `Paused` until governance unpauses.
    pub fn initialize(&mut self, governance: Address) -> ProtocolResult<()> {
        self.transact("initialize", |s| {
            Arc::make_mut(&mut s.protocol).initialize(governance)?;
            info!(%governance, "Hub initialized");
            s.emit(EventPayload::GovernanceSet {
                caller: governance,
                previous: None,
                governance,
            });
            Ok(())
        })
    }

    pub fn set_governance(&mut self, caller: Address, governance: Address) -> ProtocolResult<()> {
        self.transact("set_governance", |s| {
            let previous = Arc::make_mut(&mut s.protocol).set_governance(caller, governance)?;
            s.emit(EventPayload::GovernanceSet {
                caller,
                previous,
                governance,
            });
            Ok(())
        })
    }

    pub fn set_emergency_admin(
        &mut self,
        caller: Address,
        emergency_admin: Option<Address>,
    ) -> ProtocolResult<()> {
        self.transact("set_emergency_admin", |s| {
            let previous = Arc::make_mut(&mut s.protocol).set_emergency_admin(caller, emergency_admin)?;
            s.emit(EventPayload::EmergencyAdminSet {
                caller,
                previous,
                emergency_admin,
            });
            Ok(())
        })
    }

    /// Governance or the emergency admin may move to any state.
    pub fn set_state(&mut self, caller: Address, state: ProtocolState) -> ProtocolResult<()> {
        self.transact("set_state", |s| {
            let previous = Arc::make_mut(&mut s.protocol).set_state(caller, state)?;
            info!(%caller, ?previous, ?state, "Protocol state set");
            s.emit(EventPayload::StateSet {
                caller,
                previous,
                state,
            });
            Ok(())
        })
    }

    pub fn whitelist_profile_creator(
        &mut self,
        caller: Address,
        creator: Address,
        whitelisted: bool,
    ) -> ProtocolResult<()> {
        self.transact("whitelist_profile_creator", |s| {
            Arc::make_mut(&mut s.protocol)
                .whitelist_profile_creator(caller, creator, whitelisted)?;
            s.emit(EventPayload::ProfileCreatorWhitelisted {
                creator,
                whitelisted,
            });
            Ok(())
        })
    }

    pub fn whitelist_follow_module(
        &mut self,
        caller: Address,
        module: Address,
        whitelisted: bool,
    ) -> ProtocolResult<()> {
        self.transact("whitelist_follow_module", |s| {
            s.whitelist_module(caller, ModuleKind::Follow, module, whitelisted)
        })
    }

    pub fn whitelist_collect_module(
        &mut self,
        caller: Address,
        module: Address,
        whitelisted: bool,
    ) -> ProtocolResult<()> {
        self.transact("whitelist_collect_module", |s| {
            s.whitelist_module(caller, ModuleKind::Collect, module, whitelisted)
        })
    }

    pub fn whitelist_reference_module(
        &mut self,
        caller: Address,
        module: Address,
        whitelisted: bool,
    ) -> ProtocolResult<()> {
        self.transact("whitelist_reference_module", |s| {
            s.whitelist_module(caller, ModuleKind::Reference, module, whitelisted)
        })
    }

    /// Make `module` callable at `address`. Installing is not attaching:
    /// the address still has to be allow-listed before anyone can use it.
    /// An occupied address is never overwritten (`ModuleAlreadyInstalled`).
    pub fn install_follow_module(
        &mut self,
        address: Address,
        module: Arc<dyn FollowModule>,
    ) -> ProtocolResult<()> {
        self.transact("install_follow_module", |s| {
            let name = Arc::make_mut(&mut s.modules).install_follow_module(address, module)?;
            s.module_installed(ModuleKind::Follow, address, name);
            Ok(())
        })
    }

    pub fn install_collect_module(
        &mut self,
        address: Address,
        module: Arc<dyn CollectModule>,
    ) -> ProtocolResult<()> {
        self.transact("install_collect_module", |s| {
            let name = Arc::make_mut(&mut s.modules).install_collect_module(address, module)?;
            s.module_installed(ModuleKind::Collect, address, name);
            Ok(())
        })
    }

    pub fn install_reference_module(
        &mut self,
        address: Address,
        module: Arc<dyn ReferenceModule>,
    ) -> ProtocolResult<()> {
        self.transact("install_reference_module", |s| {
            let name = Arc::make_mut(&mut s.modules).install_reference_module(address, module)?;
            s.module_installed(ModuleKind::Reference, address, name);
            Ok(())
        })
    }
}
