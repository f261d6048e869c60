//! # Protocol State Machine (SG-06)
//!
//! Three-level pause gate plus the governance roles that move it.
//!
//! | State              | Profiles / follow / collect / burn | Post / comment / mirror |
//! |--------------------|------------------------------------|-------------------------|
//! | `Unpaused`         | allowed                            | allowed                 |
//! | `PublishingPaused` | allowed                            | `PublishingPaused`      |
//! | `Paused`           | `ProtocolPaused`                   | `ProtocolPaused`        |
//!
//! Any transition is permitted. The hub boots `Paused` with no governance.

use shared_types::{Address, ProtocolError, ProtocolResult, ProtocolState};
use std::collections::HashSet;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ProtocolStateMachine {
    initialized: bool,
    governance: Option<Address>,
    emergency_admin: Option<Address>,
    state: ProtocolState,
    profile_creators: HashSet<Address>,
}

impl ProtocolStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-shot bootstrap. Leaves the protocol `Paused`.
    pub fn initialize(&mut self, governance: Address) -> ProtocolResult<()> {
        if self.initialized {
            return Err(ProtocolError::AlreadyInitialized);
        }
        if governance.is_zero() {
            return Err(ProtocolError::ZeroAddress);
        }
        self.initialized = true;
        self.governance = Some(governance);
        self.state = ProtocolState::Paused;
        info!(%governance, "Protocol initialized");
        Ok(())
    }

    // =========================================================================
    // ROLES
    // =========================================================================

    pub fn require_governance(&self, caller: Address) -> ProtocolResult<()> {
        if self.governance == Some(caller) {
            Ok(())
        } else {
            Err(ProtocolError::NotGovernance)
        }
    }

    /// Returns the previous governance.
    pub fn set_governance(
        &mut self,
        caller: Address,
        governance: Address,
    ) -> ProtocolResult<Option<Address>> {
        self.require_governance(caller)?;
        if governance.is_zero() {
            return Err(ProtocolError::ZeroAddress);
        }
        Ok(self.governance.replace(governance))
    }

    /// Returns the previous emergency admin. `None` revokes the role.
    pub fn set_emergency_admin(
        &mut self,
        caller: Address,
        emergency_admin: Option<Address>,
    ) -> ProtocolResult<Option<Address>> {
        self.require_governance(caller)?;
        Ok(std::mem::replace(&mut self.emergency_admin, emergency_admin))
    }

    /// Governance or the emergency admin may move to any state. Returns the
    /// previous state.
    pub fn set_state(&mut self, caller: Address, state: ProtocolState) -> ProtocolResult<ProtocolState> {
        let authorized = self.governance == Some(caller) || self.emergency_admin == Some(caller);
        if !authorized {
            return Err(ProtocolError::NotGovernanceOrEmergencyAdmin);
        }
        Ok(std::mem::replace(&mut self.state, state))
    }

    pub fn whitelist_profile_creator(
        &mut self,
        caller: Address,
        creator: Address,
        whitelisted: bool,
    ) -> ProtocolResult<()> {
        self.require_governance(caller)?;
        if whitelisted {
            self.profile_creators.insert(creator);
        } else {
            self.profile_creators.remove(&creator);
        }
        Ok(())
    }

    pub fn require_profile_creator(&self, caller: Address) -> ProtocolResult<()> {
        if self.profile_creators.contains(&caller) {
            Ok(())
        } else {
            Err(ProtocolError::ProfileCreatorNotWhitelisted(caller))
        }
    }

    // =========================================================================
    // GATES
    // =========================================================================

    pub fn require_not_paused(&self) -> ProtocolResult<()> {
        if self.state == ProtocolState::Paused {
            return Err(ProtocolError::ProtocolPaused);
        }
        Ok(())
    }

    pub fn require_publishing_allowed(&self) -> ProtocolResult<()> {
        self.require_not_paused()?;
        if self.state == ProtocolState::PublishingPaused {
            return Err(ProtocolError::PublishingPaused);
        }
        Ok(())
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    pub fn state(&self) -> ProtocolState {
        self.state
    }

    pub fn governance(&self) -> Option<Address> {
        self.governance
    }

    pub fn emergency_admin(&self) -> Option<Address> {
        self.emergency_admin
    }

    pub fn is_profile_creator_whitelisted(&self, creator: &Address) -> bool {
        self.profile_creators.contains(creator)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
