//! Installed module implementations, keyed by address.

use shared_types::{
    Address, CollectModule, FollowModule, ModuleKind, ProtocolError, ProtocolResult,
    ReferenceModule,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Address -> implementation, one map per module kind.
///
/// Implementations are stateless, so cloning the directory only clones the
/// `Arc`s.
#[derive(Clone, Default)]
pub struct ModuleDirectory {
    follow: HashMap<Address, Arc<dyn FollowModule>>,
    collect: HashMap<Address, Arc<dyn CollectModule>>,
    reference: HashMap<Address, Arc<dyn ReferenceModule>>,
}

impl ModuleDirectory {
    /// Install a follow module. Returns the module's name.
    ///
    /// An address holds at most one implementation per kind, for good:
    /// what governance allow-listed is what runs.
    pub fn install_follow(
        &mut self,
        address: Address,
        module: Arc<dyn FollowModule>,
    ) -> ProtocolResult<String> {
        let name = module.name().to_string();
        occupy(&mut self.follow, address, module)?;
        Ok(name)
    }

    pub fn install_collect(
        &mut self,
        address: Address,
        module: Arc<dyn CollectModule>,
    ) -> ProtocolResult<String> {
        let name = module.name().to_string();
        occupy(&mut self.collect, address, module)?;
        Ok(name)
    }

    pub fn install_reference(
        &mut self,
        address: Address,
        module: Arc<dyn ReferenceModule>,
    ) -> ProtocolResult<String> {
        let name = module.name().to_string();
        occupy(&mut self.reference, address, module)?;
        Ok(name)
    }

    pub fn follow(&self, address: &Address) -> Option<&Arc<dyn FollowModule>> {
        self.follow.get(address)
    }

    pub fn collect(&self, address: &Address) -> Option<&Arc<dyn CollectModule>> {
        self.collect.get(address)
    }

    pub fn reference(&self, address: &Address) -> Option<&Arc<dyn ReferenceModule>> {
        self.reference.get(address)
    }

    /// Name of the module installed at `address`, if any.
    pub fn name_of(&self, kind: ModuleKind, address: &Address) -> Option<&str> {
        match kind {
            ModuleKind::Follow => self.follow.get(address).map(|m| m.name()),
            ModuleKind::Collect => self.collect.get(address).map(|m| m.name()),
            ModuleKind::Reference => self.reference.get(address).map(|m| m.name()),
        }
    }
}

fn occupy<M: ?Sized>(
    slots: &mut HashMap<Address, Arc<M>>,
    address: Address,
    module: Arc<M>,
) -> ProtocolResult<()> {
    match slots.entry(address) {
        Entry::Occupied(_) => Err(ProtocolError::ModuleAlreadyInstalled(address)),
        Entry::Vacant(slot) => {
            slot.insert(module);
            Ok(())
        }
    }
}

impl fmt::Debug for ModuleDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDirectory")
            .field("follow", &self.follow.len())
            .field("collect", &self.collect.len())
            .field("reference", &self.reference.len())
            .finish()
    }
}
