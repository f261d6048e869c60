//! Governance-controlled module allow-lists.

use shared_types::{Address, ModuleKind};
use std::collections::HashSet;

/// One allow-list per module kind.
///
/// De-whitelisting is not retroactive: modules already attached to a profile
/// or publication keep being invoked.
#[derive(Debug, Clone, Default)]
pub struct ModuleAllowLists {
    follow: HashSet<Address>,
    collect: HashSet<Address>,
    reference: HashSet<Address>,
}

impl ModuleAllowLists {
    fn list(&self, kind: ModuleKind) -> &HashSet<Address> {
        match kind {
            ModuleKind::Follow => &self.follow,
            ModuleKind::Collect => &self.collect,
            ModuleKind::Reference => &self.reference,
        }
    }

    fn list_mut(&mut self, kind: ModuleKind) -> &mut HashSet<Address> {
        match kind {
            ModuleKind::Follow => &mut self.follow,
            ModuleKind::Collect => &mut self.collect,
            ModuleKind::Reference => &mut self.reference,
        }
    }

    pub fn set(&mut self, kind: ModuleKind, module: Address, whitelisted: bool) {
        let list = self.list_mut(kind);
        if whitelisted {
            list.insert(module);
        } else {
            list.remove(&module);
        }
    }

    pub fn contains(&self, kind: ModuleKind, module: &Address) -> bool {
        self.list(kind).contains(module)
    }
}
