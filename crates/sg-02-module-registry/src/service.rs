//! # Module Registry Service
//!
//! Allow-list management plus the single place where the hub calls into
//! module code. Every [`ModuleRejection`] is turned into
//! [`ProtocolError::ModuleRejected`] here, tagged with the module address.

use crate::domain::allowlist::ModuleAllowLists;
use crate::domain::directory::ModuleDirectory;
use shared_types::{
    Address, CollectContext, CollectModule, FollowContext, FollowModule, InitContext, ModuleData,
    ModuleKind, ModuleRejection, ProtocolError, ProtocolResult, ProtocolView, ReferenceContext,
    ReferenceModule,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    allow_lists: ModuleAllowLists,
    directory: ModuleDirectory,
}

fn rejected(module: Address) -> impl FnOnce(ModuleRejection) -> ProtocolError {
    move |rejection| ProtocolError::ModuleRejected {
        module,
        reason: rejection.reason,
    }
}

fn not_installed(kind: ModuleKind, module: Address) -> ProtocolError {
    ProtocolError::ModuleRejected {
        module,
        reason: format!("no {kind} module installed at this address"),
    }
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // ALLOW-LISTS
    // =========================================================================

    pub fn set_whitelisted(&mut self, kind: ModuleKind, module: Address, whitelisted: bool) {
        self.allow_lists.set(kind, module, whitelisted);
    }

    pub fn is_whitelisted(&self, kind: ModuleKind, module: &Address) -> bool {
        self.allow_lists.contains(kind, module)
    }

    /// `ModuleNotWhitelisted` unless `module` is absent or allow-listed.
    pub fn require_whitelisted(&self, kind: ModuleKind, module: Option<Address>) -> ProtocolResult<()> {
        match module {
            Some(address) if !self.is_whitelisted(kind, &address) => {
                Err(ProtocolError::ModuleNotWhitelisted(address))
            }
            _ => Ok(()),
        }
    }

    // =========================================================================
    // DIRECTORY
    // =========================================================================

    /// Fails with `ModuleAlreadyInstalled` if the address is taken.
    pub fn install_follow_module(
        &mut self,
        address: Address,
        module: Arc<dyn FollowModule>,
    ) -> ProtocolResult<String> {
        self.directory.install_follow(address, module)
    }

    pub fn install_collect_module(
        &mut self,
        address: Address,
        module: Arc<dyn CollectModule>,
    ) -> ProtocolResult<String> {
        self.directory.install_collect(address, module)
    }

    pub fn install_reference_module(
        &mut self,
        address: Address,
        module: Arc<dyn ReferenceModule>,
    ) -> ProtocolResult<String> {
        self.directory.install_reference(address, module)
    }

    pub fn module_name(&self, kind: ModuleKind, address: &Address) -> Option<&str> {
        self.directory.name_of(kind, address)
    }

    // =========================================================================
    // INVOCATION
    // =========================================================================

    pub fn initialize_follow(&self, module: Address, ctx: &InitContext<'_>) -> ProtocolResult<ModuleData> {
        let implementation = self
            .directory
            .follow(&module)
            .ok_or_else(|| not_installed(ModuleKind::Follow, module))?;
        debug!(%module, profile_id = ctx.profile_id, "Initializing follow module");
        implementation.initialize(ctx).map_err(rejected(module))
    }

    pub fn process_follow(
        &self,
        module: Address,
        ctx: &FollowContext<'_>,
        view: &dyn ProtocolView,
    ) -> ProtocolResult<()> {
        let implementation = self
            .directory
            .follow(&module)
            .ok_or_else(|| not_installed(ModuleKind::Follow, module))?;
        debug!(%module, profile_id = ctx.profile_id, follower = %ctx.follower, "Processing follow");
        implementation.process_follow(ctx, view).map_err(rejected(module))
    }

    pub fn initialize_collect(&self, module: Address, ctx: &InitContext<'_>) -> ProtocolResult<ModuleData> {
        let implementation = self
            .directory
            .collect(&module)
            .ok_or_else(|| not_installed(ModuleKind::Collect, module))?;
        debug!(%module, profile_id = ctx.profile_id, pub_id = ?ctx.pub_id, "Initializing collect module");
        implementation.initialize(ctx).map_err(rejected(module))
    }

    pub fn process_collect(
        &self,
        module: Address,
        ctx: &CollectContext<'_>,
        view: &dyn ProtocolView,
    ) -> ProtocolResult<()> {
        let implementation = self
            .directory
            .collect(&module)
            .ok_or_else(|| not_installed(ModuleKind::Collect, module))?;
        debug!(
            %module,
            profile_id = ctx.profile_id,
            pub_id = ctx.pub_id,
            collector = %ctx.collector,
            "Processing collect"
        );
        implementation.process_collect(ctx, view).map_err(rejected(module))
    }

    pub fn initialize_reference(
        &self,
        module: Address,
        ctx: &InitContext<'_>,
    ) -> ProtocolResult<ModuleData> {
        let implementation = self
            .directory
            .reference(&module)
            .ok_or_else(|| not_installed(ModuleKind::Reference, module))?;
        debug!(%module, profile_id = ctx.profile_id, pub_id = ?ctx.pub_id, "Initializing reference module");
        implementation.initialize(ctx).map_err(rejected(module))
    }

    pub fn process_comment(
        &self,
        module: Address,
        ctx: &ReferenceContext<'_>,
        view: &dyn ProtocolView,
    ) -> ProtocolResult<()> {
        let implementation = self
            .directory
            .reference(&module)
            .ok_or_else(|| not_installed(ModuleKind::Reference, module))?;
        debug!(%module, profile_id = ctx.profile_id, "Processing comment");
        implementation.process_comment(ctx, view).map_err(rejected(module))
    }

    pub fn process_mirror(
        &self,
        module: Address,
        ctx: &ReferenceContext<'_>,
        view: &dyn ProtocolView,
    ) -> ProtocolResult<()> {
        let implementation = self
            .directory
            .reference(&module)
            .ok_or_else(|| not_installed(ModuleKind::Reference, module))?;
        debug!(%module, profile_id = ctx.profile_id, "Processing mirror");
        implementation.process_mirror(ctx, view).map_err(rejected(module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::testing::StaticView;
    use crate::adapters::{AllowlistFollowModule, FreeCollectModule, RevertFollowModule};

    const FOLLOW: Address = Address::repeat_byte(0xf0);
    const COLLECT: Address = Address::repeat_byte(0xc0);

    fn init_ctx() -> InitContext<'static> {
        InitContext {
            profile_id: 1,
            pub_id: Some(1),
            timestamp: 0,
            data: &[],
        }
    }

    #[test]
    fn test_absent_module_always_allowed() {
        let registry = ModuleRegistry::new();
        assert!(registry.require_whitelisted(ModuleKind::Collect, None).is_ok());
        assert_eq!(
            registry.require_whitelisted(ModuleKind::Collect, Some(COLLECT)),
            Err(ProtocolError::ModuleNotWhitelisted(COLLECT))
        );
    }

    #[test]
    fn test_whitelist_is_per_kind() {
        let mut registry = ModuleRegistry::new();
        registry.set_whitelisted(ModuleKind::Collect, COLLECT, true);
        assert!(registry.require_whitelisted(ModuleKind::Collect, Some(COLLECT)).is_ok());
        assert!(registry.require_whitelisted(ModuleKind::Follow, Some(COLLECT)).is_err());
    }

    #[test]
    fn test_uninstalled_module_is_a_rejection() {
        let registry = ModuleRegistry::new();
        let err = registry.initialize_collect(COLLECT, &init_ctx()).unwrap_err();
        assert!(matches!(err, ProtocolError::ModuleRejected { module, .. } if module == COLLECT));
    }

    #[test]
    fn test_rejection_carries_module_address() {
        let mut registry = ModuleRegistry::new();
        let name = registry
            .install_follow_module(FOLLOW, Arc::new(RevertFollowModule))
            .unwrap();
        assert_eq!(name, "RevertFollowModule");
        assert_eq!(
            registry.module_name(ModuleKind::Follow, &FOLLOW),
            Some("RevertFollowModule")
        );

        let ctx = FollowContext {
            follower: Address::repeat_byte(1),
            profile_id: 1,
            config: &[],
            data: &[],
        };
        let err = registry
            .process_follow(FOLLOW, &ctx, &StaticView::default())
            .unwrap_err();
        assert_eq!(
            err,
            ProtocolError::ModuleRejected {
                module: FOLLOW,
                reason: "follows are disabled".into()
            }
        );
    }

    #[test]
    fn test_initialize_collect_returns_config() {
        let mut registry = ModuleRegistry::new();
        registry
            .install_collect_module(COLLECT, Arc::new(FreeCollectModule))
            .unwrap();
        let config = registry.initialize_collect(COLLECT, &init_ctx()).unwrap();
        assert!(!config.is_empty());
    }

    #[test]
    fn test_installed_address_cannot_be_replaced() {
        let mut registry = ModuleRegistry::new();
        registry
            .install_follow_module(FOLLOW, Arc::new(RevertFollowModule))
            .unwrap();

        assert_eq!(
            registry.install_follow_module(FOLLOW, Arc::new(AllowlistFollowModule)),
            Err(ProtocolError::ModuleAlreadyInstalled(FOLLOW))
        );
        assert_eq!(
            registry.module_name(ModuleKind::Follow, &FOLLOW),
            Some("RevertFollowModule")
        );
        // Kinds are separate namespaces.
        registry
            .install_collect_module(FOLLOW, Arc::new(FreeCollectModule))
            .unwrap();
    }
}
