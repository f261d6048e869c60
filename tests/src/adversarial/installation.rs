//! # Module Installation
//!
//! Code behind an installed module address cannot be swapped out.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use shared_types::{
        FollowContext, FollowModule, InitContext, ModuleData, ModuleKind, ModuleRejection,
        ProtocolError, ProtocolView,
    };
    use sg_02_module_registry::adapters::FreeCollectModule;
    use std::sync::Arc;

    /// Lets everyone follow.
    struct OpenDoor;

    impl FollowModule for OpenDoor {
        fn name(&self) -> &str {
            "OpenDoor"
        }

        fn initialize(&self, _ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection> {
            Ok(Vec::new())
        }

        fn process_follow(
            &self,
            _ctx: &FollowContext<'_>,
            _view: &dyn ProtocolView,
        ) -> Result<(), ModuleRejection> {
            Ok(())
        }
    }

    #[test]
    fn test_reinstall_over_allowlisted_follow_module_is_rejected() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let fan = addr(0xfa);
        let alice_id = world.profile(alice, "alice");
        world
            .hub
            .set_follow_module(alice, alice_id, Some(REVERT_FOLLOW), &[])
            .unwrap();
        assert!(world.hub.follow(fan, &[alice_id], &[vec![]]).is_err());
        world.sink.drain();

        assert_eq!(
            world.hub.install_follow_module(REVERT_FOLLOW, Arc::new(OpenDoor)),
            Err(ProtocolError::ModuleAlreadyInstalled(REVERT_FOLLOW))
        );
        assert!(world.sink.is_empty());
        assert_eq!(
            world
                .hub
                .installed_module_name(ModuleKind::Follow, &REVERT_FOLLOW),
            Some("RevertFollowModule")
        );
        assert!(matches!(
            world.hub.follow(fan, &[alice_id], &[vec![]]),
            Err(ProtocolError::ModuleRejected { module, .. }) if module == REVERT_FOLLOW
        ));
        assert_eq!(world.hub.follow_receipt_balance(alice_id, &fan), 0);
    }

    #[test]
    fn test_reinstall_over_collect_module_is_rejected() {
        let mut world = World::new();
        assert_eq!(
            world
                .hub
                .install_collect_module(REVERT_COLLECT, Arc::new(FreeCollectModule)),
            Err(ProtocolError::ModuleAlreadyInstalled(REVERT_COLLECT))
        );
        assert_eq!(
            world
                .hub
                .installed_module_name(ModuleKind::Collect, &REVERT_COLLECT),
            Some("RevertCollectModule")
        );
    }

    #[test]
    fn test_fresh_address_installs() {
        let mut world = World::new();
        let address = addr(0xd0);
        world
            .hub
            .install_follow_module(address, Arc::new(OpenDoor))
            .unwrap();
        assert_eq!(world.sink.names(), vec!["module_installed"]);
        assert!(!world.hub.is_follow_module_whitelisted(&address));
    }
}
