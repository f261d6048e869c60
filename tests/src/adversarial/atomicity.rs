//! # Atomicity
//!
//! A rejected call must leave no receipts, collections, counters, nonces or
//! events behind.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use shared_types::{ProtocolError, ProtocolState};

    #[test]
    fn test_batch_follow_rolls_back_on_burned_target() {
        let mut world = World::new();
        let alice = Wallet::random();
        let live = world.profile(addr(0xa1), "live");
        let burned = world.profile(addr(0xb0), "burned");
        world.hub.burn(addr(0xb0), burned).unwrap();
        world.sink.drain();

        let signature = world.sign_follow(&alice, &[live, burned], &[vec![], vec![]]);
        assert_eq!(
            world.hub.follow_with_sig(
                alice.address,
                &[live, burned],
                &[vec![], vec![]],
                &signature
            ),
            Err(ProtocolError::ProfileDoesNotExist(burned))
        );
        assert_eq!(world.hub.get_follow_nft(live), None);
        assert_eq!(world.hub.follow_receipt_balance(live, &alice.address), 0);
        assert_eq!(world.hub.nonce_of(&alice.address), 0);
        assert!(world.sink.is_empty());

        // The nonce is still unused.
        let retry = world.sign_follow(&alice, &[live], &[vec![]]);
        world
            .hub
            .follow_with_sig(alice.address, &[live], &[vec![]], &retry)
            .unwrap();
        assert_eq!(world.hub.nonce_of(&alice.address), 1);
    }

    #[test]
    fn test_batch_follow_rolls_back_on_module_rejection() {
        let mut world = World::new();
        let fan = addr(0xfa);
        let open = world.profile(addr(0xa1), "open");
        let closed = world.profile(addr(0xb0), "closed");
        world
            .hub
            .set_follow_module(addr(0xb0), closed, Some(REVERT_FOLLOW), &[])
            .unwrap();

        assert!(matches!(
            world.hub.follow(fan, &[open, closed], &[vec![], vec![]]),
            Err(ProtocolError::ModuleRejected { module, .. }) if module == REVERT_FOLLOW
        ));
        assert_eq!(world.hub.get_follow_nft(open), None);
        assert_eq!(world.hub.follow_receipt_balance(open, &fan), 0);
    }

    #[test]
    fn test_follow_length_mismatch() {
        let mut world = World::new();
        let id = world.profile(addr(0xa1), "alice");

        assert_eq!(
            world.hub.follow(addr(0xfa), &[id, id], &[vec![]]),
            Err(ProtocolError::ArrayLengthMismatch { left: 2, right: 1 })
        );
        assert_eq!(world.hub.get_follow_nft(id), None);
    }

    #[test]
    fn test_failed_publication_does_not_consume_pub_id() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let id = world.profile(alice, "alice");

        let missing = sg_04_publication_graph::MirrorParams {
            profile_id: id,
            profile_id_pointed: id,
            pub_id_pointed: 7,
            ..Default::default()
        };
        assert_eq!(
            world.hub.mirror(alice, &missing),
            Err(ProtocolError::PublicationDoesNotExist {
                profile_id: id,
                pub_id: 7
            })
        );
        assert_eq!(world.post(alice, id, "ipfs://first"), 1);
    }

    #[test]
    fn test_failed_profile_creation_does_not_consume_id() {
        let mut world = World::new();
        world.profile(addr(0xa1), "alice");

        let bad_module = sg_03_profile_registry::CreateProfileParams {
            to: addr(0xb0),
            handle: "bob".into(),
            follow_module: Some(addr(0x77)),
            ..Default::default()
        };
        assert_eq!(
            world.hub.create_profile(world.governance, &bad_module),
            Err(ProtocolError::ModuleNotWhitelisted(addr(0x77)))
        );
        assert_eq!(world.hub.profile_count(), 1);
        assert_eq!(world.hub.get_profile_id_by_handle("bob"), None);
        assert_eq!(world.profile(addr(0xb0), "bob"), 2);
    }

    #[test]
    fn test_pause_blocks_everything_but_governance() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let id = world.profile(alice, "alice");
        world.post(alice, id, "ipfs://before");
        world
            .hub
            .set_state(world.governance, ProtocolState::Paused)
            .unwrap();
        world.sink.drain();

        assert_eq!(
            world.hub.follow(addr(0xfa), &[id], &[vec![]]),
            Err(ProtocolError::ProtocolPaused)
        );
        assert_eq!(
            world.hub.collect(addr(0xfa), id, 1, &[]),
            Err(ProtocolError::ProtocolPaused)
        );
        assert_eq!(
            world.hub.set_dispatcher(alice, id, Some(addr(0x70))),
            Err(ProtocolError::ProtocolPaused)
        );
        assert!(world.sink.is_empty());

        world
            .hub
            .whitelist_profile_creator(world.governance, addr(0x33), true)
            .unwrap();
        assert_eq!(world.hub.get_content_uri(id, 1).unwrap(), "ipfs://before");
    }

    #[test]
    fn test_publishing_paused_allows_interactions() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let id = world.profile(alice, "alice");
        world
            .hub
            .set_state(world.governance, ProtocolState::PublishingPaused)
            .unwrap();

        assert_eq!(
            world.hub.post(
                alice,
                &sg_04_publication_graph::PostParams {
                    profile_id: id,
                    content_uri: "ipfs://x".into(),
                    ..Default::default()
                }
            ),
            Err(ProtocolError::PublishingPaused)
        );
        world.hub.follow(addr(0xfa), &[id], &[vec![]]).unwrap();
        world.hub.set_dispatcher(alice, id, Some(addr(0x70))).unwrap();
    }
}
