//! # Core Scenarios
//!
//! Profile lifecycle and publication chaining as seen through the hub.

#[cfg(test)]
mod tests {
    use crate::fixtures::{addr, World};
    use hub_runtime::payloads;
    use shared_types::{EventPayload, ProtocolError, PubType};
    use sg_03_profile_registry::CreateProfileParams;
    use sg_04_publication_graph::CommentParams;

    // =========================================================================
    // PUBLICATIONS
    // =========================================================================

    #[test]
    fn test_alice_posts_and_mirrors() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");

        let post = world.post(alice, alice_id, "ipfs://Qm1");
        let mirror = world.mirror(alice, alice_id, (alice_id, post));

        assert_eq!(post, 1);
        assert_eq!(mirror, 2);
        assert_eq!(world.hub.get_pub_type(alice_id, 1), PubType::Post);
        assert_eq!(world.hub.get_pub_type(alice_id, 2), PubType::Mirror);
        assert_eq!(world.hub.get_pub_type(alice_id, 3), PubType::Nonexistent);
        assert_eq!(world.hub.get_content_uri(alice_id, 2).unwrap(), "ipfs://Qm1");
        assert_eq!(world.hub.get_pub(alice_id, 2).unwrap().content_uri, "");
    }

    #[test]
    fn test_pub_ids_are_dense_and_per_profile() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let bob = addr(0xb0);
        let alice_id = world.profile(alice, "alice");
        let bob_id = world.profile(bob, "bob");

        for expected in 1..=5 {
            assert_eq!(world.post(alice, alice_id, "ipfs://a"), expected);
        }
        assert_eq!(world.post(bob, bob_id, "ipfs://b"), 1);
        assert_eq!(world.hub.get_pub_count(alice_id), 5);
        for pub_id in 1..=5 {
            assert_eq!(world.hub.get_pub(alice_id, pub_id).unwrap().pub_id, pub_id);
        }
        assert!(world.hub.get_pub(alice_id, 0).is_none());
        assert!(world.hub.get_pub(alice_id, 6).is_none());
    }

    #[test]
    fn test_mirror_chain_resolves_to_root() {
        let mut world = World::new();
        let users: Vec<_> = (1..=4u8).map(addr).collect();
        let ids: Vec<_> = users
            .iter()
            .enumerate()
            .map(|(i, user)| world.profile(*user, &format!("user{i}")))
            .collect();

        let root = world.post(users[0], ids[0], "ipfs://root");
        let mut pointed = (ids[0], root);
        for i in 1..4 {
            let pub_id = world.mirror(users[i], ids[i], pointed);
            pointed = (ids[i], pub_id);
        }

        assert_eq!(world.hub.get_root(pointed.0, pointed.1).unwrap(), (ids[0], root));
        assert_eq!(
            world.hub.get_content_uri(pointed.0, pointed.1).unwrap(),
            "ipfs://root"
        );
        // Mirrors keep the pointer they were created with.
        assert_eq!(world.hub.get_pub(ids[3], 1).unwrap().profile_id_pointed, ids[2]);
    }

    #[test]
    fn test_comment_without_collect_module_stays_comment() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");
        world.post(alice, alice_id, "ipfs://p");

        let comment = CommentParams {
            profile_id: alice_id,
            content_uri: "ipfs://c".into(),
            profile_id_pointed: alice_id,
            pub_id_pointed: 1,
            ..CommentParams::default()
        };
        world.hub.comment(alice, &comment).unwrap();
        assert_eq!(world.hub.get_pub_type(alice_id, 2), PubType::Comment);
        assert_eq!(world.hub.get_content_uri(alice_id, 2).unwrap(), "ipfs://c");
    }

    #[test]
    fn test_publications_survive_burn_and_remain_pointable() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let bob = addr(0xb0);
        let alice_id = world.profile(alice, "alice");
        let bob_id = world.profile(bob, "bob");
        world.post(alice, alice_id, "ipfs://kept");
        world.hub.burn(alice, alice_id).unwrap();

        let mirror = world.mirror(bob, bob_id, (alice_id, 1));
        assert_eq!(world.hub.get_content_uri(bob_id, mirror).unwrap(), "ipfs://kept");
    }

    // =========================================================================
    // PROFILES
    // =========================================================================

    #[test]
    fn test_duplicate_handle_then_reuse_after_burn() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");

        let duplicate = CreateProfileParams {
            to: addr(0xb0),
            handle: "alice".into(),
            ..CreateProfileParams::default()
        };
        assert_eq!(
            world.hub.create_profile(world.governance, &duplicate),
            Err(ProtocolError::HandleTaken("alice".into()))
        );
        assert_eq!(world.hub.profile_count(), 1);

        world.hub.burn(alice, alice_id).unwrap();
        let reborn = world.hub.create_profile(world.governance, &duplicate).unwrap();
        assert_eq!(reborn, 2);
        assert_eq!(world.hub.get_profile_id_by_handle("alice"), Some(2));
        assert_eq!(world.hub.get_profile(alice_id).unwrap().owner, None);
    }

    #[test]
    fn test_handle_rules() {
        let mut world = World::new();
        let too_long = "a".repeat(32);
        for handle in ["", "Alice", "_alice", "al ice", too_long.as_str()] {
            let params = CreateProfileParams {
                to: addr(1),
                handle: handle.to_string(),
                ..CreateProfileParams::default()
            };
            assert!(
                matches!(
                    world.hub.create_profile(world.governance, &params),
                    Err(ProtocolError::HandleInvalid(_))
                ),
                "handle {handle:?} should be rejected"
            );
        }
        world.profile(addr(1), "a1ice.lens-x_");
    }

    #[test]
    fn test_transfer_hook_clears_delegations() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let bob = addr(0xb0);
        let relayer = addr(0x70);
        let alice_id = world.profile(alice, "alice");
        world.hub.set_dispatcher(alice, alice_id, Some(relayer)).unwrap();
        world.hub.set_default_profile(alice, alice_id).unwrap();

        world.hub.transfer_profile(alice, bob, alice_id).unwrap();
        assert_eq!(world.hub.owner_of(alice_id), Some(bob));
        assert_eq!(world.hub.get_dispatcher(alice_id), None);
        assert_eq!(world.hub.default_profile(&alice), None);
        assert_eq!(world.hub.balance_of(&alice), 0);
        assert_eq!(world.hub.balance_of(&bob), 1);

        // The old dispatcher lost its rights.
        assert_eq!(
            world.hub.post(
                relayer,
                &sg_04_publication_graph::PostParams {
                    profile_id: alice_id,
                    content_uri: "ipfs://x".into(),
                    ..Default::default()
                }
            ),
            Err(ProtocolError::NotProfileOwnerOrDispatcher)
        );
    }

    #[test]
    fn test_default_profile_with_sig() {
        let mut world = World::new();
        let wallet = crate::fixtures::Wallet::random();
        let id = world.profile(wallet.address, "signer");

        let signature = world.sign(&wallet, &payloads::set_default_profile(wallet.address, id));
        world
            .hub
            .set_default_profile_with_sig(wallet.address, id, &signature)
            .unwrap();
        assert_eq!(world.hub.default_profile(&wallet.address), Some(id));
    }

    #[test]
    fn test_events_carry_identifying_fields() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");
        world.post(alice, alice_id, "ipfs://Qm1");
        world.hub.follow(addr(0xb0), &[alice_id], &[vec![]]).unwrap();

        let events = world.sink.drain();
        let names: Vec<_> = events.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "profile_created",
                "post_created",
                "follow_nft_deployed",
                "follow_receipt_minted",
                "followed"
            ]
        );
        assert!(matches!(
            &events[1].payload,
            EventPayload::PostCreated { profile_id, pub_id: 1, content_uri, .. }
                if *profile_id == alice_id && content_uri == "ipfs://Qm1"
        ));
        assert!(events.iter().all(|e| e.timestamp == crate::fixtures::START));
        assert!(events[0].to_json().unwrap().contains("\"event\":\"profile_created\""));
    }
}
