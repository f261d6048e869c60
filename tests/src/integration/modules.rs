//! # Built-in Modules
//!
//! Follow, collect and reference policies exercised through the hub.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use sg_02_module_registry::adapters::{
        AllowlistFollowConfig, FreeCollectConfig, LimitedCollectConfig, TimedCollectConfig,
    };
    use sg_02_module_registry::encode_config;
    use sg_03_profile_registry::CreateProfileParams;
    use sg_04_publication_graph::{CommentParams, MirrorParams, PostParams};
    use shared_types::{Address, ProfileId, ProtocolError, ProtocolResult, PubId, PubType};

    fn post_with_collect(
        world: &mut World,
        author: Address,
        profile_id: ProfileId,
        module: Address,
        init_data: Vec<u8>,
    ) -> ProtocolResult<PubId> {
        world.hub.post(
            author,
            &PostParams {
                profile_id,
                content_uri: "ipfs://collectable".into(),
                collect_module: Some(module),
                collect_module_init_data: init_data,
                ..PostParams::default()
            },
        )
    }

    fn rejected_by(result: ProtocolResult<impl std::fmt::Debug>, module: Address) {
        match result {
            Err(ProtocolError::ModuleRejected { module: m, .. }) => assert_eq!(m, module),
            other => panic!("expected rejection by {module}, got {other:?}"),
        }
    }

    // =========================================================================
    // COLLECT MODULES
    // =========================================================================

    #[test]
    fn test_free_collect_via_mirror_mints_from_root() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let bob = addr(0xb0);
        let alice_id = world.profile(alice, "alice");
        let bob_id = world.profile(bob, "bob");
        let post = post_with_collect(&mut world, alice, alice_id, FREE_COLLECT, vec![]).unwrap();
        let mirror = world.mirror(bob, bob_id, (alice_id, post));

        let first = world.hub.collect(addr(0xcc), bob_id, mirror, &[]).unwrap();
        let second = world.hub.collect(addr(0xcd), alice_id, post, &[]).unwrap();

        assert_eq!((first, second), (1, 2));
        assert_eq!(world.hub.collect_count(alice_id, post), 2);
        assert_eq!(world.hub.get_collect_nft(bob_id, mirror), None);
        assert_eq!(
            world.hub.collect_receipt_owner(alice_id, post, 1),
            Some(addr(0xcc))
        );
    }

    #[test]
    fn test_free_collect_followers_only() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let fan = addr(0xfa);
        let alice_id = world.profile(alice, "alice");
        let config = encode_config(&FreeCollectConfig {
            followers_only: true,
        })
        .unwrap();
        let post = post_with_collect(&mut world, alice, alice_id, FREE_COLLECT, config).unwrap();

        rejected_by(world.hub.collect(fan, alice_id, post, &[]), FREE_COLLECT);
        world.hub.follow(fan, &[alice_id], &[vec![]]).unwrap();
        world.hub.collect(fan, alice_id, post, &[]).unwrap();
        world.hub.collect(alice, alice_id, post, &[]).unwrap();
        assert_eq!(world.hub.collect_count(alice_id, post), 2);
    }

    #[test]
    fn test_limited_collect_caps_receipts() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");
        let config = encode_config(&LimitedCollectConfig {
            limit: 2,
            followers_only: false,
        })
        .unwrap();
        let post = post_with_collect(&mut world, alice, alice_id, LIMITED_COLLECT, config).unwrap();

        world.hub.collect(addr(1), alice_id, post, &[]).unwrap();
        world.hub.collect(addr(2), alice_id, post, &[]).unwrap();
        rejected_by(world.hub.collect(addr(3), alice_id, post, &[]), LIMITED_COLLECT);
        assert_eq!(world.hub.collect_count(alice_id, post), 2);
    }

    #[test]
    fn test_limited_collect_requires_positive_limit() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");

        rejected_by(
            post_with_collect(&mut world, alice, alice_id, LIMITED_COLLECT, vec![]),
            LIMITED_COLLECT,
        );
        assert_eq!(world.hub.get_pub_count(alice_id), 0);
    }

    #[test]
    fn test_timed_collect_window() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");
        let config = encode_config(&TimedCollectConfig { window_secs: 60 }).unwrap();
        let post = post_with_collect(&mut world, alice, alice_id, TIMED_COLLECT, config).unwrap();

        world.clock.advance(60);
        world.hub.collect(addr(1), alice_id, post, &[]).unwrap();
        world.clock.advance(1);
        rejected_by(world.hub.collect(addr(2), alice_id, post, &[]), TIMED_COLLECT);
    }

    #[test]
    fn test_timed_collect_defaults_to_a_day() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");
        let post = post_with_collect(&mut world, alice, alice_id, TIMED_COLLECT, vec![]).unwrap();

        world.clock.advance(24 * 60 * 60);
        world.hub.collect(addr(1), alice_id, post, &[]).unwrap();
        world.clock.advance(1);
        rejected_by(world.hub.collect(addr(2), alice_id, post, &[]), TIMED_COLLECT);
    }

    #[test]
    fn test_revert_collect_leaves_no_collection() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");
        let post = post_with_collect(&mut world, alice, alice_id, REVERT_COLLECT, vec![]).unwrap();
        world.sink.drain();

        rejected_by(world.hub.collect(addr(1), alice_id, post, &[]), REVERT_COLLECT);
        assert_eq!(world.hub.get_collect_nft(alice_id, post), None);
        assert!(world.sink.is_empty());
    }

    #[test]
    fn test_delisted_collect_module_still_governs_existing_posts() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let alice_id = world.profile(alice, "alice");
        let post = post_with_collect(&mut world, alice, alice_id, FREE_COLLECT, vec![]).unwrap();
        world
            .hub
            .whitelist_collect_module(world.governance, FREE_COLLECT, false)
            .unwrap();

        world.hub.collect(addr(1), alice_id, post, &[]).unwrap();
        assert_eq!(
            post_with_collect(&mut world, alice, alice_id, FREE_COLLECT, vec![]),
            Err(ProtocolError::ModuleNotWhitelisted(FREE_COLLECT))
        );
    }

    // =========================================================================
    // FOLLOW MODULES
    // =========================================================================

    #[test]
    fn test_allowlist_follow() {
        let mut world = World::new();
        let friend = addr(0xf0);
        let stranger = addr(0x05);
        let config = encode_config(&AllowlistFollowConfig {
            allowed: vec![friend],
        })
        .unwrap();
        let gated = world
            .hub
            .create_profile(
                world.governance,
                &CreateProfileParams {
                    to: addr(0xa1),
                    handle: "gated".into(),
                    follow_module: Some(ALLOWLIST_FOLLOW),
                    follow_module_init_data: config,
                    ..CreateProfileParams::default()
                },
            )
            .unwrap();

        rejected_by(world.hub.follow(stranger, &[gated], &[vec![]]), ALLOWLIST_FOLLOW);
        assert_eq!(world.hub.get_follow_nft(gated), None);
        world.hub.follow(friend, &[gated], &[vec![]]).unwrap();
        assert_eq!(world.hub.follow_receipt_balance(gated, &friend), 1);
    }

    #[test]
    fn test_revert_follow_then_detach() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let fan = addr(0xfa);
        let alice_id = world.profile(alice, "alice");
        world
            .hub
            .set_follow_module(alice, alice_id, Some(REVERT_FOLLOW), &[])
            .unwrap();

        rejected_by(world.hub.follow(fan, &[alice_id], &[vec![]]), REVERT_FOLLOW);
        world
            .hub
            .set_follow_module(alice, alice_id, None, &[])
            .unwrap();
        assert_eq!(world.hub.follow(fan, &[alice_id], &[vec![]]).unwrap(), vec![1]);
    }

    #[test]
    fn test_follow_twice_mints_two_receipts() {
        let mut world = World::new();
        let alice_id = world.profile(addr(0xa1), "alice");
        let fan = addr(0xfa);

        let ids = world
            .hub
            .follow(fan, &[alice_id, alice_id], &[vec![], vec![]])
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(world.hub.follow_receipt_balance(alice_id, &fan), 2);
        assert_eq!(world.hub.follow_receipt_owner(alice_id, 2), Some(fan));
    }

    // =========================================================================
    // REFERENCE MODULES
    // =========================================================================

    #[test]
    fn test_follower_only_reference() {
        let mut world = World::new();
        let alice = addr(0xa1);
        let bob = addr(0xb0);
        let alice_id = world.profile(alice, "alice");
        let bob_id = world.profile(bob, "bob");
        let post = world
            .hub
            .post(
                alice,
                &PostParams {
                    profile_id: alice_id,
                    content_uri: "ipfs://members".into(),
                    reference_module: Some(FOLLOWER_ONLY_REFERENCE),
                    ..PostParams::default()
                },
            )
            .unwrap();
        let comment = CommentParams {
            profile_id: bob_id,
            content_uri: "ipfs://reply".into(),
            profile_id_pointed: alice_id,
            pub_id_pointed: post,
            ..CommentParams::default()
        };
        let mirror = MirrorParams {
            profile_id: bob_id,
            profile_id_pointed: alice_id,
            pub_id_pointed: post,
            ..MirrorParams::default()
        };

        rejected_by(world.hub.comment(bob, &comment), FOLLOWER_ONLY_REFERENCE);
        rejected_by(world.hub.mirror(bob, &mirror), FOLLOWER_ONLY_REFERENCE);
        assert_eq!(world.hub.get_pub_count(bob_id), 0);

        world.hub.follow(bob, &[alice_id], &[vec![]]).unwrap();
        assert_eq!(world.hub.comment(bob, &comment).unwrap(), 1);
        assert_eq!(world.hub.mirror(bob, &mirror).unwrap(), 2);
        assert_eq!(world.hub.get_pub_type(bob_id, 2), PubType::Mirror);

        // The author may always reference their own publication.
        world.mirror(alice, alice_id, (alice_id, post));
    }
}
