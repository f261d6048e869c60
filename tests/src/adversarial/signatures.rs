//! # Delegated Authorization Attacks
//!
//! Replays, expired deadlines, cross-domain reuse and forged signers.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use hub_runtime::{payloads, HubConfig};
    use shared_types::ProtocolError;
    use sg_04_publication_graph::PostParams;

    fn post_params(profile_id: u64) -> PostParams {
        PostParams {
            profile_id,
            content_uri: "ipfs://signed".into(),
            ..PostParams::default()
        }
    }

    #[test]
    fn test_replayed_signature_is_rejected() {
        let mut world = World::new();
        let alice = Wallet::random();
        let target = world.profile(addr(0xa1), "alice");
        let signature = world.sign_follow(&alice, &[target], &[vec![]]);

        world
            .hub
            .follow_with_sig(alice.address, &[target], &[vec![]], &signature)
            .unwrap();
        assert_eq!(world.hub.nonce_of(&alice.address), 1);
        assert_eq!(
            world
                .hub
                .follow_with_sig(alice.address, &[target], &[vec![]], &signature),
            Err(ProtocolError::SignatureInvalid)
        );
        assert_eq!(world.hub.follow_receipt_balance(target, &alice.address), 1);
    }

    #[test]
    fn test_expired_signature_is_rejected_without_consuming_nonce() {
        let mut world = World::new();
        let alice = Wallet::random();
        let id = world.profile(alice.address, "alice");
        let params = post_params(id);
        let signature = world.sign_until(&alice, &payloads::post(&params), START + 10);

        world.clock.advance(11);
        assert_eq!(
            world.hub.post_with_sig(alice.address, &params, &signature),
            Err(ProtocolError::SignatureExpired {
                deadline: START + 10,
                now: START + 11,
            })
        );
        assert_eq!(world.hub.nonce_of(&alice.address), 0);
        assert_eq!(world.hub.get_pub_count(id), 0);
    }

    #[test]
    fn test_signature_valid_until_deadline_inclusive() {
        let mut world = World::new();
        let alice = Wallet::random();
        let id = world.profile(alice.address, "alice");
        let params = post_params(id);
        let signature = world.sign_until(&alice, &payloads::post(&params), START + 10);

        world.clock.advance(10);
        assert_eq!(
            world.hub.post_with_sig(alice.address, &params, &signature),
            Ok(1)
        );
    }

    #[test]
    fn test_signature_from_another_chain_is_rejected() {
        let mut mainnet = World::new();
        let mut testnet = World::with_config(HubConfig {
            chain_id: 5,
            ..HubConfig::default()
        });
        let alice = Wallet::random();
        let main_id = mainnet.profile(alice.address, "alice");
        let test_id = testnet.profile(alice.address, "alice");
        assert_eq!(main_id, test_id);
        assert_ne!(mainnet.hub.domain_separator(), testnet.hub.domain_separator());

        let params = post_params(main_id);
        let signature = testnet.sign(&alice, &payloads::post(&params));
        assert_eq!(
            mainnet.hub.post_with_sig(alice.address, &params, &signature),
            Err(ProtocolError::SignatureInvalid)
        );
        assert_eq!(
            testnet.hub.post_with_sig(alice.address, &params, &signature),
            Ok(1)
        );
    }

    #[test]
    fn test_signature_from_another_hub_address_is_rejected() {
        let mut world = World::new();
        let other = World::with_config(HubConfig {
            hub_address: addr(0x99),
            ..HubConfig::default()
        });
        let alice = Wallet::random();
        let id = world.profile(alice.address, "alice");

        let signature = other.sign(&alice, &payloads::burn(id));
        assert_eq!(
            world.hub.burn_with_sig(alice.address, id, &signature),
            Err(ProtocolError::SignatureInvalid)
        );
        assert_eq!(world.hub.owner_of(id), Some(alice.address));
    }

    #[test]
    fn test_signature_by_someone_else_is_rejected() {
        let mut world = World::new();
        let alice = Wallet::random();
        let mallory = Wallet::random();
        let id = world.profile(alice.address, "alice");

        // Mallory signs a valid payload but claims to be alice.
        let payload = payloads::set_dispatcher(id, Some(mallory.address));
        let digest = world.hub.digest_for(alice.address, &payload, DEADLINE);
        let forged = sg_01_signature_authority::Eip712Signature::new(
            sg_01_signature_authority::sign_digest(&digest, &mallory.key).unwrap(),
            DEADLINE,
        );
        assert_eq!(
            world
                .hub
                .set_dispatcher_with_sig(alice.address, id, Some(mallory.address), &forged),
            Err(ProtocolError::SignatureInvalid)
        );
        assert_eq!(world.hub.get_dispatcher(id), None);
    }

    #[test]
    fn test_valid_signer_without_ownership_is_unauthorized() {
        let mut world = World::new();
        let alice = Wallet::random();
        let mallory = Wallet::random();
        let id = world.profile(alice.address, "alice");

        let signature = world.sign(&mallory, &payloads::burn(id));
        assert_eq!(
            world.hub.burn_with_sig(mallory.address, id, &signature),
            Err(ProtocolError::NotProfileOwner)
        );
        // The rejected call consumed nothing.
        assert_eq!(world.hub.nonce_of(&mallory.address), 0);
    }

    #[test]
    fn test_tampered_arguments_are_rejected() {
        let mut world = World::new();
        let alice = Wallet::random();
        let id = world.profile(alice.address, "alice");
        let signed = world.sign(&alice, &payloads::set_profile_image_uri(id, "ipfs://mine"));

        assert_eq!(
            world
                .hub
                .set_profile_image_uri_with_sig(alice.address, id, "ipfs://evil", &signed),
            Err(ProtocolError::SignatureInvalid)
        );

        let mut later = signed.clone();
        later.deadline += 1;
        assert_eq!(
            world
                .hub
                .set_profile_image_uri_with_sig(alice.address, id, "ipfs://mine", &later),
            Err(ProtocolError::SignatureInvalid)
        );

        world
            .hub
            .set_profile_image_uri_with_sig(alice.address, id, "ipfs://mine", &signed)
            .unwrap();
        assert_eq!(world.hub.get_profile(id).unwrap().image_uri, "ipfs://mine");
    }

    #[test]
    fn test_signature_for_one_operation_cannot_authorize_another() {
        let mut world = World::new();
        let alice = Wallet::random();
        let id = world.profile(alice.address, "alice");
        let signed = world.sign(&alice, &payloads::set_follow_nft_uri(id, "ipfs://x"));

        assert_eq!(
            world
                .hub
                .set_profile_image_uri_with_sig(alice.address, id, "ipfs://x", &signed),
            Err(ProtocolError::SignatureInvalid)
        );
    }
}
