//! # Social Graph Hub
//!
//! Boots a hub from environment configuration and replays a short
//! walkthrough: governance bootstrap, two profiles, a post, a mirror, a
//! delegated follow and a collect through the mirror. Every committed event
//! is written to the log as a JSON line.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logging + metrics)
//! 2. Load hub configuration from the environment
//! 3. Build the hub with the system clock and the tracing event sink
//! 4. Run the walkthrough

use std::sync::Arc;

use anyhow::{Context, Result};
use k256::ecdsa::SigningKey;
use tracing::{debug, info};

use hub_runtime::{payloads, Clock, HubConfig, SocialHub, SystemClock, TracingEventSink};
use sg_01_signature_authority::{address_from_pubkey, sign_digest, Eip712Signature};
use sg_02_module_registry::adapters::FreeCollectModule;
use sg_03_profile_registry::CreateProfileParams;
use sg_04_publication_graph::{MirrorParams, PostParams};
use shared_types::{Address, ProtocolState};
use social_telemetry::{init_telemetry, TelemetryConfig};

/// Seconds a walkthrough signature stays valid.
const SIGNATURE_VALIDITY_SECS: u64 = 600;

fn main() -> Result<()> {
    let _telemetry = init_telemetry(TelemetryConfig::from_env())
        .context("Failed to initialize telemetry")?;

    let config = HubConfig::from_env().context("Invalid hub configuration")?;
    let clock = Arc::new(SystemClock);
    let mut hub = SocialHub::new(config, clock.clone(), Arc::new(TracingEventSink));

    info!("===========================================");
    info!("  Social Graph Hub v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    run_walkthrough(&mut hub, clock.as_ref())?;

    debug!(metrics = %social_telemetry::gather()?, "Final metrics");
    Ok(())
}

fn run_walkthrough(hub: &mut SocialHub, clock: &SystemClock) -> Result<()> {
    let governance = Address::repeat_byte(0x60);
    let alice = Address::repeat_byte(0xa1);
    let free_collect = Address::repeat_byte(0xc1);

    hub.initialize(governance)?;
    hub.set_state(governance, ProtocolState::Unpaused)?;
    hub.whitelist_profile_creator(governance, governance, true)?;
    hub.install_collect_module(free_collect, Arc::new(FreeCollectModule))?;
    hub.whitelist_collect_module(governance, free_collect, true)?;

    // Bob signs with a fixed demo key so runs are reproducible.
    let mut secret = [0u8; 32];
    secret[31] = 0x42;
    let bob_key = SigningKey::from_bytes((&secret).into())
        .map_err(|e| anyhow::anyhow!("invalid demo key: {e}"))?;
    let bob = address_from_pubkey(bob_key.verifying_key());

    let alice_id = hub.create_profile(
        governance,
        &CreateProfileParams {
            to: alice,
            handle: "alice".into(),
            ..CreateProfileParams::default()
        },
    )?;
    let bob_id = hub.create_profile(
        governance,
        &CreateProfileParams {
            to: bob,
            handle: "bob".into(),
            ..CreateProfileParams::default()
        },
    )?;

    let post_id = hub.post(
        alice,
        &PostParams {
            profile_id: alice_id,
            content_uri: "ipfs://Qm1".into(),
            collect_module: Some(free_collect),
            ..PostParams::default()
        },
    )?;
    let mirror_id = hub.mirror(
        bob,
        &MirrorParams {
            profile_id: bob_id,
            profile_id_pointed: alice_id,
            pub_id_pointed: post_id,
            ..MirrorParams::default()
        },
    )?;

    // Delegated follow: bob signs, anyone relays.
    let profile_ids = [alice_id];
    let datas = vec![Vec::new()];
    let deadline = clock.now() + SIGNATURE_VALIDITY_SECS;
    let digest = hub.digest_for(bob, &payloads::follow(&profile_ids, &datas), deadline);
    let signature = Eip712Signature::new(sign_digest(&digest, &bob_key)?, deadline);
    let follow_tokens = hub.follow_with_sig(bob, &profile_ids, &datas, &signature)?;

    let collect_token = hub.collect(alice, bob_id, mirror_id, &[])?;
    let content = hub.get_content_uri(bob_id, mirror_id)?;

    info!(
        %content,
        follow_tokens = ?follow_tokens,
        collect_token,
        bob_nonce = hub.nonce_of(&bob),
        "Walkthrough complete"
    );
    Ok(())
}
