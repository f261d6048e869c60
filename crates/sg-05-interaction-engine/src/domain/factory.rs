//! Deterministic receipt-collection addresses and names.

use shared_types::{derive_address, Address, ProfileId, PubId};

const FOLLOW_TAG: &[u8] = b"follow";
const COLLECT_TAG: &[u8] = b"collect";

pub fn follow_collection_address(profile_id: ProfileId) -> Address {
    derive_address(FOLLOW_TAG, &[profile_id])
}

pub fn collect_collection_address(profile_id: ProfileId, pub_id: PubId) -> Address {
    derive_address(COLLECT_TAG, &[profile_id, pub_id])
}

fn prefix(handle: &str) -> String {
    handle.chars().take(4).collect()
}

/// `(name, symbol)` of a profile's follow collection.
pub fn follow_collection_name(handle: &str) -> (String, String) {
    (format!("{handle}-Follower"), format!("{}-Fl", prefix(handle)))
}

/// `(name, symbol)` of a publication's collect collection.
pub fn collect_collection_name(handle: &str, pub_id: PubId) -> (String, String) {
    (
        format!("{handle}-Collect-{pub_id}"),
        format!("{}-Cl-{pub_id}", prefix(handle)),
    )
}
