//! Keccak-256 helpers and deterministic address derivation.

use crate::entities::{Address, Hash};
use sha3::{Digest, Keccak256};

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Derive an address from a domain tag and a sequence of integer words.
///
/// The result is the last 20 bytes of `keccak256(tag || word_0 || word_1 ...)`,
/// each word encoded as a 32-byte big-endian integer.
pub fn derive_address(tag: &[u8], words: &[u64]) -> Address {
    let mut hasher = Keccak256::new();
    hasher.update(tag);
    for word in words {
        let mut encoded = [0u8; 32];
        encoded[24..].copy_from_slice(&word.to_be_bytes());
        hasher.update(encoded);
    }
    let hash: Hash = hasher.finalize().into();
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address(address)
}
