//! Per-signer replay-protection nonces.

use shared_types::Address;
use std::collections::HashMap;

/// Monotonic nonce per signer. Never decremented, never reused.
#[derive(Debug, Clone, Default)]
pub struct NonceLedger {
    nonces: HashMap<Address, u64>,
}

impl NonceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nonce the next signature from `signer` must bind.
    pub fn current(&self, signer: &Address) -> u64 {
        self.nonces.get(signer).copied().unwrap_or(0)
    }

    /// Advance `signer`'s nonce, returning the value that was consumed.
    pub fn consume(&mut self, signer: Address) -> u64 {
        let entry = self.nonces.entry(signer).or_insert(0);
        let consumed = *entry;
        *entry += 1;
        consumed
    }
}
