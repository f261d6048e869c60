//! # Domain Entities
//!
//! Signature values carried by delegated ("WithSig") operations.

use serde::{Deserialize, Serialize};
use shared_types::Timestamp;

/// ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

/// A signature together with the deadline it was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Signature {
    pub signature: EcdsaSignature,
    /// Last timestamp (inclusive) at which the signature is accepted.
    pub deadline: Timestamp,
}

impl Eip712Signature {
    pub fn new(signature: EcdsaSignature, deadline: Timestamp) -> Self {
        Self {
            signature,
            deadline,
        }
    }
}
