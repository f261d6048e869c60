//! # Signature Errors
//!
//! Low-level failures of signature parsing and recovery. At the protocol
//! boundary every one of them is reported as `SignatureInvalid`.

use shared_types::ProtocolError;
use thiserror::Error;

/// Errors that can occur while recovering a signer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature format is invalid (zero or out-of-range scalars)
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Signing key refused the digest
    #[error("Signing failed")]
    SigningFailed,
}

impl From<SignatureError> for ProtocolError {
    fn from(_: SignatureError) -> Self {
        ProtocolError::SignatureInvalid
    }
}
