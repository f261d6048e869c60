//! # Inbound Port
//!
//! API the hub runtime uses to authorize delegated operations.

use crate::domain::eip712::TypedPayload;
use crate::domain::entities::Eip712Signature;
use shared_types::{Address, Hash, ProtocolResult, Timestamp};

/// Delegated-authorization API.
pub trait DelegatedAuthorizationApi {
    /// Nonce the next signature from `signer` must bind.
    fn nonce_of(&self, signer: &Address) -> u64;

    /// Digest `signer` must sign to authorize `payload` until `deadline`.
    fn digest_for(&self, signer: &Address, payload: &TypedPayload, deadline: Timestamp) -> Hash;

    /// Verify that `signer` authorized `payload` and consume its nonce.
    ///
    /// # Errors
    /// - `SignatureExpired` if `now > deadline`
    /// - `SignatureInvalid` if the recovered address is not `signer`
    fn verify_and_consume(
        &mut self,
        signer: Address,
        payload: &TypedPayload,
        signature: &Eip712Signature,
        now: Timestamp,
    ) -> ProtocolResult<()>;
}
