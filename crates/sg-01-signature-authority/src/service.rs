//! # Signature Authority Service
//!
//! Implements [`DelegatedAuthorizationApi`]: deadline check, digest
//! construction against the signer's current nonce, secp256k1 recovery and
//! nonce consumption.

use crate::domain::ecdsa;
use crate::domain::eip712::{Eip712Domain, TypedPayload};
use crate::domain::entities::Eip712Signature;
use crate::domain::nonces::NonceLedger;
use crate::ports::inbound::DelegatedAuthorizationApi;
use shared_types::{Address, Hash, ProtocolError, ProtocolResult, Timestamp};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

/// Signature authority for one hub deployment.
///
/// Cloned together with the rest of the hub state so that a consumed nonce is
/// rolled back if the operation it authorized fails.
#[derive(Debug, Clone)]
pub struct SignatureAuthority {
    domain: Eip712Domain,
    nonces: NonceLedger,
}

impl SignatureAuthority {
    pub fn new(domain: Eip712Domain) -> Self {
        Self {
            domain,
            nonces: NonceLedger::new(),
        }
    }

    pub fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// Digest for an explicit nonce. Used by clients preparing signatures ahead.
    pub fn digest_with_nonce(
        &self,
        payload: &TypedPayload,
        nonce: u64,
        deadline: Timestamp,
    ) -> Hash {
        self.domain.digest(&payload.struct_hash(nonce, deadline))
    }
}

impl DelegatedAuthorizationApi for SignatureAuthority {
    fn nonce_of(&self, signer: &Address) -> u64 {
        self.nonces.current(signer)
    }

    fn digest_for(&self, signer: &Address, payload: &TypedPayload, deadline: Timestamp) -> Hash {
        self.digest_with_nonce(payload, self.nonces.current(signer), deadline)
    }

    fn verify_and_consume(
        &mut self,
        signer: Address,
        payload: &TypedPayload,
        signature: &Eip712Signature,
        now: Timestamp,
    ) -> ProtocolResult<()> {
        if now > signature.deadline {
            warn!(
                operation = payload.operation(),
                %signer,
                deadline = signature.deadline,
                now,
                "Signature expired"
            );
            return Err(ProtocolError::SignatureExpired {
                deadline: signature.deadline,
                now,
            });
        }

        let nonce = self.nonces.current(&signer);
        let digest = self.digest_with_nonce(payload, nonce, signature.deadline);
        let recovered = ecdsa::recover_signer(&digest, &signature.signature).map_err(|e| {
            warn!(operation = payload.operation(), %signer, error = %e, "Signature recovery failed");
            ProtocolError::from(e)
        })?;

        if !bool::from(recovered.as_bytes().ct_eq(signer.as_bytes())) {
            warn!(
                operation = payload.operation(),
                %signer,
                %recovered,
                "Recovered signer mismatch"
            );
            return Err(ProtocolError::SignatureInvalid);
        }

        self.nonces.consume(signer);
        debug!(operation = payload.operation(), %signer, nonce, "Delegated signature accepted");
        Ok(())
    }
}
