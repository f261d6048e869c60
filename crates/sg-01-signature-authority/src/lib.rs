//! # Signature Authority (SG-01)
//!
//! Verifies that a signer authorized a delegated operation and enforces
//! single-use through per-signer nonces.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): EIP-712 hashing, secp256k1 recovery, nonce ledger
//! - **Ports Layer** (`ports/`): [`DelegatedAuthorizationApi`]
//! - **Service Layer** (`service.rs`): [`SignatureAuthority`]
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values are rejected
//! - **Replay Protection**: Each accepted signature advances the signer's nonce
//! - **Domain Binding**: Digests commit to chain id and hub address

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::ecdsa::{address_from_pubkey, recover_signer, sign_digest};
pub use domain::eip712::{Eip712Domain, TypedPayload, EIP712_DOMAIN_TYPE};
pub use domain::entities::{EcdsaSignature, Eip712Signature};
pub use domain::errors::SignatureError;
pub use domain::nonces::NonceLedger;
pub use ports::inbound::DelegatedAuthorizationApi;
pub use service::SignatureAuthority;
