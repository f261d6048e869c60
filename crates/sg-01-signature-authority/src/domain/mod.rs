//! # Domain Layer
//!
//! Pure signature logic with no I/O: digest construction, recovery and the
//! nonce ledger.

pub mod ecdsa;
pub mod eip712;
pub mod entities;
pub mod errors;
pub mod nonces;
