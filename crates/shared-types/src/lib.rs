//! # Shared Types Crate
//!
//! Everything the hub components agree on:
//!
//! - **Entities**: `Address`, identifiers, `ProtocolState`
//! - **Errors**: the single `ProtocolError` taxonomy every operation returns
//! - **Events**: the canonical `ProtocolEvent` audit log records
//! - **Modules**: capability contracts for follow / collect / reference
//!   policy modules and the read-only `ProtocolView` they consult
//!
//! ## Design Principles
//!
//! - **Index-based references**: publications point at `(ProfileId, PubId)`
//!   pairs, never at memory.
//! - **Absent, not zero**: an unattached module is `None`, not the zero address.

pub mod entities;
pub mod errors;
pub mod events;
pub mod hashing;
pub mod modules;

pub use entities::*;
pub use errors::*;
pub use events::*;
pub use hashing::*;
pub use modules::*;
