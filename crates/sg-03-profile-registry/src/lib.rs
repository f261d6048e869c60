//! # Profile Registry (SG-03)
//!
//! Identity records keyed by a monotonically assigned id. Handles are unique
//! among live profiles through a keccak256 index; burning a profile frees
//! its handle but never its id.
//!
//! Every ownership change (mint, transfer, burn) first clears the profile's
//! dispatcher and the previous owner's default-profile pointer.

pub mod domain;
pub mod service;

pub use domain::entities::{
    CreateProfileParams, Profile, ProfileLimits, MAX_HANDLE_LENGTH, MAX_PROFILE_IMAGE_URI_LENGTH,
};
pub use domain::handle::{handle_hash, validate_handle};
pub use domain::ledger::ProfileNft;
pub use service::ProfileRegistry;
