//! # Module Registry (SG-02)
//!
//! Governance allow-lists for follow, collect and reference modules, the
//! directory of installed module implementations, and the built-in modules.
//!
//! Attaching a module requires it to be allow-listed at attach time only;
//! removing it from the allow-list does not detach it from existing profiles
//! or publications.

pub mod adapters;
pub mod domain;
pub mod service;

pub use adapters::{decode_config, encode_config};
pub use domain::allowlist::ModuleAllowLists;
pub use domain::directory::ModuleDirectory;
pub use service::ModuleRegistry;
