//! # Hub Container
//!
//! Holds every component instance of the hub together with its
//! configuration. The whole container is cloned per call and swapped back
//! in on success.

pub mod config;
pub mod state;

pub use config::{ConfigError, HubConfig};
pub use state::HubState;
