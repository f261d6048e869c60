//! # Adversarial Cases
//!
//! Attempts to replay or forge delegated authorizations and to leave
//! partial state behind after a rejected call. Also attempts to replace the
//! code behind an installed module address.

pub mod atomicity;
pub mod installation;
pub mod signatures;
