//! Ports for the signature authority.

pub mod inbound;
