//! # Integration Flows
//!
//! End-to-end flows through `SocialHub` touching several components per
//! call: profile creation, publication chains, follows and collects.

pub mod modules;
pub mod scenarios;
