//! # Publication Graph (SG-04)
//!
//! Posts, comments and mirrors keyed by `(profile_id, pub_id)`. Comments and
//! mirrors point at existing publications; mirrors carry no content and are
//! resolved to their root at read time.

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::entities::{CommentParams, MirrorParams, PostParams, Publication};
pub use ports::outbound::PublicationHooks;
pub use service::PublicationGraph;
