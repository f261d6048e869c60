//! # Outbound Ports
//!
//! Profile and publication lookups plus module hooks the engine consults
//! between mints. Hooks receive the engine itself so module views observe
//! receipts minted earlier in the same call.

use crate::service::InteractionEngine;
use shared_types::{Address, ProfileId, ProtocolResult, PubId};

/// A live profile that can be followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowTarget {
    pub handle: String,
    pub follow_module: Option<Address>,
}

/// The root publication behind a collect request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectTarget {
    pub root_profile_id: ProfileId,
    pub root_pub_id: PubId,
    /// Handle of the root's author, for naming its collect collection.
    pub handle: String,
    pub collect_module: Option<Address>,
}

pub trait FollowGate {
    /// `ProfileDoesNotExist` unless the profile is live.
    fn follow_target(&self, profile_id: ProfileId) -> ProtocolResult<FollowTarget>;

    fn process_follow(
        &self,
        engine: &InteractionEngine,
        module: Address,
        follower: Address,
        profile_id: ProfileId,
        data: &[u8],
    ) -> ProtocolResult<()>;
}

pub trait CollectGate {
    /// Resolve through mirrors; `PublicationDoesNotExist` if unresolvable.
    fn collect_target(&self, profile_id: ProfileId, pub_id: PubId) -> ProtocolResult<CollectTarget>;

    fn process_collect(
        &self,
        engine: &InteractionEngine,
        module: Address,
        collector: Address,
        referrer: (ProfileId, PubId),
        root: (ProfileId, PubId),
        data: &[u8],
    ) -> ProtocolResult<()>;
}
