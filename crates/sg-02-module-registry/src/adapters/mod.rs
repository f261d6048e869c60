//! # Built-in Modules
//!
//! Reference implementations of the three module families. Configurations
//! travel as bincode-encoded bytes; an empty init payload selects the
//! module's default configuration.

pub mod collect;
pub mod follow;
pub mod reference;

pub use collect::{
    FreeCollectConfig, FreeCollectModule, LimitedCollectConfig, LimitedCollectModule,
    RevertCollectModule, TimedCollectConfig, TimedCollectModule,
};
pub use follow::{AllowlistFollowConfig, AllowlistFollowModule, RevertFollowModule};
pub use reference::FollowerOnlyReferenceModule;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{Address, ModuleData, ModuleRejection, ProfileId, ProtocolView};

/// Encode a module configuration as init data.
pub fn encode_config<T: Serialize>(config: &T) -> Result<ModuleData, ModuleRejection> {
    bincode::serialize(config).map_err(|e| ModuleRejection::new(format!("encode config: {e}")))
}

/// Decode init data or stored config. Empty input yields `T::default()`.
pub fn decode_config<T: DeserializeOwned + Default>(data: &[u8]) -> Result<T, ModuleRejection> {
    if data.is_empty() {
        return Ok(T::default());
    }
    bincode::deserialize(data).map_err(|e| ModuleRejection::new(format!("malformed config: {e}")))
}

/// True if `who` owns `profile_id` or holds one of its follow receipts.
pub(crate) fn is_follower_or_owner(
    view: &dyn ProtocolView,
    profile_id: ProfileId,
    who: Address,
) -> bool {
    view.owner_of(profile_id) == Some(who) || view.follow_receipt_balance(profile_id, who) > 0
}

#[cfg(test)]
pub(crate) mod testing {
    use shared_types::{Address, ProfileId, ProtocolView, PubId, Timestamp};
    use std::collections::HashMap;

    /// Fixed protocol facts for exercising module hooks.
    #[derive(Default)]
    pub struct StaticView {
        pub now: Timestamp,
        pub owners: HashMap<ProfileId, Address>,
        pub followers: HashMap<(ProfileId, Address), u64>,
        pub collects: HashMap<(ProfileId, PubId), u64>,
    }

    impl ProtocolView for StaticView {
        fn now(&self) -> Timestamp {
            self.now
        }

        fn owner_of(&self, profile_id: ProfileId) -> Option<Address> {
            self.owners.get(&profile_id).copied()
        }

        fn follow_receipt_balance(&self, profile_id: ProfileId, holder: Address) -> u64 {
            self.followers.get(&(profile_id, holder)).copied().unwrap_or(0)
        }

        fn collect_count(&self, profile_id: ProfileId, pub_id: PubId) -> u64 {
            self.collects.get(&(profile_id, pub_id)).copied().unwrap_or(0)
        }
    }
}
