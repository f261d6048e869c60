//! # Canonical Events
//!
//! Every committed mutation emits exactly one [`ProtocolEvent`] per logical
//! effect. Events are the durable external audit log; the hub keeps no other
//! query log. A rejected call emits nothing.

use crate::entities::{Address, ProfileId, ProtocolState, PubId, Timestamp, TokenId};
use crate::modules::ModuleKind;
use serde::{Deserialize, Serialize};

/// Envelope carrying the commit timestamp and the mutation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolEvent {
    /// Timestamp of the call that produced the event.
    pub timestamp: Timestamp,
    /// Identifying fields of the mutation.
    pub payload: EventPayload,
}

impl ProtocolEvent {
    /// Render as a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Stable event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.payload.name()
    }
}

/// Mutation payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventPayload {
    // --- Governance ---
    GovernanceSet {
        caller: Address,
        previous: Option<Address>,
        governance: Address,
    },
    EmergencyAdminSet {
        caller: Address,
        previous: Option<Address>,
        emergency_admin: Option<Address>,
    },
    StateSet {
        caller: Address,
        previous: ProtocolState,
        state: ProtocolState,
    },
    ProfileCreatorWhitelisted {
        creator: Address,
        whitelisted: bool,
    },
    ModuleWhitelisted {
        kind: ModuleKind,
        module: Address,
        whitelisted: bool,
    },
    ModuleInstalled {
        kind: ModuleKind,
        module: Address,
        name: String,
    },

    // --- Profiles ---
    ProfileCreated {
        profile_id: ProfileId,
        creator: Address,
        to: Address,
        handle: String,
        image_uri: String,
        follow_module: Option<Address>,
        follow_module_return_data: Vec<u8>,
        follow_nft_uri: String,
    },
    DefaultProfileSet {
        wallet: Address,
        profile_id: ProfileId,
    },
    DispatcherSet {
        profile_id: ProfileId,
        dispatcher: Option<Address>,
    },
    ProfileImageUriSet {
        profile_id: ProfileId,
        image_uri: String,
    },
    FollowNftUriSet {
        profile_id: ProfileId,
        follow_nft_uri: String,
    },
    FollowModuleSet {
        profile_id: ProfileId,
        follow_module: Option<Address>,
        follow_module_return_data: Vec<u8>,
    },
    ProfileTransferred {
        profile_id: ProfileId,
        from: Address,
        to: Address,
    },
    ProfileBurned {
        profile_id: ProfileId,
        owner: Address,
    },

    // --- Publications ---
    PostCreated {
        profile_id: ProfileId,
        pub_id: PubId,
        content_uri: String,
        collect_module: Option<Address>,
        collect_module_return_data: Vec<u8>,
        reference_module: Option<Address>,
        reference_module_return_data: Vec<u8>,
    },
    CommentCreated {
        profile_id: ProfileId,
        pub_id: PubId,
        content_uri: String,
        profile_id_pointed: ProfileId,
        pub_id_pointed: PubId,
        reference_module_data: Vec<u8>,
        collect_module: Option<Address>,
        collect_module_return_data: Vec<u8>,
        reference_module: Option<Address>,
        reference_module_return_data: Vec<u8>,
    },
    MirrorCreated {
        profile_id: ProfileId,
        pub_id: PubId,
        profile_id_pointed: ProfileId,
        pub_id_pointed: PubId,
        reference_module_data: Vec<u8>,
        reference_module: Option<Address>,
        reference_module_return_data: Vec<u8>,
    },

    // --- Interactions ---
    FollowNftDeployed {
        profile_id: ProfileId,
        follow_nft: Address,
    },
    CollectNftDeployed {
        profile_id: ProfileId,
        pub_id: PubId,
        collect_nft: Address,
    },
    Followed {
        follower: Address,
        profile_ids: Vec<ProfileId>,
        follow_module_datas: Vec<Vec<u8>>,
    },
    FollowReceiptMinted {
        profile_id: ProfileId,
        token_id: TokenId,
        to: Address,
    },
    Collected {
        collector: Address,
        profile_id: ProfileId,
        pub_id: PubId,
        root_profile_id: ProfileId,
        root_pub_id: PubId,
        data: Vec<u8>,
    },
    CollectReceiptMinted {
        profile_id: ProfileId,
        pub_id: PubId,
        token_id: TokenId,
        to: Address,
    },
}

impl EventPayload {
    /// Stable event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GovernanceSet { .. } => "governance_set",
            Self::EmergencyAdminSet { .. } => "emergency_admin_set",
            Self::StateSet { .. } => "state_set",
            Self::ProfileCreatorWhitelisted { .. } => "profile_creator_whitelisted",
            Self::ModuleWhitelisted { .. } => "module_whitelisted",
            Self::ModuleInstalled { .. } => "module_installed",
            Self::ProfileCreated { .. } => "profile_created",
            Self::DefaultProfileSet { .. } => "default_profile_set",
            Self::DispatcherSet { .. } => "dispatcher_set",
            Self::ProfileImageUriSet { .. } => "profile_image_uri_set",
            Self::FollowNftUriSet { .. } => "follow_nft_uri_set",
            Self::FollowModuleSet { .. } => "follow_module_set",
            Self::ProfileTransferred { .. } => "profile_transferred",
            Self::ProfileBurned { .. } => "profile_burned",
            Self::PostCreated { .. } => "post_created",
            Self::CommentCreated { .. } => "comment_created",
            Self::MirrorCreated { .. } => "mirror_created",
            Self::FollowNftDeployed { .. } => "follow_nft_deployed",
            Self::CollectNftDeployed { .. } => "collect_nft_deployed",
            Self::Followed { .. } => "followed",
            Self::FollowReceiptMinted { .. } => "follow_receipt_minted",
            Self::Collected { .. } => "collected",
            Self::CollectReceiptMinted { .. } => "collect_receipt_minted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_is_tagged() {
        let event = ProtocolEvent {
            timestamp: 42,
            payload: EventPayload::DefaultProfileSet {
                wallet: Address::repeat_byte(0x0a),
                profile_id: 3,
            },
        };
        let json = event.to_json().unwrap();
        assert!(json.contains("\"event\":\"default_profile_set\""));
        assert!(json.contains("\"timestamp\":42"));
        assert_eq!(event.name(), "default_profile_set");

        let back: ProtocolEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
