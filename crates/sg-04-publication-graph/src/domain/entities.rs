//! # Publication Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, ModuleData, ProfileId, PubId, PubType, Timestamp};

/// A stored publication, keyed by `(profile_id, pub_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub profile_id: ProfileId,
    pub pub_id: PubId,
    /// Never `PubType::Nonexistent`.
    pub kind: PubType,
    /// Empty for mirrors.
    pub content_uri: String,
    /// `0` for posts.
    pub profile_id_pointed: ProfileId,
    /// `0` for posts.
    pub pub_id_pointed: PubId,
    pub collect_module: Option<Address>,
    pub collect_module_data: ModuleData,
    pub reference_module: Option<Address>,
    pub reference_module_data: ModuleData,
    pub created_at: Timestamp,
}

impl Publication {
    /// `(profile_id, pub_id)` this publication points at, if any.
    pub fn pointer(&self) -> Option<(ProfileId, PubId)> {
        match self.kind {
            PubType::Comment | PubType::Mirror => {
                Some((self.profile_id_pointed, self.pub_id_pointed))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostParams {
    pub profile_id: ProfileId,
    pub content_uri: String,
    pub collect_module: Option<Address>,
    pub collect_module_init_data: ModuleData,
    pub reference_module: Option<Address>,
    pub reference_module_init_data: ModuleData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentParams {
    pub profile_id: ProfileId,
    pub content_uri: String,
    pub profile_id_pointed: ProfileId,
    pub pub_id_pointed: PubId,
    /// Passed to the pointed publication's reference module.
    pub reference_module_data: ModuleData,
    pub collect_module: Option<Address>,
    pub collect_module_init_data: ModuleData,
    pub reference_module: Option<Address>,
    pub reference_module_init_data: ModuleData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorParams {
    pub profile_id: ProfileId,
    pub profile_id_pointed: ProfileId,
    pub pub_id_pointed: PubId,
    /// Passed to the pointed publication's reference module.
    pub reference_module_data: ModuleData,
    pub reference_module: Option<Address>,
    pub reference_module_init_data: ModuleData,
}
