//! # Profile Entities

use serde::{Deserialize, Serialize};
use shared_types::{Address, ModuleData, ProfileId};

/// Maximum handle length in bytes.
pub const MAX_HANDLE_LENGTH: usize = 31;

/// Maximum profile image URI length in bytes.
pub const MAX_PROFILE_IMAGE_URI_LENGTH: usize = 6000;

/// Identity record. Survives burn; only ownership and the handle index are
/// retired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub handle: String,
    pub image_uri: String,
    pub follow_module: Option<Address>,
    /// Config returned by the follow module's init hook.
    pub follow_module_data: ModuleData,
    pub follow_nft_uri: String,
    pub dispatcher: Option<Address>,
}

/// Input to profile creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProfileParams {
    pub to: Address,
    pub handle: String,
    pub image_uri: String,
    pub follow_module: Option<Address>,
    pub follow_module_init_data: ModuleData,
    pub follow_nft_uri: String,
}

/// Length limits enforced on profile metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLimits {
    pub max_handle_length: usize,
    pub max_image_uri_length: usize,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            max_handle_length: MAX_HANDLE_LENGTH,
            max_image_uri_length: MAX_PROFILE_IMAGE_URI_LENGTH,
        }
    }
}
