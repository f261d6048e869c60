//! # Hub Configuration
//!
//! Deployment parameters: the signature domain and metadata limits.

use serde::{Deserialize, Serialize};
use sg_01_signature_authority::Eip712Domain;
use sg_03_profile_registry::{ProfileLimits, MAX_HANDLE_LENGTH, MAX_PROFILE_IMAGE_URI_LENGTH};
use shared_types::Address;
use std::env;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Chain id bound into every signature digest.
    pub chain_id: u64,
    /// Address of this hub, bound into every signature digest.
    pub hub_address: Address,
    pub domain_name: String,
    pub domain_version: String,
    pub max_handle_length: usize,
    pub max_profile_image_uri_length: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            chain_id: 1,
            hub_address: Address::repeat_byte(0x1e),
            domain_name: "Lens Protocol Profiles".to_string(),
            domain_version: "1".to_string(),
            max_handle_length: MAX_HANDLE_LENGTH,
            max_profile_image_uri_length: MAX_PROFILE_IMAGE_URI_LENGTH,
        }
    }
}

impl HubConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SG_CHAIN_ID`: Chain id (default: 1)
    /// - `SG_HUB_ADDRESS`: `0x`-prefixed hub address
    /// - `SG_DOMAIN_NAME`: Signature domain name (default: Lens Protocol Profiles)
    /// - `SG_DOMAIN_VERSION`: Signature domain version (default: 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(value) = env::var("SG_CHAIN_ID") {
            config.chain_id = value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    var: "SG_CHAIN_ID",
                    reason: e.to_string(),
                }
            })?;
        }
        if let Ok(value) = env::var("SG_HUB_ADDRESS") {
            config.hub_address = value.parse().map_err(|e: shared_types::AddressParseError| {
                ConfigError::InvalidVar {
                    var: "SG_HUB_ADDRESS",
                    reason: e.to_string(),
                }
            })?;
        }
        if let Ok(value) = env::var("SG_DOMAIN_NAME") {
            config.domain_name = value;
        }
        if let Ok(value) = env::var("SG_DOMAIN_VERSION") {
            config.domain_version = value;
        }

        Ok(config)
    }

    pub fn domain(&self) -> Eip712Domain {
        Eip712Domain::new(
            self.domain_name.clone(),
            self.domain_version.clone(),
            self.chain_id,
            self.hub_address,
        )
    }

    pub fn profile_limits(&self) -> ProfileLimits {
        ProfileLimits {
            max_handle_length: self.max_handle_length,
            max_image_uri_length: self.max_profile_image_uri_length,
        }
    }
}
