//! Follow modules.

use super::{decode_config, encode_config};
use serde::{Deserialize, Serialize};
use shared_types::{
    Address, FollowContext, FollowModule, InitContext, ModuleData, ModuleRejection, ProtocolView,
};

/// Rejects every follow. Attaching it closes a profile to new followers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevertFollowModule;

impl FollowModule for RevertFollowModule {
    fn name(&self) -> &str {
        "RevertFollowModule"
    }

    fn initialize(&self, _ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection> {
        Ok(Vec::new())
    }

    fn process_follow(
        &self,
        _ctx: &FollowContext<'_>,
        _view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection> {
        Err(ModuleRejection::new("follows are disabled"))
    }
}

/// Addresses allowed to follow the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistFollowConfig {
    pub allowed: Vec<Address>,
}

/// Only addresses named at initialization may follow.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowlistFollowModule;

impl FollowModule for AllowlistFollowModule {
    fn name(&self) -> &str {
        "AllowlistFollowModule"
    }

    fn initialize(&self, ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection> {
        let config: AllowlistFollowConfig = decode_config(ctx.data)?;
        encode_config(&config)
    }

    fn process_follow(
        &self,
        ctx: &FollowContext<'_>,
        _view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection> {
        let config: AllowlistFollowConfig = decode_config(ctx.config)?;
        if config.allowed.contains(&ctx.follower) {
            Ok(())
        } else {
            Err(ModuleRejection::new(format!(
                "{} is not on the follow allow-list",
                ctx.follower
            )))
        }
    }
}
