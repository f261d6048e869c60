//! Collect modules.

use super::{decode_config, encode_config, is_follower_or_owner};
use serde::{Deserialize, Serialize};
use shared_types::{
    CollectContext, CollectModule, InitContext, ModuleData, ModuleRejection, ProtocolView,
    Timestamp,
};

fn require_follower(ctx: &CollectContext<'_>, view: &dyn ProtocolView) -> Result<(), ModuleRejection> {
    if is_follower_or_owner(view, ctx.profile_id, ctx.collector) {
        Ok(())
    } else {
        Err(ModuleRejection::new(format!(
            "{} does not follow profile {}",
            ctx.collector, ctx.profile_id
        )))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeCollectConfig {
    pub followers_only: bool,
}

/// Anyone (or only followers) may collect, without limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeCollectModule;

impl CollectModule for FreeCollectModule {
    fn name(&self) -> &str {
        "FreeCollectModule"
    }

    fn initialize(&self, ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection> {
        let config: FreeCollectConfig = decode_config(ctx.data)?;
        encode_config(&config)
    }

    fn process_collect(
        &self,
        ctx: &CollectContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection> {
        let config: FreeCollectConfig = decode_config(ctx.config)?;
        if config.followers_only {
            require_follower(ctx, view)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitedCollectConfig {
    pub limit: u64,
    pub followers_only: bool,
}

/// At most `limit` receipts per publication.
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitedCollectModule;

impl CollectModule for LimitedCollectModule {
    fn name(&self) -> &str {
        "LimitedCollectModule"
    }

    fn initialize(&self, ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection> {
        let config: LimitedCollectConfig = decode_config(ctx.data)?;
        if config.limit == 0 {
            return Err(ModuleRejection::new("collect limit must be positive"));
        }
        encode_config(&config)
    }

    fn process_collect(
        &self,
        ctx: &CollectContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection> {
        let config: LimitedCollectConfig = decode_config(ctx.config)?;
        if config.followers_only {
            require_follower(ctx, view)?;
        }
        let collected = view.collect_count(ctx.profile_id, ctx.pub_id);
        if collected >= config.limit {
            return Err(ModuleRejection::new(format!(
                "collect limit {} reached",
                config.limit
            )));
        }
        Ok(())
    }
}

/// Init payload of [`TimedCollectModule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedCollectConfig {
    pub window_secs: u64,
}

impl Default for TimedCollectConfig {
    fn default() -> Self {
        Self {
            window_secs: 24 * 60 * 60,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct TimedCollectState {
    window_secs: u64,
    opened_at: Timestamp,
}

/// Collects accepted only within `window_secs` of the publication's creation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedCollectModule;

impl CollectModule for TimedCollectModule {
    fn name(&self) -> &str {
        "TimedCollectModule"
    }

    fn initialize(&self, ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection> {
        let config: TimedCollectConfig = decode_config(ctx.data)?;
        encode_config(&TimedCollectState {
            window_secs: config.window_secs,
            opened_at: ctx.timestamp,
        })
    }

    fn process_collect(
        &self,
        ctx: &CollectContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection> {
        let state: TimedCollectState = decode_config(ctx.config)?;
        let closes_at = state.opened_at.saturating_add(state.window_secs);
        if view.now() > closes_at {
            return Err(ModuleRejection::new(format!(
                "collect window closed at {closes_at}"
            )));
        }
        Ok(())
    }
}

/// Rejects every collect.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevertCollectModule;

impl CollectModule for RevertCollectModule {
    fn name(&self) -> &str {
        "RevertCollectModule"
    }

    fn initialize(&self, _ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection> {
        Ok(Vec::new())
    }

    fn process_collect(
        &self,
        _ctx: &CollectContext<'_>,
        _view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection> {
        Err(ModuleRejection::new("collects are disabled"))
    }
}
