//! Reference modules.

use super::is_follower_or_owner;
use shared_types::{
    InitContext, ModuleData, ModuleRejection, ProtocolView, ReferenceContext, ReferenceModule,
};

/// Only followers of the pointed profile may comment on or mirror its
/// publications. The pointed profile's owner is always allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowerOnlyReferenceModule;

impl FollowerOnlyReferenceModule {
    fn check(&self, ctx: &ReferenceContext<'_>, view: &dyn ProtocolView) -> Result<(), ModuleRejection> {
        let Some(author) = view.owner_of(ctx.profile_id) else {
            return Err(ModuleRejection::new(format!(
                "profile {} has no owner",
                ctx.profile_id
            )));
        };
        if is_follower_or_owner(view, ctx.profile_id_pointed, author) {
            Ok(())
        } else {
            Err(ModuleRejection::new(format!(
                "{author} does not follow profile {}",
                ctx.profile_id_pointed
            )))
        }
    }
}

impl ReferenceModule for FollowerOnlyReferenceModule {
    fn name(&self) -> &str {
        "FollowerOnlyReferenceModule"
    }

    fn initialize(&self, _ctx: &InitContext<'_>) -> Result<ModuleData, ModuleRejection> {
        Ok(Vec::new())
    }

    fn process_comment(
        &self,
        ctx: &ReferenceContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection> {
        self.check(ctx, view)
    }

    fn process_mirror(
        &self,
        ctx: &ReferenceContext<'_>,
        view: &dyn ProtocolView,
    ) -> Result<(), ModuleRejection> {
        self.check(ctx, view)
    }
}
