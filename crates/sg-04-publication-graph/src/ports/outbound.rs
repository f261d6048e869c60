//! # Outbound Port
//!
//! What the graph needs from the rest of the hub while a publication is
//! being created: module allow-lists, module hooks and profile existence.

use shared_types::{
    Address, InitContext, ModuleData, ModuleKind, ProfileId, ProtocolResult, ReferenceContext,
};

pub trait PublicationHooks {
    /// True if `profile_id` was ever created (burned or not).
    fn profile_created(&self, profile_id: ProfileId) -> bool;

    /// `ModuleNotWhitelisted` unless `module` is absent or allow-listed.
    fn require_whitelisted(&self, kind: ModuleKind, module: Option<Address>) -> ProtocolResult<()>;

    fn initialize_collect(&self, module: Address, ctx: &InitContext<'_>) -> ProtocolResult<ModuleData>;

    fn initialize_reference(
        &self,
        module: Address,
        ctx: &InitContext<'_>,
    ) -> ProtocolResult<ModuleData>;

    fn process_comment(&self, module: Address, ctx: &ReferenceContext<'_>) -> ProtocolResult<()>;

    fn process_mirror(&self, module: Address, ctx: &ReferenceContext<'_>) -> ProtocolResult<()>;
}
