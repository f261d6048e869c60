//! # Publication Graph Service
//!
//! Append-only publication lists per profile. A publication's `pub_id` is
//! its 1-based position in its author's list, so ids are dense and the list
//! length is the author's `pub_count`.
//!
//! Pointers only ever target publications that already exist, so the
//! pointer graph is acyclic and mirror resolution terminates.

use crate::domain::entities::{CommentParams, MirrorParams, PostParams, Publication};
use crate::ports::outbound::PublicationHooks;
use shared_types::{
    Address, InitContext, ModuleData, ModuleKind, ProfileId, ProtocolError, ProtocolResult,
    PubId, PubType, ReferenceContext, Timestamp,
};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct PublicationGraph {
    publications: HashMap<ProfileId, Vec<Publication>>,
}

/// Collect and reference module attachments for a new publication.
struct Attachments<'a> {
    collect_module: Option<Address>,
    collect_module_init_data: &'a [u8],
    reference_module: Option<Address>,
    reference_module_init_data: &'a [u8],
}

impl PublicationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // CREATION
    // =========================================================================

    pub fn create_post(
        &mut self,
        params: &PostParams,
        now: Timestamp,
        hooks: &dyn PublicationHooks,
    ) -> ProtocolResult<PubId> {
        let pub_id = self.next_pub_id(params.profile_id);
        let (collect_module_data, reference_module_data) = Self::initialize_modules(
            params.profile_id,
            pub_id,
            now,
            &Attachments {
                collect_module: params.collect_module,
                collect_module_init_data: &params.collect_module_init_data,
                reference_module: params.reference_module,
                reference_module_init_data: &params.reference_module_init_data,
            },
            hooks,
        )?;

        self.append(Publication {
            profile_id: params.profile_id,
            pub_id,
            kind: PubType::Post,
            content_uri: params.content_uri.clone(),
            profile_id_pointed: 0,
            pub_id_pointed: 0,
            collect_module: params.collect_module,
            collect_module_data,
            reference_module: params.reference_module,
            reference_module_data,
            created_at: now,
        });
        Ok(pub_id)
    }

    pub fn create_comment(
        &mut self,
        params: &CommentParams,
        now: Timestamp,
        hooks: &dyn PublicationHooks,
    ) -> ProtocolResult<PubId> {
        let pub_id = self.next_pub_id(params.profile_id);
        let pointed = self.validate_pointer(params.profile_id_pointed, params.pub_id_pointed, hooks)?;

        if let Some(module) = pointed.reference_module {
            hooks.process_comment(
                module,
                &ReferenceContext {
                    profile_id: params.profile_id,
                    pub_id,
                    profile_id_pointed: params.profile_id_pointed,
                    pub_id_pointed: params.pub_id_pointed,
                    config: &pointed.reference_module_data,
                    data: &params.reference_module_data,
                },
            )?;
        }

        let (collect_module_data, reference_module_data) = Self::initialize_modules(
            params.profile_id,
            pub_id,
            now,
            &Attachments {
                collect_module: params.collect_module,
                collect_module_init_data: &params.collect_module_init_data,
                reference_module: params.reference_module,
                reference_module_init_data: &params.reference_module_init_data,
            },
            hooks,
        )?;

        self.append(Publication {
            profile_id: params.profile_id,
            pub_id,
            kind: PubType::Comment,
            content_uri: params.content_uri.clone(),
            profile_id_pointed: params.profile_id_pointed,
            pub_id_pointed: params.pub_id_pointed,
            collect_module: params.collect_module,
            collect_module_data,
            reference_module: params.reference_module,
            reference_module_data,
            created_at: now,
        });
        Ok(pub_id)
    }

    pub fn create_mirror(
        &mut self,
        params: &MirrorParams,
        now: Timestamp,
        hooks: &dyn PublicationHooks,
    ) -> ProtocolResult<PubId> {
        let pub_id = self.next_pub_id(params.profile_id);
        let pointed = self.validate_pointer(params.profile_id_pointed, params.pub_id_pointed, hooks)?;

        if let Some(module) = pointed.reference_module {
            hooks.process_mirror(
                module,
                &ReferenceContext {
                    profile_id: params.profile_id,
                    pub_id,
                    profile_id_pointed: params.profile_id_pointed,
                    pub_id_pointed: params.pub_id_pointed,
                    config: &pointed.reference_module_data,
                    data: &params.reference_module_data,
                },
            )?;
        }

        let (_, reference_module_data) = Self::initialize_modules(
            params.profile_id,
            pub_id,
            now,
            &Attachments {
                collect_module: None,
                collect_module_init_data: &[],
                reference_module: params.reference_module,
                reference_module_init_data: &params.reference_module_init_data,
            },
            hooks,
        )?;

        self.append(Publication {
            profile_id: params.profile_id,
            pub_id,
            kind: PubType::Mirror,
            content_uri: String::new(),
            profile_id_pointed: params.profile_id_pointed,
            pub_id_pointed: params.pub_id_pointed,
            collect_module: None,
            collect_module_data: Vec::new(),
            reference_module: params.reference_module,
            reference_module_data,
            created_at: now,
        });
        Ok(pub_id)
    }

    /// Validate both attachments, then run the collect init hook followed by
    /// the reference init hook.
    fn initialize_modules(
        profile_id: ProfileId,
        pub_id: PubId,
        now: Timestamp,
        attachments: &Attachments<'_>,
        hooks: &dyn PublicationHooks,
    ) -> ProtocolResult<(ModuleData, ModuleData)> {
        hooks.require_whitelisted(ModuleKind::Collect, attachments.collect_module)?;
        hooks.require_whitelisted(ModuleKind::Reference, attachments.reference_module)?;

        let collect_data = match attachments.collect_module {
            Some(module) => hooks.initialize_collect(
                module,
                &InitContext {
                    profile_id,
                    pub_id: Some(pub_id),
                    timestamp: now,
                    data: attachments.collect_module_init_data,
                },
            )?,
            None => Vec::new(),
        };
        let reference_data = match attachments.reference_module {
            Some(module) => hooks.initialize_reference(
                module,
                &InitContext {
                    profile_id,
                    pub_id: Some(pub_id),
                    timestamp: now,
                    data: attachments.reference_module_init_data,
                },
            )?,
            None => Vec::new(),
        };
        Ok((collect_data, reference_data))
    }

    fn next_pub_id(&self, profile_id: ProfileId) -> PubId {
        self.pub_count(profile_id) + 1
    }

    fn append(&mut self, publication: Publication) {
        debug!(
            profile_id = publication.profile_id,
            pub_id = publication.pub_id,
            kind = ?publication.kind,
            "Publication appended"
        );
        self.publications
            .entry(publication.profile_id)
            .or_default()
            .push(publication);
    }

    // =========================================================================
    // POINTERS
    // =========================================================================

    /// The publication a new comment or mirror may point at.
    pub fn validate_pointer(
        &self,
        profile_id_pointed: ProfileId,
        pub_id_pointed: PubId,
        hooks: &dyn PublicationHooks,
    ) -> ProtocolResult<&Publication> {
        if !hooks.profile_created(profile_id_pointed) {
            return Err(ProtocolError::ProfileDoesNotExist(profile_id_pointed));
        }
        self.get(profile_id_pointed, pub_id_pointed)
            .ok_or(ProtocolError::PublicationDoesNotExist {
                profile_id: profile_id_pointed,
                pub_id: pub_id_pointed,
            })
    }

    /// Follow mirror pointers down to the Post or Comment they amplify.
    pub fn resolve_root(&self, profile_id: ProfileId, pub_id: PubId) -> ProtocolResult<&Publication> {
        let missing = |profile_id, pub_id| ProtocolError::PublicationDoesNotExist { profile_id, pub_id };
        let mut current = self.get(profile_id, pub_id).ok_or(missing(profile_id, pub_id))?;
        while current.kind == PubType::Mirror {
            let (p, q) = (current.profile_id_pointed, current.pub_id_pointed);
            current = self.get(p, q).ok_or(missing(p, q))?;
        }
        Ok(current)
    }

    /// Content URI of the publication, resolving mirrors to their root.
    pub fn resolve_content(&self, profile_id: ProfileId, pub_id: PubId) -> ProtocolResult<String> {
        self.resolve_root(profile_id, pub_id)
            .map(|root| root.content_uri.clone())
    }

    // =========================================================================
    // VIEWS
    // =========================================================================

    pub fn get(&self, profile_id: ProfileId, pub_id: PubId) -> Option<&Publication> {
        let index = usize::try_from(pub_id.checked_sub(1)?).ok()?;
        self.publications.get(&profile_id)?.get(index)
    }

    pub fn pub_type(&self, profile_id: ProfileId, pub_id: PubId) -> PubType {
        self.get(profile_id, pub_id)
            .map_or(PubType::Nonexistent, |p| p.kind)
    }

    pub fn pub_count(&self, profile_id: ProfileId) -> PubId {
        self.publications
            .get(&profile_id)
            .map_or(0, |pubs| pubs.len() as PubId)
    }
}
