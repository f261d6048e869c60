//! # Error Types
//!
//! The protocol error taxonomy. Every failure is a whole-call abort: the
//! caller gets the specific kind and no state change persists.

use crate::entities::{Address, ProfileId, PubId, Timestamp};
use thiserror::Error;

/// Coarse classification of a [`ProtocolError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller lacks the required role.
    Authorization,
    /// Protocol state forbids the operation.
    StateGate,
    /// Malformed or conflicting input.
    Validation,
    /// Reference to something that does not exist.
    Referential,
    /// Delegated authorization failed.
    Signature,
    /// An external policy module refused the action.
    ModuleRejection,
}

impl ErrorCategory {
    /// Snake-case name, used as a metrics dimension.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authorization => "authorization",
            Self::StateGate => "state_gate",
            Self::Validation => "validation",
            Self::Referential => "referential",
            Self::Signature => "signature",
            Self::ModuleRejection => "module_rejection",
        }
    }
}

/// Errors returned by hub operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    // --- Authorization ---
    /// Caller is not the profile owner.
    #[error("caller is not the profile owner")]
    NotProfileOwner,

    /// Caller is neither the profile owner nor its dispatcher.
    #[error("caller is not the profile owner or dispatcher")]
    NotProfileOwnerOrDispatcher,

    /// Caller is not the governance principal.
    #[error("caller is not governance")]
    NotGovernance,

    /// Caller is neither governance nor the emergency admin.
    #[error("caller is not governance or emergency admin")]
    NotGovernanceOrEmergencyAdmin,

    /// Caller may not create profiles.
    #[error("profile creator {0} is not whitelisted")]
    ProfileCreatorNotWhitelisted(Address),

    // --- State gate ---
    /// Protocol is paused.
    #[error("protocol is paused")]
    ProtocolPaused,

    /// Publishing is paused.
    #[error("publishing is paused")]
    PublishingPaused,

    // --- Validation ---
    /// Handle already held by a live profile.
    #[error("handle taken: {0}")]
    HandleTaken(String),

    /// Handle fails length or charset rules.
    #[error("invalid handle: {0}")]
    HandleInvalid(&'static str),

    /// Parallel input arrays differ in length.
    #[error("array length mismatch: {left} != {right}")]
    ArrayLengthMismatch { left: usize, right: usize },

    /// Module address is not on the relevant allow-list.
    #[error("module not whitelisted: {0}")]
    ModuleNotWhitelisted(Address),

    /// An implementation is already installed at this address.
    #[error("module already installed at {0}")]
    ModuleAlreadyInstalled(Address),

    /// Profile image URI exceeds the configured maximum.
    #[error("profile image URI too long: {length} > {max} bytes")]
    ProfileImageUriTooLong { length: usize, max: usize },

    /// The zero address is not a valid recipient here.
    #[error("zero address not allowed")]
    ZeroAddress,

    /// Hub already initialized.
    #[error("hub already initialized")]
    AlreadyInitialized,

    // --- Referential ---
    /// No publication at `(profile_id, pub_id)`.
    #[error("publication does not exist: ({profile_id}, {pub_id})")]
    PublicationDoesNotExist { profile_id: ProfileId, pub_id: PubId },

    /// No live profile with this id.
    #[error("profile does not exist: {0}")]
    ProfileDoesNotExist(ProfileId),

    // --- Signature ---
    /// Signature deadline has passed.
    #[error("signature expired: deadline {deadline} < now {now}")]
    SignatureExpired { deadline: Timestamp, now: Timestamp },

    /// Recovered signer does not match the claimed signer.
    #[error("signature invalid")]
    SignatureInvalid,

    // --- Module rejection ---
    /// A policy module refused the action.
    #[error("module {module} rejected: {reason}")]
    ModuleRejected { module: Address, reason: String },
}

impl ProtocolError {
    /// Returns the taxonomy bucket for this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotProfileOwner
            | Self::NotProfileOwnerOrDispatcher
            | Self::NotGovernance
            | Self::NotGovernanceOrEmergencyAdmin
            | Self::ProfileCreatorNotWhitelisted(_) => ErrorCategory::Authorization,
            Self::ProtocolPaused | Self::PublishingPaused => ErrorCategory::StateGate,
            Self::HandleTaken(_)
            | Self::HandleInvalid(_)
            | Self::ArrayLengthMismatch { .. }
            | Self::ModuleNotWhitelisted(_)
            | Self::ModuleAlreadyInstalled(_)
            | Self::ProfileImageUriTooLong { .. }
            | Self::ZeroAddress
            | Self::AlreadyInitialized => ErrorCategory::Validation,
            Self::PublicationDoesNotExist { .. } | Self::ProfileDoesNotExist(_) => {
                ErrorCategory::Referential
            }
            Self::SignatureExpired { .. } | Self::SignatureInvalid => ErrorCategory::Signature,
            Self::ModuleRejected { .. } => ErrorCategory::ModuleRejection,
        }
    }

    /// Short stable label, used as a metrics dimension.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotProfileOwner => "not_profile_owner",
            Self::NotProfileOwnerOrDispatcher => "not_profile_owner_or_dispatcher",
            Self::NotGovernance => "not_governance",
            Self::NotGovernanceOrEmergencyAdmin => "not_governance_or_emergency_admin",
            Self::ProfileCreatorNotWhitelisted(_) => "profile_creator_not_whitelisted",
            Self::ProtocolPaused => "protocol_paused",
            Self::PublishingPaused => "publishing_paused",
            Self::HandleTaken(_) => "handle_taken",
            Self::HandleInvalid(_) => "handle_invalid",
            Self::ArrayLengthMismatch { .. } => "array_length_mismatch",
            Self::ModuleNotWhitelisted(_) => "module_not_whitelisted",
            Self::ModuleAlreadyInstalled(_) => "module_already_installed",
            Self::ProfileImageUriTooLong { .. } => "profile_image_uri_too_long",
            Self::ZeroAddress => "zero_address",
            Self::AlreadyInitialized => "already_initialized",
            Self::PublicationDoesNotExist { .. } => "publication_does_not_exist",
            Self::ProfileDoesNotExist(_) => "profile_does_not_exist",
            Self::SignatureExpired { .. } => "signature_expired",
            Self::SignatureInvalid => "signature_invalid",
            Self::ModuleRejected { .. } => "module_rejected",
        }
    }
}

/// Result alias used throughout the hub crates.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
