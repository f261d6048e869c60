//! Typed payloads of the delegated operations, built from the same
//! arguments the direct operations take. Off-line signers use these with
//! [`SocialHub::digest_for`](super::SocialHub::digest_for).

use shared_types::{Address, ModuleData, ProfileId, PubId};
use sg_01_signature_authority::TypedPayload;
use sg_04_publication_graph::{CommentParams, MirrorParams, PostParams};

pub fn set_default_profile(wallet: Address, profile_id: ProfileId) -> TypedPayload {
    TypedPayload::SetDefaultProfile { wallet, profile_id }
}

pub fn set_follow_module(
    profile_id: ProfileId,
    follow_module: Option<Address>,
    follow_module_init_data: &[u8],
) -> TypedPayload {
    TypedPayload::SetFollowModule {
        profile_id,
        follow_module,
        follow_module_init_data: follow_module_init_data.to_vec(),
    }
}

pub fn set_dispatcher(profile_id: ProfileId, dispatcher: Option<Address>) -> TypedPayload {
    TypedPayload::SetDispatcher {
        profile_id,
        dispatcher,
    }
}

pub fn set_profile_image_uri(profile_id: ProfileId, image_uri: &str) -> TypedPayload {
    TypedPayload::SetProfileImageUri {
        profile_id,
        image_uri: image_uri.to_string(),
    }
}

pub fn set_follow_nft_uri(profile_id: ProfileId, follow_nft_uri: &str) -> TypedPayload {
    TypedPayload::SetFollowNftUri {
        profile_id,
        follow_nft_uri: follow_nft_uri.to_string(),
    }
}

pub fn post(params: &PostParams) -> TypedPayload {
    TypedPayload::Post {
        profile_id: params.profile_id,
        content_uri: params.content_uri.clone(),
        collect_module: params.collect_module,
        collect_module_init_data: params.collect_module_init_data.clone(),
        reference_module: params.reference_module,
        reference_module_init_data: params.reference_module_init_data.clone(),
    }
}

pub fn comment(params: &CommentParams) -> TypedPayload {
    TypedPayload::Comment {
        profile_id: params.profile_id,
        content_uri: params.content_uri.clone(),
        profile_id_pointed: params.profile_id_pointed,
        pub_id_pointed: params.pub_id_pointed,
        reference_module_data: params.reference_module_data.clone(),
        collect_module: params.collect_module,
        collect_module_init_data: params.collect_module_init_data.clone(),
        reference_module: params.reference_module,
        reference_module_init_data: params.reference_module_init_data.clone(),
    }
}

pub fn mirror(params: &MirrorParams) -> TypedPayload {
    TypedPayload::Mirror {
        profile_id: params.profile_id,
        profile_id_pointed: params.profile_id_pointed,
        pub_id_pointed: params.pub_id_pointed,
        reference_module_data: params.reference_module_data.clone(),
        reference_module: params.reference_module,
        reference_module_init_data: params.reference_module_init_data.clone(),
    }
}

/// The whole batch is bound into one digest.
pub fn follow(profile_ids: &[ProfileId], datas: &[ModuleData]) -> TypedPayload {
    TypedPayload::Follow {
        profile_ids: profile_ids.to_vec(),
        datas: datas.to_vec(),
    }
}

pub fn collect(profile_id: ProfileId, pub_id: PubId, data: &[u8]) -> TypedPayload {
    TypedPayload::Collect {
        profile_id,
        pub_id,
        data: data.to_vec(),
    }
}

pub fn burn(profile_id: ProfileId) -> TypedPayload {
    TypedPayload::Burn {
        token_id: profile_id,
    }
}
