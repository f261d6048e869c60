//! # Typed Structured Data Hashing (EIP-712)
//!
//! Digest = `keccak256(0x19 || 0x01 || domainSeparator || structHash)`.
//!
//! Every field is encoded as one 32-byte word: integers big-endian, addresses
//! left-padded, `string`/`bytes` replaced by their keccak256, arrays replaced
//! by the keccak256 of their concatenated element encodings. The signer's
//! nonce and the deadline are the last two words of every struct.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use shared_types::{keccak256, Address, Hash, ProfileId, PubId, Timestamp};

/// Domain type string.
pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Binds digests to one deployment of the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Domain {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
    pub verifying_contract: Address,
}

impl Eip712Domain {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: u64,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
            verifying_contract,
        }
    }

    /// Domain separator.
    pub fn separator(&self) -> Hash {
        WordEncoder::new()
            .word(keccak256(EIP712_DOMAIN_TYPE.as_bytes()))
            .string(&self.name)
            .string(&self.version)
            .uint(self.chain_id)
            .address(Some(self.verifying_contract))
            .finish()
    }

    /// Final digest a signer signs for a given struct hash.
    pub fn digest(&self, struct_hash: &Hash) -> Hash {
        let mut preimage = Vec::with_capacity(66);
        preimage.extend_from_slice(&[0x19, 0x01]);
        preimage.extend_from_slice(&self.separator());
        preimage.extend_from_slice(struct_hash);
        keccak256(&preimage)
    }
}

/// Payload of every delegated operation, minus nonce and deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypedPayload {
    SetDefaultProfile {
        wallet: Address,
        profile_id: ProfileId,
    },
    SetFollowModule {
        profile_id: ProfileId,
        follow_module: Option<Address>,
        follow_module_init_data: Vec<u8>,
    },
    SetDispatcher {
        profile_id: ProfileId,
        dispatcher: Option<Address>,
    },
    SetProfileImageUri {
        profile_id: ProfileId,
        image_uri: String,
    },
    SetFollowNftUri {
        profile_id: ProfileId,
        follow_nft_uri: String,
    },
    Post {
        profile_id: ProfileId,
        content_uri: String,
        collect_module: Option<Address>,
        collect_module_init_data: Vec<u8>,
        reference_module: Option<Address>,
        reference_module_init_data: Vec<u8>,
    },
    Comment {
        profile_id: ProfileId,
        content_uri: String,
        profile_id_pointed: ProfileId,
        pub_id_pointed: PubId,
        reference_module_data: Vec<u8>,
        collect_module: Option<Address>,
        collect_module_init_data: Vec<u8>,
        reference_module: Option<Address>,
        reference_module_init_data: Vec<u8>,
    },
    Mirror {
        profile_id: ProfileId,
        profile_id_pointed: ProfileId,
        pub_id_pointed: PubId,
        reference_module_data: Vec<u8>,
        reference_module: Option<Address>,
        reference_module_init_data: Vec<u8>,
    },
    Follow {
        profile_ids: Vec<ProfileId>,
        datas: Vec<Vec<u8>>,
    },
    Collect {
        profile_id: ProfileId,
        pub_id: PubId,
        data: Vec<u8>,
    },
    Burn {
        token_id: ProfileId,
    },
}

impl TypedPayload {
    /// EIP-712 type string of the struct.
    pub fn type_string(&self) -> &'static str {
        match self {
            Self::SetDefaultProfile { .. } => {
                "SetDefaultProfileWithSig(address wallet,uint256 profileId,uint256 nonce,uint256 deadline)"
            }
            Self::SetFollowModule { .. } => {
                "SetFollowModuleWithSig(uint256 profileId,address followModule,bytes followModuleInitData,uint256 nonce,uint256 deadline)"
            }
            Self::SetDispatcher { .. } => {
                "SetDispatcherWithSig(uint256 profileId,address dispatcher,uint256 nonce,uint256 deadline)"
            }
            Self::SetProfileImageUri { .. } => {
                "SetProfileImageURIWithSig(uint256 profileId,string imageURI,uint256 nonce,uint256 deadline)"
            }
            Self::SetFollowNftUri { .. } => {
                "SetFollowNFTURIWithSig(uint256 profileId,string followNFTURI,uint256 nonce,uint256 deadline)"
            }
            Self::Post { .. } => {
                "PostWithSig(uint256 profileId,string contentURI,address collectModule,bytes collectModuleInitData,address referenceModule,bytes referenceModuleInitData,uint256 nonce,uint256 deadline)"
            }
            Self::Comment { .. } => {
                "CommentWithSig(uint256 profileId,string contentURI,uint256 profileIdPointed,uint256 pubIdPointed,bytes referenceModuleData,address collectModule,bytes collectModuleInitData,address referenceModule,bytes referenceModuleInitData,uint256 nonce,uint256 deadline)"
            }
            Self::Mirror { .. } => {
                "MirrorWithSig(uint256 profileId,uint256 profileIdPointed,uint256 pubIdPointed,bytes referenceModuleData,address referenceModule,bytes referenceModuleInitData,uint256 nonce,uint256 deadline)"
            }
            Self::Follow { .. } => {
                "FollowWithSig(uint256[] profileIds,bytes[] datas,uint256 nonce,uint256 deadline)"
            }
            Self::Collect { .. } => {
                "CollectWithSig(uint256 profileId,uint256 pubId,bytes data,uint256 nonce,uint256 deadline)"
            }
            Self::Burn { .. } => "BurnWithSig(uint256 tokenId,uint256 nonce,uint256 deadline)",
        }
    }

    /// Short operation name for logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::SetDefaultProfile { .. } => "set_default_profile",
            Self::SetFollowModule { .. } => "set_follow_module",
            Self::SetDispatcher { .. } => "set_dispatcher",
            Self::SetProfileImageUri { .. } => "set_profile_image_uri",
            Self::SetFollowNftUri { .. } => "set_follow_nft_uri",
            Self::Post { .. } => "post",
            Self::Comment { .. } => "comment",
            Self::Mirror { .. } => "mirror",
            Self::Follow { .. } => "follow",
            Self::Collect { .. } => "collect",
            Self::Burn { .. } => "burn",
        }
    }

    pub fn type_hash(&self) -> Hash {
        keccak256(self.type_string().as_bytes())
    }

    /// Struct hash binding this payload to a nonce and deadline.
    pub fn struct_hash(&self, nonce: u64, deadline: Timestamp) -> Hash {
        let encoder = WordEncoder::new().word(self.type_hash());
        let encoder = match self {
            Self::SetDefaultProfile { wallet, profile_id } => {
                encoder.address(Some(*wallet)).uint(*profile_id)
            }
            Self::SetFollowModule {
                profile_id,
                follow_module,
                follow_module_init_data,
            } => encoder
                .uint(*profile_id)
                .address(*follow_module)
                .bytes(follow_module_init_data),
            Self::SetDispatcher {
                profile_id,
                dispatcher,
            } => encoder.uint(*profile_id).address(*dispatcher),
            Self::SetProfileImageUri {
                profile_id,
                image_uri,
            } => encoder.uint(*profile_id).string(image_uri),
            Self::SetFollowNftUri {
                profile_id,
                follow_nft_uri,
            } => encoder.uint(*profile_id).string(follow_nft_uri),
            Self::Post {
                profile_id,
                content_uri,
                collect_module,
                collect_module_init_data,
                reference_module,
                reference_module_init_data,
            } => encoder
                .uint(*profile_id)
                .string(content_uri)
                .address(*collect_module)
                .bytes(collect_module_init_data)
                .address(*reference_module)
                .bytes(reference_module_init_data),
            Self::Comment {
                profile_id,
                content_uri,
                profile_id_pointed,
                pub_id_pointed,
                reference_module_data,
                collect_module,
                collect_module_init_data,
                reference_module,
                reference_module_init_data,
            } => encoder
                .uint(*profile_id)
                .string(content_uri)
                .uint(*profile_id_pointed)
                .uint(*pub_id_pointed)
                .bytes(reference_module_data)
                .address(*collect_module)
                .bytes(collect_module_init_data)
                .address(*reference_module)
                .bytes(reference_module_init_data),
            Self::Mirror {
                profile_id,
                profile_id_pointed,
                pub_id_pointed,
                reference_module_data,
                reference_module,
                reference_module_init_data,
            } => encoder
                .uint(*profile_id)
                .uint(*profile_id_pointed)
                .uint(*pub_id_pointed)
                .bytes(reference_module_data)
                .address(*reference_module)
                .bytes(reference_module_init_data),
            Self::Follow { profile_ids, datas } => {
                encoder.uint_array(profile_ids).bytes_array(datas)
            }
            Self::Collect {
                profile_id,
                pub_id,
                data,
            } => encoder.uint(*profile_id).uint(*pub_id).bytes(data),
            Self::Burn { token_id } => encoder.uint(*token_id),
        };
        encoder.uint(nonce).uint(deadline).finish()
    }
}

/// Builds a sequence of 32-byte words and hashes it.
#[derive(Debug, Default)]
struct WordEncoder {
    buf: Vec<u8>,
}

impl WordEncoder {
    fn new() -> Self {
        Self::default()
    }

    fn word(mut self, word: [u8; 32]) -> Self {
        self.buf.extend_from_slice(&word);
        self
    }

    fn uint(self, value: u64) -> Self {
        self.word(uint_word(value))
    }

    fn address(self, address: Option<Address>) -> Self {
        let mut word = [0u8; 32];
        if let Some(address) = address {
            word[12..].copy_from_slice(address.as_bytes());
        }
        self.word(word)
    }

    fn string(self, value: &str) -> Self {
        self.word(keccak256(value.as_bytes()))
    }

    fn bytes(self, value: &[u8]) -> Self {
        self.word(keccak256(value))
    }

    fn uint_array(self, values: &[u64]) -> Self {
        let packed: Vec<u8> = values.iter().flat_map(|v| uint_word(*v)).collect();
        self.word(keccak256(&packed))
    }

    fn bytes_array(self, values: &[Vec<u8>]) -> Self {
        let packed: Vec<u8> = values.iter().flat_map(|v| keccak256(v)).collect();
        self.word(keccak256(&packed))
    }

    fn finish(self) -> Hash {
        keccak256(&self.buf)
    }
}

fn uint_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    U256::from(value).to_big_endian(&mut word);
    word
}
