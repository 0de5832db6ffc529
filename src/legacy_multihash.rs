//! The `{hash, hashFunction, size}` multihash triple kept by on-chain storage.
//!
//! Newer records carry the sha2-256 digest directly and map onto a base32
//! CIDv1. Older records were written from CIDv0 (`Qm...`) strings, which are
//! the base58 encoding of the bare multihash `0x12 0x20 || digest`.
//!
//! The game client tags its records with `hashFunction: 1` and stores the
//! uploaded content's byte count in `size`, so `size` is not a digest length.

use crate::base58;
use crate::content_id::ContentId;
use crate::error::{CodecError, Result};
use crate::types::{Sha256Digest, DIGEST_LENGTH, MULTIBASE_BASE32, MULTIBASE_BASE58BTC, SHA2_256};
use serde::{Deserialize, Serialize};

/// `hashFunction` tag the game client writes for sha2-256 records
pub const CLIENT_SHA2_256_TAG: u8 = 1;

/// Length of a base58 CIDv0 string
const CID_V0_LENGTH: usize = 46;

/// Length of a binary sha2-256 multihash
const MULTIHASH_LENGTH: usize = 2 + DIGEST_LENGTH;

mod serde_prefixed_hex {
    use crate::types::{HexCase, Sha256Digest};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Sha256Digest, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", value.to_hex(HexCase::Lower)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Sha256Digest, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Sha256Digest::from_hex(&s).map_err(D::Error::custom)
    }
}

/// Multihash triple as stored by the filesystem-changes contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMultihash {
    /// Digest bytes, `0x`-prefixed hex on the wire (`bytes32`)
    #[serde(with = "serde_prefixed_hex")]
    pub hash: Sha256Digest,

    /// Multihash function code, or [`CLIENT_SHA2_256_TAG`]
    pub hash_function: u8,

    /// Digest length, or the stored content's byte count; zero means unset
    pub size: u8,
}

impl LegacyMultihash {
    /// A sha2-256 multihash for `digest`
    pub fn from_digest(digest: Sha256Digest) -> Self {
        Self {
            hash: digest,
            hash_function: SHA2_256,
            size: DIGEST_LENGTH as u8,
        }
    }

    /// Build a multihash from any CID string this crate understands.
    ///
    /// Accepts base32 CIDv1 (`b...`), base58btc CIDv1 (`z...`) and CIDv0 (`Qm...`).
    pub fn from_cid(cid: &str) -> Result<Self> {
        let digest = match cid.chars().next() {
            Some(MULTIBASE_BASE32) => *ContentId::parse(cid)?.digest(),
            Some(MULTIBASE_BASE58BTC) => *ContentId::parse_base58btc(cid)?.digest(),
            Some('Q') if cid.len() == CID_V0_LENGTH => parse_cid_v0(cid)?,
            first => {
                tracing::debug!(cid, "rejecting CID with unknown encoding");
                return Err(CodecError::UnsupportedMultibase(first));
            }
        };
        Ok(Self::from_digest(digest))
    }

    /// A record in the shape the game client writes: sha2-256 tag `1` and the
    /// content size
    pub fn for_upload(digest: Sha256Digest, size: u8) -> Self {
        Self {
            hash: digest,
            hash_function: CLIENT_SHA2_256_TAG,
            size,
        }
    }

    /// Nothing has been stored yet: zero size or an all-zero hash
    pub fn is_unset(&self) -> bool {
        self.size == 0 || self.hash.is_zero()
    }

    /// Render as a base32 CIDv1
    pub fn to_cid_v1(&self) -> Result<String> {
        Ok(self.content_id()?.to_string())
    }

    /// Render as a base58 CIDv0 (`Qm...`)
    pub fn to_cid_v0(&self) -> Result<String> {
        self.check_profile()?;

        let mut bytes = Vec::with_capacity(MULTIHASH_LENGTH);
        bytes.push(SHA2_256);
        bytes.push(DIGEST_LENGTH as u8);
        bytes.extend_from_slice(self.hash.as_bytes());
        Ok(base58::encode(&bytes))
    }

    pub fn content_id(&self) -> Result<ContentId> {
        self.check_profile()?;
        Ok(ContentId::from_digest(self.hash))
    }

    fn check_profile(&self) -> Result<()> {
        if self.hash_function != SHA2_256 && self.hash_function != CLIENT_SHA2_256_TAG {
            tracing::debug!(hash_function = self.hash_function, "rejecting multihash record");
            return Err(CodecError::UnsupportedHashFunction(self.hash_function));
        }
        if self.is_unset() {
            return Err(CodecError::EmptyRecord);
        }
        Ok(())
    }
}

impl From<ContentId> for LegacyMultihash {
    fn from(id: ContentId) -> Self {
        Self::from_digest(*id.digest())
    }
}

/// Decode a CIDv0 string into its sha2-256 digest
pub fn parse_cid_v0(cid: &str) -> Result<Sha256Digest> {
    let bytes = base58::decode(cid)?;
    if bytes.len() < 2 {
        return Err(CodecError::Truncated { len: bytes.len() });
    }
    if bytes[0] != SHA2_256 {
        return Err(CodecError::UnsupportedHashFunction(bytes[0]));
    }
    if bytes[1] as usize != DIGEST_LENGTH {
        return Err(CodecError::InvalidDigestLength {
            expected: DIGEST_LENGTH,
            got: bytes[1] as usize,
        });
    }
    if bytes.len() != MULTIHASH_LENGTH {
        return Err(CodecError::InvalidDigestLength {
            expected: DIGEST_LENGTH,
            got: bytes.len() - 2,
        });
    }
    Sha256Digest::from_slice(&bytes[2..])
}
