//! CIDv1 for raw content hashed with sha2-256, rendered in lowercase base32.
//!
//! The binary form is always 36 bytes:
//!
//! | offset | length | meaning                |
//! |--------|--------|------------------------|
//! | 0      | 1      | version (`1`)          |
//! | 1      | 1      | multicodec (`0x55`)    |
//! | 2      | 1      | multihash fn (`0x12`)  |
//! | 3      | 1      | digest length (`0x20`) |
//! | 4      | 32     | digest                 |
//!
//! The string form is the multibase prefix `b` followed by the base32
//! encoding of the binary form. Only this one profile is supported; anything
//! else is rejected rather than decoded on a best-effort basis.

use crate::base32;
use crate::base58;
use crate::error::{CodecError, Result};
use crate::types::{
    CodecConfig, Sha256Digest, CID_HEADER_LENGTH, CID_LENGTH, CID_VERSION, DIGEST_LENGTH,
    MULTIBASE_BASE32, MULTIBASE_BASE58BTC, RAW_CODEC, SHA2_256,
};
use ::cid::{Cid, Version};
use multihash::Multihash;
use std::fmt;
use std::str::FromStr;

/// Convert a hex sha2-256 digest into a CIDv1 string
pub fn hex_to_cid(hex_digest: &str) -> Result<String> {
    hex_to_cid_with_config(hex_digest, &CodecConfig::default())
}

/// Convert a hex sha2-256 digest into a CIDv1 string with custom configuration
pub fn hex_to_cid_with_config(hex_digest: &str, config: &CodecConfig) -> Result<String> {
    let digest = Sha256Digest::from_hex_with_config(hex_digest, config)?;
    let cid = ContentId::from_digest(digest).to_string();
    tracing::trace!(%cid, "encoded digest as CID");
    Ok(cid)
}

/// Extract the hex digest (uppercase) from a CIDv1 string
pub fn cid_to_hex(cid: &str) -> Result<String> {
    cid_to_hex_with_config(cid, &CodecConfig::default())
}

/// Extract the hex digest from a CIDv1 string with custom configuration
pub fn cid_to_hex_with_config(cid: &str, config: &CodecConfig) -> Result<String> {
    let content_id = ContentId::parse(cid)?;
    Ok(content_id.digest().to_hex(config.hex_case))
}

/// A content identifier in the fixed v1 / raw / sha2-256 profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId {
    digest: Sha256Digest,
}

impl ContentId {
    pub fn from_digest(digest: Sha256Digest) -> Self {
        Self { digest }
    }

    /// The CID a content-addressed store assigns to `data` stored as raw bytes
    pub fn for_content(data: impl AsRef<[u8]>) -> Self {
        Self::from_digest(Sha256Digest::of_content(data))
    }

    pub fn digest(&self) -> &Sha256Digest {
        &self.digest
    }

    /// Binary form: 4 header bytes followed by the digest
    pub fn to_bytes(&self) -> [u8; CID_LENGTH] {
        let mut bytes = [0u8; CID_LENGTH];
        bytes[0] = CID_VERSION;
        bytes[1] = RAW_CODEC;
        bytes[2] = SHA2_256;
        bytes[3] = DIGEST_LENGTH as u8;
        bytes[CID_HEADER_LENGTH..].copy_from_slice(self.digest.as_bytes());
        bytes
    }

    /// Validate and unpack the binary form
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < CID_HEADER_LENGTH {
            return Err(CodecError::Truncated { len: bytes.len() });
        }
        if bytes[0] != CID_VERSION {
            return Err(CodecError::UnsupportedVersion(bytes[0]));
        }
        if bytes[1] != RAW_CODEC {
            return Err(CodecError::UnsupportedCodec(bytes[1]));
        }
        if bytes[2] != SHA2_256 {
            return Err(CodecError::UnsupportedHashFunction(bytes[2]));
        }
        if bytes[3] as usize != DIGEST_LENGTH {
            return Err(CodecError::InvalidDigestLength {
                expected: DIGEST_LENGTH,
                got: bytes[3] as usize,
            });
        }
        if bytes.len() != CID_LENGTH {
            return Err(CodecError::InvalidDigestLength {
                expected: DIGEST_LENGTH,
                got: bytes.len() - CID_HEADER_LENGTH,
            });
        }

        let digest = Sha256Digest::from_slice(&bytes[CID_HEADER_LENGTH..])?;
        Ok(Self { digest })
    }

    /// Parse the `b`-prefixed base32 string form.
    ///
    /// The body must be the canonical encoding of the binary form: exactly 58
    /// characters with the 2 trailing pad bits zero. Either case is accepted.
    pub fn parse(s: &str) -> Result<Self> {
        let encoded = s.strip_prefix(MULTIBASE_BASE32).ok_or_else(|| {
            tracing::debug!(cid = s, "rejecting CID with unsupported multibase prefix");
            CodecError::UnsupportedMultibase(s.chars().next())
        })?;

        let bytes = base32::decode(encoded)?;
        let id = Self::from_bytes(&bytes).inspect_err(|e| {
            tracing::debug!(cid = s, error = %e, "rejecting malformed CID");
        })?;

        if !base32::encode(&bytes).eq_ignore_ascii_case(encoded) {
            tracing::debug!(cid = s, "rejecting non-canonical CID encoding");
            return Err(CodecError::InvalidCid(format!(
                "non-canonical base32 encoding: {}",
                s
            )));
        }

        Ok(id)
    }

    /// Parse the `z`-prefixed base58btc string form
    pub fn parse_base58btc(s: &str) -> Result<Self> {
        let encoded = s
            .strip_prefix(MULTIBASE_BASE58BTC)
            .ok_or_else(|| CodecError::UnsupportedMultibase(s.chars().next()))?;
        Self::from_bytes(&base58::decode(encoded)?)
    }

    /// Render with the base58btc multibase prefix (`z...`)
    pub fn to_base58btc(&self) -> String {
        format!("{}{}", MULTIBASE_BASE58BTC, base58::encode(&self.to_bytes()))
    }

    /// Convert into a [`cid::Cid`] for use with the wider IPFS ecosystem
    pub fn to_cid(&self) -> Result<Cid> {
        let mh = Multihash::<64>::wrap(SHA2_256 as u64, self.digest.as_bytes())
            .map_err(|e| CodecError::InvalidCid(e.to_string()))?;
        Ok(Cid::new_v1(RAW_CODEC as u64, mh))
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", MULTIBASE_BASE32, base32::encode(&self.to_bytes()))
    }
}

impl FromStr for ContentId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for ContentId {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&Cid> for ContentId {
    type Error = CodecError;

    fn try_from(cid: &Cid) -> Result<Self> {
        if cid.version() != Version::V1 {
            return Err(CodecError::UnsupportedVersion(0));
        }
        if cid.codec() != RAW_CODEC as u64 {
            return Err(match u8::try_from(cid.codec()) {
                Ok(code) => CodecError::UnsupportedCodec(code),
                Err(_) => {
                    CodecError::InvalidCid(format!("unsupported codec 0x{:x}", cid.codec()))
                }
            });
        }
        let hash = cid.hash();
        if hash.code() != SHA2_256 as u64 {
            return Err(match u8::try_from(hash.code()) {
                Ok(code) => CodecError::UnsupportedHashFunction(code),
                Err(_) => CodecError::InvalidCid(format!(
                    "unsupported hash function 0x{:x}",
                    hash.code()
                )),
            });
        }

        Ok(Self::from_digest(Sha256Digest::from_slice(hash.digest())?))
    }
}
