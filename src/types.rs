use crate::error::{CodecError, Result};
use sha2::{Digest, Sha256};
use std::fmt;

/// CID version byte of the supported profile
pub const CID_VERSION: u8 = 1;

/// Multicodec code for raw binary content
pub const RAW_CODEC: u8 = 0x55;

/// Multihash code for sha2-256
pub const SHA2_256: u8 = 0x12;

/// Length in bytes of a sha2-256 digest
pub const DIGEST_LENGTH: usize = 32;

/// version + codec + hash function + digest length
pub const CID_HEADER_LENGTH: usize = 4;

/// Total length of the binary CID form
pub const CID_LENGTH: usize = CID_HEADER_LENGTH + DIGEST_LENGTH;

/// Multibase prefix for lowercase, unpadded base32
pub const MULTIBASE_BASE32: char = 'b';

/// Multibase prefix for base58btc
pub const MULTIBASE_BASE58BTC: char = 'z';

/// Case used when rendering hex digests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexCase {
    #[default]
    Upper,
    Lower,
}

/// Configuration for hex <-> CID conversion
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Case of the hex digest produced when decoding a CID
    pub hex_case: HexCase,

    /// Left-pad odd-length hex input with a `0` nibble instead of rejecting it
    pub pad_odd_hex: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            hex_case: HexCase::Upper,
            pad_odd_hex: true,
        }
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hex_case(mut self, hex_case: HexCase) -> Self {
        self.hex_case = hex_case;
        self
    }

    pub fn lowercase(mut self) -> Self {
        self.hex_case = HexCase::Lower;
        self
    }

    pub fn strict_hex_length(mut self) -> Self {
        self.pad_odd_hex = false;
        self
    }
}

/// A sha2-256 digest: exactly 32 raw bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Digest([u8; DIGEST_LENGTH]);

impl Sha256Digest {
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Hash `data` with sha2-256
    pub fn of_content(data: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data.as_ref());
        Self(hasher.finalize().into())
    }

    /// Copy a digest out of a slice, rejecting anything that is not 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let digest: [u8; DIGEST_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| CodecError::InvalidDigestLength {
                    expected: DIGEST_LENGTH,
                    got: bytes.len(),
                })?;
        Ok(Self(digest))
    }

    /// Parse a hex digest with the default configuration
    pub fn from_hex(hex_digest: &str) -> Result<Self> {
        Self::from_hex_with_config(hex_digest, &CodecConfig::default())
    }

    /// Parse a hex digest.
    ///
    /// An optional `0x` prefix is stripped and either case is accepted. Odd-length
    /// input is left-padded with a zero nibble unless `config.pad_odd_hex` is off.
    pub fn from_hex_with_config(hex_digest: &str, config: &CodecConfig) -> Result<Self> {
        let clean = hex_digest
            .strip_prefix("0x")
            .or_else(|| hex_digest.strip_prefix("0X"))
            .unwrap_or(hex_digest);

        let bytes = if clean.len() % 2 == 1 {
            if !config.pad_odd_hex {
                return Err(CodecError::InvalidHex(format!(
                    "odd number of digits ({})",
                    clean.len()
                )));
            }
            hex::decode(format!("0{}", clean))
        } else {
            hex::decode(clean)
        }
        .map_err(|e| CodecError::InvalidHex(e.to_string()))?;

        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self, case: HexCase) -> String {
        match case {
            HexCase::Upper => hex::encode_upper(self.0),
            HexCase::Lower => hex::encode(self.0),
        }
    }

    /// True when every byte is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl From<[u8; DIGEST_LENGTH]> for Sha256Digest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex(HexCase::Upper))
    }
}
