use std::fmt;
use thiserror::Error;

/// Text encoding an [`CodecError::InvalidCharacter`] was raised by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base32,
    Base58,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Base32 => write!(f, "base32"),
            Encoding::Base58 => write!(f, "base58"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid {encoding} character {character:?} at position {position}")]
    InvalidCharacter {
        encoding: Encoding,
        character: char,
        position: usize,
    },

    #[error("Invalid hex digest: {0}")]
    InvalidHex(String),

    #[error("Invalid digest length: expected {expected} bytes, got {got}")]
    InvalidDigestLength { expected: usize, got: usize },

    #[error("Invalid CID: too short ({len} bytes)")]
    Truncated { len: usize },

    #[error("Unsupported multibase prefix: {0:?}")]
    UnsupportedMultibase(Option<char>),

    #[error("Unsupported CID version: {0}")]
    UnsupportedVersion(u8),

    #[error("Unsupported codec: 0x{0:02x}")]
    UnsupportedCodec(u8),

    #[error("Unsupported hash function: 0x{0:02x}")]
    UnsupportedHashFunction(u8),

    #[error("Multihash record is empty")]
    EmptyRecord,

    #[error("Invalid CID: {0}")]
    InvalidCid(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
