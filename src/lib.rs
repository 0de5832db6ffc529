//! # CID Hex Codec
//!
//! Converts between sha2-256 hex digests and CIDv1 strings, with the base32 and
//! base58 codecs implemented in-crate.
//!
//! ## Features
//!
//! - **Fixed CID profile**: version 1, raw codec (`0x55`), sha2-256 (`0x12`), 32-byte digest
//! - **Base32**: RFC4648 lowercase alphabet, no padding, case-insensitive decoding
//! - **Base58**: Bitcoin alphabet, leading zero bytes preserved
//! - **Legacy multihash**: `{hash, hashFunction, size}` records and CIDv0 (`Qm...`) strings
//! - **Interop**: conversion to and from [`cid::Cid`]
//!
//! ## Quick Start
//!
//! ```
//! use cid_hex_codec::{cid_to_hex, hex_to_cid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hex = "E8E2C917BD0E93EF803AD03CADD32142BF3B8119F46B7BA567E9CF203B68DA9E";
//!
//! let cid = hex_to_cid(hex)?;
//! assert_eq!(cid, "bafkreihi4lerppiospxyaowqhsw5gikcx45ycgpunn52kz7jz4qdw2g2ty");
//!
//! assert_eq!(cid_to_hex(&cid)?, hex);
//! # Ok(())
//! # }
//! ```
//!
//! ## Legacy Multihash
//!
//! ```
//! use cid_hex_codec::LegacyMultihash;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mh = LegacyMultihash::from_cid("Qme1jsAQKy1UgxCFjNAn9Hp8BFNQZuGRCrk3Zo12GiFrds")?;
//! assert_eq!(
//!     mh.to_cid_v1()?,
//!     "bafkreihi4lerppiospxyaowqhsw5gikcx45ycgpunn52kz7jz4qdw2g2ty"
//! );
//!
//! let json = mh.to_json()?;
//! assert_eq!(LegacyMultihash::from_json(&json)?, mh);
//! # Ok(())
//! # }
//! ```

pub mod base32;
pub mod base58;
pub mod content_id;
pub mod error;
pub mod legacy_multihash;
pub mod serialize;
pub mod types;

// Re-export commonly used items
pub use content_id::{
    cid_to_hex, cid_to_hex_with_config, hex_to_cid, hex_to_cid_with_config, ContentId,
};
pub use error::{CodecError, Encoding, Result};
pub use legacy_multihash::{parse_cid_v0, LegacyMultihash, CLIENT_SHA2_256_TAG};
pub use types::{
    CodecConfig, HexCase, Sha256Digest, CID_LENGTH, CID_VERSION, DIGEST_LENGTH, RAW_CODEC,
    SHA2_256,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
