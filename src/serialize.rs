use crate::content_id::ContentId;
use crate::error::{CodecError, Result};
use crate::legacy_multihash::LegacyMultihash;
use crate::types::{HexCase, Sha256Digest};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Sha256Digest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex(HexCase::Upper))
    }
}

impl<'de> Deserialize<'de> for Sha256Digest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Sha256Digest::from_hex(&s).map_err(D::Error::custom)
    }
}

impl Serialize for ContentId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContentId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContentId::parse(&s).map_err(D::Error::custom)
    }
}

impl LegacyMultihash {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| CodecError::Deserialization(e.to_string()))
    }
}
