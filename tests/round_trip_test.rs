use cid_hex_codec::{
    base32, base58, cid_to_hex, hex_to_cid, ContentId, LegacyMultihash, Result, Sha256Digest,
};
use sha2::{Digest, Sha256};

/// Deterministic pseudo-random bytes: a sha2-256 chain seeded by `seed`
fn sample_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut block = Sha256::digest(seed.to_be_bytes());
    while out.len() < len {
        let take = (len - out.len()).min(block.len());
        out.extend_from_slice(&block[..take]);
        block = Sha256::digest(block);
    }
    out
}

#[test]
fn test_base32_round_trip_lengths_0_to_100() -> Result<()> {
    for len in 0..=100 {
        for seed in 0..4 {
            let bytes = sample_bytes(len, seed);
            let encoded = base32::encode(&bytes);
            assert_eq!(base32::decode(&encoded)?, bytes, "length {}", len);
        }
    }
    Ok(())
}

#[test]
fn test_base58_round_trip_lengths_0_to_100() -> Result<()> {
    for len in 0..=100 {
        for seed in 0..4 {
            let bytes = sample_bytes(len, seed);
            let encoded = base58::encode(&bytes);
            assert_eq!(base58::decode(&encoded)?, bytes, "length {}", len);
        }
    }
    Ok(())
}

#[test]
fn test_base58_round_trip_with_leading_zeros() -> Result<()> {
    for zeros in 1..=5 {
        for len in 0..=95 {
            let mut bytes = vec![0u8; zeros];
            bytes.extend(sample_bytes(len, len as u64));

            let encoded = base58::encode(&bytes);
            let expected_ones = bytes.iter().take_while(|&&b| b == 0).count();
            assert!(encoded.starts_with(&"1".repeat(expected_ones)));
            assert_eq!(base58::decode(&encoded)?, bytes);
        }
    }
    Ok(())
}

#[test]
fn test_cid_round_trip_both_directions() -> Result<()> {
    for seed in 0..200 {
        let digest = sample_bytes(32, seed);
        let hex = hex::encode(&digest);

        let cid = hex_to_cid(&hex)?;
        assert_eq!(cid_to_hex(&cid)?, hex.to_uppercase());
        assert_eq!(hex_to_cid(&cid_to_hex(&cid)?)?, cid);
    }
    Ok(())
}

#[test]
fn test_content_id_round_trips() -> Result<()> {
    for seed in 0..50 {
        let content = sample_bytes(seed as usize * 7, seed);
        let id = ContentId::for_content(&content);

        assert_eq!(id.to_string().parse::<ContentId>()?, id);
        assert_eq!(ContentId::try_from(&id.to_bytes()[..])?, id);
        assert_eq!(ContentId::parse_base58btc(&id.to_base58btc())?, id);
        assert_eq!(*id.digest(), Sha256Digest::of_content(&content));
    }
    Ok(())
}

#[test]
fn test_legacy_multihash_round_trips() -> Result<()> {
    for seed in 0..50 {
        let digest = Sha256Digest::from_slice(&sample_bytes(32, seed))?;
        let mh = LegacyMultihash::from_digest(digest);

        let v0 = mh.to_cid_v0()?;
        assert!(v0.starts_with("Qm"));
        assert_eq!(v0.len(), 46);
        assert_eq!(LegacyMultihash::from_cid(&v0)?, mh);
        assert_eq!(LegacyMultihash::from_cid(&mh.to_cid_v1()?)?, mh);
        assert_eq!(LegacyMultihash::from_json(&mh.to_json()?)?, mh);
    }
    Ok(())
}
