use cid_hex_codec::{
    base32, base58, cid_to_hex, hex_to_cid, parse_cid_v0, CodecError, ContentId, Encoding,
    LegacyMultihash, Result,
};

/// `b` + base32 of a 36-byte buffer with the given header
fn cid_with_header(header: [u8; 4]) -> String {
    let mut bytes = header.to_vec();
    bytes.extend([0xab; 32]);
    format!("b{}", base32::encode(&bytes))
}

#[test]
fn test_empty_inputs() -> Result<()> {
    assert_eq!(base32::encode(&[]), "");
    assert_eq!(base58::encode(&[]), "");
    assert!(base32::decode("")?.is_empty());
    assert!(base58::decode("")?.is_empty());
    Ok(())
}

#[test]
fn test_alphabet_rejection() {
    assert_eq!(
        base32::decode("abc!"),
        Err(CodecError::InvalidCharacter {
            encoding: Encoding::Base32,
            character: '!',
            position: 3,
        })
    );
    assert_eq!(
        base58::decode("abc!"),
        Err(CodecError::InvalidCharacter {
            encoding: Encoding::Base58,
            character: '!',
            position: 3,
        })
    );
}

#[test]
fn test_wrong_version_rejected() {
    assert_eq!(
        cid_to_hex(&cid_with_header([0x02, 0x55, 0x12, 0x20])),
        Err(CodecError::UnsupportedVersion(2))
    );
    assert_eq!(
        cid_to_hex("bajkreiaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        Err(CodecError::UnsupportedVersion(2))
    );
}

#[test]
fn test_wrong_codec_rejected() {
    // dag-pb
    assert_eq!(
        cid_to_hex("bafybeiaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        Err(CodecError::UnsupportedCodec(0x70))
    );
    // dag-cbor
    assert_eq!(
        cid_to_hex(&cid_with_header([0x01, 0x71, 0x12, 0x20])),
        Err(CodecError::UnsupportedCodec(0x71))
    );
}

#[test]
fn test_wrong_hash_function_rejected() {
    assert_eq!(
        cid_to_hex("bafkrgiaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        Err(CodecError::UnsupportedHashFunction(0x13))
    );
    // blake3
    assert_eq!(
        cid_to_hex(&cid_with_header([0x01, 0x55, 0x1e, 0x20])),
        Err(CodecError::UnsupportedHashFunction(0x1e))
    );
}

#[test]
fn test_wrong_digest_length_rejected() {
    // Declared length is reported, not the buffer length
    assert_eq!(
        cid_to_hex(&cid_with_header([0x01, 0x55, 0x12, 0x14])),
        Err(CodecError::InvalidDigestLength {
            expected: 32,
            got: 20
        })
    );

    // Header claims 32 bytes but the body is one byte short
    let mut bytes = vec![0x01, 0x55, 0x12, 0x20];
    bytes.extend([0x11; 31]);
    assert_eq!(
        cid_to_hex(&format!("b{}", base32::encode(&bytes))),
        Err(CodecError::InvalidDigestLength {
            expected: 32,
            got: 31
        })
    );
}

#[test]
fn test_too_short_rejected() {
    assert_eq!(cid_to_hex("b"), Err(CodecError::Truncated { len: 0 }));
    assert_eq!(cid_to_hex("bafkr"), Err(CodecError::Truncated { len: 2 }));
}

#[test]
fn test_unsupported_multibase() {
    assert_eq!(
        cid_to_hex("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"),
        Err(CodecError::UnsupportedMultibase(Some('Q')))
    );
    assert_eq!(
        cid_to_hex("zb2rhe5P4gXftAwvA4eXQ5HJwsER2owDyS9sKaQRRVQPn93bA"),
        Err(CodecError::UnsupportedMultibase(Some('z')))
    );
    assert_eq!(cid_to_hex(""), Err(CodecError::UnsupportedMultibase(None)));
}

#[test]
fn test_non_canonical_cid_rejected() -> Result<()> {
    let cid = hex_to_cid("E8E2C917BD0E93EF803AD03CADD32142BF3B8119F46B7BA567E9CF203B68DA9E")?;

    assert!(matches!(
        cid_to_hex(&format!("{}a", cid)),
        Err(CodecError::InvalidCid(_))
    ));
    assert!(matches!(
        cid_to_hex(&format!("{}z", &cid[..cid.len() - 1])),
        Err(CodecError::InvalidCid(_))
    ));
    // Two extra characters push the buffer to 37 bytes
    assert!(matches!(
        cid_to_hex(&format!("{}aa", cid)),
        Err(CodecError::InvalidDigestLength { got: 33, .. })
    ));

    Ok(())
}

#[test]
fn test_invalid_characters_in_cid() {
    assert!(matches!(
        cid_to_hex("bafkrei0000"),
        Err(CodecError::InvalidCharacter {
            encoding: Encoding::Base32,
            character: '0',
            ..
        })
    ));
}

#[test]
fn test_bad_hex_never_produces_a_cid() {
    assert!(matches!(
        hex_to_cid("0x"),
        Err(CodecError::InvalidDigestLength { got: 0, .. })
    ));
    assert!(matches!(
        hex_to_cid(&"g".repeat(64)),
        Err(CodecError::InvalidHex(_))
    ));
    assert!(matches!(
        hex_to_cid(&"ab".repeat(33)),
        Err(CodecError::InvalidDigestLength { got: 33, .. })
    ));
    assert!(matches!(
        hex_to_cid(&"ab".repeat(31)),
        Err(CodecError::InvalidDigestLength { got: 31, .. })
    ));
}

#[test]
fn test_cid_v0_validation() {
    // sha2-512 code in front of a 32-byte body
    let mut bytes = vec![0x13, 0x20];
    bytes.extend([0x42; 32]);
    assert_eq!(
        parse_cid_v0(&base58::encode(&bytes)),
        Err(CodecError::UnsupportedHashFunction(0x13))
    );

    let mut bytes = vec![0x12, 0x14];
    bytes.extend([0x42; 32]);
    assert_eq!(
        parse_cid_v0(&base58::encode(&bytes)),
        Err(CodecError::InvalidDigestLength {
            expected: 32,
            got: 20
        })
    );

    let mut bytes = vec![0x12, 0x20];
    bytes.extend([0x42; 31]);
    assert!(matches!(
        parse_cid_v0(&base58::encode(&bytes)),
        Err(CodecError::InvalidDigestLength { got: 31, .. })
    ));

    assert!(matches!(
        parse_cid_v0("Qm0OIl"),
        Err(CodecError::InvalidCharacter {
            encoding: Encoding::Base58,
            character: '0',
            position: 2,
        })
    ));
}

#[test]
fn test_legacy_from_cid_rejects_unknown_encodings() {
    // Too short to be a CIDv0
    assert_eq!(
        LegacyMultihash::from_cid("Qm123"),
        Err(CodecError::UnsupportedMultibase(Some('Q')))
    );
    assert_eq!(
        LegacyMultihash::from_cid("f01551220"),
        Err(CodecError::UnsupportedMultibase(Some('f')))
    );
}

#[test]
fn test_binary_form_rejects_cid_with_trailing_bytes() {
    let mut bytes = ContentId::for_content(b"x").to_bytes().to_vec();
    bytes.push(0);
    assert!(matches!(
        ContentId::from_bytes(&bytes),
        Err(CodecError::InvalidDigestLength { got: 33, .. })
    ));
}
