//! RFC4648 base32 with the lowercase alphabet and no padding, as used by CIDv1.
//!
//! Encoding reads bytes most significant bit first and emits one character per
//! 5 bits. A trailing group of 1-4 bits is shifted left to fill a whole
//! character, so `encode` produces `ceil(bits / 5)` characters and never emits
//! `=`. Decoding is case-insensitive and keeps only whole bytes, producing
//! `floor(chars * 5 / 8)` bytes.

use crate::error::{CodecError, Encoding, Result};

const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

const INVALID: u8 = 0xff;

/// Character -> value table, upper- and lowercase letters map to the same value
static LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        table[c as usize] = i as u8;
        table[c.to_ascii_uppercase() as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encode bytes as unpadded lowercase base32
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u32;
        bits += 8;

        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }

    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }

    out
}

/// Decode an unpadded base32 string, accepting either case
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits: u32 = 0;

    for (position, c) in input.chars().enumerate() {
        let value = lookup(c).ok_or(CodecError::InvalidCharacter {
            encoding: Encoding::Base32,
            character: c,
            position,
        })?;

        buffer = (buffer << 5) | value as u32;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }

    Ok(out)
}

fn lookup(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match LOOKUP[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}
