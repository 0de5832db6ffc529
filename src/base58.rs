//! Base58 with the Bitcoin alphabet.
//!
//! 58 is not a power of two, so the conversion treats the input as one big
//! unsigned integer and re-expresses it digit by digit in the target base.
//! Leading zero bytes carry no numeric weight and are mapped one-to-one onto
//! leading `1` characters (and back).

use crate::error::{CodecError, Encoding, Result};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u32 = 58;

const INVALID: u8 = 0xff;

static LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encode bytes as base58
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // log(256) / log(58) ~= 1.37
    let size = (bytes.len() - zeros) * 138 / 100 + 1;
    let mut digits = vec![0u8; size];
    let mut length = 0;

    for &byte in &bytes[zeros..] {
        // digits = digits * 256 + byte
        let mut carry = byte as u32;
        let mut i = 0;
        for digit in digits.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 256 * *digit as u32;
            *digit = (carry % BASE) as u8;
            carry /= BASE;
            i += 1;
        }
        length = i;
    }

    let significant = digits[size - length..]
        .iter()
        .skip_while(|&&d| d == 0)
        .map(|&d| ALPHABET[d as usize] as char);

    std::iter::repeat(ALPHABET[0] as char)
        .take(zeros)
        .chain(significant)
        .collect()
}

/// Decode a base58 string
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let leading = ALPHABET[0] as char;
    let zeros = input.chars().take_while(|&c| c == leading).count();
    let rest = input.chars().count() - zeros;

    // log(58) / log(256) ~= 0.733
    let size = rest * 733 / 1000 + 1;
    let mut bytes = vec![0u8; size];
    let mut length = 0;

    for (position, c) in input.chars().enumerate().skip(zeros) {
        let value = lookup(c).ok_or(CodecError::InvalidCharacter {
            encoding: Encoding::Base58,
            character: c,
            position,
        })?;

        // bytes = bytes * 58 + value
        let mut carry = value as u32;
        let mut i = 0;
        for byte in bytes.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += BASE * *byte as u32;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
            i += 1;
        }
        length = i;
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes[size - length..].iter().skip_while(|&&b| b == 0));
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
