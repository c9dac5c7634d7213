//! Conversions between hexadecimal digits and bytes.

use tartan_bitfield::bitfield;
use thiserror::Error;

/// A character that is not a hexadecimal digit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid hexadecimal digit '{}'.", .0.escape_ascii())]
pub struct InvalidDigit(pub u8);

/// Decode a single hexadecimal digit, in either case, into its value.
pub fn decode_digit(c: u8) -> Result<u8, InvalidDigit> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(InvalidDigit(c)),
    }
}

/// Decode a pair of hexadecimal digits, most significant first, into a byte.
pub fn decode_byte([high, low]: [u8; 2]) -> Result<u8, InvalidDigit> {
    Ok((decode_digit(high)? << 4) | decode_digit(low)?)
}

/// Encode a byte as a pair of lowercase hexadecimal digits.
pub fn encode_byte(b: u8) -> [u8; 2] {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    bitfield! {
        struct Nibbles(u8) {
            [0..4] low: u8,
            [4..8] high: u8,
        }
    }

    let nibbles = Nibbles(b);

    [
        DIGITS[nibbles.high() as usize],
        DIGITS[nibbles.low() as usize],
    ]
}
