//! Fixed-length hex payload parsing for command-line arguments.

use crate::error::{FrameError, Result};

/// Parse a string of exactly `digits` hex digits into `digits / 2` bytes.
///
/// The whole string must be hex digits: shorter input, longer input, or any
/// non-hex character is rejected. Case is ignored.
pub fn parse_fixed_hex(input: &str, digits: usize) -> Result<Vec<u8>> {
    debug_assert!(digits % 2 == 0, "hex payloads decode to whole bytes");

    let bytes = input.as_bytes();
    if bytes.len() != digits || !bytes.iter().all(u8::is_ascii_hexdigit) {
        return Err(FrameError::InvalidHex {
            input: input.to_string(),
            expected: digits,
        });
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| (hex_digit(pair[0]) << 4) | hex_digit(pair[1]))
        .collect())
}

/// Parse the 6-hex-digit arguments used for mode bytes and autolock keys.
pub fn parse_payload3(input: &str) -> Result<[u8; 3]> {
    let bytes = parse_fixed_hex(input, 6)?;
    Ok([bytes[0], bytes[1], bytes[2]])
}

fn hex_digit(ascii: u8) -> u8 {
    match ascii {
        b'0'..=b'9' => ascii - b'0',
        b'a'..=b'f' => ascii - b'a' + 10,
        _ => ascii - b'A' + 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::hex_str;

    #[test]
    fn roundtrip_upper_and_lower_case() {
        for input in ["FF0101", "ff0101", "AaBbCc", "000000", "123456"] {
            let bytes = parse_fixed_hex(input, 6).unwrap();
            assert_eq!(hex_str(&bytes), input.to_uppercase());
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_fixed_hex("", 6).is_err());
        assert!(parse_fixed_hex("FF01", 6).is_err());
        assert!(parse_fixed_hex("FF01010", 6).is_err());
        assert!(parse_fixed_hex("FF010101", 6).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(parse_fixed_hex("FF01G1", 6).is_err());
        assert!(parse_fixed_hex("FF 101", 6).is_err());
        assert!(parse_fixed_hex("FF01é1", 6).is_err());
    }

    #[test]
    fn rejects_trailing_characters() {
        // Exactly n digits then end of string; a valid prefix is not enough.
        assert!(parse_fixed_hex("FF0101 ", 6).is_err());
        assert!(parse_fixed_hex("FF0101\n", 6).is_err());
    }

    #[test]
    fn error_carries_input_and_expected_count() {
        match parse_fixed_hex("nope", 6).unwrap_err() {
            FrameError::InvalidHex { input, expected } => {
                assert_eq!(input, "nope");
                assert_eq!(expected, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn payload3_decodes_pairs() {
        assert_eq!(parse_payload3("AABBCC").unwrap(), [0xAA, 0xBB, 0xCC]);
        assert_eq!(parse_payload3("FF0101").unwrap(), [0xFF, 0x01, 0x01]);
    }
}
