//! Text-safe transfer encodings for binary payloads.
//!
//! The remote store is reached through a text-oriented interface, so image
//! bytes travel either as a `\x`-prefixed hex string (the form PostgreSQL
//! bytea literals and the `insert_course_image` stored function expect) or
//! as base64 (structured JSON transport).
//!
//! Both encodings are pure and must round-trip exactly: see the tests over
//! the empty payload and the full 0x00..=0xFF byte range.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Encode bytes as a `\x`-prefixed hexadecimal string.
///
/// This is the literal form the stored function converts to bytea
/// server-side, and the payload for `decode('<hex>', 'hex')` statements
/// (without the prefix).
pub fn hex_literal(data: &[u8]) -> String {
    format!("\\x{}", to_hex(data))
}

/// Encode bytes as bare lowercase hex, the argument form for
/// `decode('<hex>', 'hex')`.
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hex payload, accepting both the `\x`-prefixed and bare forms.
pub fn from_hex_literal(s: &str) -> Result<Vec<u8>> {
    let bare = s.strip_prefix("\\x").unwrap_or(s);
    hex::decode(bare).map_err(|e| Error::Serialization(format!("invalid hex payload: {e}")))
}

/// Encode bytes as standard padded base64.
pub fn to_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a standard padded base64 payload.
pub fn from_base64(s: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(s)
        .map_err(|e| Error::Serialization(format!("invalid base64 payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_byte_values() -> Vec<u8> {
        (0u8..=255).collect()
    }

    #[test]
    fn test_hex_literal_prefix() {
        assert_eq!(hex_literal(b"\x01\xab"), "\\x01ab");
    }

    #[test]
    fn test_hex_round_trip_empty() {
        assert_eq!(from_hex_literal(&hex_literal(b"")).unwrap(), b"");
    }

    #[test]
    fn test_hex_round_trip_all_byte_values() {
        let data = all_byte_values();
        assert_eq!(from_hex_literal(&hex_literal(&data)).unwrap(), data);
    }

    #[test]
    fn test_hex_decode_accepts_bare_form() {
        assert_eq!(from_hex_literal("01ab").unwrap(), vec![0x01, 0xab]);
    }

    #[test]
    fn test_hex_decode_rejects_garbage() {
        assert!(from_hex_literal("\\xzz").is_err());
        assert!(from_hex_literal("\\x0").is_err());
    }

    #[test]
    fn test_base64_round_trip_empty() {
        assert_eq!(from_base64(&to_base64(b"")).unwrap(), b"");
    }

    #[test]
    fn test_base64_round_trip_all_byte_values() {
        let data = all_byte_values();
        assert_eq!(from_base64(&to_base64(&data)).unwrap(), data);
    }

    #[test]
    fn test_base64_decode_rejects_garbage() {
        assert!(from_base64("not base64!!").is_err());
    }
}
