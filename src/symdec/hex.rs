//! Hex codec for the string-level API: case-insensitive decode, lowercase encode.

use crate::symdec::error::{Error, Result};

/// Decodes `s` into bytes. `field` names the argument in the error.
///
/// Odd length or any character outside `[0-9a-fA-F]` is an [`Error::InvalidHex`].
pub fn decode_hex(field: &'static str, s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|source| Error::InvalidHex { field, source })
}

/// Encodes bytes as lowercase hex, two characters per byte.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
