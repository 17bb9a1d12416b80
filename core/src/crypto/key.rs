//! Key parsing and the explicitly-opt-in test key.
//!
//! The key is threaded through the pipeline configuration as a plain
//! value; there is no process-wide key state, and no silent default.

use std::fmt;

use crate::crypto::types::KEY_LEN_16;

/// Static key for test and demo use only.
///
/// Never used unless the caller opts in explicitly (`--insecure-test-key`
/// in the CLI). Anything sealed under this key must be considered
/// public.
pub const INSECURE_TEST_KEY: [u8; KEY_LEN_16] = [
    0x4c, 0x86, 0xaa, 0xf6, 0xaf, 0xc9, 0x5e, 0x87, 0xa6, 0x85, 0x18, 0xdf, 0x8a, 0xe7, 0x58,
    0x29,
];

#[derive(Debug)]
pub enum KeyError {
    /// Key string is not exactly 32 hex characters.
    InvalidLength { expected_chars: usize, actual_chars: usize },

    /// Key string contains non-hexadecimal characters.
    InvalidHex(hex::FromHexError),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::InvalidLength { expected_chars, actual_chars } => write!(
                f,
                "key must be exactly {} hex characters, got {}",
                expected_chars, actual_chars
            ),
            KeyError::InvalidHex(e) => write!(f, "key is not valid hex: {}", e),
        }
    }
}

impl std::error::Error for KeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeyError::InvalidHex(e) => Some(e),
            _ => None,
        }
    }
}

/// Parse a 32-hex-character string into a 16-byte AES-128 key.
///
/// Fails fast on wrong length or non-hex input; never truncates or
/// pads.
pub fn parse_hex_key(s: &str) -> Result<[u8; KEY_LEN_16], KeyError> {
    if s.len() != KEY_LEN_16 * 2 {
        return Err(KeyError::InvalidLength {
            expected_chars: KEY_LEN_16 * 2,
            actual_chars: s.len(),
        });
    }
    let bytes = hex::decode(s).map_err(KeyError::InvalidHex)?;
    let mut key = [0u8; KEY_LEN_16];
    key.copy_from_slice(&bytes);
    Ok(key)
}
