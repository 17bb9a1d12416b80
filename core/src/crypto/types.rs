use std::fmt;

/// AES-128 key length (bytes).
pub const KEY_LEN_16: usize = 16;

/// Standard 12-byte nonce length for AES-GCM.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// AEAD tag mismatch (authentication failure).
    TagMismatch,

    /// General cipher runtime error with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidKeyLen { expected, actual } => {
                write!(f, "invalid key length: expected={}, actual={}", expected, actual)
            }
            CryptoError::TagMismatch => write!(f, "AEAD tag mismatch"),
            CryptoError::Failure(msg) => write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
