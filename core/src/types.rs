use std::io;

use crate::crypto::{CryptoError, KeyError};
use crate::framing::FrameError;
use crate::vcf::ParseError;

/// Unified stream error covering I/O, parse, frame, crypto, and
/// configuration failures.
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - Any failure aborts the run; there are no retries. The output file
///   is left as a valid prefix of complete frames.
#[derive(Debug)]
pub enum StreamError {
    /// I/O error (input unreadable, output unwritable, disk full).
    Io(io::Error),

    /// Malformed input line from the variant text parser.
    Parse(ParseError),

    /// Frame-level error (truncated or malformed frame on read-back).
    Frame(FrameError),

    /// Cryptographic error (key/nonce precondition, tag mismatch).
    Crypto(CryptoError),

    /// Key configuration error, detected before any I/O.
    Key(KeyError),

    /// Generic high-level validation with a descriptive message.
    Validation(String),
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "I/O error: {}", e),
            StreamError::Parse(e) => write!(f, "parse error: {}", e),
            StreamError::Frame(e) => write!(f, "frame error: {}", e),
            StreamError::Crypto(e) => write!(f, "crypto error: {}", e),
            StreamError::Key(e) => write!(f, "key error: {}", e),
            StreamError::Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Parse(e) => Some(e),
            StreamError::Frame(e) => Some(e),
            StreamError::Crypto(e) => Some(e),
            StreamError::Key(e) => Some(e),
            StreamError::Validation(_) => None,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<ParseError> for StreamError {
    fn from(e: ParseError) -> Self {
        StreamError::Parse(e)
    }
}

impl From<FrameError> for StreamError {
    fn from(e: FrameError) -> Self {
        StreamError::Frame(e)
    }
}

impl From<CryptoError> for StreamError {
    fn from(e: CryptoError) -> Self {
        StreamError::Crypto(e)
    }
}

impl From<KeyError> for StreamError {
    fn from(e: KeyError) -> Self {
        StreamError::Key(e)
    }
}
