//! On-disk frame format types.
//!
//! A frame is the encrypted, authenticated image of exactly one block:
//!
//! ```text
//! [ nonce         (12) ]
//! [ plaintext_len  (4) ]   big-endian
//! [ tag           (16) ]
//! [ ciphertext     (N) ]   N = plaintext_len
//! ```
//!
//! Total frame size = 32 + plaintext_len. The file is a bare
//! concatenation of frames, no file-level header or count; readers walk
//! frames sequentially until EOF. Frames are independent: each one
//! decrypts on its own, so a truncated file exposes a valid prefix.

use std::fmt;

use crate::crypto::types::{NONCE_LEN_12, TAG_LEN};

/// Canonical frame header (fixed size).
///
/// Nonce and plaintext length are separate named fields rather than one
/// shared header buffer; the two regions serve independent purposes and
/// must never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Per-frame random nonce. Never repeats under one key.
    pub nonce: [u8; NONCE_LEN_12],
    /// Plaintext byte count of this frame's block. Equals the
    /// ciphertext length; the last frame may be shorter than a full
    /// block, including zero for an empty input.
    pub plaintext_len: u32,
    /// Detached AEAD tag over ciphertext, nonce, and key.
    pub tag: [u8; TAG_LEN],
}

impl FrameHeader {
    pub const LEN: usize = NONCE_LEN_12 // nonce
        + 4                             // plaintext_len
        + TAG_LEN;                      // tag

    /// Total on-disk size of the frame this header describes.
    #[inline]
    pub fn frame_len(&self) -> usize {
        Self::LEN + self.plaintext_len as usize
    }
}

/// Borrowed view of one decoded frame; zero-copy over the input buffer.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub header: FrameHeader,
    pub ciphertext: &'a [u8],
}

/// Owned frame as returned by the streaming reader.
#[derive(Debug, Clone)]
pub struct OwnedFrame {
    pub header: FrameHeader,
    pub ciphertext: Vec<u8>,
}

#[derive(Debug)]
pub enum FrameError {
    /// Input ended inside a header or ciphertext body.
    Truncated,

    /// Declared and actual lengths disagree.
    LengthMismatch { expected: usize, actual: usize },

    /// Declared plaintext length exceeds the read-path sanity bound.
    Oversized { len: usize, max: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Truncated => write!(f, "truncated frame"),
            FrameError::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {}, got {}", expected, actual)
            }
            FrameError::Oversized { len, max } => {
                write!(f, "frame plaintext length {} exceeds bound {}", len, max)
            }
        }
    }
}

impl std::error::Error for FrameError {}
