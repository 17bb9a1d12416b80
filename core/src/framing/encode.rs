//! Frame encoding into canonical wire format.

use byteorder::{BigEndian, ByteOrder};

use crate::framing::types::{FrameError, FrameHeader};

/// Encode a frame header into its fixed 32-byte form.
#[inline]
pub fn encode_frame_header(header: &FrameHeader) -> [u8; FrameHeader::LEN] {
    let mut out = [0u8; FrameHeader::LEN];
    out[0..12].copy_from_slice(&header.nonce);
    BigEndian::write_u32(&mut out[12..16], header.plaintext_len);
    out[16..32].copy_from_slice(&header.tag);
    out
}

/// Encode a whole frame (header + ciphertext) into one buffer.
///
/// The streaming writer avoids this allocation and writes the two
/// parts separately; this form exists for tests and in-memory use.
pub fn encode_frame(header: &FrameHeader, ciphertext: &[u8]) -> Result<Vec<u8>, FrameError> {
    if ciphertext.len() != header.plaintext_len as usize {
        return Err(FrameError::LengthMismatch {
            expected: header.plaintext_len as usize,
            actual: ciphertext.len(),
        });
    }

    let mut out = Vec::with_capacity(header.frame_len());
    out.extend_from_slice(&encode_frame_header(header));
    out.extend_from_slice(ciphertext);

    debug_assert_eq!(out.len(), header.frame_len());
    Ok(out)
}
