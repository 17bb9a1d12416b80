//! Frame decoding: buffer-level parsing and the sequential reader used
//! by the verification path. The writer tool never reorders or buffers
//! frames, so read-back is a straight walk to EOF.

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

use crate::constants::MAX_FRAME_PLAINTEXT;
use crate::crypto::types::{NONCE_LEN_12, TAG_LEN};
use crate::framing::types::{FrameError, FrameHeader, FrameView, OwnedFrame};
use crate::types::StreamError;

/// Decode a fixed 32-byte frame header from the front of `buf`.
pub fn decode_frame_header(buf: &[u8]) -> Result<FrameHeader, FrameError> {
    if buf.len() < FrameHeader::LEN {
        return Err(FrameError::Truncated);
    }

    let mut nonce = [0u8; NONCE_LEN_12];
    nonce.copy_from_slice(&buf[0..12]);
    let plaintext_len = BigEndian::read_u32(&buf[12..16]);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&buf[16..32]);

    if plaintext_len as usize > MAX_FRAME_PLAINTEXT {
        return Err(FrameError::Oversized {
            len: plaintext_len as usize,
            max: MAX_FRAME_PLAINTEXT,
        });
    }

    Ok(FrameHeader { nonce, plaintext_len, tag })
}

/// Decode exactly one frame occupying the whole of `buf`.
pub fn decode_frame(buf: &[u8]) -> Result<FrameView<'_>, FrameError> {
    let header = decode_frame_header(buf)?;

    let expected = header.frame_len();
    if buf.len() != expected {
        return Err(FrameError::LengthMismatch { expected, actual: buf.len() });
    }

    Ok(FrameView {
        header,
        ciphertext: &buf[FrameHeader::LEN..],
    })
}

/// Read the next frame from a stream.
///
/// Returns `Ok(None)` on clean EOF (stream ends exactly on a frame
/// boundary); a stream ending mid-header or mid-ciphertext is a
/// [`FrameError::Truncated`].
pub fn read_frame<R: Read>(r: &mut R) -> Result<Option<OwnedFrame>, StreamError> {
    let mut hdr_buf = [0u8; FrameHeader::LEN];
    match read_full(r, &mut hdr_buf)? {
        0 => return Ok(None),
        n if n < FrameHeader::LEN => return Err(FrameError::Truncated.into()),
        _ => {}
    }

    let header = decode_frame_header(&hdr_buf)?;

    let mut ciphertext = vec![0u8; header.plaintext_len as usize];
    let got = read_full(r, &mut ciphertext)?;
    if got < ciphertext.len() {
        return Err(FrameError::Truncated.into());
    }

    Ok(Some(OwnedFrame { header, ciphertext }))
}

/// Fill `buf` as far as the stream allows; returns bytes read.
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<usize, StreamError> {
    let mut off = 0;
    while off < buf.len() {
        let n = r.read(&mut buf[off..])?;
        if n == 0 {
            break;
        }
        off += n;
    }
    Ok(off)
}
