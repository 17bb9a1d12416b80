//! Ordered frame writer.
//!
//! Frames go out strictly in the order blocks were produced, header
//! first then ciphertext, with no buffering or reordering across
//! frames. Underlying write failures are fatal and leave the output as
//! a valid prefix of complete frames.

use std::io::Write;

use crate::framing::encode::encode_frame_header;
use crate::framing::types::{FrameError, FrameHeader};
use crate::types::StreamError;

pub struct FrameWriter<W: Write> {
    out: W,
    frames_written: u64,
    bytes_written: u64,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_written: 0,
            bytes_written: 0,
        }
    }

    /// Append one frame to the output stream.
    pub fn write_frame(
        &mut self,
        header: &FrameHeader,
        ciphertext: &[u8],
    ) -> Result<(), StreamError> {
        if ciphertext.len() != header.plaintext_len as usize {
            return Err(FrameError::LengthMismatch {
                expected: header.plaintext_len as usize,
                actual: ciphertext.len(),
            }
            .into());
        }

        self.out.write_all(&encode_frame_header(header))?;
        self.out.write_all(ciphertext)?;

        self.frames_written += 1;
        self.bytes_written += header.frame_len() as u64;
        Ok(())
    }

    /// Flush the underlying writer and hand it back.
    pub fn finish(mut self) -> Result<W, StreamError> {
        self.out.flush()?;
        Ok(self.out)
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
