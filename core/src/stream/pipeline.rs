//! Single-pass encryption pipeline.
//!
//! read -> pack -> accumulate -> (on full block or EOF) encrypt -> write,
//! strictly sequential, no overlap between stages. The accumulator and
//! the encryption scratch buffer are owned by the pipeline and reused
//! for the whole run; nothing is allocated per block.
//!
//! End-of-input flushes whatever the accumulator holds; an empty input
//! still produces exactly one authenticated empty frame, and N records
//! at block capacity C always produce ceil(N / C) frames.

use std::io::Write;

use crate::constants::{DEFAULT_BLOCK_SIZE, RECORD_LEN};
use crate::crypto::aead::BlockCipher;
use crate::crypto::nonce::random_nonce;
use crate::crypto::types::KEY_LEN_16;
use crate::framing::types::FrameHeader;
use crate::record::pack::pack_record;
use crate::record::types::Record;
use crate::stream::block::BlockAccumulator;
use crate::stream::writer::FrameWriter;
use crate::types::StreamError;
use crate::vcf::ParseError;

/// Pipeline configuration; the key is an explicit value threaded in by
/// the caller, never process-wide state.
#[derive(Clone)]
pub struct PipelineConfig {
    pub key: [u8; KEY_LEN_16],
    pub block_capacity: usize,
}

impl PipelineConfig {
    pub fn new(key: [u8; KEY_LEN_16]) -> Self {
        Self {
            key,
            block_capacity: DEFAULT_BLOCK_SIZE,
        }
    }

    pub fn with_block_capacity(mut self, capacity: usize) -> Self {
        self.block_capacity = capacity;
        self
    }

    fn validate(&self) -> Result<(), StreamError> {
        if self.block_capacity == 0 || self.block_capacity % RECORD_LEN != 0 {
            return Err(StreamError::Validation(format!(
                "block capacity {} is not a positive multiple of {}",
                self.block_capacity, RECORD_LEN
            )));
        }
        Ok(())
    }
}

/// Totals for one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub records_read: u64,
    pub frames_written: u64,
    pub bytes_written: u64,
}

pub struct EncryptPipeline {
    cipher: BlockCipher,
    block: BlockAccumulator,
    scratch: Vec<u8>,
}

impl EncryptPipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, StreamError> {
        config.validate()?;
        let cipher = BlockCipher::new(&config.key)?;
        Ok(Self {
            cipher,
            block: BlockAccumulator::with_capacity(config.block_capacity),
            scratch: Vec::with_capacity(config.block_capacity),
        })
    }

    /// Drive the full pipeline: drain `records`, write frames, flush
    /// the final partial block at end of input.
    ///
    /// Failures from any collaborator abort the run; a frame whose tag
    /// does not match its ciphertext is never written.
    pub fn run<I, W>(
        &mut self,
        records: I,
        writer: &mut FrameWriter<W>,
    ) -> Result<PipelineSummary, StreamError>
    where
        I: IntoIterator<Item = Result<Record, ParseError>>,
        W: Write,
    {
        self.block.reset();
        let frames_before = writer.frames_written();
        let bytes_before = writer.bytes_written();
        let mut records_read = 0u64;

        for record in records {
            let record = record?;
            self.block.append(&pack_record(&record));
            records_read += 1;

            if self.block.is_full() {
                self.flush(writer)?;
            }
        }

        // EOF flush: a partial block becomes the final short frame, and
        // an empty input still produces exactly one empty frame. When
        // the record count is an exact multiple of the block capacity
        // the last full block was already flushed, so the total frame
        // count stays ceil(N / C).
        if !self.block.is_empty() || writer.frames_written() == frames_before {
            self.flush(writer)?;
        }

        let summary = PipelineSummary {
            records_read,
            frames_written: writer.frames_written() - frames_before,
            bytes_written: writer.bytes_written() - bytes_before,
        };
        log::info!(
            "pipeline done: {} records, {} frames, {} bytes out",
            summary.records_read,
            summary.frames_written,
            summary.bytes_written
        );
        Ok(summary)
    }

    /// Encrypt the accumulated block and append it as one frame.
    fn flush<W: Write>(&mut self, writer: &mut FrameWriter<W>) -> Result<(), StreamError> {
        self.scratch.clear();
        self.scratch.extend_from_slice(self.block.as_bytes());

        let nonce = random_nonce();
        let tag = self.cipher.seal_detached(&nonce, &mut self.scratch)?;

        let header = FrameHeader {
            nonce,
            plaintext_len: self.scratch.len() as u32,
            tag,
        };
        writer.write_frame(&header, &self.scratch)?;

        log::debug!(
            "flushed frame {}: {} records, {} plaintext bytes",
            writer.frames_written() - 1,
            self.block.record_count(),
            header.plaintext_len
        );

        self.block.reset();
        Ok(())
    }
}
