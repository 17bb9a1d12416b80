//! Reusable block accumulator.
//!
//! Collects packed 16-byte records until the block is full or input
//! ends. The backing buffer is allocated once and reused across every
//! flush of the run; `reset` only clears the write cursor.

use crate::constants::{DEFAULT_BLOCK_SIZE, RECORD_LEN};

pub struct BlockAccumulator {
    buf: Vec<u8>,
    capacity: usize,
}

impl BlockAccumulator {
    /// Accumulator with the default 1 MiB capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BLOCK_SIZE)
    }

    /// Accumulator with an explicit capacity.
    ///
    /// Capacity must be a positive multiple of [`RECORD_LEN`]; the
    /// pipeline configuration validates this before construction.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0 && capacity % RECORD_LEN == 0);
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one packed record.
    ///
    /// Must not be called on a full accumulator; the driver flushes
    /// before the append that would overflow.
    #[inline]
    pub fn append(&mut self, packed: &[u8; RECORD_LEN]) {
        debug_assert!(!self.is_full(), "append on full accumulator");
        self.buf.extend_from_slice(packed);
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes accumulated so far; shorter than capacity only for the
    /// final block of a run.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn record_count(&self) -> usize {
        self.buf.len() / RECORD_LEN
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear the write cursor, keeping the allocation.
    #[inline]
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

impl Default for BlockAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
