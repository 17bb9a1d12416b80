//! Fixed 16-byte record packing.
//!
//! Layout (multi-byte fields big-endian):
//!
//! ```text
//! [ chrom      (1) ]  offset 0
//! [ pos        (4) ]  offset 1
//! [ id         (8) ]  offset 5
//! [ ref_allele (1) ]  offset 13
//! [ alt_allele (1) ]  offset 14
//! [ zygosity   (1) ]  offset 15
//! ```
//!
//! Pure transform in both directions; no error conditions for a
//! well-formed record.

use crate::constants::RECORD_LEN;
use crate::record::types::Record;

/// Serialize a record into its canonical 16-byte form.
#[inline]
pub fn pack_record(record: &Record) -> [u8; RECORD_LEN] {
    let mut out = [0u8; RECORD_LEN];
    out[0] = record.chrom;
    out[1..5].copy_from_slice(&record.pos.to_be_bytes());
    out[5..13].copy_from_slice(&record.id.to_be_bytes());
    out[13] = record.ref_allele;
    out[14] = record.alt_allele;
    out[15] = record.zygosity;
    out
}

/// Decode a packed record. Counterpart of [`pack_record`], used by the
/// verification read path and tests.
#[inline]
pub fn unpack_record(buf: &[u8; RECORD_LEN]) -> Record {
    let mut pos = [0u8; 4];
    pos.copy_from_slice(&buf[1..5]);
    let mut id = [0u8; 8];
    id.copy_from_slice(&buf[5..13]);

    Record {
        chrom: buf[0],
        pos: u32::from_be_bytes(pos),
        id: u64::from_be_bytes(id),
        ref_allele: buf[13],
        alt_allele: buf[14],
        zygosity: buf[15],
    }
}
