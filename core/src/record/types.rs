//! Fixed-width decoded variant row.
//!
//! Design notes:
//! - Field widths mirror the on-disk record layout exactly; several are
//!   deliberately narrower than the source text can express. The
//!   narrowing is part of the format, not an accident, and is surfaced
//!   in the field docs below rather than hidden.

/// One genomic variant, decoded from a single input line.
///
/// Created per line by the text parser, immediately packed into 16
/// bytes and appended to the current block, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Chromosome number. Decimal source values above 255 alias by
    /// natural 8-bit wraparound (256 packs as 0). Known limitation of
    /// the on-disk format, preserved for compatibility.
    pub chrom: u8,

    /// 1-based position on the chromosome.
    pub pos: u32,

    /// Numeric variant identifier; a literal `.` field maps to 0.
    pub id: u64,

    /// Reference allele, first byte only. Multi-base alleles lose
    /// their trailing characters (known lossy transform).
    pub ref_allele: u8,

    /// Alternate allele, first byte only (same lossy transform).
    pub alt_allele: u8,

    /// Derived genotype state: 0 = uninitialized, 2 = homozygous
    /// marker observed, 1 otherwise.
    pub zygosity: u8,
}

impl Record {
    /// An uninitialized record, matching the parser's pre-fill state.
    pub fn empty() -> Self {
        Self {
            chrom: 0,
            pos: 0,
            id: 0,
            ref_allele: b'-',
            alt_allele: b'-',
            zygosity: 0,
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::empty()
    }
}
