//! Line-oriented variant text parser.
//!
//! Consumes tab-separated lines in field order: chromosome, position,
//! id-or-`.`, reference allele, alternate allele, quality (ignored),
//! filter (ignored), genotype descriptor. Lines starting with `#` are
//! comments and skipped; blank lines are skipped.
//!
//! Field semantics preserved from the on-disk format:
//! - chromosome accumulates by repeated ×10+digit with natural 8-bit
//!   wraparound above 255 (256 aliases to 0);
//! - an id of `.` maps to 0, otherwise the 2-character identifier
//!   prefix (`rs`) is skipped before decimal parsing;
//! - only the first byte of each allele field is kept;
//! - zygosity is 2 when the marker byte `'o'` sits at index 1 of the
//!   genotype descriptor ("hom" vs "het"), 1 otherwise.

use std::fmt;
use std::io::BufRead;

use crate::record::Record;

/// Number of tab-separated fields a data line must carry.
const MIN_FIELDS: usize = 8;

const FIELD_NAMES: [&str; MIN_FIELDS] = [
    "chrom", "pos", "id", "ref", "alt", "qual", "filter", "info",
];

#[derive(Debug)]
pub enum ParseError {
    /// Data line with fewer than the required 8 tab-separated fields.
    TooFewFields { line: u64, found: usize },

    /// Non-digit byte where a decimal number was expected.
    InvalidDigit { line: u64, field: &'static str, byte: u8 },

    /// A field that must not be empty was empty.
    EmptyField { line: u64, field: &'static str },

    /// Underlying read failure while pulling lines.
    Io { line: u64, source: std::io::Error },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TooFewFields { line, found } => write!(
                f,
                "line {}: expected {} tab-separated fields, found {}",
                line, MIN_FIELDS, found
            ),
            ParseError::InvalidDigit { line, field, byte } => write!(
                f,
                "line {}: invalid digit {:?} in field `{}`",
                line, *byte as char, field
            ),
            ParseError::EmptyField { line, field } => {
                write!(f, "line {}: empty field `{}`", line, field)
            }
            ParseError::Io { line, source } => {
                write!(f, "line {}: read failed: {}", line, source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Decimal parse with wrapping accumulation, mirroring the packed
/// format's ×10+digit semantics (chromosome wraparound included).
fn parse_decimal<T>(
    bytes: &[u8],
    line: u64,
    field: &'static str,
    mut acc: impl FnMut(T, u8) -> T,
    zero: T,
) -> Result<T, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::EmptyField { line, field });
    }
    let mut v = zero;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidDigit { line, field, byte: b });
        }
        v = acc(v, b - b'0');
    }
    Ok(v)
}

/// Parse one line of variant text.
///
/// Returns `Ok(None)` for comment (`#`) and blank lines, `Ok(Some)`
/// for a data line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line: &str, line_no: u64) -> Result<Option<Record>, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields: [&[u8]; MIN_FIELDS] = [b""; MIN_FIELDS];
    let mut count = 0usize;
    for part in line.as_bytes().split(|&b| b == b'\t') {
        if count == MIN_FIELDS {
            // Trailing fields (FORMAT, samples) are ignored.
            break;
        }
        fields[count] = part;
        count += 1;
    }
    if count < MIN_FIELDS {
        return Err(ParseError::TooFewFields { line: line_no, found: count });
    }

    let chrom = parse_decimal(
        fields[0],
        line_no,
        FIELD_NAMES[0],
        |v: u8, d| v.wrapping_mul(10).wrapping_add(d),
        0u8,
    )?;
    let pos = parse_decimal(
        fields[1],
        line_no,
        FIELD_NAMES[1],
        |v: u32, d| v.wrapping_mul(10).wrapping_add(d as u32),
        0u32,
    )?;

    let id = if fields[2] == b"." {
        0
    } else {
        if fields[2].len() < 3 {
            return Err(ParseError::EmptyField { line: line_no, field: FIELD_NAMES[2] });
        }
        // Skip the 2-character identifier prefix ("rs1234" -> 1234).
        parse_decimal(
            &fields[2][2..],
            line_no,
            FIELD_NAMES[2],
            |v: u64, d| v.wrapping_mul(10).wrapping_add(d as u64),
            0u64,
        )?
    };

    let ref_allele = *fields[3]
        .first()
        .ok_or(ParseError::EmptyField { line: line_no, field: FIELD_NAMES[3] })?;
    let alt_allele = *fields[4]
        .first()
        .ok_or(ParseError::EmptyField { line: line_no, field: FIELD_NAMES[4] })?;

    // qual (5) and filter (6) are ignored entirely.

    // Marker byte at descriptor index 1: "hom" -> 2, "het" -> 1.
    let zygosity = if fields[7].get(1) == Some(&b'o') { 2 } else { 1 };

    Ok(Some(Record {
        chrom,
        pos,
        id,
        ref_allele,
        alt_allele,
        zygosity,
    }))
}

/// Iterator adapter pulling records out of a buffered reader, skipping
/// comments and blank lines. This is the pipeline's record source.
pub struct VcfReader<R: BufRead> {
    inner: R,
    line: String,
    line_no: u64,
}

impl<R: BufRead> VcfReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            line_no: 0,
        }
    }

    /// Lines consumed so far (comments and blanks included).
    pub fn lines_read(&self) -> u64 {
        self.line_no
    }
}

impl<R: BufRead> Iterator for VcfReader<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            self.line_no += 1;
            match self.inner.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    return Some(Err(ParseError::Io { line: self.line_no, source: e }))
                }
            }
            match parse_line(&self.line, self.line_no) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
