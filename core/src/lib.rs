//! vcfseal-core
//!
//! Block-framed authenticated encryption for fixed-width genomic
//! variant records.
//!
//! A line-oriented variant text file is packed into 16-byte binary
//! records, accumulated into large blocks, and each block is sealed
//! independently with AES-128-GCM under a fresh random 96-bit nonce.
//! Frames are self-describing and independently decryptable, so a
//! truncated output file is still a valid prefix of frames.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Record model and packing
pub mod record;

// External collaborator: line-oriented variant text parser
pub mod vcf;

// Crypto layer
pub mod crypto;

// On-disk frame format
pub mod framing;

// Streaming pipeline
pub mod stream;
