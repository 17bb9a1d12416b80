//! AEAD interface for AES-128-GCM with detached tags.
//!
//! Design notes:
//! - 16-byte keys, 12-byte nonces, 16-byte tags; no associated data.
//! - Encryption happens in place in a caller-owned scratch buffer, so
//!   the pipeline allocates nothing per block.
//! - Tag verification is constant-time and fails closed: on mismatch
//!   the buffer contents are unspecified and no plaintext is exposed.
//! - Empty plaintext is valid (the final flush of an empty input still
//!   produces an authenticated empty frame).

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Nonce, Tag};

use crate::crypto::types::{CryptoError, KEY_LEN_16, NONCE_LEN_12, TAG_LEN};

/// One AES-128-GCM cipher instance, fixed key for the whole run.
///
/// Nonces are independently random per block ([`crate::crypto::nonce`]),
/// so this is a bounded-usage cipher: the chance of a repeated
/// (key, nonce) pair grows with the number of blocks sealed under one
/// key (birthday bound on 96 random bits). Rotate keys long before
/// 2^32 blocks.
#[derive(Clone)]
pub struct BlockCipher {
    cipher: Aes128Gcm,
}

impl BlockCipher {
    /// Construct from a raw 16-byte key.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        let cipher = Aes128Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
            expected: KEY_LEN_16,
            actual: key.len(),
        })?;
        Ok(Self { cipher })
    }

    /// Seal `buf` in place, returning the detached 16-byte tag.
    ///
    /// The ciphertext has exactly the plaintext's length; the tag binds
    /// ciphertext, nonce, and key.
    pub fn seal_detached(
        &self,
        nonce: &[u8; NONCE_LEN_12],
        buf: &mut [u8],
    ) -> Result<[u8; TAG_LEN], CryptoError> {
        let tag = self
            .cipher
            .encrypt_in_place_detached(Nonce::from_slice(nonce), b"", buf)
            .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))?;
        Ok(tag.into())
    }

    /// Open `buf` in place, verifying the detached tag.
    ///
    /// On success `buf` holds the plaintext. On mismatch, fails closed
    /// with [`CryptoError::TagMismatch`].
    pub fn open_detached(
        &self,
        nonce: &[u8; NONCE_LEN_12],
        tag: &[u8; TAG_LEN],
        buf: &mut [u8],
    ) -> Result<(), CryptoError> {
        self.cipher
            .decrypt_in_place_detached(Nonce::from_slice(nonce), b"", buf, Tag::from_slice(tag))
            .map_err(|_| CryptoError::TagMismatch)
    }
}
