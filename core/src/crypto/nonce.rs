//! Random nonce generation.
//!
//! Security notes:
//! - Nonces come from the operating system CSPRNG (`OsRng`). A
//!   predictable or repeating nonce under a fixed key breaks the GCM
//!   security guarantee outright, so a non-cryptographic generator is
//!   not acceptable here.
//! - No (key, nonce) pair may repeat for the lifetime of a key. With
//!   independent random 96-bit nonces the collision probability is
//!   governed by the birthday bound; see [`crate::crypto::BlockCipher`]
//!   for the usage limit.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::NONCE_LEN_12;

/// Draw a fresh 12-byte nonce from the OS CSPRNG.
#[inline]
pub fn random_nonce() -> [u8; NONCE_LEN_12] {
    let mut nonce = [0u8; NONCE_LEN_12];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
