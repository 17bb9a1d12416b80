pub mod aead;
pub mod key;
pub mod nonce;
pub mod types;

pub use aead::BlockCipher;
pub use key::{parse_hex_key, KeyError, INSECURE_TEST_KEY};
pub use nonce::random_nonce;
pub use types::{CryptoError, KEY_LEN_16, NONCE_LEN_12, TAG_LEN};
