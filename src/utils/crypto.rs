//! Cryptographic utilities

use sha2::{Digest, Sha256};

use crate::constants::CONTENT_HASH_PREFIX_LEN;

/// Hash bytes using SHA-256, hex encoded
pub fn hash_bytes(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

/// Short content fingerprint used to disambiguate stored file names
pub fn content_hash(input: &[u8]) -> String {
    let mut hash = hash_bytes(input);
    hash.truncate(CONTENT_HASH_PREFIX_LEN);
    hash
}
