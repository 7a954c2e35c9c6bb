//! Fixed-length string hashing.

use sha2::{Digest, Sha256};

/// Hex characters produced by one SHA-256 block.
const BLOCK_LEN: usize = 64;

/// Hash `input` into exactly `length` lowercase hex characters.
///
/// The first 64 characters are the SHA-256 of `input`. Longer outputs append
/// blocks hashed from `input` followed by a big-endian block counter.
///
/// ```rust
/// use quarry_driver::hash;
///
/// let short = hash("users_email", 8);
/// assert_eq!(short.len(), 8);
/// assert_eq!(short, hash("users_email", 8));
/// assert!(hash("users_email", 100).starts_with(&short));
/// ```
pub fn hash(input: &str, length: usize) -> String {
    let mut out = String::with_capacity(length.next_multiple_of(BLOCK_LEN));
    let mut counter: u64 = 0;

    while out.len() < length {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        if counter > 0 {
            hasher.update(counter.to_be_bytes());
        }
        out.push_str(&hex::encode(hasher.finalize()));
        counter += 1;
    }

    out.truncate(length);
    out
}
