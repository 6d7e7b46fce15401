//! Deterministic fingerprint of the loaded reference tables.
//!
//! Hash input layout (bytes, in order, repeated per table):
//!   1. table name as UTF-8 bytes
//!   2. byte length of the table as 8-byte little-endian
//!   3. the raw table bytes
//!
//! The length prefix keeps `("ab", "c")` and `("a", "bc")` from colliding.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 fingerprint over `tables`, in the order given.
///
/// Returns a lowercase 64-character hex string.
pub fn fingerprint_tables(tables: &[(&str, &[u8])]) -> String {
    let mut hasher = Sha256::new();
    for (name, bytes) in tables {
        hasher.update(name.as_bytes());
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }
    hex::encode(hasher.finalize())
}
