//! Hash function for bucket indexing
//!
//! djb2 string hash: seed 5381, each byte folds in as `hash * 33 + byte`
//! with wrapping 32-bit arithmetic. Deterministic, cheap, and good enough
//! for chained buckets; no DoS resistance is intended. Collisions are
//! resolved by chaining, so quality only affects chain length.

/// djb2 seed
const SEED: u32 = 5381;

/// Hash a key to a 32-bit value
pub fn hash_key(key: &str) -> u32 {
    key.bytes().fold(SEED, |hash, byte| {
        hash.wrapping_mul(33).wrapping_add(u32::from(byte))
    })
}

/// Reduce a key's hash to a bucket index under the given capacity
///
/// Must be recomputed after every grow: the reduction depends on the
/// current capacity.
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    hash_key(key) as usize % capacity
}
