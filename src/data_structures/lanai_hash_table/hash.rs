// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash functions for the Lanai Hash Table.
//!
//! A key hasher is a pure function of `(key, modulus)`. The table owns its
//! hasher as a value, so placement is deterministic for a given hasher and
//! can be swapped out in tests.

use std::hash::Hasher;

use fnv::FnvHasher;
use serde::{Deserialize, Serialize};

/// Maps integer keys onto bucket indices.
///
/// Implementations must be deterministic and must return a value in
/// `[0, modulus)` for every `modulus > 0`.
#[cfg_attr(test, mockall::automock)]
pub trait KeyHasher {
    /// Computes the bucket index of `key` in a table of `modulus` buckets.
    fn bucket_index(&self, key: i32, modulus: usize) -> usize;
}

/// Computes the FNV-1a bucket index of `key` for a table of `modulus` buckets.
///
/// The key is hashed through its little-endian bytes so the result does not
/// depend on the host byte order.
///
/// # Arguments
///
/// * `key` - The key to hash.
/// * `modulus` - The number of buckets. Must be non-zero.
///
/// # Returns
///
/// The bucket index in `[0, modulus)`.
pub fn fnv_bucket_index(key: i32, modulus: usize) -> usize {
    let mut hasher = FnvHasher::default();
    hasher.write(&key.to_le_bytes());
    (hasher.finish() % modulus as u64) as usize
}

/// Computes the Euclidean remainder of `key` by `modulus`.
///
/// Negative keys wrap around, so `-1` lands in the last bucket.
pub fn modulo_bucket_index(key: i32, modulus: usize) -> usize {
    i64::from(key).rem_euclid(modulus as i64) as usize
}

/// FNV-1a hashing of the key bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnvKeyHasher;

impl KeyHasher for FnvKeyHasher {
    fn bucket_index(&self, key: i32, modulus: usize) -> usize {
        fnv_bucket_index(key, modulus)
    }
}

/// Plain remainder hashing. Consecutive keys land in consecutive buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuloKeyHasher;

impl KeyHasher for ModuloKeyHasher {
    fn bucket_index(&self, key: i32, modulus: usize) -> usize {
        modulo_bucket_index(key, modulus)
    }
}

/// Hash function selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashStrategy {
    /// FNV-1a over the key bytes
    #[default]
    Fnv,
    /// Euclidean remainder of the key
    Modulo,
}

impl KeyHasher for HashStrategy {
    fn bucket_index(&self, key: i32, modulus: usize) -> usize {
        match self {
            HashStrategy::Fnv => fnv_bucket_index(key, modulus),
            HashStrategy::Modulo => modulo_bucket_index(key, modulus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_in_range() {
        for modulus in [1, 2, 7, 16, 1000] {
            for key in [i32::MIN, -17, -1, 0, 1, 42, i32::MAX] {
                assert!(fnv_bucket_index(key, modulus) < modulus);
                assert!(modulo_bucket_index(key, modulus) < modulus);
            }
        }
    }

    #[test]
    fn test_hash_stability() {
        let first_run = fnv_bucket_index(12_345, 1024);
        let second_run = fnv_bucket_index(12_345, 1024);
        assert_eq!(first_run, second_run);
    }

    #[test]
    fn test_modulo_wraps_negative_keys() {
        assert_eq!(modulo_bucket_index(5, 4), 1);
        assert_eq!(modulo_bucket_index(-1, 4), 3);
        assert_eq!(modulo_bucket_index(i32::MIN, 8), 0);
    }

    #[test]
    fn test_fnv_spreads_consecutive_keys() {
        let indices: std::collections::HashSet<usize> =
            (0..64).map(|key| fnv_bucket_index(key, 64)).collect();

        // Should hit a healthy share of the buckets
        assert!(indices.len() >= 20);
    }

    #[test]
    fn test_strategy_dispatch() {
        assert_eq!(
            HashStrategy::Modulo.bucket_index(9, 4),
            ModuloKeyHasher.bucket_index(9, 4)
        );
        assert_eq!(
            HashStrategy::Fnv.bucket_index(9, 4),
            FnvKeyHasher.bucket_index(9, 4)
        );
    }

    #[test]
    fn test_strategy_serde_names() {
        assert_eq!(serde_json::to_string(&HashStrategy::Fnv).unwrap(), "\"fnv\"");
        let parsed: HashStrategy = serde_json::from_str("\"modulo\"").unwrap();
        assert_eq!(parsed, HashStrategy::Modulo);
    }
}
