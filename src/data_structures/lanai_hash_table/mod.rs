// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Hash Table: a separate-chaining map from `i32` keys to `String` values.
//!
//! Every key is placed into exactly one bucket, selected by a pluggable
//! [`KeyHasher`] applied to the key and the current capacity. Buckets are
//! scanned linearly. When the number of stored keys divided by the capacity
//! reaches the configured load factor, the table grows by its growth
//! coefficient and re-hashes each entry individually.
//!
//! # Features
//!
//! - Validated construction: zero capacity or a load factor outside (0.0, 1.0] is refused
//! - In-place updates that do not change the key count
//! - Deterministic, injectable hash functions (FNV-1a or plain modulo)
//! - Never shrinks on removal
//! - Zero unsafe code
//!
//! # Example
//!
//! ```
//! use lanai_table_lib::data_structures::lanai_hash_table::LanaiHashTable;
//!
//! let mut table = LanaiHashTable::new(4, 0.75).unwrap();
//!
//! table.put(1, "one");
//! table.put(2, "two");
//! assert_eq!(table.search(1), Some("one"));
//! assert_eq!(table.capacity(), 4);
//!
//! // The third key brings the load to 3 / 4 and doubles the capacity
//! table.put(3, "three");
//! assert_eq!(table.capacity(), 8);
//! assert!(table.contains_key(2));
//!
//! assert_eq!(table.remove(2), Some("two".to_string()));
//! assert_eq!(table.search(2), None);
//! assert_eq!(table.len(), 2);
//! ```
//!
//! # Custom Hashing
//!
//! ```
//! use lanai_table_lib::data_structures::lanai_hash_table::{
//!     KeyHasher, LanaiHashTable, LanaiHashTableConfig,
//! };
//!
//! /// Sends every key to the first bucket.
//! struct FirstBucket;
//!
//! impl KeyHasher for FirstBucket {
//!     fn bucket_index(&self, _key: i32, _modulus: usize) -> usize {
//!         0
//!     }
//! }
//!
//! let config = LanaiHashTableConfig::new().with_initial_capacity(8);
//! let mut table = LanaiHashTable::with_hasher(config, FirstBucket).unwrap();
//! table.put(10, "ten");
//! table.put(20, "twenty");
//! assert_eq!(table.stats().longest_bucket, 2);
//! ```

// Module declarations
mod bucket;
mod config;
mod error;
mod hash;
mod table;

// Re-exports
pub use config::{
    LanaiHashTableConfig, DEFAULT_GROWTH_COEFFICIENT, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_LOAD_FACTOR,
};
pub use error::{LanaiHashTableError, Result};
pub use hash::{
    fnv_bucket_index, modulo_bucket_index, FnvKeyHasher, HashStrategy, KeyHasher,
    ModuloKeyHasher,
};
pub use table::{LanaiHashTable, TableStats};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut table = LanaiHashTable::new(4, 0.75).unwrap();
        assert!(table.is_empty());

        table.put(1, "one");
        table.put(2, "two");
        table.put(3, "three");

        let expected: hashbrown::HashSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(table.keys(), expected);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_custom_configuration() {
        let config = LanaiHashTableConfig::new()
            .with_initial_capacity(32)
            .with_load_factor(0.5)
            .with_hash_strategy(HashStrategy::Modulo);

        let mut table = LanaiHashTable::with_config(config).unwrap();

        table.put(-5, "minus five");
        assert_eq!(table.search(-5), Some("minus five"));
        assert_eq!(table.capacity(), 32);
        assert_eq!(table.load_factor(), 0.5);
    }
}
