// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the Lanai Hash Table.
//!
//! Keys are placed into buckets by a [`KeyHasher`]. Each bucket is scanned
//! linearly. Once the ratio of stored keys to buckets reaches the configured
//! load factor, the bucket vector is replaced by a larger one and every entry
//! is re-hashed against the new capacity.

use hashbrown::HashSet;
use serde::Serialize;
use tracing::{debug, trace};

use crate::data_structures::lanai_hash_table::bucket::Bucket;
use crate::data_structures::lanai_hash_table::config::LanaiHashTableConfig;
use crate::data_structures::lanai_hash_table::error::Result;
use crate::data_structures::lanai_hash_table::hash::{HashStrategy, KeyHasher};

/// A separate-chaining hash table mapping `i32` keys to `String` values.
///
/// # Type Parameters
///
/// * `H` - The key hasher. Defaults to [`HashStrategy`], which is what
///   configuration-driven construction produces.
#[derive(Debug, Clone)]
pub struct LanaiHashTable<H = HashStrategy> {
    /// One bucket per slot; the length of this vector is the capacity
    buckets: Vec<Bucket>,

    /// Number of distinct keys stored across all buckets
    num_keys: usize,

    /// Keys-per-bucket ratio that triggers a resize
    load_factor: f64,

    /// Capacity multiplier applied on resize
    growth_coefficient: usize,

    /// Function placing keys into buckets
    hasher: H,
}

/// Point-in-time occupancy figures of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableStats {
    /// Number of stored keys
    pub len: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Configured resize threshold
    pub load_factor: f64,
    /// Current ratio of stored keys to buckets
    pub current_load: f64,
    /// Buckets holding no entries
    pub empty_buckets: usize,
    /// Entries in the fullest bucket
    pub longest_bucket: usize,
}

impl LanaiHashTable<HashStrategy> {
    /// Creates a table with `capacity` buckets and the given load factor.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Initial number of buckets. Must be non-zero.
    /// * `load_factor` - Resize threshold in (0.0, 1.0].
    ///
    /// # Errors
    ///
    /// Returns [`LanaiHashTableError`](super::LanaiHashTableError) if either
    /// argument is out of range.
    pub fn new(capacity: usize, load_factor: f64) -> Result<Self> {
        Self::with_config(
            LanaiHashTableConfig::new()
                .with_initial_capacity(capacity)
                .with_load_factor(load_factor),
        )
    }

    /// Creates a table from a configuration, using its hash strategy.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the hash table.
    ///
    /// # Returns
    ///
    /// A new `LanaiHashTable` instance, or the validation error of `config`.
    pub fn with_config(config: LanaiHashTableConfig) -> Result<Self> {
        let hasher = config.hash_strategy;
        Self::with_hasher(config, hasher)
    }
}

impl Default for LanaiHashTable<HashStrategy> {
    fn default() -> Self {
        let config = LanaiHashTableConfig::default();
        let hasher = config.hash_strategy;
        Self::build(&config, hasher)
    }
}

impl<H: KeyHasher> LanaiHashTable<H> {
    /// Creates a table from a configuration with an explicit key hasher.
    ///
    /// The `hash_strategy` field of `config` is ignored in favour of `hasher`.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity, load factor and growth settings.
    /// * `hasher` - The function placing keys into buckets.
    ///
    /// # Returns
    ///
    /// A new `LanaiHashTable` instance, or the validation error of `config`.
    pub fn with_hasher(config: LanaiHashTableConfig, hasher: H) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(&config, hasher))
    }

    fn build(config: &LanaiHashTableConfig, hasher: H) -> Self {
        debug!(
            capacity = config.initial_capacity,
            load_factor = config.load_factor,
            growth_coefficient = config.growth_coefficient,
            "Creating hash table"
        );

        Self {
            buckets: empty_buckets(config.initial_capacity),
            num_keys: 0,
            load_factor: config.load_factor,
            growth_coefficient: config.growth_coefficient,
            hasher,
        }
    }

    /// Bucket index of `key` at the current capacity.
    fn hash(&self, key: i32) -> usize {
        let capacity = self.buckets.len();
        let index = self.hasher.bucket_index(key, capacity);
        debug_assert!(index < capacity, "key hasher returned {index} for {capacity} buckets");
        index
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Returns
    ///
    /// `Some(value)` if the key exists, `None` otherwise.
    pub fn search(&self, key: i32) -> Option<&str> {
        self.buckets[self.hash(key)].find(key)
    }

    /// Returns whether `key` is stored in the table.
    pub fn contains_key(&self, key: i32) -> bool {
        self.search(key).is_some()
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Only a new key increases [`len`](Self::len). If the insertion brings
    /// the load to the configured threshold, the table grows by its growth
    /// coefficient before returning.
    pub fn put(&mut self, key: i32, value: impl Into<String>) {
        let index = self.hash(key);

        if self.buckets[index].upsert(key, value.into()) {
            self.num_keys += 1;
            trace!(key, index, "Inserted key");
        } else {
            trace!(key, index, "Updated key");
        }

        if self.current_load() >= self.load_factor {
            self.grow();
        }
    }

    /// Removes `key` from the table.
    ///
    /// The capacity never shrinks.
    ///
    /// # Returns
    ///
    /// The removed value, or `None` if the key was not stored.
    pub fn remove(&mut self, key: i32) -> Option<String> {
        let index = self.hash(key);
        let removed = self.buckets[index].remove(key);

        if removed.is_some() {
            self.num_keys -= 1;
            trace!(key, index, "Removed key");
        }

        removed
    }

    /// Replaces the buckets with `capacity * growth_coefficient` new ones and
    /// re-hashes every entry against the new capacity.
    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity.saturating_mul(self.growth_coefficient);
        let mut new_buckets = empty_buckets(new_capacity);

        for bucket in std::mem::take(&mut self.buckets) {
            for entry in bucket.into_entries() {
                let index = self.hasher.bucket_index(entry.key, new_capacity);
                new_buckets[index].push(entry);
            }
        }

        self.buckets = new_buckets;

        debug!(
            old_capacity,
            new_capacity,
            keys = self.num_keys,
            "Resized hash table"
        );
    }

    fn current_load(&self) -> f64 {
        self.num_keys as f64 / self.buckets.len() as f64
    }

    /// Returns the number of keys stored in the table.
    pub fn len(&self) -> usize {
        self.num_keys
    }

    /// Returns whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the configured resize threshold.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Collects every stored key.
    pub fn keys(&self) -> HashSet<i32> {
        let mut keys = HashSet::with_capacity(self.num_keys);
        keys.extend(self.iter().map(|(key, _)| key));
        keys
    }

    /// Collects every stored value in bucket order, then entry order within
    /// each bucket.
    pub fn values(&self) -> Vec<String> {
        self.iter().map(|(_, value)| value.to_string()).collect()
    }

    /// Iterates over `(key, value)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> + '_ {
        self.buckets
            .iter()
            .flat_map(Bucket::iter)
            .map(|entry| (entry.key, entry.value.as_str()))
    }

    /// Takes a snapshot of the table's occupancy.
    pub fn stats(&self) -> TableStats {
        TableStats {
            len: self.num_keys,
            capacity: self.capacity(),
            load_factor: self.load_factor,
            current_load: self.current_load(),
            empty_buckets: self.buckets.iter().filter(|bucket| bucket.is_empty()).count(),
            longest_bucket: self.buckets.iter().map(Bucket::len).max().unwrap_or(0),
        }
    }
}

fn empty_buckets(capacity: usize) -> Vec<Bucket> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Bucket::default);
    buckets
}
