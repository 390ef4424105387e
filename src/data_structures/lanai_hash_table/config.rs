// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Lanai Hash Table.

use serde::{Deserialize, Serialize};

use crate::data_structures::lanai_hash_table::error::{LanaiHashTableError, Result};
use crate::data_structures::lanai_hash_table::hash::HashStrategy;

/// Number of buckets a default table starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Load factor threshold of a default table.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Capacity multiplier applied on every resize.
pub const DEFAULT_GROWTH_COEFFICIENT: usize = 2;

/// Configuration for the Lanai Hash Table.
///
/// The builder methods store values as given. Out-of-range values are
/// rejected when the table is constructed, not silently clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanaiHashTableConfig {
    /// Number of buckets allocated at construction.
    pub initial_capacity: usize,

    /// Ratio of stored keys to buckets that triggers a resize.
    /// Must be in (0.0, 1.0].
    pub load_factor: f64,

    /// Multiplier applied to the capacity on resize.
    pub growth_coefficient: usize,

    /// Hash function used to map keys onto buckets.
    pub hash_strategy: HashStrategy,
}

impl LanaiHashTableConfig {
    /// Creates a new configuration with default values.
    ///
    /// # Returns
    ///
    /// A new `LanaiHashTableConfig` instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial number of buckets.
    ///
    /// # Arguments
    ///
    /// * `initial_capacity` - The number of buckets to allocate up front.
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the load factor threshold.
    ///
    /// # Arguments
    ///
    /// * `load_factor` - The keys-per-bucket ratio that triggers growth (0.0 exclusive to 1.0 inclusive).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Sets the capacity multiplier used on resize.
    pub fn with_growth_coefficient(mut self, growth_coefficient: usize) -> Self {
        self.growth_coefficient = growth_coefficient;
        self
    }

    /// Sets the hash function used to place keys.
    pub fn with_hash_strategy(mut self, hash_strategy: HashStrategy) -> Self {
        self.hash_strategy = hash_strategy;
        self
    }

    /// Checks that the configuration describes a usable table.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every parameter is in range
    /// * `Err(LanaiHashTableError)` naming the first offending parameter
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(LanaiHashTableError::InvalidCapacity(self.initial_capacity));
        }

        // Written as a negated range check so that NaN is rejected too
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(LanaiHashTableError::InvalidLoadFactor(self.load_factor));
        }

        if self.growth_coefficient < 2 {
            return Err(LanaiHashTableError::InvalidGrowthCoefficient(
                self.growth_coefficient,
            ));
        }

        Ok(())
    }
}

impl Default for LanaiHashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            growth_coefficient: DEFAULT_GROWTH_COEFFICIENT,
            hash_strategy: HashStrategy::default(),
        }
    }
}
