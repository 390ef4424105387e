// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai Hash Table.

/// Error types for Lanai Hash Table construction.
///
/// Lookups and removals report a missing key through `Option`, so every
/// variant here describes a configuration the table refuses to be built with.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LanaiHashTableError {
    /// Capacity must be at least one bucket
    #[error("hash table capacity must be greater than zero, got {0}")]
    InvalidCapacity(usize),

    /// Load factor outside of (0.0, 1.0]
    #[error("hash table load factor must be in range (0.0, 1.0], got {0}")]
    InvalidLoadFactor(f64),

    /// Growth coefficient that would not enlarge the table
    #[error("hash table growth coefficient must be at least 2, got {0}")]
    InvalidGrowthCoefficient(usize),
}

/// Result type for Lanai Hash Table operations
pub type Result<T> = std::result::Result<T, LanaiHashTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LanaiHashTableError::InvalidCapacity(0);
        assert_eq!(
            err.to_string(),
            "hash table capacity must be greater than zero, got 0"
        );

        let err = LanaiHashTableError::InvalidLoadFactor(1.5);
        assert_eq!(
            err.to_string(),
            "hash table load factor must be in range (0.0, 1.0], got 1.5"
        );

        let err = LanaiHashTableError::InvalidGrowthCoefficient(1);
        assert_eq!(
            err.to_string(),
            "hash table growth coefficient must be at least 2, got 1"
        );
    }
}
