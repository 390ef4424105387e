//! Lanai Table Library
//!
//! This library contains the Lanai Hash Table, a separate-chaining map from
//! integer keys to string values, together with the configuration, error and
//! command-driver layers used by the `lanai_table` binary.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_hash_table`] holds the table itself and has no
//!   dependency on the other modules
//! - [`config`] loads and validates settings from files and the environment
//! - [`driver`] parses text commands and applies them to a table
//! - [`error`] ties the component errors together

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod driver;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai table crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
