//! Data structures for the Lanai table crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Validated construction with explicit error types
//! - Deterministic behaviour that can be tested in isolation

pub mod lanai_hash_table;

// Re-export common data structures
pub use lanai_hash_table::{LanaiHashTable, LanaiHashTableConfig, LanaiHashTableError};
