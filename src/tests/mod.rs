//! Test modules for the Lanai table crate.
//!
//! This module contains the cross-component tests:
//! - Property-based tests of the hash table against a reference map
//! - Configuration loading tests against real files and environment variables
//! - Shared fixtures and proptest strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, operation_strategy, value_strategy, TableOperation, TestFixture};
