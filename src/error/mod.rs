//! Error module for the Lanai table crate.
//!
//! Every component reports failures through its own `thiserror` enum.
//! [`LanaiError`] wraps them for callers that cross component boundaries,
//! such as the command driver and the binary.

use thiserror::Error;

use crate::data_structures::lanai_hash_table::LanaiHashTableError;

pub mod command;
pub mod config;

/// Result type alias used across the crate.
pub type LanaiResult<T> = Result<T, LanaiError>;

/// Core error enum for the Lanai table crate.
#[derive(Error, Debug)]
pub enum LanaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised when constructing a hash table.
    #[error("Hash table error: {0}")]
    Table(#[from] LanaiHashTableError),

    /// Errors parsing a driver command.
    #[error("Command error: {0}")]
    Command(#[from] command::CommandError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
