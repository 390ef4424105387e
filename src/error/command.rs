//! Command error module.
//!
//! This module defines the errors raised while parsing driver commands.

use thiserror::Error;

/// Errors that can occur while parsing a driver command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The first word of the line is not a known operation.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A required argument is missing.
    #[error("Operation '{operation}' is missing its {argument} argument")]
    MissingArgument {
        /// The operation being parsed
        operation: String,
        /// Name of the missing argument
        argument: &'static str,
    },

    /// The key argument is not a 32-bit integer.
    #[error("Invalid key '{0}': expected a 32-bit integer")]
    InvalidKey(String),

    /// More arguments than the operation takes.
    #[error("Operation '{0}' takes no further arguments")]
    UnexpectedArgument(String),
}
