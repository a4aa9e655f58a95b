//! Error types for Shelf core operations.
//!
//! Every error here is a precondition or configuration failure. The
//! inventory itself never touches I/O, so there is no storage or transport
//! category. The CLI layer maps these to exit codes.

use thiserror::Error;

use crate::copy::CopyId;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShelfError {
    /// Malformed input to a constructor or operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Checkout/checkin on a copy that is not in the expected state.
    ///
    /// Only produced when the library runs with the strict transition policy.
    #[error("Cannot {operation} copy {copy}: copy is {state}")]
    InvalidTransition {
        copy: CopyId,
        operation: &'static str,
        state: &'static str,
    },

    /// Internal representation check failed
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        ShelfError::InvalidArgument(message.into())
    }
}
