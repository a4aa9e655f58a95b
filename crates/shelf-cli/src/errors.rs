//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use shelf_core::ShelfError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, script, copy label)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Transition rejected by the strict policy
    InvalidTransition(String),

    /// Library representation check failed
    IntegrityFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message)
            | CliError::InvalidTransition(message)
            | CliError::IntegrityFailed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ShelfError> for CliError {
    fn from(err: ShelfError) -> Self {
        match err {
            ShelfError::InvalidTransition { .. } => CliError::InvalidTransition(err.to_string()),
            ShelfError::Integrity(_) => CliError::IntegrityFailed(err.to_string()),
            ShelfError::InvalidArgument(_) | ShelfError::Config(_) => {
                CliError::InvalidInput(err.to_string())
            }
        }
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::InvalidTransition(_) => exit_codes::INVALID_TRANSITION,
            CliError::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }

    /// Exit code for an arbitrary error, looking for a typed cause in its chain.
    pub fn exit_code_for(err: &anyhow::Error) -> i32 {
        for cause in err.chain() {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return cli_err.exit_code();
            }
            if let Some(shelf_err) = cause.downcast_ref::<ShelfError>() {
                return CliError::from(shelf_err.clone()).exit_code();
            }
        }
        1
    }
}
