//! Application-level utilities for the Shelf CLI.
//!
//! This module provides:
//! - Lazy config loading shared by command handlers
//! - Library construction with command-line overrides

mod context;

// Re-export public API
pub use context::AppContext;
