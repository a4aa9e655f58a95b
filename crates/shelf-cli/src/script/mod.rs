//! Inventory scripts for the `run` command.
//!
//! This module provides:
//! - Line-oriented script parsing (`parse`)
//! - Step execution against a library (`runner`)

mod parse;
mod runner;

// Re-export public API
pub use parse::{parse_script, ScriptLine, Step};
pub use runner::ScriptRunner;
