//! Command handlers, one module per top-level subcommand.

pub mod config;
pub mod misc;
pub mod run;
