//! Output formatting helpers for the CLI.
//!
//! Script steps produce an `Outcome`; this module renders it either as a
//! human-readable line or as a JSON object (one per line).

mod json;
mod text;

use shelf_core::{Condition, CopyId, Edition};

// Re-export public API
pub use json::outcome_json;
pub use text::outcome_text;

/// Result of one executed script step.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Bought {
        label: String,
        copy: CopyId,
        edition: Edition,
    },
    /// Checkout or checkin; `available` is the copy's availability afterwards.
    Moved {
        operation: &'static str,
        label: String,
        available: bool,
    },
    Lost {
        label: String,
    },
    Condition {
        label: String,
        condition: Condition,
    },
    Availability {
        label: String,
        available: bool,
    },
    Copies {
        edition: Edition,
        all: usize,
        available: usize,
    },
    Found {
        query: String,
        editions: Vec<Edition>,
    },
    Checked {
        copies: usize,
    },
}

impl Outcome {
    /// Acknowledgements of mutations; suppressed in quiet text mode.
    pub fn is_acknowledgement(&self) -> bool {
        matches!(
            self,
            Outcome::Bought { .. }
                | Outcome::Moved { .. }
                | Outcome::Lost { .. }
                | Outcome::Condition { .. }
        )
    }
}
