//! Inventory engines.
//!
//! This module provides the `Library` trait and its engines:
//! - `SmallLibrary`: two identity sets, the reference representation
//! - `BigLibrary`: copies indexed by edition for large collections

mod big;
mod search;
mod small;
mod traits;

pub use big::BigLibrary;
pub use small::SmallLibrary;
pub use traits::{CopyState, Library};

use tracing::{debug, warn};

use crate::config::{EngineKind, LibraryConfig, TransitionPolicy};
use crate::copy::BookCopy;
use crate::error::{Result, ShelfError};

/// Open an empty library backed by the engine named in `config`.
pub fn open_library(config: LibraryConfig) -> Box<dyn Library> {
    debug!(engine = %config.library.engine, "Opening library");
    match config.library.engine {
        EngineKind::Small => Box::new(SmallLibrary::with_config(config)),
        EngineKind::Big => Box::new(BigLibrary::with_config(config)),
    }
}

/// Handle a checkout/checkin on a copy that is not in the expected state.
///
/// `state` is where the copy actually is, `None` when it is not tracked.
fn transition_mismatch(
    policy: TransitionPolicy,
    copy: &BookCopy,
    operation: &'static str,
    state: Option<CopyState>,
) -> Result<()> {
    let state = state.map(|s| s.as_str()).unwrap_or("not in this library");
    match policy {
        TransitionPolicy::Permissive => {
            debug!(copy = %copy.id(), operation, state, "Ignoring transition");
            Ok(())
        }
        TransitionPolicy::Strict => {
            warn!(copy = %copy.id(), operation, state, "Rejecting transition");
            Err(ShelfError::InvalidTransition {
                copy: copy.id(),
                operation,
                state,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edition::Edition;

    #[test]
    fn test_open_library_uses_configured_engine() {
        let edition = Edition::new("A", ["B"], 1990).unwrap();
        for engine in [EngineKind::Small, EngineKind::Big] {
            let mut library = open_library(LibraryConfig::new().engine(engine));
            assert_eq!(library.config().library.engine, engine);
            let copy = library.buy(&edition);
            assert!(library.is_available(&copy));
        }
    }

    #[test]
    fn test_transition_mismatch_permissive_is_ok() {
        let copy = BookCopy::new(Edition::new("A", ["B"], 1990).unwrap());
        assert!(
            transition_mismatch(TransitionPolicy::Permissive, &copy, "checkout", None).is_ok()
        );
    }

    #[test]
    fn test_transition_mismatch_strict_reports_state() {
        let copy = BookCopy::new(Edition::new("A", ["B"], 1990).unwrap());
        let err = transition_mismatch(
            TransitionPolicy::Strict,
            &copy,
            "checkin",
            Some(CopyState::OnShelf),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ShelfError::InvalidTransition {
                copy: copy.id(),
                operation: "checkin",
                state: "on the shelf",
            }
        );
        assert!(err.to_string().contains("Cannot checkin copy"));
    }
}
