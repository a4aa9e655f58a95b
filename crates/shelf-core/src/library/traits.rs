//! Library trait definition.
//!
//! The `Library` trait is the inventory contract shared by every engine.
//! Callers pick an engine at construction time (see
//! [`open_library`](super::open_library)) and drive it only through this
//! trait, so engines are interchangeable.

use std::collections::HashSet;

use crate::config::LibraryConfig;
use crate::copy::BookCopy;
use crate::edition::Edition;
use crate::error::Result;

/// Where a tracked copy currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyState {
    OnShelf,
    CheckedOut,
}

impl CopyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyState::OnShelf => "on the shelf",
            CopyState::CheckedOut => "checked out",
        }
    }
}

/// Inventory of physical book copies.
///
/// All implementations must ensure:
/// - A copy is never both on the shelf and checked out
/// - Every bought copy is in exactly one of those sets until it is lost
/// - Copies are tracked by identity, editions are compared by value
///
/// Engines are plain in-memory structures and take `&mut self` for every
/// mutation. Wrap one in a `Mutex` to share it between threads.
pub trait Library: Send + Sync {
    /// Configuration this library was opened with.
    fn config(&self) -> &LibraryConfig;

    /// Buy a new copy of an edition and put it on the shelf.
    ///
    /// # Returns
    ///
    /// Returns the new copy, in good condition and available.
    fn buy(&mut self, edition: &Edition) -> BookCopy;

    /// Check out a copy, moving it from the shelf to checked out.
    ///
    /// If the copy is not on the shelf (already checked out, lost, or never
    /// bought here) the library is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidTransition` for a copy that is not on the
    /// shelf, only under `TransitionPolicy::Strict`.
    fn checkout(&mut self, copy: &BookCopy) -> Result<()>;

    /// Check in a copy, moving it from checked out back to the shelf.
    ///
    /// The inverse of [`checkout`](Library::checkout), with the same
    /// handling of copies that are not checked out.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidTransition` for a copy that is not checked
    /// out, only under `TransitionPolicy::Strict`.
    fn checkin(&mut self, copy: &BookCopy) -> Result<()>;

    /// Current state of a copy, or `None` if this library does not track it.
    fn state(&self, copy: &BookCopy) -> Option<CopyState>;

    /// True iff the copy is on the shelf of this library.
    fn is_available(&self, copy: &BookCopy) -> bool {
        self.state(copy) == Some(CopyState::OnShelf)
    }

    /// Every tracked copy of an edition, on the shelf or checked out.
    ///
    /// The returned set is a snapshot; changing it does not affect the library.
    fn all_copies(&self, edition: &Edition) -> HashSet<BookCopy>;

    /// Tracked copies of an edition that are on the shelf.
    fn available_copies(&self, edition: &Edition) -> HashSet<BookCopy>;

    /// Tracked copies of an edition that are checked out.
    fn checked_out_copies(&self, edition: &Edition) -> HashSet<BookCopy>;

    /// Search editions by title or author.
    ///
    /// # Returns
    ///
    /// Returns distinct editions whose title or any author contains `query`
    /// (case-sensitive), ordered by publication year as configured. Which
    /// copies contribute editions depends on `SearchScope`. An empty query
    /// matches nothing.
    fn find(&self, query: &str) -> Vec<Edition>;

    /// Report a copy as lost, removing it from the library entirely.
    ///
    /// Works from either state. Losing a copy that is not tracked does nothing.
    fn lose(&mut self, copy: &BookCopy);

    /// Number of tracked copies.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check library integrity.
    ///
    /// Verifies the engine's internal representation, including that no copy
    /// is both on the shelf and checked out.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Integrity` describing the first violation found.
    fn check_integrity(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_boxed(_library: Box<dyn Library>) {}
        fn _accepts_generic<T: Library>(_library: T) {}
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(CopyState::OnShelf.as_str(), "on the shelf");
        assert_eq!(CopyState::CheckedOut.as_str(), "checked out");
    }
}
