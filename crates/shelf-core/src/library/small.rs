//! Set-based library engine.
//!
//! The representation is two identity sets of copies: `on_shelf` and
//! `checked_out`. Every query is a linear scan, which is fine for a single
//! person's home collection.

use std::collections::HashSet;

use tracing::debug;

use super::search::matching_editions;
use super::traits::{CopyState, Library};
use super::transition_mismatch;
use crate::config::{LibraryConfig, SearchScope};
use crate::copy::BookCopy;
use crate::edition::Edition;
use crate::error::{Result, ShelfError};

/// A small collection of books, like a single person's home library.
#[derive(Debug, Default)]
pub struct SmallLibrary {
    config: LibraryConfig,
    // Invariant: on_shelf and checked_out are disjoint.
    on_shelf: HashSet<BookCopy>,
    checked_out: HashSet<BookCopy>,
}

impl SmallLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LibraryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    fn copies_of<'a>(
        set: &'a HashSet<BookCopy>,
        edition: &'a Edition,
    ) -> impl Iterator<Item = &'a BookCopy> + 'a {
        set.iter().filter(move |copy| copy.edition() == edition)
    }

    fn check_rep(&self) {
        debug_assert!(
            self.on_shelf.is_disjoint(&self.checked_out),
            "copy both on the shelf and checked out"
        );
    }
}

impl Library for SmallLibrary {
    fn config(&self) -> &LibraryConfig {
        &self.config
    }

    fn buy(&mut self, edition: &Edition) -> BookCopy {
        let copy = BookCopy::new(edition.clone());
        self.on_shelf.insert(copy.clone());
        debug!(copy = %copy.id(), title = edition.title(), year = edition.year(), "Bought copy");
        self.check_rep();
        copy
    }

    fn checkout(&mut self, copy: &BookCopy) -> Result<()> {
        if self.on_shelf.remove(copy) {
            self.checked_out.insert(copy.clone());
            debug!(copy = %copy.id(), "Checked out copy");
            self.check_rep();
            return Ok(());
        }
        transition_mismatch(
            self.config.library.transitions,
            copy,
            "checkout",
            self.state(copy),
        )
    }

    fn checkin(&mut self, copy: &BookCopy) -> Result<()> {
        if self.checked_out.remove(copy) {
            self.on_shelf.insert(copy.clone());
            debug!(copy = %copy.id(), "Checked in copy");
            self.check_rep();
            return Ok(());
        }
        transition_mismatch(
            self.config.library.transitions,
            copy,
            "checkin",
            self.state(copy),
        )
    }

    fn state(&self, copy: &BookCopy) -> Option<CopyState> {
        if self.on_shelf.contains(copy) {
            Some(CopyState::OnShelf)
        } else if self.checked_out.contains(copy) {
            Some(CopyState::CheckedOut)
        } else {
            None
        }
    }

    fn is_available(&self, copy: &BookCopy) -> bool {
        self.on_shelf.contains(copy)
    }

    fn all_copies(&self, edition: &Edition) -> HashSet<BookCopy> {
        Self::copies_of(&self.on_shelf, edition)
            .chain(Self::copies_of(&self.checked_out, edition))
            .cloned()
            .collect()
    }

    fn available_copies(&self, edition: &Edition) -> HashSet<BookCopy> {
        Self::copies_of(&self.on_shelf, edition).cloned().collect()
    }

    fn checked_out_copies(&self, edition: &Edition) -> HashSet<BookCopy> {
        Self::copies_of(&self.checked_out, edition).cloned().collect()
    }

    fn find(&self, query: &str) -> Vec<Edition> {
        let shelved = self.on_shelf.iter().map(BookCopy::edition);
        match self.config.search.scope {
            SearchScope::OnShelf => matching_editions(shelved, query, self.config.search.order),
            SearchScope::Catalog => matching_editions(
                shelved.chain(self.checked_out.iter().map(BookCopy::edition)),
                query,
                self.config.search.order,
            ),
        }
    }

    fn lose(&mut self, copy: &BookCopy) {
        if self.on_shelf.remove(copy) || self.checked_out.remove(copy) {
            debug!(copy = %copy.id(), "Lost copy");
        }
        self.check_rep();
    }

    fn len(&self) -> usize {
        self.on_shelf.len() + self.checked_out.len()
    }

    fn check_integrity(&self) -> Result<()> {
        if let Some(copy) = self.on_shelf.intersection(&self.checked_out).next() {
            return Err(ShelfError::Integrity(format!(
                "copy {} is both on the shelf and checked out",
                copy.id()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransitionPolicy;

    fn edition() -> Edition {
        Edition::new("A", ["B", "C"], 1990).unwrap()
    }

    #[test]
    fn test_buy_puts_copy_on_shelf() {
        let mut library = SmallLibrary::new();
        let copy = library.buy(&edition());
        assert!(library.on_shelf.contains(&copy));
        assert!(library.checked_out.is_empty());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_checkout_and_checkin_move_between_sets() {
        let mut library = SmallLibrary::new();
        let copy = library.buy(&edition());

        library.checkout(&copy).unwrap();
        assert!(!library.on_shelf.contains(&copy));
        assert!(library.checked_out.contains(&copy));

        library.checkin(&copy).unwrap();
        assert!(library.on_shelf.contains(&copy));
        assert!(!library.checked_out.contains(&copy));
        library.check_integrity().unwrap();
    }

    #[test]
    fn test_integrity_detects_overlap() {
        let mut library = SmallLibrary::new();
        let copy = library.buy(&edition());
        library.checked_out.insert(copy);

        let err = library.check_integrity().unwrap_err();
        assert!(matches!(err, ShelfError::Integrity(_)));
    }

    #[test]
    fn test_strict_checkin_of_shelved_copy_fails() {
        let config = LibraryConfig::new().transitions(TransitionPolicy::Strict);
        let mut library = SmallLibrary::with_config(config);
        let copy = library.buy(&edition());

        let err = library.checkin(&copy).unwrap_err();
        assert!(matches!(err, ShelfError::InvalidTransition { .. }));
        assert!(library.is_available(&copy));
    }
}
