//! Indexed library engine.
//!
//! Copies are stored by id along with their state, and a per-edition index
//! lists which copies belong to each edition and how many of them are on the
//! shelf. Edition queries touch only that edition's copies, and `find` scans
//! distinct editions instead of every copy.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::search::matching_editions;
use super::traits::{CopyState, Library};
use super::transition_mismatch;
use crate::config::{LibraryConfig, SearchScope};
use crate::copy::{BookCopy, CopyId};
use crate::edition::Edition;
use crate::error::{Result, ShelfError};

#[derive(Debug)]
struct Tracked {
    copy: BookCopy,
    state: CopyState,
}

#[derive(Debug, Default)]
struct EditionIndex {
    copies: HashSet<CopyId>,
    on_shelf: usize,
}

/// A large collection, indexed by edition.
#[derive(Debug, Default)]
pub struct BigLibrary {
    config: LibraryConfig,
    copies: HashMap<CopyId, Tracked>,
    // Invariant: an edition is present iff it has at least one tracked copy.
    editions: HashMap<Edition, EditionIndex>,
}

impl BigLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LibraryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Move a tracked copy from `from` to `to`, if it is currently in `from`.
    fn transition(&mut self, copy: &BookCopy, from: CopyState, to: CopyState) -> bool {
        let Some(tracked) = self.copies.get_mut(&copy.id()) else {
            return false;
        };
        if tracked.state != from {
            return false;
        }
        tracked.state = to;

        if let Some(index) = self.editions.get_mut(copy.edition()) {
            match to {
                CopyState::OnShelf => index.on_shelf += 1,
                CopyState::CheckedOut => index.on_shelf = index.on_shelf.saturating_sub(1),
            }
        }
        true
    }

    fn copies_in(&self, edition: &Edition, wanted: Option<CopyState>) -> HashSet<BookCopy> {
        let Some(index) = self.editions.get(edition) else {
            return HashSet::new();
        };
        index
            .copies
            .iter()
            .filter_map(|id| self.copies.get(id))
            .filter(|tracked| wanted.map_or(true, |state| tracked.state == state))
            .map(|tracked| tracked.copy.clone())
            .collect()
    }
}

impl Library for BigLibrary {
    fn config(&self) -> &LibraryConfig {
        &self.config
    }

    fn buy(&mut self, edition: &Edition) -> BookCopy {
        let copy = BookCopy::new(edition.clone());
        let index = self.editions.entry(edition.clone()).or_default();
        index.copies.insert(copy.id());
        index.on_shelf += 1;
        self.copies.insert(
            copy.id(),
            Tracked {
                copy: copy.clone(),
                state: CopyState::OnShelf,
            },
        );
        debug!(copy = %copy.id(), title = edition.title(), year = edition.year(), "Bought copy");
        copy
    }

    fn checkout(&mut self, copy: &BookCopy) -> Result<()> {
        if self.transition(copy, CopyState::OnShelf, CopyState::CheckedOut) {
            debug!(copy = %copy.id(), "Checked out copy");
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
        if self.transition(copy, CopyState::CheckedOut, CopyState::OnShelf) {
            debug!(copy = %copy.id(), "Checked in copy");
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
        self.copies.get(&copy.id()).map(|tracked| tracked.state)
    }

    fn all_copies(&self, edition: &Edition) -> HashSet<BookCopy> {
        self.copies_in(edition, None)
    }

    fn available_copies(&self, edition: &Edition) -> HashSet<BookCopy> {
        self.copies_in(edition, Some(CopyState::OnShelf))
    }

    fn checked_out_copies(&self, edition: &Edition) -> HashSet<BookCopy> {
        self.copies_in(edition, Some(CopyState::CheckedOut))
    }

    fn find(&self, query: &str) -> Vec<Edition> {
        let scope = self.config.search.scope;
        let candidates = self
            .editions
            .iter()
            .filter(|(_, index)| scope == SearchScope::Catalog || index.on_shelf > 0)
            .map(|(edition, _)| edition);
        matching_editions(candidates, query, self.config.search.order)
    }

    fn lose(&mut self, copy: &BookCopy) {
        let Some(tracked) = self.copies.remove(&copy.id()) else {
            return;
        };

        if let Entry::Occupied(mut slot) = self.editions.entry(copy.edition().clone()) {
            let index = slot.get_mut();
            index.copies.remove(&copy.id());
            if tracked.state == CopyState::OnShelf {
                index.on_shelf = index.on_shelf.saturating_sub(1);
            }
            if index.copies.is_empty() {
                slot.remove();
            }
        }
        debug!(copy = %copy.id(), "Lost copy");
    }

    fn len(&self) -> usize {
        self.copies.len()
    }

    fn check_integrity(&self) -> Result<()> {
        let mut indexed = 0;
        for (edition, index) in &self.editions {
            if index.copies.is_empty() {
                return Err(ShelfError::Integrity(format!(
                    "edition index for \"{}\" is empty",
                    edition.title()
                )));
            }

            let mut on_shelf = 0;
            for id in &index.copies {
                let tracked = self.copies.get(id).ok_or_else(|| {
                    ShelfError::Integrity(format!("indexed copy {} is not tracked", id))
                })?;
                if tracked.copy.edition() != edition {
                    return Err(ShelfError::Integrity(format!(
                        "copy {} is indexed under the wrong edition",
                        id
                    )));
                }
                if tracked.state == CopyState::OnShelf {
                    on_shelf += 1;
                }
            }
            if on_shelf != index.on_shelf {
                return Err(ShelfError::Integrity(format!(
                    "edition \"{}\" counts {} copies on the shelf, found {}",
                    edition.title(),
                    index.on_shelf,
                    on_shelf
                )));
            }
            indexed += index.copies.len();
        }

        if indexed != self.copies.len() {
            return Err(ShelfError::Integrity(format!(
                "{} copies tracked but {} indexed",
                self.copies.len(),
                indexed
            )));
        }
        for (id, tracked) in &self.copies {
            if tracked.copy.id() != *id {
                return Err(ShelfError::Integrity(format!(
                    "copy {} is stored under id {}",
                    tracked.copy.id(),
                    id
                )));
            }
        }
        Ok(())
    }
}
