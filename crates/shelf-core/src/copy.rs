//! Physical book copies.
//!
//! A `BookCopy` is one individually trackable instance of an [`Edition`].
//! Copies are compared by identity: two copies of the same edition in the
//! same condition are still different copies. The handle is cheap to clone,
//! and clones refer to the same physical copy (they share its condition).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::edition::Edition;

/// Stable identity of a physical copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CopyId(Uuid);

impl CopyId {
    fn generate() -> Self {
        CopyId(Uuid::new_v4())
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CopyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Physical condition of a copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Good,
    Damaged,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Good => "good",
            Condition::Damaged => "damaged",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
struct CopyInner {
    id: CopyId,
    edition: Edition,
    condition: Mutex<Condition>,
}

/// Handle to one physical copy of an edition.
#[derive(Debug, Clone)]
pub struct BookCopy {
    inner: Arc<CopyInner>,
}

impl BookCopy {
    /// Make a new copy of `edition`, initially in good condition.
    ///
    /// The copy is not tracked by any library; use [`Library::buy`] to add
    /// a copy to a collection.
    ///
    /// [`Library::buy`]: crate::Library::buy
    pub fn new(edition: Edition) -> Self {
        Self {
            inner: Arc::new(CopyInner {
                id: CopyId::generate(),
                edition,
                condition: Mutex::new(Condition::Good),
            }),
        }
    }

    pub fn id(&self) -> CopyId {
        self.inner.id
    }

    /// The edition this is a copy of.
    pub fn edition(&self) -> &Edition {
        &self.inner.edition
    }

    pub fn condition(&self) -> Condition {
        *self
            .inner
            .condition
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the latest condition, typically after a librarian inspects a
    /// returned copy. Visible through every handle to this copy.
    pub fn set_condition(&self, condition: Condition) {
        *self
            .inner
            .condition
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = condition;
    }
}

impl PartialEq for BookCopy {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for BookCopy {}

impl Hash for BookCopy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for BookCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} condition: {}", self.inner.edition, self.condition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edition() -> Edition {
        Edition::new("Dune", ["Frank Herbert"], 1965).unwrap()
    }

    #[test]
    fn test_new_copy_is_good() {
        let copy = BookCopy::new(edition());
        assert_eq!(copy.condition(), Condition::Good);
        assert_eq!(copy.edition(), &edition());
    }

    #[test]
    fn test_set_condition_is_idempotent() {
        let copy = BookCopy::new(edition());
        copy.set_condition(Condition::Damaged);
        copy.set_condition(Condition::Damaged);
        assert_eq!(copy.condition(), Condition::Damaged);
        copy.set_condition(Condition::Good);
        assert_eq!(copy.condition(), Condition::Good);
    }

    #[test]
    fn test_copies_of_same_edition_are_distinct() {
        let first = BookCopy::new(edition());
        let second = BookCopy::new(edition());
        assert_ne!(first, second);
        assert_ne!(first.id(), second.id());
        assert_eq!(first.edition(), second.edition());
    }

    #[test]
    fn test_clone_is_same_copy_and_shares_condition() {
        let copy = BookCopy::new(edition());
        let handle = copy.clone();
        assert_eq!(copy, handle);

        handle.set_condition(Condition::Damaged);
        assert_eq!(copy.condition(), Condition::Damaged);
    }

    #[test]
    fn test_display_includes_condition() {
        let copy = BookCopy::new(edition());
        assert!(copy.to_string().ends_with("condition: good"));
        copy.set_condition(Condition::Damaged);
        assert!(copy.to_string().ends_with("condition: damaged"));
    }
}
