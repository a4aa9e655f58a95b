//! Book editions.
//!
//! An `Edition` is the published work itself, not a physical object. It is
//! identified by title, ordered author list, and publication year. Case and
//! author order are significant: a book by "Fred" is a different edition
//! than a book by "FRED".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// Immutable value identifying a published edition of a book.
///
/// Equality and hashing are derived from all three fields, so editions built
/// independently from equal inputs are interchangeable as map or set keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EditionRecord")]
pub struct Edition {
    title: String,
    authors: Vec<String>,
    year: i32,
}

/// Unvalidated wire shape of an edition.
#[derive(Debug, Deserialize)]
struct EditionRecord {
    title: String,
    authors: Vec<String>,
    year: i32,
}

impl TryFrom<EditionRecord> for Edition {
    type Error = ShelfError;

    fn try_from(record: EditionRecord) -> Result<Self> {
        Edition::new(record.title, record.authors, record.year)
    }
}

impl Edition {
    /// Make an edition.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidArgument` if:
    /// - `title` has no non-whitespace character
    /// - `authors` is empty, or any author has no non-whitespace character
    /// - `year` is negative
    pub fn new<T, A, S>(title: T, authors: A, year: i32) -> Result<Self>
    where
        T: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let title = title.into();
        let authors: Vec<String> = authors.into_iter().map(Into::into).collect();

        if is_blank(&title) {
            return Err(ShelfError::invalid(
                "title must contain a non-whitespace character",
            ));
        }
        if authors.is_empty() {
            return Err(ShelfError::invalid("edition needs at least one author"));
        }
        if let Some(position) = authors.iter().position(|author| is_blank(author)) {
            return Err(ShelfError::invalid(format!(
                "author #{} must contain a non-whitespace character",
                position + 1
            )));
        }
        if year < 0 {
            return Err(ShelfError::invalid(format!(
                "year must be nonnegative, got {}",
                year
            )));
        }

        Ok(Self {
            title,
            authors,
            year,
        })
    }

    /// Title of this edition.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Authors of this edition, in order.
    ///
    /// Returns a fresh vector on every call; changing it has no effect on
    /// the edition.
    pub fn authors(&self) -> Vec<String> {
        self.authors.clone()
    }

    /// Year this edition was published (Common Era).
    pub fn year(&self) -> i32 {
        self.year
    }

    /// True if `query` occurs in the title or in any author name.
    ///
    /// Matching is case-sensitive. An empty query matches nothing.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        self.title.contains(query) || self.authors.iter().any(|author| author.contains(query))
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {} Authors: {} Year: {}",
            self.title,
            self.authors.join(", "),
            self.year
        )
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of(edition: &Edition) -> u64 {
        let mut hasher = DefaultHasher::new();
        edition.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_accessors_return_inputs() {
        let edition = Edition::new("A", ["B", "C"], 1990).unwrap();
        assert_eq!(edition.title(), "A");
        assert_eq!(edition.authors(), vec!["B", "C"]);
        assert_eq!(edition.year(), 1990);
    }

    #[test]
    fn test_authors_is_a_defensive_copy() {
        let edition = Edition::new("A", ["B", "C"], 1990).unwrap();
        let mut authors = edition.authors();
        authors.push("D".to_string());
        authors[0] = "Z".to_string();
        assert_eq!(edition.authors(), vec!["B", "C"]);
    }

    #[test]
    fn test_input_vector_is_not_shared() {
        let mut authors = vec!["B".to_string()];
        let edition = Edition::new("A", authors.clone(), 0).unwrap();
        authors.push("C".to_string());
        assert_eq!(edition.authors().len(), 1);
    }

    #[test]
    fn test_year_zero_is_valid() {
        assert!(Edition::new("A", ["B"], 0).is_ok());
    }

    #[test]
    fn test_rejects_blank_title() {
        for title in ["", " ", "   \t\n"] {
            let err = Edition::new(title, ["B"], 1990).unwrap_err();
            assert!(matches!(err, ShelfError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_rejects_missing_or_blank_authors() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(
            Edition::new("A", empty, 1990),
            Err(ShelfError::InvalidArgument(_))
        ));
        assert!(matches!(
            Edition::new("A", ["B", " "], 1990),
            Err(ShelfError::InvalidArgument(_))
        ));
        assert!(matches!(
            Edition::new("A", [""], 1990),
            Err(ShelfError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_negative_year() {
        let err = Edition::new("A", ["B"], -1).unwrap_err();
        assert!(err.to_string().contains("nonnegative"));
    }

    #[test]
    fn test_equal_fields_are_equal_and_hash_alike() {
        let first = Edition::new("A", vec!["B".to_string(), "C".to_string()], 1990).unwrap();
        let second = Edition::new(String::from("A"), ["B", "C"], 1990).unwrap();
        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));

        let mut set = HashSet::new();
        set.insert(first);
        assert!(set.contains(&second));
    }

    #[test]
    fn test_author_order_and_case_are_significant() {
        let base = Edition::new("A", ["B", "C"], 1990).unwrap();
        assert_ne!(base, Edition::new("A", ["C", "B"], 1990).unwrap());
        assert_ne!(base, Edition::new("A", ["b", "C"], 1990).unwrap());
        assert_ne!(base, Edition::new("a", ["B", "C"], 1990).unwrap());
        assert_ne!(base, Edition::new("A", ["B", "C"], 1991).unwrap());
    }

    #[test]
    fn test_matches_title_or_any_author_substring() {
        let edition = Edition::new("Structure", ["Abelson", "Sussman"], 1985).unwrap();
        assert!(edition.matches("Struct"));
        assert!(edition.matches("Suss"));
        assert!(edition.matches("son"));
        assert!(!edition.matches("structure"));
        assert!(!edition.matches(""));
    }

    #[test]
    fn test_display() {
        let edition = Edition::new("A", ["B", "C"], 1990).unwrap();
        assert_eq!(edition.to_string(), "Title: A Authors: B, C Year: 1990");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Edition =
            serde_json::from_str(r#"{"title":"A","authors":["B"],"year":1990}"#).unwrap();
        assert_eq!(ok, Edition::new("A", ["B"], 1990).unwrap());

        let bad = serde_json::from_str::<Edition>(r#"{"title":" ","authors":["B"],"year":1990}"#);
        assert!(bad.is_err());
    }
}
