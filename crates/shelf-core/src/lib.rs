//! # Shelf Core
//!
//! Core library for Shelf - an inventory of the physical books in a small
//! library.
//!
//! This crate provides the domain model and the inventory engines,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **edition**: Immutable `Edition` values (title, authors, year)
//! - **copy**: `BookCopy` handles, one per physical copy, tracked by identity
//! - **library**: The `Library` trait and its engines (`SmallLibrary`, `BigLibrary`)
//! - **config**: Engine selection and policy settings

pub mod config;
pub mod copy;
pub mod edition;
pub mod error;
pub mod library;

pub use config::{
    EngineKind, LibraryConfig, SearchOrder, SearchScope, TransitionPolicy,
};
pub use copy::{BookCopy, Condition, CopyId};
pub use edition::Edition;
pub use error::{Result, ShelfError};
pub use library::{open_library, BigLibrary, CopyState, Library, SmallLibrary};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
