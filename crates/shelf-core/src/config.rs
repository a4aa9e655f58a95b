//! Library configuration.
//!
//! Selects the engine backing a [`Library`](crate::Library) and the policy
//! knobs that the inventory contract leaves open: how mismatched
//! checkout/checkin calls are treated, and what `find` searches.
//! Every field has a default, so an empty TOML document is a valid config.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShelfError;

/// Full configuration for a library instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub library: LibrarySection,
    #[serde(default)]
    pub search: SearchSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySection {
    #[serde(default)]
    pub engine: EngineKind,
    #[serde(default)]
    pub transitions: TransitionPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub scope: SearchScope,
    #[serde(default)]
    pub order: SearchOrder,
}

/// Which engine implementation backs the library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Two identity sets, linear scans. Suited to a home collection.
    #[default]
    Small,
    /// Per-edition index over all tracked copies.
    Big,
}

/// How checkout/checkin treat a copy that is not in the expected set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Ignore the call and leave the library unchanged.
    #[default]
    Permissive,
    /// Return `ShelfError::InvalidTransition`.
    Strict,
}

/// Which copies contribute editions to `find` results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Every tracked copy, on the shelf or checked out.
    #[default]
    Catalog,
    /// Only copies currently on the shelf.
    OnShelf,
}

/// Ordering of `find` results by publication year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

impl LibraryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(mut self, engine: EngineKind) -> Self {
        self.library.engine = engine;
        self
    }

    pub fn transitions(mut self, policy: TransitionPolicy) -> Self {
        self.library.transitions = policy;
        self
    }

    pub fn strict(self) -> Self {
        self.transitions(TransitionPolicy::Strict)
    }

    pub fn search_scope(mut self, scope: SearchScope) -> Self {
        self.search.scope = scope;
        self
    }

    pub fn search_order(mut self, order: SearchOrder) -> Self {
        self.search.order = order;
        self
    }
}

macro_rules! config_enum_str {
    ($ty:ty, $what:literal, { $($variant:path => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ShelfError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
                    $($name => Ok($variant),)+
                    other => Err(ShelfError::Config(format!(
                        concat!("unknown ", $what, " `{}` (expected {})"),
                        other,
                        [$($name),+].join("|")
                    ))),
                }
            }
        }
    };
}

config_enum_str!(EngineKind, "engine", {
    EngineKind::Small => "small",
    EngineKind::Big => "big",
});

config_enum_str!(TransitionPolicy, "transition policy", {
    TransitionPolicy::Permissive => "permissive",
    TransitionPolicy::Strict => "strict",
});

config_enum_str!(SearchScope, "search scope", {
    SearchScope::Catalog => "catalog",
    SearchScope::OnShelf => "on_shelf",
});

config_enum_str!(SearchOrder, "search order", {
    SearchOrder::OldestFirst => "oldest_first",
    SearchOrder::NewestFirst => "newest_first",
});
