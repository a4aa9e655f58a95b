//! Edition search shared by the engines.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::config::SearchOrder;
use crate::edition::Edition;

/// Collect distinct editions matching `query`, ordered by year.
///
/// Ties on year fall back to title, then authors, so results are
/// deterministic regardless of the engine's iteration order.
pub(super) fn matching_editions<'a, I>(editions: I, query: &str, order: SearchOrder) -> Vec<Edition>
where
    I: IntoIterator<Item = &'a Edition>,
{
    if query.is_empty() {
        return Vec::new();
    }

    let distinct: HashSet<&Edition> = editions
        .into_iter()
        .filter(|edition| edition.matches(query))
        .collect();

    let mut found: Vec<Edition> = distinct.into_iter().cloned().collect();
    found.sort_by(|a, b| compare(a, b, order));
    found
}

fn compare(a: &Edition, b: &Edition, order: SearchOrder) -> Ordering {
    let by_year = match order {
        SearchOrder::OldestFirst => a.year().cmp(&b.year()),
        SearchOrder::NewestFirst => b.year().cmp(&a.year()),
    };
    by_year
        .then_with(|| a.title().cmp(b.title()))
        .then_with(|| a.authors().cmp(&b.authors()))
}
