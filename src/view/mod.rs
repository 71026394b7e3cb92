//! Derived views over the working set.
//!
//! The displayed set is a list of working-set indices produced by
//! filtering first and sorting second. Sorting only ever sees rows that
//! survived the filter.

mod filter;
mod sort;

pub use filter::{filter_indices, matches_query};
pub use sort::{locale_compare, sort_indices};

use crate::types::{Book, SortField};

/// Recompute the displayed set: filter by `query`, then order by `sort`.
#[must_use]
pub fn derive_displayed(books: &[Book], query: &str, sort: SortField) -> Vec<usize> {
    let mut indices = filter_indices(books, query);
    sort_indices(books, &mut indices, sort);
    tracing::debug!(
        total = books.len(),
        displayed = indices.len(),
        sort = sort.as_str(),
        "recomputed displayed set"
    );
    indices
}
