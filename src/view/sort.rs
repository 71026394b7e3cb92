use std::cmp::{Ordering, Reverse};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::{Book, SortField};

/// Order `indices` ascending by `field` of the referenced books.
///
/// [`SortField::None`] leaves `indices` untouched. The sort is stable, so
/// equal keys keep their filtered order and re-sorting is a no-op.
pub fn sort_indices(books: &[Book], indices: &mut [usize], field: SortField) {
    let Some(field) = field.field() else {
        return;
    };
    indices.sort_by_cached_key(|&idx| {
        CollationKey::new(books.get(idx).map_or("", |book| book.get(field)))
    });
}

/// Sort key comparing base letters first, then accents, then case.
///
/// Levels follow the usual collation order: `e` and `é` tie on the first
/// level, `e` sorts before `é` on the second, and `a` before `A` on the third.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey<'a> {
    base: String,
    accents: String,
    case: Reverse<&'a str>,
}

impl<'a> CollationKey<'a> {
    fn new(value: &'a str) -> Self {
        Self {
            base: value
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .flat_map(char::to_lowercase)
                .collect(),
            accents: value.nfd().flat_map(char::to_lowercase).collect(),
            case: Reverse(value),
        }
    }
}

/// Accent- and case-insensitive string ordering. Ties are broken with
/// unaccented before accented, then lowercase before uppercase.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
