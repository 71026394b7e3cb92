use crate::types::Book;

/// Indices of the books whose Title, Author, or Genre contains `query`,
/// compared case-insensitively. Order is preserved.
///
/// A blank query (empty or whitespace only) keeps every row.
#[must_use]
pub fn filter_indices(books: &[Book], query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..books.len()).collect();
    }
    let needle = query.to_lowercase();
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| matches_query(book, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Whether `book` matches an already lowercased query.
///
/// ISBN and PublishedYear are never searched.
#[must_use]
pub fn matches_query(book: &Book, needle: &str) -> bool {
    [&book.title, &book.author, &book.genre]
        .into_iter()
        .any(|value| value.to_lowercase().contains(needle))
}
