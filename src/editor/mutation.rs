//! Working-set mutations.
//!
//! Rows are addressed by ISBN. When several rows share an ISBN every one of
//! them is changed.

use super::EditSession;
use crate::types::Book;

/// Write a committed session into every row with the session's ISBN.
///
/// Returns the number of rows written.
pub(crate) fn apply_edit(books: &mut [Book], session: &EditSession) -> usize {
    let mut written = 0;
    for book in books.iter_mut().filter(|b| b.isbn == session.isbn()) {
        session.apply_to(book);
        written += 1;
    }
    written
}

/// Remove every row with `isbn`. Returns the number of rows removed.
pub(crate) fn delete_rows(books: &mut Vec<Book>, isbn: &str) -> usize {
    let before = books.len();
    books.retain(|b| b.isbn != isbn);
    before - books.len()
}
