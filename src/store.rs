//! Record store: the pristine upload and the editable working set.

use crate::types::Book;

/// Holds the table snapshot taken at upload time next to the working set
/// that edits and deletes are applied to.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    snapshot: Vec<Book>,
    working: Vec<Book>,
}

impl RecordStore {
    /// Create a store whose snapshot and working set both start as `books`.
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            snapshot: books.clone(),
            working: books,
        }
    }

    /// Rows as uploaded.
    #[must_use]
    pub fn snapshot(&self) -> &[Book] {
        &self.snapshot
    }

    /// Rows including committed edits and deletes.
    #[must_use]
    pub fn working(&self) -> &[Book] {
        &self.working
    }

    pub(crate) fn working_mut(&mut self) -> &mut Vec<Book> {
        &mut self.working
    }

    /// Replace the working set with a fresh copy of the snapshot.
    pub fn revert(&mut self) {
        self.working.clone_from(&self.snapshot);
    }

    /// Drop all rows.
    pub fn clear(&mut self) {
        self.snapshot.clear();
        self.working.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.working.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// True when the working set differs from the snapshot.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.working != self.snapshot
    }
}
