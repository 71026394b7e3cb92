//! Row edit controller.
//!
//! At most one row is in edit mode at a time. The active edit is held as an
//! [`EditSession`] keyed by ISBN; staged values stay in the session until it
//! is committed into the working set or cancelled.

pub(crate) mod mutation;

use std::borrow::Cow;

use crate::types::{Book, EditableField};

/// Staged changes for the row being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    isbn: String,
    staged: [Option<String>; 4],
}

impl EditSession {
    fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            staged: Default::default(),
        }
    }

    /// ISBN of the row under edit.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Staged value for `field`, if one was entered.
    #[must_use]
    pub fn staged(&self, field: EditableField) -> Option<&str> {
        self.staged.get(field.slot()).and_then(Option::as_deref)
    }

    /// True when nothing has been staged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staged.iter().all(Option::is_none)
    }

    fn stage(&mut self, field: EditableField, value: String) {
        if let Some(slot) = self.staged.get_mut(field.slot()) {
            *slot = Some(value);
        }
    }

    /// Write staged values over `book`.
    pub fn apply_to(&self, book: &mut Book) {
        for field in EditableField::ALL {
            if let Some(value) = self.staged(field) {
                book.set(field, value.to_string());
            }
        }
    }
}

/// Tracks which row, if any, is in edit mode.
#[derive(Debug, Clone, Default)]
pub struct RowEditController {
    active: Option<EditSession>,
}

impl RowEditController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `isbn` into edit mode.
    ///
    /// Re-entering the row already under edit keeps its staged values.
    /// Switching rows returns the session that was discarded.
    pub fn begin(&mut self, isbn: &str) -> Option<EditSession> {
        if self.is_editing(isbn) {
            return None;
        }
        self.active.replace(EditSession::new(isbn))
    }

    /// Stage a value for the row under edit. Returns `false` when `isbn`
    /// is not the active row.
    pub fn stage(&mut self, isbn: &str, field: EditableField, value: String) -> bool {
        match self.active.as_mut() {
            Some(session) if session.isbn == isbn => {
                session.stage(field, value);
                true
            }
            _ => false,
        }
    }

    /// End the edit on `isbn` and hand back its session.
    pub fn finish(&mut self, isbn: &str) -> Option<EditSession> {
        if self.is_editing(isbn) {
            self.active.take()
        } else {
            None
        }
    }

    /// Drop any active edit.
    pub fn clear(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn is_editing(&self, isbn: &str) -> bool {
        self.active.as_ref().is_some_and(|s| s.isbn == isbn)
    }

    #[must_use]
    pub fn editing_isbn(&self) -> Option<&str> {
        self.active.as_ref().map(EditSession::isbn)
    }

    #[must_use]
    pub fn session(&self) -> Option<&EditSession> {
        self.active.as_ref()
    }

    /// `book` as it should be shown: with staged values when it is the row
    /// under edit, untouched otherwise.
    #[must_use]
    pub fn overlay<'a>(&self, book: &'a Book) -> Cow<'a, Book> {
        match self.active.as_ref() {
            Some(session) if session.isbn == book.isbn && !session.is_empty() => {
                let mut staged = book.clone();
                session.apply_to(&mut staged);
                Cow::Owned(staged)
            }
            _ => Cow::Borrowed(book),
        }
    }
}
