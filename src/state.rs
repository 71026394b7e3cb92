//! Catalog editor state.
//!
//! [`CatalogState`] owns the record store, the search/sort inputs, the edit
//! controller and the derived displayed set. Every transition runs to
//! completion and leaves the displayed set consistent with the working set,
//! so the state can be driven and inspected without any UI attached.

use crate::csv_codec::{self, ParsedCatalog};
use crate::editor::{mutation, RowEditController};
use crate::error::Result;
use crate::store::RecordStore;
use crate::types::{Book, DisplayRow, EditableField, SortField};
use crate::upload::{UploadOutcome, UploadToken, UploadTracker};
use crate::view;

/// The editor's complete in-memory state.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    store: RecordStore,
    search: String,
    sort: SortField,
    /// Working-set indices in display order.
    displayed: Vec<usize>,
    editor: RowEditController,
    uploads: UploadTracker,
    last_error: Option<String>,
    duplicate_isbns: Vec<String>,
}

impl CatalogState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State holding `books` as if they had just been uploaded.
    #[must_use]
    pub fn from_books(books: Vec<Book>) -> Self {
        let mut state = Self::new();
        state.replace_catalog(ParsedCatalog {
            books,
            duplicate_isbns: Vec::new(),
        });
        state
    }

    // ---- Upload ----

    /// Register a new upload and return its token. The state reports
    /// loading until the matching completion arrives.
    pub fn begin_upload(&mut self) -> UploadToken {
        let token = self.uploads.issue();
        tracing::debug!(token = token.value(), "upload started");
        token
    }

    /// Apply the bytes read for `token`.
    ///
    /// Completions for anything but the latest token are ignored. A parse
    /// failure empties the catalog and records the error message.
    pub fn complete_upload(&mut self, token: UploadToken, data: &[u8]) -> UploadOutcome {
        if !self.uploads.settle(token) {
            tracing::warn!(token = token.value(), "ignoring stale upload");
            return UploadOutcome::Stale;
        }
        match csv_codec::parse_catalog(data) {
            Ok(parsed) => {
                self.replace_catalog(parsed);
                UploadOutcome::Applied
            }
            Err(e) => {
                self.enter_failed(e.to_string());
                UploadOutcome::Failed
            }
        }
    }

    /// Report that the host could not read the file for `token`.
    pub fn fail_upload(&mut self, token: UploadToken, message: &str) -> UploadOutcome {
        if !self.uploads.settle(token) {
            tracing::warn!(token = token.value(), "ignoring stale upload failure");
            return UploadOutcome::Stale;
        }
        self.enter_failed(message.to_string());
        UploadOutcome::Failed
    }

    /// Parse and apply `data` in one step. Returns the number of rows loaded.
    ///
    /// # Errors
    /// Returns the parse error; the state is left empty with `last_error` set.
    pub fn load(&mut self, data: &[u8]) -> Result<usize> {
        let token = self.begin_upload();
        self.uploads.settle(token);
        match csv_codec::parse_catalog(data) {
            Ok(parsed) => {
                self.replace_catalog(parsed);
                Ok(self.store.len())
            }
            Err(e) => {
                self.enter_failed(e.to_string());
                Err(e)
            }
        }
    }

    fn replace_catalog(&mut self, parsed: ParsedCatalog) {
        let rows = parsed.books.len();
        self.store = RecordStore::new(parsed.books);
        self.duplicate_isbns = parsed.duplicate_isbns;
        self.last_error = None;
        self.reset_view();
        tracing::info!(rows, "catalog loaded");
    }

    fn enter_failed(&mut self, message: String) {
        tracing::warn!(error = %message, "upload failed; catalog cleared");
        self.store.clear();
        self.duplicate_isbns.clear();
        self.last_error = Some(message);
        self.reset_view();
    }

    fn reset_view(&mut self) {
        self.search.clear();
        self.sort = SortField::None;
        self.editor.clear();
        self.recompute();
    }

    /// An upload is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.uploads.is_pending()
    }

    /// Message from the last failed upload, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// ISBNs that occurred more than once in the loaded file.
    #[must_use]
    pub fn duplicate_isbns(&self) -> &[String] {
        &self.duplicate_isbns
    }

    // ---- Accessors ----

    #[must_use]
    pub fn working(&self) -> &[Book] {
        self.store.working()
    }

    #[must_use]
    pub fn snapshot(&self) -> &[Book] {
        self.store.snapshot()
    }

    /// True when edits or deletes have been committed since the upload.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.store.is_modified()
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn sort(&self) -> SortField {
        self.sort
    }

    /// Working-set indices in display order.
    #[must_use]
    pub fn displayed_indices(&self) -> &[usize] {
        &self.displayed
    }

    #[must_use]
    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    /// Displayed books with committed values.
    pub fn displayed_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.displayed
            .iter()
            .filter_map(|&idx| self.store.working().get(idx))
    }

    /// The row at `position` in the displayed set as it should be drawn,
    /// with staged edit values applied.
    #[must_use]
    pub fn display_row(&self, position: usize) -> Option<DisplayRow> {
        let idx = *self.displayed.get(position)?;
        let book = self.store.working().get(idx)?;
        Some(DisplayRow {
            position,
            editing: self.editor.is_editing(&book.isbn),
            book: self.editor.overlay(book).into_owned(),
        })
    }

    /// Display rows for `positions`, skipping any out of range.
    #[must_use]
    pub fn display_rows(&self, positions: std::ops::Range<usize>) -> Vec<DisplayRow> {
        positions.filter_map(|p| self.display_row(p)).collect()
    }

    #[must_use]
    pub fn editing_isbn(&self) -> Option<&str> {
        self.editor.editing_isbn()
    }

    #[must_use]
    pub fn is_editing(&self, isbn: &str) -> bool {
        self.editor.is_editing(isbn)
    }

    // ---- Search / sort ----

    /// Change the search text and recompute the displayed set.
    pub fn set_search(&mut self, query: &str) {
        if self.search == query {
            return;
        }
        self.search = query.to_string();
        self.recompute();
    }

    /// Change the sort column and recompute the displayed set.
    pub fn set_sort(&mut self, sort: SortField) {
        if self.sort == sort {
            return;
        }
        self.sort = sort;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.displayed = view::derive_displayed(self.store.working(), &self.search, self.sort);
    }

    // ---- Editing ----

    /// Put the row with `isbn` into edit mode. No-op unless that row is
    /// currently displayed. Starting an edit on another row discards the
    /// previous row's staged values.
    pub fn begin_edit(&mut self, isbn: &str) -> bool {
        let shown = self.displayed_books().any(|b| b.isbn == isbn);
        if !shown {
            tracing::debug!(isbn, "begin_edit: row not displayed");
            return false;
        }
        if let Some(previous) = self.editor.begin(isbn) {
            tracing::debug!(
                discarded = previous.isbn(),
                isbn,
                "switched edit row, staged values dropped"
            );
        }
        true
    }

    /// Stage a new value for a field of the row under edit.
    pub fn stage_field(&mut self, isbn: &str, field: EditableField, value: &str) -> bool {
        self.editor.stage(isbn, field, value.to_string())
    }

    /// Leave edit mode on `isbn` and write its staged values into every
    /// working-set row with that ISBN. Returns the number of rows written.
    pub fn commit_edit(&mut self, isbn: &str) -> usize {
        let Some(session) = self.editor.finish(isbn) else {
            return 0;
        };
        let written = mutation::apply_edit(self.store.working_mut(), &session);
        tracing::debug!(isbn, rows = written, "edit committed");
        self.recompute();
        written
    }

    /// Leave edit mode on `isbn`, dropping its staged values.
    pub fn cancel_edit(&mut self, isbn: &str) -> bool {
        let cancelled = self.editor.finish(isbn).is_some();
        if cancelled {
            tracing::debug!(isbn, "edit cancelled");
        }
        cancelled
    }

    /// Remove every working-set row with `isbn`. Returns the number removed.
    pub fn delete_row(&mut self, isbn: &str) -> usize {
        self.editor.finish(isbn);
        let removed = mutation::delete_rows(self.store.working_mut(), isbn);
        if removed > 0 {
            tracing::debug!(isbn, rows = removed, "rows deleted");
            self.recompute();
        }
        removed
    }

    /// Restore the working set from the upload snapshot and clear search,
    /// sort and any active edit.
    pub fn revert_all(&mut self) {
        self.store.revert();
        self.reset_view();
        tracing::info!(rows = self.store.len(), "reverted to uploaded catalog");
    }

    // ---- Download ----

    /// Whether there is anything to download.
    #[must_use]
    pub fn can_download(&self) -> bool {
        !self.store.is_empty()
    }

    /// The working set as CSV, or `None` when there are no rows.
    ///
    /// # Errors
    /// Propagates writer failures from the CSV encoder.
    pub fn download_csv(&self) -> Result<Option<String>> {
        if !self.can_download() {
            return Ok(None);
        }
        csv_codec::write_catalog(self.store.working()).map(Some)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn state() -> CatalogState {
        CatalogState::from_books(vec![
            Book::new("A", "B", "Fic", "2000", "111"),
            Book::new("C", "D", "Sci", "2010", "222"),
            Book::new("E", "F", "Fic", "1990", "333"),
        ])
    }

    #[test]
    fn test_begin_edit_requires_displayed_row() {
        let mut s = state();
        s.set_search("Sci");
        assert!(!s.begin_edit("111"));
        assert!(s.begin_edit("222"));
        assert_eq!(s.editing_isbn(), Some("222"));
    }

    #[test]
    fn test_staged_values_visible_before_commit() {
        let mut s = state();
        s.begin_edit("111");
        s.stage_field("111", EditableField::Title, "Z");

        let row = s.display_row(0).unwrap();
        assert!(row.editing);
        assert_eq!(row.book.title, "Z");
        assert_eq!(s.working()[0].title, "A");
    }

    #[test]
    fn test_cancel_restores_committed_values() {
        let mut s = state();
        s.begin_edit("111");
        s.stage_field("111", EditableField::Title, "Z");
        assert!(s.cancel_edit("111"));

        let row = s.display_row(0).unwrap();
        assert!(!row.editing);
        assert_eq!(row.book.title, "A");
        assert!(!s.is_modified());
    }

    #[test]
    fn test_commit_unknown_isbn_is_noop() {
        let mut s = state();
        assert_eq!(s.commit_edit("nope"), 0);
        assert!(!s.cancel_edit("nope"));
        assert_eq!(s.delete_row("nope"), 0);
        assert_eq!(s.working().len(), 3);
    }

    #[test]
    fn test_delete_cancels_edit() {
        let mut s = state();
        s.begin_edit("222");
        assert_eq!(s.delete_row("222"), 1);
        assert!(s.editing_isbn().is_none());
        assert_eq!(s.displayed_len(), 2);
    }

    #[test]
    fn test_download_empty_is_none() {
        let s = CatalogState::new();
        assert!(!s.can_download());
        assert!(s.download_csv().unwrap().is_none());
    }
}
