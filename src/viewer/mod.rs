//! `BookGrid` - the entry point the browser page drives.
//!
//! This module provides the WASM-exported `BookGrid` struct that handles:
//! - Upload tokens and parsing of picked files
//! - Search text, sort column, row edits, deletes and revert
//! - The virtualized row window (scroll position, visible range)
//! - CSV download
//!
//! The page owns the DOM: it forwards input events here and redraws the rows
//! returned by `virtual_rows`.

mod scroll;

use wasm_bindgen::prelude::*;

use crate::config::GridConfig;
use crate::layout::RowViewport;
use crate::state::CatalogState;
use crate::upload::{UploadOutcome, UploadToken};

#[cfg(not(target_arch = "wasm32"))]
use crate::error::Result;
#[cfg(not(target_arch = "wasm32"))]
use crate::layout::VirtualRow;
#[cfg(not(target_arch = "wasm32"))]
use crate::types::DisplayRow;
use crate::types::{EditableField, SortField};

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// The catalog editor exported to JavaScript
#[wasm_bindgen]
pub struct BookGrid {
    state: CatalogState,
    viewport: RowViewport,
    config: GridConfig,
}

// ============================================================================
// All targets
// ============================================================================

#[wasm_bindgen]
impl BookGrid {
    /// Create an editor with the default configuration.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> BookGrid {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();
        Self::from_config(GridConfig::default())
    }

    // ---- Upload ----

    /// Start an upload. Pass the returned token (a `BigInt` in JavaScript)
    /// back to `complete_upload` or `fail_upload` once the file has been read.
    #[wasm_bindgen]
    pub fn begin_upload(&mut self) -> u64 {
        self.state.begin_upload().value()
    }

    /// Hand over the bytes read for `token`.
    #[wasm_bindgen]
    pub fn complete_upload(&mut self, token: u64, data: &[u8]) -> UploadOutcome {
        let outcome = self
            .state
            .complete_upload(UploadToken::from_raw(token), data);
        if outcome != UploadOutcome::Stale {
            self.viewport.set_scroll(0.0, self.state.displayed_len());
        }
        outcome
    }

    /// Report a host-side read error for `token`.
    #[wasm_bindgen]
    pub fn fail_upload(&mut self, token: u64, message: &str) -> UploadOutcome {
        let outcome = self
            .state
            .fail_upload(UploadToken::from_raw(token), message);
        if outcome != UploadOutcome::Stale {
            self.viewport.set_scroll(0.0, 0);
        }
        outcome
    }

    /// Whether an upload is still being read.
    #[wasm_bindgen]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Message describing why the last upload failed.
    #[wasm_bindgen]
    pub fn last_error(&self) -> Option<String> {
        self.state.last_error().map(str::to_string)
    }

    /// ISBNs that appear on more than one row of the loaded file.
    #[wasm_bindgen]
    pub fn duplicate_isbns(&self) -> Vec<String> {
        self.state.duplicate_isbns().to_vec()
    }

    // ---- Search / sort ----

    #[wasm_bindgen]
    pub fn set_search(&mut self, query: &str) {
        self.state.set_search(query);
        self.viewport.clamp_scroll(self.state.displayed_len());
    }

    #[wasm_bindgen]
    pub fn search(&self) -> String {
        self.state.search().to_string()
    }

    /// Current sort column as the dropdown value (empty for none).
    #[wasm_bindgen]
    pub fn sort_field(&self) -> String {
        self.state.sort().as_str().to_string()
    }

    // ---- Editing ----

    #[wasm_bindgen]
    pub fn begin_edit(&mut self, isbn: &str) -> bool {
        self.state.begin_edit(isbn)
    }

    /// Commit the row under edit. Returns how many rows were written.
    #[wasm_bindgen]
    pub fn commit_edit(&mut self, isbn: &str) -> u32 {
        let written = self.state.commit_edit(isbn);
        self.viewport.clamp_scroll(self.state.displayed_len());
        to_u32(written)
    }

    #[wasm_bindgen]
    pub fn cancel_edit(&mut self, isbn: &str) -> bool {
        self.state.cancel_edit(isbn)
    }

    #[wasm_bindgen]
    pub fn editing_isbn(&self) -> Option<String> {
        self.state.editing_isbn().map(str::to_string)
    }

    /// Delete every row with `isbn`. Returns how many rows were removed.
    #[wasm_bindgen]
    pub fn delete_row(&mut self, isbn: &str) -> u32 {
        let removed = self.state.delete_row(isbn);
        self.viewport.clamp_scroll(self.state.displayed_len());
        to_u32(removed)
    }

    /// Discard all edits and deletes, clear search and sort.
    #[wasm_bindgen]
    pub fn revert_all(&mut self) {
        self.state.revert_all();
        self.viewport.clamp_scroll(self.state.displayed_len());
    }

    // ---- Counts ----

    /// Rows in the working set.
    #[wasm_bindgen]
    pub fn row_count(&self) -> u32 {
        to_u32(self.state.working().len())
    }

    /// Rows after search.
    #[wasm_bindgen]
    pub fn displayed_count(&self) -> u32 {
        to_u32(self.state.displayed_len())
    }

    /// Whether the download button should be enabled.
    #[wasm_bindgen]
    pub fn can_download(&self) -> bool {
        self.state.can_download()
    }

    /// File name to save a download under.
    #[wasm_bindgen]
    pub fn download_file_name(&self) -> String {
        crate::csv_codec::DOWNLOAD_FILE_NAME.to_string()
    }
}

impl Default for BookGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BookGrid {
    fn from_config(config: GridConfig) -> Self {
        Self {
            state: CatalogState::new(),
            viewport: RowViewport::from_config(&config),
            config,
        }
    }

    /// The underlying state.
    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &RowViewport {
        &self.viewport
    }

    fn apply_sort(&mut self, sort: SortField) {
        self.state.set_sort(sort);
    }

    fn generate_sample(&self, seed: u64) -> crate::error::Result<String> {
        crate::sample::generate_sample_csv(self.config.sample_rows, seed)
    }

    fn apply_load(&mut self, data: &[u8]) -> crate::error::Result<usize> {
        let result = self.state.load(data);
        self.viewport.set_scroll(0.0, self.state.displayed_len());
        result
    }
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl BookGrid {
    /// Create an editor from a config object such as
    /// `{ rowHeight: 40, overscan: 8, viewportHeight: 720 }`.
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Result<BookGrid, JsValue> {
        console_error_panic_hook::set_once();
        let config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?
        };
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Parse and apply a file in one call. Returns the number of rows.
    #[wasm_bindgen]
    pub fn load(&mut self, data: &[u8]) -> Result<u32, JsValue> {
        Ok(to_u32(self.apply_load(data)?))
    }

    /// Set the sort column from the dropdown value.
    #[wasm_bindgen]
    pub fn set_sort(&mut self, field: &str) -> Result<(), JsValue> {
        let sort: SortField = field.parse()?;
        self.apply_sort(sort);
        Ok(())
    }

    /// Stage a field value for the row under edit.
    #[wasm_bindgen]
    pub fn stage_field(&mut self, isbn: &str, field: &str, value: &str) -> Result<bool, JsValue> {
        let field: EditableField = field.parse()?;
        Ok(self.state.stage_field(isbn, field, value))
    }

    /// The working set as CSV, or `undefined` when there are no rows.
    #[wasm_bindgen]
    pub fn download_csv(&self) -> Result<Option<String>, JsValue> {
        Ok(self.state.download_csv()?)
    }

    /// A generated catalog of `sampleRows` books as CSV text.
    #[wasm_bindgen]
    pub fn sample_csv(&self, seed: u32) -> Result<String, JsValue> {
        Ok(self.generate_sample(u64::from(seed))?)
    }

    /// Rows to draw, as `{ index, start, size }` objects.
    #[wasm_bindgen]
    pub fn virtual_rows(&self) -> Result<JsValue, JsValue> {
        let rows = self.viewport.virtual_rows(self.state.displayed_len());
        serde_wasm_bindgen::to_value(&rows)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Displayed row at `position`, with staged edits applied.
    #[wasm_bindgen]
    pub fn row(&self, position: usize) -> Result<JsValue, JsValue> {
        match self.state.display_row(position) {
            Some(row) => serde_wasm_bindgen::to_value(&row)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}"))),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Display rows for the current virtual window.
    #[wasm_bindgen]
    pub fn visible_row_data(&self) -> Result<JsValue, JsValue> {
        let range = self.viewport.visible_range(self.state.displayed_len());
        let rows = self.state.display_rows(range);
        serde_wasm_bindgen::to_value(&rows)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

// ============================================================================
// Non-WASM32 Implementation (for tests/CLI)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl BookGrid {
    /// Create an editor from a validated config.
    ///
    /// # Errors
    /// Returns [`crate::error::BookgridError::Config`] for unusable geometry.
    pub fn with_config(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Parse and apply a file in one call. Returns the number of rows.
    ///
    /// # Errors
    /// Returns the parse error; the grid is left empty.
    pub fn load(&mut self, data: &[u8]) -> Result<usize> {
        self.apply_load(data)
    }

    /// Set the sort column from the dropdown value.
    ///
    /// # Errors
    /// Returns [`crate::error::BookgridError::UnknownField`] for values
    /// other than a sortable column or none.
    pub fn set_sort(&mut self, field: &str) -> Result<()> {
        let sort: SortField = field.parse()?;
        self.apply_sort(sort);
        Ok(())
    }

    /// Stage a field value for the row under edit.
    ///
    /// # Errors
    /// Rejects unknown field names and the ISBN column.
    pub fn stage_field(&mut self, isbn: &str, field: &str, value: &str) -> Result<bool> {
        let field: EditableField = field.parse()?;
        Ok(self.state.stage_field(isbn, field, value))
    }

    /// The working set as CSV, or `None` when there are no rows.
    ///
    /// # Errors
    /// Propagates writer failures from the CSV encoder.
    pub fn download_csv(&self) -> Result<Option<String>> {
        self.state.download_csv()
    }

    /// A generated catalog of `sample_rows` books as CSV text.
    ///
    /// # Errors
    /// Propagates writer failures from the CSV encoder.
    pub fn sample_csv(&self, seed: u64) -> Result<String> {
        self.generate_sample(seed)
    }

    /// Rows to draw for the current scroll position.
    #[must_use]
    pub fn virtual_rows(&self) -> Vec<VirtualRow> {
        self.viewport.virtual_rows(self.state.displayed_len())
    }

    /// Displayed row at `position`, with staged edits applied.
    #[must_use]
    pub fn row(&self, position: usize) -> Option<DisplayRow> {
        self.state.display_row(position)
    }

    /// Display rows for the current virtual window.
    #[must_use]
    pub fn visible_row_data(&self) -> Vec<DisplayRow> {
        let range = self.viewport.visible_range(self.state.displayed_len());
        self.state.display_rows(range)
    }
}
