//! bookgrid - book catalog CSV editor core
//!
//! Loads a catalog CSV (Title, Author, Genre, PublishedYear, ISBN) and keeps
//! a large table responsive in the browser:
//! - Case-insensitive search over Title, Author and Genre
//! - Single-column sort, applied after the search
//! - Inline row edits with staged values, commit and cancel
//! - Delete rows, revert everything to the uploaded file
//! - Virtualized rows (only the scrolled window plus overscan is drawn)
//! - RFC 4180 CSV download
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { BookGrid } from 'bookgrid';
//! await init();
//! const grid = new BookGrid();
//! const token = grid.begin_upload();
//! grid.complete_upload(token, new Uint8Array(await file.arrayBuffer()));
//! grid.set_search('fic');
//! for (const row of grid.virtual_rows()) draw(grid.row(row.index), row.start);
//! ```

pub mod config;
pub mod csv_codec;
pub mod editor;
pub mod error;
pub mod layout;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod sample;
pub mod state;
pub mod store;
pub mod types;
pub mod upload;
pub mod view;
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::GridConfig;
pub use csv_codec::{parse_catalog, write_catalog, ParsedCatalog};
pub use error::{BookgridError, Result};
pub use state::CatalogState;
pub use types::*;
pub use upload::{UploadOutcome, UploadToken};
pub use viewer::BookGrid;

/// Generate a sample catalog CSV with `rows` random books.
///
/// # Errors
/// Returns an error if the CSV encoder fails.
#[wasm_bindgen]
pub fn generate_sample_csv(rows: usize, seed: u32) -> std::result::Result<String, JsValue> {
    sample::generate_sample_csv(rows, u64::from(seed))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// File name for a downloaded sample catalog.
#[must_use]
#[wasm_bindgen]
pub fn sample_file_name() -> String {
    csv_codec::SAMPLE_FILE_NAME.to_string()
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
