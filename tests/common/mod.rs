//! Shared fixtures for the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing
)]

use bookgrid::{Book, CatalogState};

/// Three-row catalog used by the search/sort/edit scenarios.
pub const SCENARIO_CSV: &str = "Title,Author,Genre,PublishedYear,ISBN\n\"A\",\"B\",\"Fic\",\"2000\",\"111\"\n\"C\",\"D\",\"Sci\",\"2010\",\"222\"\n\"E\",\"F\",\"Fic\",\"1990\",\"333\"";

/// Load `csv` into a fresh state, panicking on parse errors.
#[must_use]
pub fn load(csv: &str) -> CatalogState {
    let mut state = CatalogState::new();
    state.load(csv.as_bytes()).expect("fixture CSV should parse");
    state
}

/// ISBNs of the displayed rows, in display order.
#[must_use]
pub fn shown_isbns(state: &CatalogState) -> Vec<String> {
    state.displayed_books().map(|b| b.isbn.clone()).collect()
}

/// Find a working-set row by ISBN.
#[must_use]
pub fn working_row<'a>(state: &'a CatalogState, isbn: &str) -> &'a Book {
    state
        .working()
        .iter()
        .find(|b| b.isbn == isbn)
        .expect("row should exist")
}

/// A varied catalog for property-style checks.
#[must_use]
pub fn mixed_books() -> Vec<Book> {
    vec![
        Book::new("The Hobbit", "Tolkien", "Fantasy", "1937", "1"),
        Book::new("dune", "Herbert", "Science Fiction", "1965", "2"),
        Book::new("Emma", "Austen", "Romance", "1815", "3"),
        Book::new("Neuromancer", "Gibson", "science fiction", "1984", "4"),
        Book::new("Beloved", "Morrison", "Fiction", "1987", "5"),
        Book::new("Fiction Factory", "Unknown", "Essay", "", "6"),
        Book::new("", "", "", "2001", "7"),
    ]
}
