//! Download format and round-trip tests.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use bookgrid::{parse_catalog, write_catalog, Book, CatalogState, EditableField};
use common::{load, SCENARIO_CSV};
use test_case::test_case;

#[test]
fn test_download_matches_canonical_text() {
    let state = load(SCENARIO_CSV);
    let csv = state.download_csv().unwrap().unwrap();
    assert_eq!(csv, SCENARIO_CSV);
}

#[test]
fn test_download_reparses_to_working_set() {
    let mut state = load(SCENARIO_CSV);
    state.begin_edit("222");
    state.stage_field("222", EditableField::Author, "Le Guin, Ursula");
    state.commit_edit("222");
    state.delete_row("333");

    let csv = state.download_csv().unwrap().unwrap();
    let parsed = parse_catalog(csv.as_bytes()).unwrap();
    assert_eq!(parsed.books, state.working());
}

#[test]
fn test_download_ignores_search_and_sort() {
    let mut state = load(SCENARIO_CSV);
    state.set_search("Sci");
    state.set_sort(bookgrid::SortField::Author);
    assert_eq!(state.download_csv().unwrap().unwrap(), SCENARIO_CSV);
}

#[test]
fn test_download_disabled_when_all_rows_deleted() {
    let mut state = load(SCENARIO_CSV);
    for isbn in ["111", "222", "333"] {
        state.delete_row(isbn);
    }
    assert!(!state.can_download());
    assert_eq!(state.download_csv().unwrap(), None);
}

#[test_case("Say \"hi\"" ; "embedded quotes")]
#[test_case("Doe, Jane" ; "embedded comma")]
#[test_case("two\nlines" ; "embedded newline")]
#[test_case("  padded  " ; "surrounding spaces")]
#[test_case("" ; "empty value")]
fn test_awkward_values_survive_download(value: &str) {
    let books = vec![
        Book::new(value, "Author", value, "1999", "1"),
        Book::new("Plain", value, "Genre", value, "2"),
    ];
    let state = CatalogState::from_books(books.clone());
    let csv = state.download_csv().unwrap().unwrap();
    assert_eq!(parse_catalog(csv.as_bytes()).unwrap().books, books);
}

#[test]
fn test_quotes_are_doubled() {
    let csv = write_catalog(&[Book::new("Say \"hi\"", "", "", "", "1")]).unwrap();
    let line = csv.lines().nth(1).unwrap();
    assert_eq!(line, "\"Say \"\"hi\"\"\",\"\",\"\",\"\",\"1\"");
}

#[test]
fn test_crlf_input_is_accepted() {
    let csv = "Title,Author,Genre,PublishedYear,ISBN\r\nA,B,Fic,2000,111\r\nC,D,Sci,2010,222\r\n";
    let parsed = parse_catalog(csv.as_bytes()).unwrap();
    assert_eq!(parsed.books.len(), 2);
    assert_eq!(parsed.books[1].isbn, "222");
}

#[test]
fn test_rows_with_only_unknown_columns_survive_download() {
    let csv = "Title,Author,Genre,PublishedYear,ISBN,Notes\n,,,,,keep me\nA,B,C,1,2,";
    let state = load(csv);
    assert_eq!(state.working().len(), 2);
    let out = state.download_csv().unwrap().unwrap();
    assert_eq!(
        out,
        "Title,Author,Genre,PublishedYear,ISBN\n\"\",\"\",\"\",\"\",\"\"\n\"A\",\"B\",\"C\",\"1\",\"2\""
    );
}

#[test]
fn test_free_text_year_is_kept() {
    let csv = "Title,PublishedYear,ISBN\nOld,circa 1600,9";
    let state = load(csv);
    assert_eq!(state.working()[0].published_year, "circa 1600");
    let out = state.download_csv().unwrap().unwrap();
    assert!(out.ends_with("\"Old\",\"\",\"\",\"circa 1600\",\"9\""));
}

#[test]
fn test_sample_catalog_round_trips() {
    let csv = bookgrid::sample::generate_sample_csv(200, 3).unwrap();
    let state = load(&csv);
    assert_eq!(state.working().len(), 200);
    assert_eq!(state.download_csv().unwrap().unwrap(), csv);
}
