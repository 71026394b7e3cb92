//! Catalog CSV reader and writer.
//!
//! Reading maps the header row onto [`BookField`]s: unknown columns are
//! ignored and missing ones read as empty text. Writing emits the canonical
//! header followed by fully quoted, RFC 4180 escaped records.

use std::collections::HashMap;

use crate::error::{BookgridError, Result};
use crate::types::{Book, BookField};

/// File name offered for a catalog download.
pub const DOWNLOAD_FILE_NAME: &str = "books.csv";

/// File name offered for a generated sample catalog.
pub const SAMPLE_FILE_NAME: &str = "fake_books.csv";

/// Output of [`parse_catalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCatalog {
    pub books: Vec<Book>,
    /// ISBNs seen on more than one row, in first-seen order.
    pub duplicate_isbns: Vec<String>,
}

/// Parse a catalog CSV with a header row.
///
/// Empty lines are skipped; any line with content becomes a row, even when
/// all of its recognized cells are empty. Rows may have fewer or more cells
/// than the header.
///
/// # Errors
/// Returns [`BookgridError::Csv`] if the data is not valid UTF-8 or cannot
/// be tokenized.
pub fn parse_catalog(data: &[u8]) -> Result<ParsedCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut columns: Vec<Option<BookField>> = Vec::new();
    for (idx, name) in reader.headers()?.iter().enumerate() {
        let name = if idx == 0 {
            name.trim_start_matches('\u{feff}')
        } else {
            name
        };
        // First occurrence of a header wins.
        let field =
            BookField::from_header(name.trim()).filter(|f| !columns.contains(&Some(*f)));
        columns.push(field);
    }

    let mut books = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut book = Book::default();
        for (field, value) in columns.iter().zip(record.iter()) {
            match field {
                Some(BookField::Title) => book.title = value.to_string(),
                Some(BookField::Author) => book.author = value.to_string(),
                Some(BookField::Genre) => book.genre = value.to_string(),
                Some(BookField::PublishedYear) => book.published_year = value.to_string(),
                Some(BookField::Isbn) => book.isbn = value.to_string(),
                None => {}
            }
        }
        books.push(book);
    }

    let duplicate_isbns = find_duplicate_isbns(&books);
    if !duplicate_isbns.is_empty() {
        tracing::warn!(
            count = duplicate_isbns.len(),
            first = duplicate_isbns.first().map(String::as_str),
            "catalog contains duplicate ISBNs; edits and deletes apply to every match"
        );
    }
    tracing::debug!(rows = books.len(), "parsed catalog");

    Ok(ParsedCatalog {
        books,
        duplicate_isbns,
    })
}

fn find_duplicate_isbns(books: &[Book]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(books.len());
    let mut duplicates = Vec::new();
    for book in books {
        let seen = counts.entry(book.isbn.as_str()).or_insert(0);
        *seen += 1;
        if *seen == 2 {
            duplicates.push(book.isbn.clone());
        }
    }
    duplicates
}

/// Serialize books as a catalog CSV.
///
/// The header line is unquoted; every value is quoted with embedded quotes
/// doubled. Lines are joined with `\n` and there is no trailing newline.
///
/// # Errors
/// Returns an error only if the underlying writer fails.
pub fn write_catalog(books: &[Book]) -> Result<String> {
    let header = BookField::ALL
        .iter()
        .map(|f| f.header())
        .collect::<Vec<_>>()
        .join(",");

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(books.len() * 64));
    for book in books {
        writer.write_record(BookField::ALL.iter().map(|f| book.get(*f)))?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| BookgridError::Io(e.into_error()))?;
    let body = String::from_utf8(body).map_err(|e| BookgridError::Other(e.to_string()))?;

    let mut out = String::with_capacity(header.len() + 1 + body.len());
    out.push_str(&header);
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body.strip_suffix('\n').unwrap_or(&body));
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let data = b"Title,Author,Genre,PublishedYear,ISBN\nDune,Herbert,Sci,1965,111";
        let parsed = parse_catalog(data).unwrap();
        assert_eq!(parsed.books.len(), 1);
        assert_eq!(
            parsed.books[0],
            Book::new("Dune", "Herbert", "Sci", "1965", "111")
        );
        assert!(parsed.duplicate_isbns.is_empty());
    }

    #[test]
    fn test_parse_reordered_and_unknown_columns() {
        let data = b"ISBN,Publisher,Title\n9,Ace,Dune";
        let parsed = parse_catalog(data).unwrap();
        let book = &parsed.books[0];
        assert_eq!(book.isbn, "9");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "");
        assert_eq!(book.published_year, "");
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let data = b"Title,ISBN\n\nA,1\n\nB,2\n";
        let parsed = parse_catalog(data).unwrap();
        let titles: Vec<_> = parsed.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_keeps_rows_without_known_values() {
        let data = b"Title,Author,Genre,PublishedYear,ISBN,Notes\n,,,,,keep me\n,,,,,\nA,B,C,1,2,";
        let parsed = parse_catalog(data).unwrap();
        assert_eq!(parsed.books.len(), 3);
        assert_eq!(parsed.books[0], Book::default());
        assert_eq!(parsed.books[1], Book::default());
        assert_eq!(parsed.books[2].isbn, "2");
    }

    #[test]
    fn test_parse_bom_header() {
        let data = "\u{feff}Title,ISBN\nA,1".as_bytes();
        let parsed = parse_catalog(data).unwrap();
        assert_eq!(parsed.books[0].title, "A");
    }

    #[test]
    fn test_parse_ragged_rows() {
        let data = b"Title,Author,ISBN\nA\nB,C,3,extra";
        let parsed = parse_catalog(data).unwrap();
        assert_eq!(parsed.books[0].title, "A");
        assert_eq!(parsed.books[0].isbn, "");
        assert_eq!(parsed.books[1].isbn, "3");
    }

    #[test]
    fn test_parse_reports_duplicates() {
        let data = b"Title,ISBN\nA,1\nB,2\nC,1\nD,1";
        let parsed = parse_catalog(data).unwrap();
        assert_eq!(parsed.books.len(), 4);
        assert_eq!(parsed.duplicate_isbns, vec!["1".to_string()]);
    }

    #[test]
    fn test_parse_invalid_utf8_fails() {
        let data = b"Title,ISBN\n\xff\xfe,1";
        let err = parse_catalog(data).unwrap_err();
        assert!(matches!(err, BookgridError::Csv { .. }));
    }

    #[test]
    fn test_parse_empty_input() {
        let parsed = parse_catalog(b"").unwrap();
        assert!(parsed.books.is_empty());
    }

    #[test]
    fn test_write_quotes_every_value() {
        let csv = write_catalog(&[Book::new("A", "B", "Fic", "2000", "111")]).unwrap();
        assert_eq!(
            csv,
            "Title,Author,Genre,PublishedYear,ISBN\n\"A\",\"B\",\"Fic\",\"2000\",\"111\""
        );
    }

    #[test]
    fn test_write_escapes_quotes_and_delimiters() {
        let book = Book::new("Say \"hi\"", "Doe, Jane", "Line\nBreak", "", "1");
        let csv = write_catalog(&[book.clone()]).unwrap();
        assert!(csv.contains("\"Say \"\"hi\"\"\""));
        let parsed = parse_catalog(csv.as_bytes()).unwrap();
        assert_eq!(parsed.books, vec![book]);
    }

    #[test]
    fn test_write_empty_is_header_only() {
        assert_eq!(
            write_catalog(&[]).unwrap(),
            "Title,Author,Genre,PublishedYear,ISBN"
        );
    }
}
