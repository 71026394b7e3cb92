use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BookgridError;

/// One catalog row.
///
/// All values are kept as text. `published_year` is whatever the file held
/// (a year, free text, or empty) and is never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: String,
    /// Row identity used by edit and delete.
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        published_year: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            published_year: published_year.into(),
            isbn: isbn.into(),
        }
    }

    /// Value of a column.
    #[must_use]
    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Genre => &self.genre,
            BookField::PublishedYear => &self.published_year,
            BookField::Isbn => &self.isbn,
        }
    }

    /// Overwrite an editable column. The ISBN has no setter.
    pub fn set(&mut self, field: EditableField, value: String) {
        match field {
            EditableField::Title => self.title = value,
            EditableField::Author => self.author = value,
            EditableField::Genre => self.genre = value,
            EditableField::PublishedYear => self.published_year = value,
        }
    }
}

/// Catalog columns in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookField {
    Title,
    Author,
    Genre,
    PublishedYear,
    #[serde(rename = "ISBN")]
    Isbn,
}

impl BookField {
    /// Columns in the order they are written to CSV.
    pub const ALL: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Genre,
        BookField::PublishedYear,
        BookField::Isbn,
    ];

    /// Header name as it appears in the CSV file.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Genre => "Genre",
            BookField::PublishedYear => "PublishedYear",
            BookField::Isbn => "ISBN",
        }
    }

    /// Match a header cell exactly.
    #[must_use]
    pub fn from_header(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.header() == name)
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Columns that can be changed by an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditableField {
    Title,
    Author,
    Genre,
    PublishedYear,
}

impl EditableField {
    pub const ALL: [EditableField; 4] = [
        EditableField::Title,
        EditableField::Author,
        EditableField::Genre,
        EditableField::PublishedYear,
    ];

    #[must_use]
    pub const fn field(self) -> BookField {
        match self {
            EditableField::Title => BookField::Title,
            EditableField::Author => BookField::Author,
            EditableField::Genre => BookField::Genre,
            EditableField::PublishedYear => BookField::PublishedYear,
        }
    }

    /// Position in [`EditableField::ALL`].
    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            EditableField::Title => 0,
            EditableField::Author => 1,
            EditableField::Genre => 2,
            EditableField::PublishedYear => 3,
        }
    }
}

impl FromStr for EditableField {
    type Err = BookgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match BookField::from_header(s.trim()) {
            Some(BookField::Title) => Ok(EditableField::Title),
            Some(BookField::Author) => Ok(EditableField::Author),
            Some(BookField::Genre) => Ok(EditableField::Genre),
            Some(BookField::PublishedYear) => Ok(EditableField::PublishedYear),
            Some(BookField::Isbn) => Err(BookgridError::ImmutableField(s.trim().to_string())),
            None => Err(BookgridError::UnknownField(s.to_string())),
        }
    }
}

/// Column the displayed set is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortField {
    /// Working-set order.
    #[default]
    None,
    Title,
    Author,
    Genre,
    PublishedYear,
}

impl SortField {
    #[must_use]
    pub const fn field(self) -> Option<BookField> {
        match self {
            SortField::None => None,
            SortField::Title => Some(BookField::Title),
            SortField::Author => Some(BookField::Author),
            SortField::Genre => Some(BookField::Genre),
            SortField::PublishedYear => Some(BookField::PublishedYear),
        }
    }

    /// Value used by the sort dropdown; empty for no sort.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.field() {
            Some(f) => f.header(),
            None => "",
        }
    }
}

impl FromStr for SortField {
    type Err = BookgridError;

    /// Accepts the dropdown values. `""` and `"none"` clear the sort.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(SortField::None);
        }
        match BookField::from_header(s) {
            Some(BookField::Title) => Ok(SortField::Title),
            Some(BookField::Author) => Ok(SortField::Author),
            Some(BookField::Genre) => Ok(SortField::Genre),
            Some(BookField::PublishedYear) => Ok(SortField::PublishedYear),
            Some(BookField::Isbn) | None => Err(BookgridError::UnknownField(s.to_string())),
        }
    }
}
