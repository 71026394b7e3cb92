//! Synthetic catalog generator for trying the editor on a large table.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::csv_codec;
use crate::error::Result;
use crate::types::Book;

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat",
    "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit",
    "anim", "id", "est", "laborum",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Beatrice", "Carlos", "Chidi", "Dana", "Elena", "Farah", "George", "Hana",
    "Ines", "Jamal", "Kenji", "Lena", "Marcus", "Nadia", "Oscar", "Priya", "Quinn", "Rosa",
    "Samuel", "Tara", "Uma", "Victor", "Wen", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bauer", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hughes", "Ibrahim",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov", "Quintero",
    "Romano", "Schmidt", "Tanaka", "Ueda", "Varga", "Walsh", "Xu", "Yamamoto", "Zielinski",
];

const GENRES: &[&str] = &[
    "Blues", "Classical", "Country", "Electronic", "Folk", "Funk", "Hip Hop", "Jazz", "Latin",
    "Metal", "Pop", "Reggae", "Rock", "Soul", "Stage And Screen", "World",
];

/// Earliest and latest generated publication years.
const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1900..=2025;

fn pick<'a, R: Rng>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or_default()
}

fn random_book<R: Rng>(rng: &mut R) -> Book {
    let title = (0..3).map(|_| pick(rng, LOREM)).collect::<Vec<_>>().join(" ");
    let author = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
    let genre = pick(rng, GENRES).to_string();
    let year = rng.gen_range(YEAR_RANGE);
    let isbn = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
    Book {
        title,
        author,
        genre,
        published_year: year.to_string(),
        isbn: isbn.to_string(),
    }
}

/// Generate `count` random books. The same seed yields the same catalog.
#[must_use]
pub fn generate_books(count: usize, seed: u64) -> Vec<Book> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_book(&mut rng)).collect()
}

/// Generate a sample catalog already encoded as CSV.
///
/// # Errors
/// Propagates writer failures from the CSV encoder.
pub fn generate_sample_csv(count: usize, seed: u64) -> Result<String> {
    let books = generate_books(count, seed);
    tracing::debug!(rows = books.len(), seed, "generated sample catalog");
    csv_codec::write_catalog(&books)
}
