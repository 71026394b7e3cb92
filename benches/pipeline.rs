//! Benchmarks for catalog parsing and the search/sort pipeline.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bookgrid::csv_codec::{parse_catalog, write_catalog};
use bookgrid::sample::{generate_books, generate_sample_csv};
use bookgrid::view::derive_displayed;
use bookgrid::{CatalogState, SortField};

const ROWS: usize = 10_000;

fn bench_parse(c: &mut Criterion) {
    let csv = generate_sample_csv(ROWS, 1).expect("sample csv");
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(csv.len() as u64));
    group.bench_function("parse_10k", |b| {
        b.iter(|| parse_catalog(black_box(csv.as_bytes())).expect("parse"))
    });
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let books = generate_books(ROWS, 2);
    c.bench_function("write_10k", |b| {
        b.iter(|| write_catalog(black_box(&books)).expect("write"))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let books = generate_books(ROWS, 3);
    let mut group = c.benchmark_group("filter_sort");
    for (query, sort) in [
        ("", SortField::None),
        ("", SortField::Title),
        ("rock", SortField::None),
        ("lorem", SortField::Author),
    ] {
        let id = format!("{query:?}/{}", sort.as_str());
        group.bench_with_input(BenchmarkId::from_parameter(id), &(query, sort), |b, (q, s)| {
            b.iter(|| derive_displayed(black_box(&books), q, *s))
        });
    }
    group.finish();
}

fn bench_commit_edit(c: &mut Criterion) {
    let books = generate_books(ROWS, 4);
    let isbn = books.first().map(|b| b.isbn.clone()).expect("row");
    let mut state = CatalogState::from_books(books);
    state.set_sort(SortField::Title);
    c.bench_function("commit_edit_10k_sorted", |b| {
        b.iter(|| {
            state.begin_edit(&isbn);
            state.stage_field(&isbn, bookgrid::EditableField::Title, "edited");
            state.commit_edit(black_box(&isbn))
        })
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_write,
    bench_pipeline,
    bench_commit_edit
);
criterion_main!(benches);
