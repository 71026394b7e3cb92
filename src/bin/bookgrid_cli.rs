//! CLI tool for bookgrid - searches, sorts and re-exports catalog CSVs
//!
//! Usage:
//!   bookgrid_cli <input.csv>                          # Re-encoded CSV to stdout
//!   bookgrid_cli <input.csv> --search fic --sort Title
//!   bookgrid_cli <input.csv> --json -o shown.json     # Displayed rows as JSON
//!   bookgrid_cli --generate [--rows N] [--seed S] [-o fake_books.csv]
//!   bookgrid_cli --generate --config grid.json   # Row count from sampleRows

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use bookgrid::csv_codec::{write_catalog, SAMPLE_FILE_NAME};
use bookgrid::sample::generate_sample_csv;
use bookgrid::{Book, CatalogState, GridConfig, SortField};

const USAGE: &str = "Usage: bookgrid_cli <input.csv> [--search Q] [--sort FIELD] [--json] [-o OUT]\n       bookgrid_cli --generate [--rows N] [--seed S] [--config FILE] [-o OUT]";

struct Args {
    input: Option<String>,
    output: Option<String>,
    search: String,
    sort: String,
    json: bool,
    generate: bool,
    config: Option<String>,
    rows: Option<usize>,
    seed: u64,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut args = Args {
        input: None,
        output: None,
        search: String::new(),
        sort: String::new(),
        json: false,
        generate: false,
        config: None,
        rows: None,
        seed: 0,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .unwrap_or_else(|| fail(&format!("Missing value for {name}\n{USAGE}")))
        };
        match arg.as_str() {
            "-o" | "--output" => args.output = Some(value("-o")),
            "--search" => args.search = value("--search"),
            "--sort" => args.sort = value("--sort"),
            "--json" => args.json = true,
            "--generate" => args.generate = true,
            "--config" => args.config = Some(value("--config")),
            "--rows" => {
                args.rows = Some(
                    value("--rows")
                        .parse()
                        .unwrap_or_else(|e| fail(&format!("Invalid --rows: {e}"))),
                );
            }
            "--seed" => {
                args.seed = value("--seed")
                    .parse()
                    .unwrap_or_else(|e| fail(&format!("Invalid --seed: {e}")));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if args.input.is_none() && !arg.starts_with('-') => args.input = Some(arg),
            _ => fail(&format!("Unknown argument: {arg}\n{USAGE}")),
        }
    }
    args
}

fn load_config(path: Option<&str>) -> GridConfig {
    let Some(path) = path else {
        return GridConfig::default();
    };
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("Error reading {path}: {e}")));
    GridConfig::from_json(&json).unwrap_or_else(|e| fail(&format!("Error in {path}: {e}")))
}

fn emit(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(text.as_bytes()).unwrap();
            println!();
        }
    }
}

fn main() {
    bookgrid::logging::init();
    let args = parse_args();

    if args.generate {
        let config = load_config(args.config.as_deref());
        let rows = args.rows.unwrap_or(config.sample_rows);
        let csv = generate_sample_csv(rows, args.seed)
            .unwrap_or_else(|e| fail(&format!("Error generating sample: {e}")));
        let output = args.output.as_deref().or(Some(SAMPLE_FILE_NAME));
        emit(output, &csv);
        return;
    }

    let Some(input_path) = args.input.as_deref() else {
        fail(USAGE);
    };

    let data = fs::read(input_path)
        .unwrap_or_else(|e| fail(&format!("Error reading {input_path}: {e}")));

    let mut state = CatalogState::new();
    if let Err(e) = state.load(&data) {
        fail(&format!("Error parsing {input_path}: {e}"));
    }

    let sort: SortField = args
        .sort
        .parse()
        .unwrap_or_else(|e| fail(&format!("Invalid --sort: {e}")));
    state.set_search(&args.search);
    state.set_sort(sort);

    for isbn in state.duplicate_isbns() {
        eprintln!("warning: duplicate ISBN {isbn}");
    }

    let shown: Vec<Book> = state.displayed_books().cloned().collect();
    let text = if args.json {
        serde_json::to_string_pretty(&shown)
            .unwrap_or_else(|e| fail(&format!("Error serializing JSON: {e}")))
    } else {
        write_catalog(&shown).unwrap_or_else(|e| fail(&format!("Error writing CSV: {e}")))
    };

    eprintln!(
        "{} of {} rows shown",
        state.displayed_len(),
        state.working().len()
    );
    emit(args.output.as_deref(), &text);
}
