//! Structured error types for bookgrid.

/// All errors that can occur while loading, editing, or exporting a catalog.
#[derive(Debug, thiserror::Error)]
pub enum BookgridError {
    /// CSV tokenizing or decoding failure.
    #[error("{}", csv_message(.line, .message))]
    Csv {
        /// 1-based line number of the offending record, when known.
        line: Option<u64>,
        message: String,
    },

    /// Field name that is not one of the catalog columns.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Attempt to edit the identity column.
    #[error("Field {0} cannot be edited")]
    ImmutableField(String),

    /// Rejected configuration value.
    #[error("Invalid config: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

fn csv_message(line: &Option<u64>, message: &str) -> String {
    match line {
        Some(line) => format!("CSV parse error at line {line}: {message}"),
        None => format!("CSV parse error: {message}"),
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BookgridError>;

impl From<csv::Error> for BookgridError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(csv::Position::line);
        let message = match e.kind() {
            csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
            _ => e.to_string(),
        };
        Self::Csv { line, message }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<BookgridError> for wasm_bindgen::JsValue {
    fn from(e: BookgridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
