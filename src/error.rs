use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a normalization run.
///
/// An unresolved data field is deliberately absent: it only produces an
/// all-missing column and is reported through the run summary.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The input path does not name a readable file.
    #[error("input file not found or not readable: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// No candidate spelling matched the `time` field.
    #[error("no time column found; tried {tried} candidate spellings")]
    UnresolvedTimeField { tried: usize },

    /// A resolved column holds a token that is not a number.
    #[error("column '{column}', row {row}: '{value}' is not a number")]
    MalformedNumericValue {
        column: String,
        /// 1-based data row (header excluded).
        row: usize,
        value: String,
    },

    /// The time column is resolved but has an empty cell.
    #[error("time column has no value at row {row}")]
    MissingTimeValue {
        /// 1-based data row (header excluded).
        row: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
