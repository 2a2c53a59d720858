//! Error types for record mapping.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when decoding or encoding records.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Row token count does not match the record's field count.
    #[error("row length mismatch: expected {expected} columns, got {actual}")]
    RowLength { expected: usize, actual: usize },

    /// A single field failed to convert.
    #[error("field {index} ({name}): {source}")]
    Field {
        index: usize,
        name: &'static str,
        #[source]
        source: CellError,
    },

    /// No row was left to read.
    #[error("unexpected end of input")]
    EndOfInput,

    /// Tokenizer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for record mapping operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a RowLength error.
    #[must_use]
    pub fn row_length(expected: usize, actual: usize) -> Self {
        Self::RowLength { expected, actual }
    }

    /// Column position of the failing field, if the error is tied to one.
    #[must_use]
    pub fn field_index(&self) -> Option<usize> {
        match self {
            Self::Field { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Conversion failure for a single token.
///
/// Carries no position; [`Error::Field`] wraps it with the column.
#[derive(Debug, Error)]
pub enum CellError {
    #[error("invalid integer {token:?}: {source}")]
    Integer {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid number {token:?}: {source}")]
    Real {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid boolean {token:?}")]
    Boolean { token: String },

    #[error("timestamp {token:?} does not match format {format:?}: {source}")]
    Timestamp {
        token: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp {token:?} is out of range")]
    TimestampRange { token: String },

    #[error("cannot format timestamp with format {format:?}")]
    TimestampFormat { format: String },
}
