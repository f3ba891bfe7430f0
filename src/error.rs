//! Error types for the dkb2homebank library.

use crate::FileType;
use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a statement.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error tokenizing or writing CSV.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A data row could not be mapped onto its record type.
    #[error("Invalid record at line {line}: {source}")]
    Record { line: u64, source: csv::Error },

    /// The input stream has no rows at all.
    #[error("Input file is empty")]
    EmptyInput,

    /// The first cell matches neither known export layout.
    #[error("Unknown file type (first cell: {0:?})")]
    UnknownFileType(String),

    /// No header row was found for a detected layout.
    #[error("No {0} header row found")]
    HeaderNotFound(FileType),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
