//! Error types for the catalogue crate.
//!
//! Every variant here is fatal: a catalogue that fails to load is never
//! partially usable. Absent ratings, genres and page counts are NOT errors;
//! they are modelled as `Option`/empty values on [`crate::Book`].

use thiserror::Error;

/// Errors that can occur while loading the book dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input (bad quoting, missing header, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row could not be mapped onto the expected columns
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: u64, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field} at line {line}: {value:?}")]
    InvalidValue {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// A required field was empty
    #[error("Missing value for {field} at line {line}")]
    MissingValue { line: u64, field: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LoadError>;
