//! Error types for loading and aggregating the shootings dataset.

use crate::frame::ColumnType;
use shootings_common::ShootingsError;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for data operations.
pub type DataResult<T> = std::result::Result<T, DataError>;

/// Errors raised while loading, parsing or aggregating data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File could not be opened
    #[error("Failed to open {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A schema column is absent from the header row
    #[error("Column '{column}' is missing from the header")]
    MissingColumn {
        /// Column name
        column: String,
    },

    /// A cell could not be parsed as its column type
    #[error("Row {row}, column '{column}': cannot parse '{value}' as {expected}")]
    ParseCell {
        /// Zero-based data row (header excluded)
        row: usize,
        /// Column name
        column: String,
        /// Raw cell text
        value: String,
        /// Type the schema asked for
        expected: ColumnType,
    },

    /// A column exists but holds a different type than requested
    #[error("Column '{column}' is {actual}, expected {expected}")]
    ColumnTypeMismatch {
        /// Column name
        column: String,
        /// Requested type
        expected: ColumnType,
        /// Stored type
        actual: ColumnType,
    },

    /// A date cell is not `YYYY-MM-DD`
    #[error("Row {row}: invalid date '{value}'")]
    InvalidDate {
        /// Zero-based data row
        row: usize,
        /// Raw cell text
        value: String,
    },

    /// Dates handed to the aggregator are not in ascending order
    #[error("Dates are not sorted: element {index} precedes its predecessor")]
    UnsortedDates {
        /// Index of the first out-of-order element
        index: usize,
    },

    /// The aggregator was given no dates
    #[error("No dates to aggregate")]
    NoDates,

    /// Aggregation window shorter than a day
    #[error("Aggregation window must be at least one day, got {0}")]
    InvalidWindow(u32),
}

impl From<DataError> for ShootingsError {
    fn from(err: DataError) -> Self {
        ShootingsError::data_with_source(err.to_string(), err)
    }
}
