//! Unique-value summaries of categorical columns.

use crate::error::{DataError, DataResult};
use crate::frame::DataFrame;
use serde::Serialize;
use std::fmt;

/// Distinct values of one column in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    /// Column name
    pub column: String,
    /// Distinct values rendered as text
    pub uniques: Vec<String>,
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Unique values for {}", self.column)?;
        for value in &self.uniques {
            write!(f, "'{value}' ")?;
        }
        Ok(())
    }
}

/// Summarises each named column, in the order given.
pub fn summarize<S: AsRef<str>>(frame: &DataFrame, columns: &[S]) -> DataResult<Vec<ColumnSummary>> {
    columns
        .iter()
        .map(|name| {
            let name = name.as_ref();
            let column = frame.column(name).ok_or_else(|| DataError::MissingColumn {
                column: name.to_string(),
            })?;
            Ok(ColumnSummary {
                column: name.to_string(),
                uniques: column.uniques(),
            })
        })
        .collect()
}
