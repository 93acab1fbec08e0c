//! Typed, column-oriented table.

use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of a column as declared by a [`Schema`](crate::Schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// 64-bit signed integer, empty cells are null
    Int,
    /// Free text, empty cells stay empty strings
    Str,
    /// `true`/`false`, empty cells are null
    Bool,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Str => "string",
            Self::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// Text used for null cells when a column is rendered as strings.
pub const NULL_DISPLAY: &str = "NaN";

/// A single typed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// Integer cells
    Int(Vec<Option<i64>>),
    /// Text cells
    Str(Vec<String>),
    /// Boolean cells
    Bool(Vec<Option<bool>>),
}

impl Column {
    /// Empty column of the given type with room for `capacity` cells.
    pub fn with_capacity(column_type: ColumnType, capacity: usize) -> Self {
        match column_type {
            ColumnType::Int => Self::Int(Vec::with_capacity(capacity)),
            ColumnType::Str => Self::Str(Vec::with_capacity(capacity)),
            ColumnType::Bool => Self::Bool(Vec::with_capacity(capacity)),
        }
    }

    /// Stored type.
    pub const fn column_type(&self) -> ColumnType {
        match self {
            Self::Int(_) => ColumnType::Int,
            Self::Str(_) => ColumnType::Str,
            Self::Bool(_) => ColumnType::Bool,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        match self {
            Self::Int(v) => v.len(),
            Self::Str(v) => v.len(),
            Self::Bool(v) => v.len(),
        }
    }

    /// Whether the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text cells, if this is a string column.
    pub fn as_str(&self) -> Option<&[String]> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Integer cells, if this is an integer column.
    pub fn as_int(&self) -> Option<&[Option<i64>]> {
        match self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Boolean cells, if this is a boolean column.
    pub fn as_bool(&self) -> Option<&[Option<bool>]> {
        match self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Cell `row` rendered as text; nulls render as [`NULL_DISPLAY`].
    pub fn display_at(&self, row: usize) -> Option<String> {
        match self {
            Self::Int(v) => v
                .get(row)
                .map(|cell| cell.map_or_else(|| NULL_DISPLAY.to_string(), |n| n.to_string())),
            Self::Str(v) => v.get(row).cloned(),
            Self::Bool(v) => v
                .get(row)
                .map(|cell| cell.map_or_else(|| NULL_DISPLAY.to_string(), |b| b.to_string())),
        }
    }

    /// Distinct values in first-seen order, rendered as text.
    pub fn uniques(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        (0..self.len())
            .filter_map(|row| self.display_at(row))
            .filter(|value| seen.insert(value.clone()))
            .collect()
    }

    pub(crate) fn push_parsed(
        &mut self,
        raw: &str,
        row: usize,
        column: &str,
    ) -> DataResult<()> {
        let expected = self.column_type();
        let parse_error = || DataError::ParseCell {
            row,
            column: column.to_string(),
            value: raw.to_string(),
            expected,
        };

        match self {
            Self::Str(v) => v.push(raw.to_string()),
            Self::Int(v) => {
                let trimmed = raw.trim();
                let cell = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.parse::<i64>().map_err(|_| parse_error())?)
                };
                v.push(cell);
            }
            Self::Bool(v) => {
                let trimmed = raw.trim();
                let cell = if trimmed.is_empty() {
                    None
                } else if trimmed.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    return Err(parse_error());
                };
                v.push(cell);
            }
        }
        Ok(())
    }
}

/// Named columns in header order, all of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFrame {
    names: Vec<String>,
    columns: Vec<Column>,
    rows: usize,
}

impl DataFrame {
    pub(crate) fn from_columns(names: Vec<String>, columns: Vec<Column>, rows: usize) -> Self {
        debug_assert_eq!(names.len(), columns.len());
        Self {
            names,
            columns,
            rows,
        }
    }

    /// Number of data rows.
    pub const fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in header order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Text cells of a string column.
    pub fn str_column(&self, name: &str) -> DataResult<&[String]> {
        let column = self.column(name).ok_or_else(|| DataError::MissingColumn {
            column: name.to_string(),
        })?;
        column.as_str().ok_or_else(|| DataError::ColumnTypeMismatch {
            column: name.to_string(),
            expected: ColumnType::Str,
            actual: column.column_type(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_column_parsing() {
        let mut column = Column::with_capacity(ColumnType::Int, 3);
        column.push_parsed("42", 0, "age").unwrap();
        column.push_parsed("", 1, "age").unwrap();
        column.push_parsed(" 7 ", 2, "age").unwrap();
        assert_eq!(column.as_int(), Some(&[Some(42), None, Some(7)][..]));

        let err = column.push_parsed("x", 3, "age").unwrap_err();
        assert!(matches!(err, DataError::ParseCell { row: 3, expected: ColumnType::Int, .. }));
    }

    #[test]
    fn test_bool_column_is_case_insensitive() {
        let mut column = Column::with_capacity(ColumnType::Bool, 3);
        for (row, raw) in ["True", "FALSE", ""].iter().enumerate() {
            column.push_parsed(raw, row, "body_camera").unwrap();
        }
        assert_eq!(column.as_bool(), Some(&[Some(true), Some(false), None][..]));
        assert!(column.push_parsed("yes", 3, "body_camera").is_err());
    }

    #[test]
    fn test_uniques_keep_first_seen_order() {
        let column = Column::Str(
            ["attack", "other", "attack", "undetermined", "other"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        assert_eq!(column.uniques(), vec!["attack", "other", "undetermined"]);

        let ints = Column::Int(vec![Some(1), None, Some(1)]);
        assert_eq!(ints.uniques(), vec!["1", NULL_DISPLAY]);
    }

    #[test]
    fn test_str_column_type_mismatch() {
        let frame = DataFrame::from_columns(
            vec!["id".to_string()],
            vec![Column::Int(vec![Some(1)])],
            1,
        );
        assert!(matches!(
            frame.str_column("id"),
            Err(DataError::ColumnTypeMismatch { actual: ColumnType::Int, .. })
        ));
        assert!(matches!(
            frame.str_column("date"),
            Err(DataError::MissingColumn { .. })
        ));
    }
}
