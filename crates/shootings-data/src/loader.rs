//! CSV loading into a typed [`DataFrame`].

use crate::error::{DataError, DataResult};
use crate::frame::{Column, ColumnType, DataFrame};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Declared column types, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<(String, ColumnType)>,
}

impl Schema {
    /// Empty schema; every column loads as text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a column declaration.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        let name = name.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = column_type,
            None => self.columns.push((name, column_type)),
        }
        self
    }

    /// Declared type of a column.
    pub fn type_of(&self, name: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| *t)
    }

    /// Declared columns in order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.columns.iter().map(|(n, t)| (n.as_str(), *t))
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Schema of the Washington Post fatal police shootings CSV.
pub fn shootings_schema() -> Schema {
    use ColumnType::{Bool, Int, Str};

    [
        ("id", Int),
        ("name", Str),
        ("date", Str),
        ("manner_of_death", Str),
        ("armed", Str),
        ("age", Int),
        ("gender", Str),
        ("race", Str),
        ("city", Str),
        ("state", Str),
        ("signs_of_mental_illness", Bool),
        ("threat_level", Str),
        ("flee", Str),
        ("body_camera", Bool),
    ]
    .into_iter()
    .fold(Schema::new(), |schema, (name, t)| schema.with_column(name, t))
}

/// Loads CSV documents with a header row according to a [`Schema`].
#[derive(Debug, Clone)]
pub struct TableLoader {
    schema: Schema,
}

impl TableLoader {
    /// Create a loader for the given schema
    pub const fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Loader for the shootings CSV.
    pub fn shootings() -> Self {
        Self::new(shootings_schema())
    }

    /// The schema columns are checked against.
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Opens and loads a CSV file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_path(&self, path: impl AsRef<Path>) -> DataResult<DataFrame> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let frame = self.load_reader(file)?;
        info!(
            rows = frame.nrows(),
            columns = frame.ncols(),
            "Loaded {}",
            path.display()
        );
        Ok(frame)
    }

    /// Loads CSV from any reader.
    ///
    /// Every schema column must appear in the header. Columns the schema
    /// does not mention are kept as text.
    pub fn load_reader<R: Read>(&self, reader: R) -> DataResult<DataFrame> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if let Some((missing, _)) = self
            .schema
            .columns()
            .find(|(name, _)| !headers.iter().any(|h| h == name))
        {
            return Err(DataError::MissingColumn {
                column: missing.to_string(),
            });
        }

        let mut columns: Vec<Column> = headers
            .iter()
            .map(|h| {
                let column_type = self.schema.type_of(h).unwrap_or(ColumnType::Str);
                Column::with_capacity(column_type, 0)
            })
            .collect();

        let mut rows = 0;
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            for (i, column) in columns.iter_mut().enumerate() {
                column.push_parsed(record.get(i).unwrap_or_default(), row, &headers[i])?;
            }
            rows += 1;
        }

        debug!(rows, "Parsed CSV records");
        Ok(DataFrame::from_columns(headers, columns, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shootings_common::test_utils::dataset_fixtures;

    #[test]
    fn test_shootings_schema_has_fourteen_columns() {
        let schema = shootings_schema();
        assert_eq!(schema.len(), 14);
        assert_eq!(schema.type_of("age"), Some(ColumnType::Int));
        assert_eq!(schema.type_of("body_camera"), Some(ColumnType::Bool));
        assert_eq!(schema.type_of("date"), Some(ColumnType::Str));
    }

    #[test]
    fn test_load_sample_csv() {
        let csv = dataset_fixtures::sample_csv();
        let frame = TableLoader::shootings().load_reader(csv.as_bytes()).unwrap();

        assert_eq!(frame.nrows(), 10);
        assert_eq!(frame.ncols(), 14);

        let ages = frame.column("age").and_then(Column::as_int).unwrap();
        assert_eq!(ages[0], Some(53));
        assert_eq!(ages[4], None);

        let names = frame.str_column("name").unwrap();
        assert_eq!(names[2], "Lee, Jr.");

        let mental = frame
            .column("signs_of_mental_illness")
            .and_then(Column::as_bool)
            .unwrap();
        assert_eq!(mental[0], Some(true));
    }

    #[test]
    fn test_missing_schema_column() {
        let csv = "id,name\n1,Alex\n";
        let err = TableLoader::shootings().load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { ref column } if column == "date"));
    }

    #[test]
    fn test_unknown_columns_load_as_text() {
        let csv = "id,extra\n1,hello\n2,\n";
        let schema = Schema::new().with_column("id", ColumnType::Int);
        let frame = TableLoader::new(schema).load_reader(csv.as_bytes()).unwrap();
        assert_eq!(frame.str_column("extra").unwrap(), &["hello", ""]);
    }

    #[test]
    fn test_bad_int_reports_row_and_column() {
        let csv = "id,age\n1,30\n2,thirty\n";
        let schema = Schema::new()
            .with_column("id", ColumnType::Int)
            .with_column("age", ColumnType::Int);
        let err = TableLoader::new(schema).load_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataError::ParseCell { row, column, value, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "age");
                assert_eq!(value, "thirty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let csv = "id,age\n1,30,extra\n";
        let schema = Schema::new().with_column("id", ColumnType::Int);
        let err = TableLoader::new(schema).load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = TableLoader::shootings()
            .load_path("/nonexistent/shootings.csv")
            .unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
