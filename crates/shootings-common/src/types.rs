//! Common type definitions shared between configuration and the data layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// On-disk format of a downloaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Comma separated values with a header row.
    Csv,
    /// A single JSON document.
    Json,
}

impl DatasetFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// A remote dataset and the file name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSource {
    /// Short name used in logs.
    pub name: String,
    /// Remote location.
    pub url: String,
    /// File name inside the data directory.
    pub file_name: String,
    /// Content format.
    pub format: DatasetFormat,
}

impl DatasetSource {
    /// Creates a source, inferring the format from `file_name` (CSV when unknown).
    pub fn new(name: impl Into<String>, url: impl Into<String>, file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let format = DatasetFormat::from_path(&file_name).unwrap_or(DatasetFormat::Csv);
        Self {
            name: name.into(),
            url: url.into(),
            file_name,
            format,
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.file_name)
    }
}
