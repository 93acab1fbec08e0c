//! # Shootings Data
//!
//! Dataset download, CSV loading, date parsing and weekly aggregation.
//!
//! The usual flow is [`DataFetcher`] to fetch the CSV, [`TableLoader`] to read
//! it into a [`DataFrame`], [`summarize`] for categorical columns and
//! [`WeeklyAggregator`] for the time series.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dates;
pub mod error;
pub mod fetcher;
pub mod frame;
pub mod loader;
pub mod summary;
pub mod weekly;

pub use dates::{parse_dates, parse_sorted_dates, DATE_FORMAT};
pub use error::{DataError, DataResult};
pub use fetcher::{DataFetcher, FetchReport};
pub use frame::{Column, ColumnType, DataFrame};
pub use loader::{shootings_schema, Schema, TableLoader};
pub use summary::{summarize, ColumnSummary};
pub use weekly::{WeeklyAggregator, WeeklyCounts, DAYS_PER_WEEK};
