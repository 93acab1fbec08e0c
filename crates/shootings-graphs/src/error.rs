//! Errors raised while building plot series.

use shootings_common::ShootingsError;
use thiserror::Error;

/// Result alias for series construction.
pub type PlotResult<T> = std::result::Result<T, PlotError>;

/// Invalid input to a color scale or plotter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// No data points were supplied
    #[error("Series has no data points")]
    EmptySeries,

    /// Heatmap values do not fill the requested grid
    #[error("{len} values cannot fill a {rows}x{cols} grid")]
    InvalidDimensions {
        /// Number of values supplied
        len: usize,
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Bar labels and values differ in count
    #[error("{labels} labels given for {values} bars")]
    LabelMismatch {
        /// Number of labels
        labels: usize,
        /// Number of values
        values: usize,
    },

    /// Color scale bounds are reversed or not finite
    #[error("Invalid color scale domain [{min}, {max}]")]
    InvalidDomain {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Bubble radius range is reversed, negative or not finite
    #[error("Invalid radius range [{min}, {max}]")]
    InvalidRadius {
        /// Smallest radius
        min: f64,
        /// Largest radius
        max: f64,
    },

    /// Color string is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color '{0}'")]
    InvalidColor(String),
}

impl From<PlotError> for ShootingsError {
    fn from(err: PlotError) -> Self {
        ShootingsError::graph_with_source(err.to_string(), err)
    }
}
