//! Application-wide error types using thiserror.

use shootings_common::ShootingsError;
use shootings_config::ConfigError;
use shootings_data::DataError;
use shootings_graphs::PlotError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Download, logging or rendering failure.
    #[error(transparent)]
    Common(#[from] ShootingsError),

    /// Dataset could not be loaded or aggregated.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Series could not be built.
    #[error(transparent)]
    Plot(#[from] PlotError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
