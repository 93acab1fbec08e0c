//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use shootings_common::{DatasetSource, LoggingConfig, ShootingsError};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote datasets and where they are stored.
    pub sources: SourcesConfig,
    /// Analysis settings.
    pub analysis: AnalysisConfig,
    /// Figure output settings.
    pub figures: FiguresConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Dataset download configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Directory datasets are written to. Created if absent.
    pub data_dir: PathBuf,
    /// Datasets to download, in order.
    pub datasets: Vec<DatasetSource>,
    /// Size of each file write while streaming a download, in bytes.
    pub chunk_size: usize,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl SourcesConfig {
    /// Location of a dataset file inside the data directory.
    pub fn dataset_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

/// Analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// File name (inside `sources.data_dir`) of the shootings CSV.
    pub shootings_file: String,
    /// Column holding the `YYYY-MM-DD` event date.
    pub date_column: String,
    /// Columns whose unique values are summarised.
    pub summary_columns: Vec<String>,
    /// Length of an aggregation window in days.
    pub window_days: u32,
}

/// Figure rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiguresConfig {
    /// Directory figures are written to. Created if absent.
    pub output_dir: PathBuf,
    /// Canvas width in inches.
    pub width_inches: f64,
    /// Canvas height in inches.
    pub height_inches: f64,
    /// Raster resolution.
    pub dpi: u32,
    /// Background color as `#RRGGBB`.
    pub background: String,
    /// Caption font size in pixels.
    pub title_font_size: u32,
    /// Bubble chart styling.
    pub bubble: BubbleStyleConfig,
    /// Fill color of bar charts as `#RRGGBB[AA]`.
    pub bar_color: String,
    /// Seed for the sample figure data.
    pub sample_seed: u64,
    /// Output file names.
    pub files: FigureFilesConfig,
}

impl FiguresConfig {
    /// Canvas size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            shootings_common::inches_to_pixels(self.width_inches, self.dpi),
            shootings_common::inches_to_pixels(self.height_inches, self.dpi),
        )
    }

    /// Converts typographic points to pixels at the configured resolution.
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }
}

/// Bubble chart styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleStyleConfig {
    /// Radius of the smallest bubble in points.
    pub min_radius_pt: f64,
    /// Radius of the largest bubble in points.
    pub max_radius_pt: f64,
    /// Color of the lowest intensity.
    pub start_color: String,
    /// Color of the highest intensity.
    pub end_color: String,
}

/// Output file names, one per chart type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureFilesConfig {
    /// Histogram of weekly shooting counts.
    pub weekly_histogram: String,
    /// Line chart of shootings per week.
    pub weekly_line: String,
    /// Sample bubble chart.
    pub bubbles: String,
    /// Sample block chart.
    pub blocks: String,
    /// Sample bar chart.
    pub bar_chart: String,
    /// Sample heatmap.
    pub heatmap: String,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ShootingsError> {
        crate::ConfigValidator::validate(self)
    }

    /// Path of the shootings CSV inside the data directory.
    pub fn shootings_path(&self) -> PathBuf {
        self.sources.dataset_path(&self.analysis.shootings_file)
    }
}
