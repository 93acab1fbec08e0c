//! Default values.

use crate::schema::*;
use shootings_common::{DatasetSource, LoggingConfig};
use std::path::PathBuf;

/// Washington Post fatal police shootings CSV.
pub const WP_POLICE_SHOOTINGS_URL: &str =
    "https://raw.githubusercontent.com/washingtonpost/data-police-shootings/master/fatal-police-shootings-data.csv";
/// Post Graphics 2015 police shootings JSON.
pub const PG_POLICE_SHOOTINGS_2015_URL: &str =
    "https://s3.amazonaws.com/postgraphics/policeshootings/policeshootings2015.json";
/// Post Graphics 2016 police shootings JSON.
pub const PG_POLICE_SHOOTINGS_2016_URL: &str =
    "https://s3.amazonaws.com/postgraphics/policeshootings/policeshootings2016.json";

/// File name the Washington Post CSV is stored under.
pub const WP_POLICE_SHOOTINGS_FILE: &str = "wp-police-shootings.csv";

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: SourcesConfig::default(),
            analysis: AnalysisConfig::default(),
            figures: FiguresConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            datasets: vec![
                DatasetSource::new("wapo", WP_POLICE_SHOOTINGS_URL, WP_POLICE_SHOOTINGS_FILE),
                DatasetSource::new(
                    "postgraphics-2015",
                    PG_POLICE_SHOOTINGS_2015_URL,
                    "pg-police-shootings-2015.json",
                ),
                DatasetSource::new(
                    "postgraphics-2016",
                    PG_POLICE_SHOOTINGS_2016_URL,
                    "pg-police-shootings-2016.json",
                ),
            ],
            chunk_size: 1024,
            timeout_seconds: 60,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            shootings_file: WP_POLICE_SHOOTINGS_FILE.to_string(),
            date_column: "date".to_string(),
            summary_columns: ["manner_of_death", "threat_level", "flee", "armed", "race"]
                .into_iter()
                .map(String::from)
                .collect(),
            window_days: 7,
        }
    }
}

impl Default for FiguresConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports/figures"),
            width_inches: 4.0,
            height_inches: 4.0,
            dpi: 96,
            background: "#FFFFFF".to_string(),
            title_font_size: 16,
            bubble: BubbleStyleConfig::default(),
            bar_color: "#FF0000".to_string(),
            sample_seed: 0,
            files: FigureFilesConfig::default(),
        }
    }
}

impl Default for BubbleStyleConfig {
    fn default() -> Self {
        Self {
            min_radius_pt: 1.0,
            max_radius_pt: 20.0,
            start_color: "#FF0101".to_string(),
            end_color: "#FFFF01".to_string(),
        }
    }
}

impl Default for FigureFilesConfig {
    fn default() -> Self {
        Self {
            weekly_histogram: "shootings_per_week_hist.png".to_string(),
            weekly_line: "shootings_per_week_line.png".to_string(),
            bubbles: "bubble.png".to_string(),
            blocks: "blocks.png".to_string(),
            bar_chart: "bar_chart.png".to_string(),
            heatmap: "heatmap.png".to_string(),
        }
    }
}
