//! Runtime validation of a loaded configuration.

use crate::schema::{Config, FiguresConfig, SourcesConfig};
use shootings_common::{parse_hex_color, Result, ShootingsError};
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        Self::validate_sources(&config.sources)?;
        Self::validate_figures(&config.figures)?;

        if config.analysis.window_days == 0 {
            return Err(ShootingsError::validation_field(
                "window must be at least one day",
                "analysis.window_days",
            ));
        }
        if config.analysis.shootings_file.trim().is_empty() {
            return Err(ShootingsError::validation_field(
                "file name cannot be empty",
                "analysis.shootings_file",
            ));
        }
        if config.analysis.date_column.trim().is_empty() {
            return Err(ShootingsError::validation_field(
                "column name cannot be empty",
                "analysis.date_column",
            ));
        }

        Ok(())
    }

    fn validate_sources(sources: &SourcesConfig) -> Result<()> {
        if sources.datasets.is_empty() {
            return Err(ShootingsError::validation_field(
                "at least one dataset is required",
                "sources.datasets",
            ));
        }

        for (i, dataset) in sources.datasets.iter().enumerate() {
            let url = Url::parse(&dataset.url).map_err(|e| {
                ShootingsError::validation_field(
                    format!("invalid URL '{}': {e}", dataset.url),
                    format!("sources.datasets[{i}].url"),
                )
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ShootingsError::validation_field(
                    format!("unsupported URL scheme '{}'", url.scheme()),
                    format!("sources.datasets[{i}].url"),
                ));
            }
            if dataset.file_name.trim().is_empty() {
                return Err(ShootingsError::validation_field(
                    "file name cannot be empty",
                    format!("sources.datasets[{i}].file_name"),
                ));
            }
        }

        if sources.chunk_size == 0 {
            return Err(ShootingsError::validation_field(
                "chunk size must be positive",
                "sources.chunk_size",
            ));
        }
        if sources.timeout_seconds == 0 {
            return Err(ShootingsError::validation_field(
                "timeout must be positive",
                "sources.timeout_seconds",
            ));
        }

        Ok(())
    }

    fn validate_figures(figures: &FiguresConfig) -> Result<()> {
        if figures.dpi == 0 {
            return Err(ShootingsError::validation_field("dpi must be positive", "figures.dpi"));
        }
        if !(figures.width_inches > 0.0 && figures.width_inches.is_finite()) {
            return Err(ShootingsError::validation_field(
                "width must be positive",
                "figures.width_inches",
            ));
        }
        if !(figures.height_inches > 0.0 && figures.height_inches.is_finite()) {
            return Err(ShootingsError::validation_field(
                "height must be positive",
                "figures.height_inches",
            ));
        }

        let bubble = &figures.bubble;
        if !(bubble.min_radius_pt >= 0.0 && bubble.min_radius_pt <= bubble.max_radius_pt)
            || !bubble.max_radius_pt.is_finite()
        {
            return Err(ShootingsError::validation_field(
                "radius range must satisfy 0 <= min <= max",
                "figures.bubble",
            ));
        }

        for (field, value) in [
            ("figures.background", &figures.background),
            ("figures.bar_color", &figures.bar_color),
            ("figures.bubble.start_color", &bubble.start_color),
            ("figures.bubble.end_color", &bubble.end_color),
        ] {
            if parse_hex_color(value).is_none() {
                return Err(ShootingsError::validation_field(
                    format!("'{value}' is not a #RRGGBB or #RRGGBBAA color"),
                    field,
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ShootingsError) -> Option<String> {
        match err {
            ShootingsError::Validation { field, .. } => field,
            _ => None,
        }
    }

    #[test]
    fn test_rejects_empty_datasets() {
        let mut config = Config::default();
        config.sources.datasets.clear();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(field_of(err).as_deref(), Some("sources.datasets"));
    }

    #[test]
    fn test_rejects_bad_url() {
        let mut config = Config::default();
        config.sources.datasets[1].url = "not a url".to_string();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(field_of(err).as_deref(), Some("sources.datasets[1].url"));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.sources.datasets[0].url = "ftp://example.com/data.csv".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_rejects_inverted_radius_range() {
        let mut config = Config::default();
        config.figures.bubble.min_radius_pt = 30.0;
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(field_of(err).as_deref(), Some("figures.bubble"));
    }

    #[test]
    fn test_rejects_bad_color() {
        let mut config = Config::default();
        config.figures.bar_color = "red".to_string();
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(field_of(err).as_deref(), Some("figures.bar_color"));
    }

    #[test]
    fn test_rejects_zero_window() {
        let mut config = Config::default();
        config.analysis.window_days = 0;
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
