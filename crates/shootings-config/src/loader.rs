//! Configuration loading from YAML or TOML files with environment overrides.

use crate::Config;
use shootings_common::ShootingsError;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "SHOOTINGS_CONFIG_PATH";

/// File names searched in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["shootings.yaml", "shootings.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Underlying parse error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(#[source] ShootingsError),
}

impl From<ConfigError> for ShootingsError {
    fn from(err: ConfigError) -> Self {
        ShootingsError::config_with_source(err.to_string(), err)
    }
}

/// Supported configuration file syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Picks the syntax from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from an explicit path, `SHOOTINGS_CONFIG_PATH`, a
    /// `shootings.yaml`/`shootings.yml` in the working directory, or defaults,
    /// in that order. Environment overrides are applied and the result validated.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            env::var_os(CONFIG_PATH_VAR)
                .map(PathBuf::from)
                .or_else(|| {
                    DEFAULT_CONFIG_FILES
                        .iter()
                        .map(PathBuf::from)
                        .find(|candidate| candidate.exists())
                })
        });

        let mut config = match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::read_file(&path)?
            }
            None => {
                info!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Loads and validates a configuration file, applying environment overrides.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Self::load(Some(path.as_ref()))
    }

    /// Parses configuration text without applying overrides or validation.
    pub fn parse_str(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
        match format {
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
        }
    }

    fn read_file(path: &Path) -> Result<Config, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content, format)
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("SHOOTINGS_DATA_DIR") {
            debug!("Overriding data directory from environment");
            config.sources.data_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup("SHOOTINGS_OUTPUT_DIR") {
            debug!("Overriding figure directory from environment");
            config.figures.output_dir = PathBuf::from(dir);
        }

        if let Some(dpi) = lookup("SHOOTINGS_DPI") {
            config.figures.dpi = dpi.trim().parse().map_err(|e| ConfigError::EnvParse {
                var: "SHOOTINGS_DPI".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(timeout) = lookup("SHOOTINGS_TIMEOUT_SECONDS") {
            config.sources.timeout_seconds =
                timeout.trim().parse().map_err(|e| ConfigError::EnvParse {
                    var: "SHOOTINGS_TIMEOUT_SECONDS".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(level) = lookup("SHOOTINGS_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), None);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("SHOOTINGS_DATA_DIR", "/tmp/data"),
            ("SHOOTINGS_DPI", "150"),
            ("SHOOTINGS_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        ConfigLoader::apply_overrides_from(&mut config, |k| vars.get(k).map(ToString::to_string))
            .unwrap();

        assert_eq!(config.sources.data_dir, PathBuf::from("/tmp/data"));
        assert_eq!(config.figures.dpi, 150);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.figures.output_dir, PathBuf::from("reports/figures"));
    }

    #[test]
    fn test_bad_override_names_variable() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides_from(&mut config, |k| {
            (k == "SHOOTINGS_DPI").then(|| "lots".to_string())
        })
        .unwrap_err();

        assert!(matches!(err, ConfigError::EnvParse { ref var, .. } if var == "SHOOTINGS_DPI"));
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = ConfigLoader::parse_str("{}", ConfigFormat::Yaml).unwrap();
        assert_eq!(config, Config::default());
    }
}
