//! Top-level configuration and file loading.
//!
//! A [`VantageConfig`] is built once at startup and handed by reference to
//! whatever needs it. There is no process-wide instance.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::scenario::ScenarioConfig;
use crate::thresholds::StageThresholds;

/// File name looked up under the user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for classifying many companies at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Enable parallel processing (requires the analytics `parallel` feature).
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Minimum batch size to trigger parallel processing.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    1_000
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl BatchConfig {
    /// Creates a config that always processes sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if a batch of `count` items should be processed in parallel.
    ///
    /// Always false unless `parallel_enabled` is set, which callers pass as
    /// `cfg!(feature = "parallel")`.
    #[must_use]
    pub fn should_parallelize(&self, count: usize, parallel_enabled: bool) -> bool {
        parallel_enabled && self.parallel && count >= self.parallel_threshold
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.parallel && self.parallel_threshold == 0 {
            errors.push(ValidationError::with_rule(
                "parallel_threshold",
                "Parallel threshold must be at least 1",
                "positive_threshold",
            ));
        }
        errors
    }
}

/// Complete configuration for the Vantage library and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VantageConfig {
    /// Growth-band boundaries.
    #[serde(default)]
    pub thresholds: StageThresholds,

    /// Bull / base / bear multipliers.
    #[serde(default)]
    pub scenarios: ScenarioConfig,

    /// Batch processing settings.
    #[serde(default)]
    pub batch: BatchConfig,
}

impl VantageConfig {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stage thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: StageThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the scenario multipliers.
    #[must_use]
    pub fn with_scenarios(mut self, scenarios: ScenarioConfig) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// Sets the batch settings.
    #[must_use]
    pub fn with_batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let config = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => Self::from_toml_str(&content)?,
            ConfigFormat::Json => Self::from_json_str(&content)?,
        };
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if given, else the user config file if present, else defaults.
    ///
    /// An explicitly named file that does not exist is an error; a missing
    /// user config file is not.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(default) if default.exists() => Self::from_file(default),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Serializes to a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serializes to a pretty-printed JSON document.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, choosing the format from its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => self.to_toml_string()?,
            ConfigFormat::Json => self.to_json_string()?,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        log::info!("Wrote configuration to {}", path.display());
        Ok(())
    }
}

impl Validate for VantageConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let sections: [(&str, Vec<ValidationError>); 3] = [
            ("thresholds", self.thresholds.validate()),
            ("scenarios", self.scenarios.validate()),
            ("batch", self.batch.validate()),
        ];

        sections
            .into_iter()
            .flat_map(|(section, errors)| {
                errors.into_iter().map(move |mut err| {
                    err.field = format!("{}.{}", section, err.field);
                    err
                })
            })
            .collect()
    }
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML (`.toml`).
    Toml,
    /// JSON (`.json`).
    Json,
}

impl ConfigFormat {
    /// Determines the format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Returns the per-user configuration file path, e.g. `~/.config/vantage/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vantage").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = VantageConfig::default();
        assert_eq!(config.thresholds, StageThresholds::default());
        assert_eq!(config.scenarios, ScenarioConfig::default());
        assert!(config.batch.parallel);
        assert_eq!(config.batch.parallel_threshold, 1_000);
        assert!(config.is_valid());
    }

    #[test]
    fn test_should_parallelize() {
        let batch = BatchConfig::default().with_threshold(100);
        assert!(!batch.should_parallelize(50, true));
        assert!(batch.should_parallelize(100, true));
        assert!(!batch.should_parallelize(500, false));
        assert!(!BatchConfig::sequential().should_parallelize(500, true));
    }

    #[test]
    fn test_validation_prefixes_section() {
        let config = VantageConfig::new()
            .with_scenarios(ScenarioConfig::new(1.2, 1.0, 1.5))
            .with_batch(BatchConfig::default().with_threshold(0));
        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["scenarios.bear", "batch.parallel_threshold"]);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = VantageConfig::from_toml_str("").unwrap();
        assert_eq!(config, VantageConfig::default());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = VantageConfig::from_toml_str("[scenarios]\nbear = 2.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));

        let err = VantageConfig::from_toml_str("thresholds = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/b.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("b.JSON")).unwrap(),
            ConfigFormat::Json
        );
        assert!(ConfigFormat::from_path(Path::new("b.yaml")).is_err());
        assert!(ConfigFormat::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("vantage/config.toml"));
        }
    }
}
