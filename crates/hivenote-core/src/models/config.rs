//! Configuration structures for the notes parser and its front ends.

use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{HivenoteError, Result};

/// Main configuration for hivenote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HivenoteConfig {
    /// Parser configuration.
    pub parser: ParserConfig,

    /// Output configuration (CLI).
    pub output: OutputConfig,
}

/// Parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Year assumed for dates written without one ("march 5").
    /// `None` means the current local year.
    pub reference_year: Option<i32>,

    /// Temperatures without a unit marker above this magnitude are read as Fahrenheit.
    pub fahrenheit_threshold: f64,

    /// Scan free prose for pest and disease mentions.
    pub scan_prose: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            fahrenheit_threshold: 50.0,
            scan_prose: true,
        }
    }
}

impl ParserConfig {
    /// Year used to complete month-name dates.
    pub fn effective_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Check that the configured values are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.fahrenheit_threshold.is_finite() || self.fahrenheit_threshold < 0.0 {
            return Err(HivenoteError::Config(format!(
                "fahrenheit_threshold must be a non-negative number, got {}",
                self.fahrenheit_threshold
            )));
        }
        if let Some(year) = self.reference_year {
            if !(1..=9999).contains(&year) {
                return Err(HivenoteError::Config(format!(
                    "reference_year out of range: {year}"
                )));
            }
        }
        Ok(())
    }
}

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output.
    #[default]
    Json,
    /// CSV output, one row per extracted field.
    Csv,
    /// Plain text summary.
    Text,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Print the "N fields found" line after each result.
    pub show_count: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
            show_count: false,
        }
    }
}

impl HivenoteConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.parser.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: HivenoteConfig =
            serde_json::from_str(r#"{"parser": {"reference_year": 2025}}"#).unwrap();

        assert_eq!(config.parser.reference_year, Some(2025));
        assert_eq!(config.parser.fahrenheit_threshold, 50.0);
        assert!(config.parser.scan_prose);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_effective_year_prefers_configured() {
        let config = ParserConfig {
            reference_year: Some(2020),
            ..Default::default()
        };
        assert_eq!(config.effective_year(), 2020);
    }

    #[test]
    fn test_validate_rejects_negative_threshold() {
        let config = ParserConfig {
            fahrenheit_threshold: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = HivenoteConfig::default();
        config.output.format = OutputFormat::Csv;
        config.parser.scan_prose = false;
        config.save(&path).unwrap();

        let loaded = HivenoteConfig::from_file(&path).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Csv);
        assert!(!loaded.parser.scan_prose);
    }
}
