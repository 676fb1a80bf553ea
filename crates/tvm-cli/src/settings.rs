//! Persisted CLI settings.
//!
//! Settings live in a flat JSON object of string values. Keys that are not
//! set fall back to [`ConfigKey::default_value`], and command-line flags
//! override both.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tvm_annuity::rate::{DEFAULT_LOWER_RATE, DEFAULT_MAX_ITERATIONS, DEFAULT_UPPER_RATE};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Precision for numeric output
    DecimalPrecision,
    /// Lower end of the implied-rate bracket
    RateLower,
    /// Upper end of the implied-rate bracket
    RateUpper,
    /// Bisection steps for the implied rate
    MaxIterations,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    /// Looks up a key by name or short alias.
    pub fn parse(s: &str) -> CliResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "default_format" | "format" => Ok(Self::DefaultFormat),
            "decimal_precision" | "precision" => Ok(Self::DecimalPrecision),
            "rate_lower" | "lower" => Ok(Self::RateLower),
            "rate_upper" | "upper" => Ok(Self::RateUpper),
            "max_iterations" | "iterations" => Ok(Self::MaxIterations),
            "use_colors" | "colors" => Ok(Self::UseColors),
            _ => Err(CliError::UnknownConfigKey(s.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DecimalPrecision => "decimal_precision",
            Self::RateLower => "rate_lower",
            Self::RateUpper => "rate_upper",
            Self::MaxIterations => "max_iterations",
            Self::UseColors => "use_colors",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DecimalPrecision => "Number of decimal places for output (0-12)",
            Self::RateLower => "Lower end of the implied-rate search bracket",
            Self::RateUpper => "Upper end of the implied-rate search bracket",
            Self::MaxIterations => "Bisection steps for the implied rate (1-1000)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    pub fn default_value(self) -> String {
        match self {
            Self::DefaultFormat => "table".to_string(),
            Self::DecimalPrecision => "6".to_string(),
            Self::RateLower => DEFAULT_LOWER_RATE.to_string(),
            Self::RateUpper => DEFAULT_UPPER_RATE.to_string(),
            Self::MaxIterations => DEFAULT_MAX_ITERATIONS.to_string(),
            Self::UseColors => "true".to_string(),
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::DecimalPrecision,
            Self::RateLower,
            Self::RateUpper,
            Self::MaxIterations,
            Self::UseColors,
        ]
    }

    /// Checks that `value` is acceptable for this key.
    pub fn validate(self, value: &str) -> CliResult<()> {
        let invalid = |reason: &str| CliError::InvalidConfigValue {
            key: self.as_str(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match self {
            Self::DefaultFormat => parse_format(value)
                .map(|_| ())
                .ok_or_else(|| invalid("Use table, json, csv, or minimal.")),
            Self::DecimalPrecision => match value.trim().parse::<usize>() {
                Ok(p) if p <= 12 => Ok(()),
                _ => Err(invalid("Use a whole number from 0 to 12.")),
            },
            Self::RateLower | Self::RateUpper => match value.trim().parse::<f64>() {
                Ok(r) if r.is_finite() && r > -1.0 => Ok(()),
                _ => Err(invalid("Use a finite rate greater than -1.")),
            },
            Self::MaxIterations => match value.trim().parse::<u32>() {
                Ok(n) if (1..=1000).contains(&n) => Ok(()),
                _ => Err(invalid("Use a whole number from 1 to 1000.")),
            },
            Self::UseColors => parse_bool(value)
                .map(|_| ())
                .ok_or_else(|| invalid("Use true or false.")),
        }
    }
}

fn parse_format(value: &str) -> Option<OutputFormat> {
    <OutputFormat as ValueEnum>::from_str(value.trim(), true).ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Settings loaded from a JSON file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    values: HashMap<String, String>,
    #[serde(skip)]
    path: PathBuf,
}

impl Settings {
    /// Loads settings from `path`, or from the per-user file when `None`.
    ///
    /// A missing file yields empty settings.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => default_config_path()?,
        };

        let mut settings = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str::<Self>(&content).map_err(|source| CliError::MalformedConfig {
                path: path.clone(),
                source,
            })?
        } else {
            Self::default()
        };
        settings.path = path;
        Ok(settings)
    }

    /// Writes the settings back to the file they were loaded from.
    pub fn save(&self) -> CliResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }

    /// The settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `key` has a persisted value.
    pub fn is_set(&self, key: ConfigKey) -> bool {
        self.values.contains_key(key.as_str())
    }

    /// Persisted value of `key`, or its default.
    pub fn get(&self, key: ConfigKey) -> String {
        self.values
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| key.default_value())
    }

    /// Validates and stores a value.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> CliResult<()> {
        key.validate(value)?;
        self.values
            .insert(key.as_str().to_string(), value.trim().to_string());
        Ok(())
    }

    pub fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Output format, falling back to the default when the stored value is invalid.
    pub fn format(&self) -> OutputFormat {
        parse_format(&self.get(ConfigKey::DefaultFormat)).unwrap_or_default()
    }

    pub fn precision(&self) -> usize {
        self.parsed(ConfigKey::DecimalPrecision, 6)
    }

    pub fn rate_lower(&self) -> f64 {
        self.parsed(ConfigKey::RateLower, DEFAULT_LOWER_RATE)
    }

    pub fn rate_upper(&self) -> f64 {
        self.parsed(ConfigKey::RateUpper, DEFAULT_UPPER_RATE)
    }

    pub fn max_iterations(&self) -> u32 {
        self.parsed(ConfigKey::MaxIterations, DEFAULT_MAX_ITERATIONS)
    }

    pub fn use_colors(&self) -> bool {
        parse_bool(&self.get(ConfigKey::UseColors)).unwrap_or(true)
    }

    fn parsed<T: std::str::FromStr>(&self, key: ConfigKey, fallback: T) -> T {
        let value = self.get(key);
        match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(key = key.as_str(), %value, "ignoring invalid setting");
                fallback
            }
        }
    }
}

/// Per-user settings file.
pub fn default_config_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoConfigDir)?;
    Ok(home.join("tvm").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parse() {
        assert_eq!(ConfigKey::parse("rate_lower").unwrap(), ConfigKey::RateLower);
        assert_eq!(ConfigKey::parse("Precision").unwrap(), ConfigKey::DecimalPrecision);
        assert!(matches!(
            ConfigKey::parse("currency"),
            Err(CliError::UnknownConfigKey(_))
        ));
    }

    #[test]
    fn test_key_validate() {
        assert!(ConfigKey::DefaultFormat.validate("JSON").is_ok());
        assert!(ConfigKey::DefaultFormat.validate("xml").is_err());
        assert!(ConfigKey::DecimalPrecision.validate("13").is_err());
        assert!(ConfigKey::RateLower.validate("-1").is_err());
        assert!(ConfigKey::RateUpper.validate("0.5").is_ok());
        assert!(ConfigKey::MaxIterations.validate("0").is_err());
        assert!(ConfigKey::UseColors.validate("maybe").is_err());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.format(), OutputFormat::Table);
        assert_eq!(settings.precision(), 6);
        assert_eq!(settings.rate_lower(), DEFAULT_LOWER_RATE);
        assert_eq!(settings.rate_upper(), DEFAULT_UPPER_RATE);
        assert_eq!(settings.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert!(settings.use_colors());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut settings = Settings::load(Some(&path)).unwrap();
        assert!(!settings.is_set(ConfigKey::RateUpper));
        settings.set(ConfigKey::RateUpper, "0.5").unwrap();
        settings.set(ConfigKey::DefaultFormat, "json").unwrap();
        settings.save().unwrap();

        let loaded = Settings::load(Some(&path)).unwrap();
        assert_eq!(loaded.rate_upper(), 0.5);
        assert_eq!(loaded.format(), OutputFormat::Json);
        assert_eq!(loaded.path(), path.as_path());
    }

    #[test]
    fn test_set_rejects_invalid() {
        let mut settings = Settings::default();
        assert!(settings.set(ConfigKey::MaxIterations, "many").is_err());
        assert!(!settings.is_set(ConfigKey::MaxIterations));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Settings::load(Some(&path)),
            Err(CliError::MalformedConfig { .. })
        ));
    }
}
