//! Configuration management for the `fitcalc` CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (`config/fitcalc.toml`, or the path passed with `--config`)
//! 3. Environment variables (prefix: FITCALC__)

use anyhow::Result;
use fitness_calc_shared::{ActivityLevel, Gender, UnitSystem};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up when no `--config` path is given
pub const DEFAULT_CONFIG_FILE: &str = "config/fitcalc.toml";

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Form values used when a flag is not given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub unit_system: UnitSystem,
    pub gender: Gender,
    pub activity: ActivityLevel,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print JSON instead of the text panel
    pub json: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// JSON log lines instead of pretty output
    pub json: bool,
}

impl CalcConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&CalcConfig::default())?)
            .add_source(file)
            // e.g., FITCALC__DEFAULTS__UNIT_SYSTEM=imperial sets defaults.unit_system
            .add_source(config::Environment::with_prefix("FITCALC").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CalcConfig::default();
        assert_eq!(config.defaults.unit_system, UnitSystem::Metric);
        assert_eq!(config.defaults.gender, Gender::Male);
        assert_eq!(config.defaults.activity, ActivityLevel::Sedentary);
        assert!(!config.output.json);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = CalcConfig::load(Some(Path::new("/nonexistent/fitcalc.toml")));
        assert!(result.is_err());
    }
}
