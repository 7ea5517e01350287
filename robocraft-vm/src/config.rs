//! Robot configuration

use crate::error::{self, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fuel a fresh Mk3 starts with
pub const DEFAULT_FUEL: u32 = 30;

/// Largest boost a single digit may trigger before it overheats
pub const DEFAULT_MAX_BOOST: u32 = 5;

/// A boost is requested by one decimal digit
const MAX_DIGIT: u32 = 9;

/// Tunables shared by every robot generation.
///
/// Missing JSON fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    /// Starting fuel for Mk3
    pub initial_fuel: u32,
    /// Boost ceiling for Mk3
    pub max_boost: u32,
    /// Record an `ExecutionStep` for every executed instruction
    pub record_trace: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            initial_fuel: DEFAULT_FUEL,
            max_boost: DEFAULT_MAX_BOOST,
            record_trace: false,
        }
    }
}

impl RobotConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RobotConfig = serde_json::from_str(json).map_err(|e| {
            error::serialization_error("robot config is not valid JSON")
                .with_operation("config::from_json")
                .set_source(e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            crate::error::Error::from(e)
                .with_operation("config::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::from_json(&json).map_err(|e| e.with_context("path", path.display().to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_boost > MAX_DIGIT {
            return Err(error::config_invalid(
                "max_boost",
                format!(
                    "max_boost {} can never be reached by a single digit (max {})",
                    self.max_boost, MAX_DIGIT
                ),
            ));
        }
        Ok(())
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RobotConfig::default();
        assert_eq!(config.initial_fuel, 30);
        assert_eq!(config.max_boost, 5);
        assert!(!config.record_trace);
    }

    #[test]
    fn test_from_json_partial() {
        let config = RobotConfig::from_json(r#"{"initial_fuel": 12}"#).unwrap();
        assert_eq!(config.initial_fuel, 12);
        assert_eq!(config.max_boost, DEFAULT_MAX_BOOST);

        let config = RobotConfig::from_json("{}").unwrap();
        assert_eq!(config, RobotConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RobotConfig::from_json("{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SerializationFailed);
        assert!(err.source_ref().is_some());

        let err = RobotConfig::from_json(r#"{"max_boost": 12}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.operation(), "config::validate");
    }

    #[test]
    fn test_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_boost": 3, "record_trace": true}}"#).unwrap();

        let config = RobotConfig::load(file.path()).unwrap();
        assert_eq!(config.max_boost, 3);
        assert!(config.record_trace);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RobotConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "config::load");
    }
}
