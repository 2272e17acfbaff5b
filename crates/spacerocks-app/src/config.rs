//! Runner configuration, loaded from a TOML file.
//!
//! ```toml
//! max_ticks = 3600
//! report_every = 60
//! autopilot = true
//!
//! [sim]
//! seed = 7
//! asteroid_count = 6
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use spacerocks_sim::{SimConfig, SimError};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid simulation settings: {0}")]
    Sim(#[from] SimError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    /// Stop after this many ticks. Runs until shut down when absent.
    pub max_ticks: Option<u64>,
    /// Status line interval, in ticks.
    pub report_every: u64,
    /// Drive the ship with the scripted autopilot.
    pub autopilot: bool,
    /// Sleep to hold the nominal tick rate. Off runs as fast as possible.
    pub paced: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            max_ticks: None,
            report_every: 60,
            autopilot: true,
            paced: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.sim.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.sim.asteroid_count, 8);
        assert!(config.max_ticks.is_none());
    }

    #[test]
    fn test_partial_sim_table() {
        let config = AppConfig::from_toml_str(
            r#"
            max_ticks = 600
            autopilot = false

            [sim]
            seed = 99
            asteroid_count = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.max_ticks, Some(600));
        assert!(!config.autopilot);
        assert_eq!(config.report_every, 60);
        assert_eq!(config.sim.seed, 99);
        assert_eq!(config.sim.asteroid_count, 3);
        assert_eq!(config.sim.width, 800.0);
    }

    #[test]
    fn test_invalid_sim_settings_rejected() {
        let err = AppConfig::from_toml_str("[sim]\nwidth = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Sim(SimError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = AppConfig::from_toml_str("max_ticks = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load("/nonexistent/spacerocks.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
