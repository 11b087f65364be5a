use std::path::Path;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::RuleSet;

/// Deepest iterative-deepening limit accepted by validation
pub const MAX_SEARCH_DEPTH: u8 = 32;

/// Search parameters for the AI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Last iterative-deepening depth to attempt
    pub max_depth: u8,
    /// Wall-clock budget per move, in milliseconds
    pub time_limit_ms: u64,
    /// Most moves expanded at any node
    pub max_candidates: usize,
    /// Chebyshev radius around stones that candidates are drawn from
    pub proximity: u8,
    /// Transposition table size in megabytes
    pub tt_size_mb: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_depth: 10,
            time_limit_ms: 500,
            max_candidates: 20,
            proximity: 2,
            tt_size_mb: 16,
        }
    }
}

impl EngineConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub rules: RuleSet,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;
        if engine.max_depth == 0 || engine.max_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.max_depth must be in 1..={MAX_SEARCH_DEPTH}"
            )));
        }
        if engine.time_limit_ms == 0 {
            return Err(ConfigError::Validation(
                "engine.time_limit_ms must be > 0".into(),
            ));
        }
        if engine.max_candidates == 0 {
            return Err(ConfigError::Validation(
                "engine.max_candidates must be > 0".into(),
            ));
        }
        if engine.tt_size_mb == 0 {
            return Err(ConfigError::Validation(
                "engine.tt_size_mb must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// TOML text with every default value filled in
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
