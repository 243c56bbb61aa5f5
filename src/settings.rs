//! Session configuration
//!
//! The four options a host may set. Field names serialize in camelCase so a
//! browser host can hand over the same JSON object it already uses.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Time between spawns (milliseconds)
    pub spawn_interval_ms: f64,
    /// Slowest fall speed; each word gets up to `SPEED_JITTER` more (units/s)
    pub base_fall_speed: f64,
    /// Lives at session start
    pub initial_lives: u32,
    /// Maximum words per session (None = unbounded)
    pub word_budget: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            base_fall_speed: DEFAULT_BASE_FALL_SPEED,
            initial_lives: DEFAULT_INITIAL_LIVES,
            word_budget: None,
        }
    }
}

impl Config {
    /// Builder-style budget override
    pub fn with_word_budget(mut self, budget: u32) -> Self {
        self.word_budget = Some(budget);
        self
    }

    /// Reject values the engine would accept but cannot play sensibly.
    ///
    /// The engine never calls this itself; hosts run it before construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spawn_interval_ms > 0.0) {
            return Err(ConfigError::NonPositiveSpawnInterval(self.spawn_interval_ms));
        }
        if !(self.base_fall_speed > 0.0) {
            return Err(ConfigError::NonPositiveFallSpeed(self.base_fall_speed));
        }
        if self.initial_lives == 0 {
            return Err(ConfigError::NonPositiveLives);
        }
        if self.word_budget == Some(0) {
            return Err(ConfigError::ZeroWordBudget);
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
