//! Configuration types for llm-tour.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Generation playback configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between revealed fragments, in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 400,
        }
    }
}

impl PlaybackConfig {
    /// Tick interval as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Pseudo-tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Exclusive upper bound for synthetic token values.
    pub max_value: u32,
    /// Seed for the value generator (entropy when `None`).
    pub seed: Option<u64>,
    /// Reuse a token's value while its position and text are unchanged.
    pub stable_values: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_value: 50_000,
            seed: None,
            stable_values: false,
        }
    }
}

/// Top-level configuration for a tour session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Playback timing.
    pub playback: PlaybackConfig,
    /// Token value generation.
    pub tokenizer: TokenizerConfig,
    /// Stage shown when the session opens.
    pub initial_stage: usize,
}

impl TourConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for a zero tick interval or a zero value bound.
    pub fn validate(&self) -> Result<()> {
        if self.playback.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be positive".into()));
        }
        if self.tokenizer.max_value == 0 {
            return Err(Error::Config("max_value must be positive".into()));
        }
        Ok(())
    }
}
