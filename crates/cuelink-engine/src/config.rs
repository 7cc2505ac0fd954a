//! Engine configuration.
//!
//! All fields have compile-time defaults; `#[serde(default)]` makes
//! every field optional in a config document.
//!
//! # Example TOML
//!
//! ```toml
//! history_capacity = 50
//! history_horizon_ms = 5000
//! cache_capacity = 50
//! debounce_ms = 5000
//! adapt_frequency = true
//! adapt_intensity = true
//! spatial_passthrough = true
//! strict_patterns = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable engine parameters.
///
/// # Fields
///
/// | Field | Default | Purpose |
/// |-------|---------|---------|
/// | `history_capacity` | 50 | Max events in the history buffer |
/// | `history_horizon_ms` | 5000 | Age pruning horizon before matching |
/// | `cache_capacity` | 50 | Max entries in the cue cache |
/// | `debounce_ms` | 5000 | Per-pattern match-notification cooldown |
/// | `adapt_frequency` | true | Scale cue frequency by analysis pitch |
/// | `adapt_intensity` | true | Scale cue intensity by analysis amplitude |
/// | `spatial_passthrough` | true | Copy analysis spatial hints onto cues |
/// | `strict_patterns` | false | Reject degenerate patterns at register time |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum events held in the history buffer.
    pub history_capacity: usize,

    /// Events older than this (relative to the clock at match time)
    /// are pruned before matching.
    pub history_horizon_ms: u64,

    /// Maximum entries in the cue cache (FIFO eviction).
    pub cache_capacity: usize,

    /// Cooldown between repeated notifications of the same pattern.
    pub debounce_ms: u64,

    /// Apply the frequency adaptation rule (reference pitch 440 Hz).
    pub adapt_frequency: bool,

    /// Apply the intensity adaptation rule (clamped at 1.0).
    pub adapt_intensity: bool,

    /// Copy `spatial_position` from analysis onto cues unchanged.
    pub spatial_passthrough: bool,

    /// Reject degenerate patterns with a [`ConfigError`] instead of
    /// silently accepting never-matching definitions.
    pub strict_patterns: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            history_horizon_ms: default_history_horizon_ms(),
            cache_capacity: default_cache_capacity(),
            debounce_ms: default_debounce_ms(),
            adapt_frequency: true,
            adapt_intensity: true,
            spatial_passthrough: true,
            strict_patterns: false,
        }
    }
}

fn default_history_capacity() -> usize {
    50
}

fn default_history_horizon_ms() -> u64 {
    5_000
}

fn default_cache_capacity() -> usize {
    50
}

fn default_debounce_ms() -> u64 {
    5_000
}

impl EngineConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Deserializes from a TOML string. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on invalid TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.history_horizon_ms, 5_000);
        assert_eq!(config.cache_capacity, 50);
        assert_eq!(config.debounce_ms, 5_000);
        assert!(config.adapt_frequency);
        assert!(config.adapt_intensity);
        assert!(config.spatial_passthrough);
        assert!(!config.strict_patterns);
    }

    #[test]
    fn toml_round_trip() {
        let mut config = EngineConfig::new();
        config.debounce_ms = 500;
        config.strict_patterns = true;

        let toml_str = config.to_toml().unwrap();
        let back = EngineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_toml_takes_defaults() {
        let config = EngineConfig::from_toml("history_capacity = 20\n").unwrap();
        assert_eq!(config.history_capacity, 20);
        assert_eq!(config.cache_capacity, 50);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = EngineConfig::from_toml("history_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
