//! Episode tracker configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("hold duration must be positive: {0}")]
    ZeroHold(&'static str),

    #[error("anxiety threshold must be at least 1")]
    ZeroThreshold,
}

/// Episode tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeConfig {
    /// Continuous proximity required before an episode counts (milliseconds)
    pub proximity_hold_ms: u64,

    /// Continuous reset gesture required before the counter clears (milliseconds)
    pub reset_hold_ms: u64,

    /// Episode count at which the anxiety intervention activates
    pub anxiety_threshold: u32,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            proximity_hold_ms: 2000,
            reset_hold_ms: 1500,
            anxiety_threshold: 6,
        }
    }
}

impl EpisodeConfig {
    /// Create strict config (shorter holds, earlier escalation)
    pub fn strict() -> Self {
        Self {
            proximity_hold_ms: 1500,
            anxiety_threshold: 4,
            ..Default::default()
        }
    }

    /// Create lenient config (longer holds, later escalation)
    pub fn lenient() -> Self {
        Self {
            proximity_hold_ms: 3000,
            reset_hold_ms: 2000,
            anxiety_threshold: 8,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.proximity_hold_ms == 0 {
            return Err(ConfigError::ZeroHold("proximity_hold_ms"));
        }
        if self.reset_hold_ms == 0 {
            return Err(ConfigError::ZeroHold("reset_hold_ms"));
        }
        if self.anxiety_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        Ok(())
    }
}
