//! Session configuration

use episode_tracker::{ConfigError, EpisodeConfig};
use fatigue::{FatigueConfig, FatigueConfigError};
use posture::{PhoneConfig, PostureConfig, PostureConfigError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session configuration error types
#[derive(Error, Debug)]
pub enum SessionConfigError {
    #[error("episode tracker config: {0}")]
    Episode(#[from] ConfigError),

    #[error("fatigue config: {0}")]
    Fatigue(#[from] FatigueConfigError),

    #[error("posture config: {0}")]
    Posture(#[from] PostureConfigError),

    #[error("gesture hold duration must be positive: {0}")]
    ZeroGestureHold(&'static str),
}

/// Aggregated configuration for one monitoring session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Episode tracker thresholds
    pub episode: EpisodeConfig,

    /// Fatigue monitoring
    pub fatigue: FatigueConfig,

    /// Posture monitoring
    pub posture: PostureConfig,

    /// Phone distraction monitoring
    pub phone: PhoneConfig,

    /// OK sign hold before exit-all fires (milliseconds)
    pub ok_hold_ms: u64,

    /// Open palm hold before zen mode (milliseconds)
    pub open_palm_hold_ms: u64,

    /// Both-hands-raised hold before guided breathing (milliseconds)
    pub raised_hands_hold_ms: u64,

    /// Hands-on-ears hold before quiet mode (milliseconds)
    pub ears_hold_ms: u64,

    /// Clenched fist hold before box breathing with warmth (milliseconds)
    pub fist_hold_ms: u64,

    /// Peace sign hold before the focus pause (milliseconds)
    pub peace_hold_ms: u64,

    /// Palms-together hold before mindfulness (milliseconds)
    pub palms_hold_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            episode: EpisodeConfig::default(),
            fatigue: FatigueConfig::default(),
            posture: PostureConfig::default(),
            phone: PhoneConfig::default(),
            ok_hold_ms: 1500,
            open_palm_hold_ms: 2000,
            raised_hands_hold_ms: 2000,
            ears_hold_ms: 1000,
            fist_hold_ms: 3000,
            peace_hold_ms: 2000,
            palms_hold_ms: 2000,
        }
    }
}

impl SessionConfig {
    /// Validate the configuration, including every sub-config
    pub fn validate(&self) -> Result<(), SessionConfigError> {
        self.episode.validate()?;
        self.fatigue.validate()?;
        self.posture.validate()?;
        self.phone.validate()?;

        let holds = [
            (self.ok_hold_ms, "ok_hold_ms"),
            (self.open_palm_hold_ms, "open_palm_hold_ms"),
            (self.raised_hands_hold_ms, "raised_hands_hold_ms"),
            (self.ears_hold_ms, "ears_hold_ms"),
            (self.fist_hold_ms, "fist_hold_ms"),
            (self.peace_hold_ms, "peace_hold_ms"),
            (self.palms_hold_ms, "palms_hold_ms"),
        ];
        for (hold_ms, name) in holds {
            if hold_ms == 0 {
                return Err(SessionConfigError::ZeroGestureHold(name));
            }
        }
        Ok(())
    }
}
