//! Yawn Monitor Implementation

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Fatigue configuration error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FatigueConfigError {
    #[error("yawn threshold must be at least 1")]
    ZeroThreshold,

    #[error("observation window must hold at least one frame")]
    EmptyWindow,
}

/// Fatigue monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueConfig {
    /// Distinct yawns that trigger an energy break
    pub yawn_threshold: u32,

    /// Observation window length in frames (~25s at 30fps by default)
    pub window_frames: usize,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            yawn_threshold: 5,
            window_frames: 750,
        }
    }
}

impl FatigueConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FatigueConfigError> {
        if self.yawn_threshold == 0 {
            return Err(FatigueConfigError::ZeroThreshold);
        }
        if self.window_frames == 0 {
            return Err(FatigueConfigError::EmptyWindow);
        }
        Ok(())
    }
}

/// Per-tick fatigue snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FatigueAnalysis {
    /// Distinct yawns counted toward the next energy break
    pub yawn_count: u32,

    /// Whether an energy break is active (sticky until dismissed)
    pub energy_break_active: bool,
}

/// Yawn counting state machine.
///
/// A yawn counts once per false-to-true transition of the per-frame signal,
/// never per frame. Reaching the threshold activates the energy break and
/// clears the counter; the break stays active until `dismiss`.
pub struct YawnMonitor {
    config: FatigueConfig,
    window: VecDeque<bool>,
    yawn_count: u32,
    last_yawn_detected: bool,
    energy_break_active: bool,
}

impl YawnMonitor {
    /// Create a monitor with the given configuration
    pub fn new(config: FatigueConfig) -> Result<Self, FatigueConfigError> {
        config.validate()?;
        Ok(Self {
            window: VecDeque::with_capacity(config.window_frames),
            yawn_count: 0,
            last_yawn_detected: false,
            energy_break_active: false,
            config,
        })
    }

    /// Feed one frame observation
    pub fn observe(&mut self, yawn_detected: bool) -> FatigueAnalysis {
        if self.window.len() >= self.config.window_frames {
            self.window.pop_front();
        }
        self.window.push_back(yawn_detected);

        if yawn_detected && !self.last_yawn_detected {
            self.yawn_count += 1;
            info!("yawn detected ({} in window)", self.yawn_count);
        }
        self.last_yawn_detected = yawn_detected;

        if self.yawn_count >= self.config.yawn_threshold && !self.energy_break_active {
            warn!("fatigue alert: {} yawns, starting energy break", self.yawn_count);
            self.energy_break_active = true;
            self.yawn_count = 0;
        }

        self.snapshot()
    }

    /// End the energy break and restart the observation window
    pub fn dismiss(&mut self) {
        if self.energy_break_active {
            info!("energy break dismissed");
        }
        self.energy_break_active = false;
        self.yawn_count = 0;
        self.window.clear();
    }

    /// Current snapshot without consuming a frame
    pub fn snapshot(&self) -> FatigueAnalysis {
        FatigueAnalysis {
            yawn_count: self.yawn_count,
            energy_break_active: self.energy_break_active,
        }
    }

    /// Frames in the window during which a yawn was visible
    pub fn yawn_frames_in_window(&self) -> usize {
        self.window.iter().filter(|&&yawning| yawning).count()
    }
}
