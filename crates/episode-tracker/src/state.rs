//! Episode tracking state

use hold_timer::HoldTimer;

use crate::config::EpisodeConfig;

/// Tracker state (mutated once per frame tick)
#[derive(Debug, Clone)]
pub struct TrackerState {
    /// Completed episodes since the last reset
    pub episode_count: u32,

    /// Hold timer for the current continuous proximity signal
    pub proximity_hold: HoldTimer,

    /// Set once the current hold session has been counted
    pub last_episode_counted: bool,

    /// Sticky once the count reaches the anxiety threshold
    pub intervention_active: bool,

    /// Hold timer for the reset gesture
    pub reset_hold: HoldTimer,
}

impl TrackerState {
    /// Fresh state with all counters zeroed and timers idle
    pub fn new(config: &EpisodeConfig) -> Self {
        Self {
            episode_count: 0,
            proximity_hold: HoldTimer::new(config.proximity_hold_ms),
            last_episode_counted: false,
            intervention_active: false,
            reset_hold: HoldTimer::new(config.reset_hold_ms),
        }
    }

    /// Atomic reset: count, intervention flag, and hold timers clear together
    pub fn reset(&mut self) {
        self.episode_count = 0;
        self.last_episode_counted = false;
        self.intervention_active = false;
        self.proximity_hold.clear();
        self.reset_hold.clear();
    }
}
