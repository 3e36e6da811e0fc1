//! Nail-Biting Episode Tracker
//!
//! Converts a noisy per-frame "fingers near mouth" signal into discrete,
//! de-duplicated behavioral episodes:
//! - Debounced episode edges (at most one count per continuous hold session)
//! - Progressive screen-warmth escalation in the habit band
//! - Sticky anxiety intervention once the episode threshold is reached
//! - Gesture-driven atomic reset
//!
//! The tracker is deterministic and performs no I/O or timing of its own; the
//! driving loop supplies a monotonic timestamp with every observation.

pub mod analysis;
pub mod config;
pub mod escalation;
pub mod state;

pub use analysis::EpisodeAnalysis;
pub use config::{ConfigError, EpisodeConfig};
pub use escalation::{warmth_percent, Severity, StatusBand};
pub use state::TrackerState;

use tracing::{debug, info, warn};

/// Episode tracking state machine, driven once per frame tick
pub struct EpisodeTracker {
    config: EpisodeConfig,
    state: TrackerState,
}

impl EpisodeTracker {
    /// Create a tracker with the given configuration
    pub fn new(config: EpisodeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: TrackerState::new(&config),
            config,
        })
    }

    /// Feed one frame observation and get the current output snapshot.
    ///
    /// Reset takes priority: on the tick the reset gesture qualifies, the
    /// whole state clears atomically and proximity is not processed. The
    /// function is total; any input combination produces a defined output.
    pub fn observe(
        &mut self,
        proximity_detected: bool,
        reset_gesture_detected: bool,
        now_ms: u64,
    ) -> EpisodeAnalysis {
        let reset_from = self.check_reset(reset_gesture_detected, now_ms);
        if reset_from.is_none() {
            self.track_proximity(proximity_detected, now_ms);
        }
        self.snapshot(reset_from)
    }

    /// Current state (read-only)
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Active configuration
    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    /// Clear all episode state immediately (bypasses the gesture hold)
    pub fn reset(&mut self) {
        if self.state.episode_count > 0 {
            info!(
                "episode counter reset (was at {} episodes)",
                self.state.episode_count
            );
        }
        self.state.reset();
    }

    fn check_reset(&mut self, gesture: bool, now_ms: u64) -> Option<u32> {
        if !self.state.reset_hold.update(gesture, now_ms) {
            return None;
        }
        let previous = self.state.episode_count;
        info!("reset gesture held: clearing {} episodes", previous);
        // Clears the reset hold too, so a still-held gesture re-arms
        self.state.reset();
        Some(previous)
    }

    fn track_proximity(&mut self, detected: bool, now_ms: u64) {
        if detected && !self.state.proximity_hold.is_running() {
            // New hold session arms the episode edge
            self.state.last_episode_counted = false;
            debug!("proximity hold started");
        }

        let held = self.state.proximity_hold.update(detected, now_ms);

        if !detected {
            if self.state.last_episode_counted {
                debug!(
                    "hands away from mouth (total episodes: {})",
                    self.state.episode_count
                );
            }
            self.state.last_episode_counted = false;
            return;
        }

        if held && !self.state.last_episode_counted {
            self.count_episode();
        }
    }

    fn count_episode(&mut self) {
        self.state.episode_count += 1;
        self.state.last_episode_counted = true;

        let count = self.state.episode_count;
        let threshold = self.config.anxiety_threshold;

        if count < threshold {
            info!(
                "nail biting episode {}/{} - warmth {}%",
                count,
                threshold - 1,
                escalation::warmth_percent(count, threshold)
            );
        } else {
            if !self.state.intervention_active {
                warn!("anxiety alert: {} nail biting episodes", count);
            } else {
                info!("nail biting episode {} during anxiety phase", count);
            }
            self.state.intervention_active = true;
        }
    }

    fn snapshot(&self, reset_from: Option<u32>) -> EpisodeAnalysis {
        let count = self.state.episode_count;
        let threshold = self.config.anxiety_threshold;
        EpisodeAnalysis {
            episode_count: count,
            intervention_active: self.state.intervention_active,
            warmth_percent: escalation::warmth_percent(count, threshold),
            status: StatusBand::from_count(count, threshold),
            severity: Severity::from_count(count),
            reset_from,
        }
    }
}
