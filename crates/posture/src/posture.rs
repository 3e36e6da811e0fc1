//! Posture warning state machine

use hold_timer::HoldTimer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::PostureConfigError;

/// Posture monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostureConfig {
    /// Sustained bad posture required before the warning fires (milliseconds)
    pub warning_hold_ms: u64,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self {
            warning_hold_ms: 30_000,
        }
    }
}

impl PostureConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PostureConfigError> {
        if self.warning_hold_ms == 0 {
            return Err(PostureConfigError::ZeroHold("warning_hold_ms"));
        }
        Ok(())
    }
}

/// Posture issue flags (computed upstream from pose landmarks)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureIssues {
    /// Forward head posture (tech neck)
    pub forward_head: bool,

    /// Slouched/hunched back
    pub slouched: bool,

    /// Rounded shoulders
    pub rounded_shoulders: bool,

    /// Uneven shoulder heights
    pub uneven_shoulders: bool,
}

impl PostureIssues {
    /// Whether any issue is flagged
    pub fn any(&self) -> bool {
        self.forward_head || self.slouched || self.rounded_shoulders || self.uneven_shoulders
    }
}

/// Per-tick posture snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostureAnalysis {
    /// Issues flagged on this frame
    pub issues: PostureIssues,

    /// Whether bad posture is being timed toward a warning
    pub monitoring: bool,

    /// How long the current bad-posture stretch has lasted
    pub held_ms: u64,

    /// Whether the posture warning is active
    pub warning_active: bool,
}

/// Sustained bad posture detector.
///
/// Any flagged issue starts the hold; once sustained past the threshold the
/// warning activates. An all-clear frame deactivates it immediately.
pub struct PostureMonitor {
    hold: HoldTimer,
    warning_active: bool,
}

impl PostureMonitor {
    /// Create a monitor with the given configuration
    pub fn new(config: PostureConfig) -> Result<Self, PostureConfigError> {
        config.validate()?;
        Ok(Self {
            hold: HoldTimer::new(config.warning_hold_ms),
            warning_active: false,
        })
    }

    /// Feed one frame of posture issue flags
    pub fn observe(&mut self, issues: PostureIssues, now_ms: u64) -> PostureAnalysis {
        let bad = issues.any();

        if bad && !self.hold.is_running() {
            debug!("bad posture detected, monitoring");
        }

        let held = self.hold.update(bad, now_ms);
        let held_ms = self.hold.elapsed_ms(now_ms);

        if held && !self.warning_active {
            warn!("posture alert after {}ms of poor posture", held_ms);
            self.warning_active = true;
        }

        if !bad && self.warning_active {
            info!("posture corrected, warning cleared");
            self.warning_active = false;
        }

        PostureAnalysis {
            issues,
            monitoring: self.hold.is_running(),
            held_ms,
            warning_active: self.warning_active,
        }
    }

    /// Clear the warning and any in-progress hold
    pub fn clear(&mut self) {
        self.hold.clear();
        self.warning_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slouched() -> PostureIssues {
        PostureIssues {
            slouched: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_warning_requires_sustained_issues() {
        let mut monitor = PostureMonitor::new(PostureConfig::default()).unwrap();

        let out = monitor.observe(slouched(), 0);
        assert!(out.monitoring);
        assert!(!out.warning_active);

        let out = monitor.observe(slouched(), 29_000);
        assert!(!out.warning_active);

        let out = monitor.observe(slouched(), 30_000);
        assert!(out.warning_active);
        assert_eq!(out.held_ms, 30_000);
    }

    #[test]
    fn test_all_clear_deactivates_immediately() {
        let mut monitor = PostureMonitor::new(PostureConfig::default()).unwrap();

        monitor.observe(slouched(), 0);
        assert!(monitor.observe(slouched(), 31_000).warning_active);

        let out = monitor.observe(PostureIssues::default(), 31_100);
        assert!(!out.warning_active);
        assert!(!out.monitoring);
        assert_eq!(out.held_ms, 0);
    }

    #[test]
    fn test_brief_correction_restarts_hold() {
        let mut monitor = PostureMonitor::new(PostureConfig::default()).unwrap();

        monitor.observe(slouched(), 0);
        monitor.observe(slouched(), 29_000);
        monitor.observe(PostureIssues::default(), 29_100);

        // Hold restarts; 29s of prior slouching does not carry over
        let out = monitor.observe(slouched(), 29_200);
        assert!(!out.warning_active);
        assert!(monitor.observe(slouched(), 59_200).warning_active);
    }

    #[test]
    fn test_clear_resets_state() {
        let mut monitor = PostureMonitor::new(PostureConfig::default()).unwrap();
        monitor.observe(slouched(), 0);
        monitor.observe(slouched(), 31_000);

        monitor.clear();
        let out = monitor.observe(PostureIssues::default(), 31_100);
        assert!(!out.warning_active);
        assert!(!out.monitoring);
    }
}
