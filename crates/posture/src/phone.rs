//! Phone distraction state machine

use hold_timer::HoldTimer;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::PostureConfigError;

/// Phone distraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneConfig {
    /// Sustained looking-down required before the warning fires (milliseconds)
    pub distraction_hold_ms: u64,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            distraction_hold_ms: 3000,
        }
    }
}

impl PhoneConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PostureConfigError> {
        if self.distraction_hold_ms == 0 {
            return Err(PostureConfigError::ZeroHold("distraction_hold_ms"));
        }
        Ok(())
    }
}

/// Per-tick distraction snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistractionAnalysis {
    /// Whether the user is looking down on this frame
    pub looking_down: bool,

    /// Whether the distraction warning is active
    pub warning_active: bool,
}

/// Looking-down-at-phone detector
pub struct PhoneMonitor {
    hold: HoldTimer,
    warning_active: bool,
}

impl PhoneMonitor {
    /// Create a monitor with the given configuration
    pub fn new(config: PhoneConfig) -> Result<Self, PostureConfigError> {
        config.validate()?;
        Ok(Self {
            hold: HoldTimer::new(config.distraction_hold_ms),
            warning_active: false,
        })
    }

    /// Feed one frame observation
    pub fn observe(&mut self, looking_down: bool, now_ms: u64) -> DistractionAnalysis {
        let held = self.hold.update(looking_down, now_ms);

        if held && !self.warning_active {
            info!("phone distraction warning activated");
            self.warning_active = true;
        }
        if !looking_down && self.warning_active {
            info!("distraction cleared");
            self.warning_active = false;
        }

        DistractionAnalysis {
            looking_down,
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

    #[test]
    fn test_warning_after_three_seconds() {
        let mut monitor = PhoneMonitor::new(PhoneConfig::default()).unwrap();

        assert!(!monitor.observe(true, 0).warning_active);
        assert!(!monitor.observe(true, 2900).warning_active);
        assert!(monitor.observe(true, 3000).warning_active);
    }

    #[test]
    fn test_looking_up_clears_instantly() {
        let mut monitor = PhoneMonitor::new(PhoneConfig::default()).unwrap();

        monitor.observe(true, 0);
        assert!(monitor.observe(true, 3500).warning_active);

        let out = monitor.observe(false, 3600);
        assert!(!out.warning_active);
        assert!(!out.looking_down);
    }

    #[test]
    fn test_glances_do_not_warn() {
        let mut monitor = PhoneMonitor::new(PhoneConfig::default()).unwrap();

        for start in [0u64, 5000, 10_000] {
            monitor.observe(true, start);
            assert!(!monitor.observe(true, start + 2000).warning_active);
            monitor.observe(false, start + 2100);
        }
    }
}
