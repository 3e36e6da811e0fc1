//! Hold Timer Implementation

use serde::{Deserialize, Serialize};

/// Debounce timer for a continuous boolean signal.
///
/// The start timestamp latches on the first true observation after a false
/// one and clears as soon as the signal drops. `update` reports true once the
/// signal has been continuously true for at least the hold duration. The
/// timer never sleeps or reads a clock; callers supply monotonic timestamps
/// in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldTimer {
    hold_ms: u64,
    started_ms: Option<u64>,
}

impl HoldTimer {
    /// Create a timer with a fixed hold duration
    pub fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            started_ms: None,
        }
    }

    /// Feed one observation of the signal; returns true once held long enough.
    ///
    /// A timestamp earlier than the latched start reads as zero elapsed time,
    /// so clock skew can never qualify a hold early.
    pub fn update(&mut self, active: bool, now_ms: u64) -> bool {
        if !active {
            self.started_ms = None;
            return false;
        }
        let started = *self.started_ms.get_or_insert(now_ms);
        now_ms.saturating_sub(started) >= self.hold_ms
    }

    /// Whether a hold is currently in progress
    pub fn is_running(&self) -> bool {
        self.started_ms.is_some()
    }

    /// Time the signal has been continuously true, zero if not running
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.started_ms
            .map(|started| now_ms.saturating_sub(started))
            .unwrap_or(0)
    }

    /// Configured hold duration
    pub fn hold_ms(&self) -> u64 {
        self.hold_ms
    }

    /// Drop any in-progress hold
    pub fn clear(&mut self) {
        self.started_ms = None;
    }
}
