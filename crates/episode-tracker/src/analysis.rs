//! Per-tick output snapshot

use serde::{Deserialize, Serialize};

use crate::escalation::{Severity, StatusBand};

/// Complete tracker output, computed fresh each tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeAnalysis {
    /// Completed episodes since the last reset
    pub episode_count: u32,

    /// Whether the anxiety intervention is active (sticky until reset)
    pub intervention_active: bool,

    /// Screen warmth, one of {0, 10, 20, 30, 40, 50, 70}
    pub warmth_percent: u8,

    /// Current status band
    pub status: StatusBand,

    /// Display severity for the on-screen counter
    pub severity: Severity,

    /// Pre-reset count, present only on the tick a reset fires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_from: Option<u32>,
}

impl EpisodeAnalysis {
    /// Whether a reset fired on this tick
    pub fn was_reset(&self) -> bool {
        self.reset_from.is_some()
    }
}
