//! Escalation mapping from episode count to warmth and status bands
//!
//! Pure lookups, separated from the counting state machine so each can be
//! tested independently.

use serde::{Deserialize, Serialize};

/// Warmth step per episode in the habit band (percent)
pub const WARMTH_STEP: u32 = 10;

/// Highest episode that still raises habit-band warmth
pub const HABIT_WARMTH_CAP: u32 = 5;

/// Warmth applied once the anxiety threshold is reached (percent)
pub const ANXIETY_WARMTH: u8 = 70;

/// Screen warmth for a given episode count.
///
/// Episodes 1-5 map to 10-50% in steps of 10; at or above the anxiety
/// threshold warmth jumps to 70%. The output domain is exactly
/// {0, 10, 20, 30, 40, 50, 70}.
pub fn warmth_percent(episode_count: u32, anxiety_threshold: u32) -> u8 {
    if episode_count >= anxiety_threshold {
        ANXIETY_WARMTH
    } else {
        (episode_count.min(HABIT_WARMTH_CAP) * WARMTH_STEP) as u8
    }
}

/// Behavioral status band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBand {
    /// No episodes since the last reset
    #[default]
    None,

    /// Habit phase: awareness feedback only, no breathing exercise
    Habit,

    /// Anxiety phase: breathing intervention active
    Anxiety,
}

impl StatusBand {
    /// Band for a given episode count
    pub fn from_count(episode_count: u32, anxiety_threshold: u32) -> Self {
        if episode_count == 0 {
            StatusBand::None
        } else if episode_count < anxiety_threshold {
            StatusBand::Habit
        } else {
            StatusBand::Anxiety
        }
    }

    /// Label used by the presentation layer
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusBand::None => "none",
            StatusBand::Habit => "habit",
            StatusBand::Anxiety => "anxiety",
        }
    }
}

/// Display severity for the on-screen counter (color band)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Episodes 0-2
    #[default]
    Mild,

    /// Episodes 3-5
    Moderate,

    /// Anxiety-level counts
    Critical,
}

impl Severity {
    /// Severity for a given episode count
    pub fn from_count(episode_count: u32) -> Self {
        if episode_count < 3 {
            Severity::Mild
        } else if episode_count < 6 {
            Severity::Moderate
        } else {
            Severity::Critical
        }
    }
}
