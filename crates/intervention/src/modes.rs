//! Intervention mode flags

use serde::{Deserialize, Serialize};

/// Active intervention modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeFlags {
    /// Dimmed zen overlay
    pub zen: bool,

    /// Full-screen breathing exercise
    pub breathing: bool,

    /// Quiet mode (dim + brown noise at the presentation layer)
    pub quiet: bool,

    /// Focus pause overlay
    pub focus: bool,

    /// High-energy fatigue break
    pub energy_break: bool,
}

impl ModeFlags {
    /// Whether any mode is currently active
    pub fn any_active(&self) -> bool {
        self.zen || self.breathing || self.quiet || self.focus || self.energy_break
    }

    /// Deactivate every mode
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
