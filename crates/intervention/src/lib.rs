//! Intervention Session Engine
//!
//! Per-frame fusion layer between the detection collaborators and the
//! presentation layer:
//! - Feeds each monitor (episodes, fatigue, posture, phone)
//! - Runs the mode-gesture hold timers (zen, breathing, quiet, focus)
//! - Lets the OK hold double as episode reset and exit-all
//! - Folds everything into one `InterventionState` per tick
//!
//! The engine is single-threaded and synchronous; hosts that detect and
//! render on different threads wrap it in one mutex.

pub mod config;
pub mod engine;
pub mod modes;
pub mod signals;

pub use config::{SessionConfig, SessionConfigError};
pub use engine::{InterventionState, SessionEngine};
pub use modes::ModeFlags;
pub use signals::FrameSignals;
