//! Posture & Distraction Monitoring
//!
//! Two hold-based monitors over collaborator-supplied per-frame signals:
//! - Posture: issue flags sustained for 30s raise a posture warning
//! - Phone: looking down for 3s raises a distraction warning
//!
//! Both warnings clear immediately when the signal drops.

mod phone;
mod posture;

pub use phone::{DistractionAnalysis, PhoneConfig, PhoneMonitor};
pub use posture::{PostureAnalysis, PostureConfig, PostureIssues, PostureMonitor};

use thiserror::Error;

/// Posture crate configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PostureConfigError {
    #[error("hold duration must be positive: {0}")]
    ZeroHold(&'static str),
}
