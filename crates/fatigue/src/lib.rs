//! Fatigue Monitoring
//!
//! Counts distinct yawns over a sliding frame window and escalates to an
//! energy break once the threshold is reached.

mod monitor;

pub use monitor::{FatigueAnalysis, FatigueConfig, FatigueConfigError, YawnMonitor};
