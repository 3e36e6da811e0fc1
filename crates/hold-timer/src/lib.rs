//! Hold Timer
//!
//! Provides a debounce primitive that turns a noisy per-frame boolean signal
//! into a "held long enough" decision driven by externally supplied timestamps.

mod timer;

pub use timer::HoldTimer;
