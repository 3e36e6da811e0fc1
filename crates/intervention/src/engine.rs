//! Session Engine Implementation

use episode_tracker::{EpisodeAnalysis, EpisodeTracker};
use fatigue::{FatigueAnalysis, YawnMonitor};
use hold_timer::HoldTimer;
use posture::{DistractionAnalysis, PhoneMonitor, PostureAnalysis, PostureMonitor};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{SessionConfig, SessionConfigError};
use crate::modes::ModeFlags;
use crate::signals::FrameSignals;

/// Warmth applied while fist-triggered box breathing is active (percent)
const FIST_WARMTH: u8 = 60;

/// Warmth applied while the phone distraction warning is active (percent)
const PHONE_WARMTH: u8 = 40;

/// Warmth applied while the posture warning is active (percent)
const POSTURE_WARMTH: u8 = 50;

/// Complete per-tick intervention state for the presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterventionState {
    /// Active modes
    pub modes: ModeFlags,

    /// Effective screen warmth (max across all sources)
    pub warmth_percent: u8,

    /// Episode tracker snapshot
    pub episode: EpisodeAnalysis,

    /// Fatigue snapshot
    pub fatigue: FatigueAnalysis,

    /// Posture snapshot
    pub posture: PostureAnalysis,

    /// Phone distraction snapshot
    pub distraction: DistractionAnalysis,
}

impl InterventionState {
    /// Whether the breathing overlay should be shown
    pub fn breathing_active(&self) -> bool {
        self.modes.breathing
    }
}

/// Per-frame fusion of all monitors into one intervention state.
///
/// Invoked once per frame by the driving loop; never suspends, spawns, or
/// performs I/O. Timestamps are supplied by the caller.
pub struct SessionEngine {
    episodes: EpisodeTracker,
    fatigue: YawnMonitor,
    posture: PostureMonitor,
    phone: PhoneMonitor,
    modes: ModeFlags,
    fist_warmth: bool,
    ok_hold: HoldTimer,
    open_palm_hold: HoldTimer,
    raised_hands_hold: HoldTimer,
    ears_hold: HoldTimer,
    fist_hold: HoldTimer,
    peace_hold: HoldTimer,
    palms_hold: HoldTimer,
    last_episode: EpisodeAnalysis,
    last_posture: PostureAnalysis,
    last_distraction: DistractionAnalysis,
}

impl SessionEngine {
    /// Create an engine with the given configuration
    pub fn new(config: SessionConfig) -> Result<Self, SessionConfigError> {
        config.validate()?;
        Ok(Self {
            episodes: EpisodeTracker::new(config.episode.clone())?,
            fatigue: YawnMonitor::new(config.fatigue.clone())?,
            posture: PostureMonitor::new(config.posture.clone())?,
            phone: PhoneMonitor::new(config.phone.clone())?,
            modes: ModeFlags::default(),
            fist_warmth: false,
            ok_hold: HoldTimer::new(config.ok_hold_ms),
            open_palm_hold: HoldTimer::new(config.open_palm_hold_ms),
            raised_hands_hold: HoldTimer::new(config.raised_hands_hold_ms),
            ears_hold: HoldTimer::new(config.ears_hold_ms),
            fist_hold: HoldTimer::new(config.fist_hold_ms),
            peace_hold: HoldTimer::new(config.peace_hold_ms),
            palms_hold: HoldTimer::new(config.palms_hold_ms),
            last_episode: EpisodeAnalysis::default(),
            last_posture: PostureAnalysis::default(),
            last_distraction: DistractionAnalysis::default(),
        })
    }

    /// Feed one frame of signals and get the resulting intervention state
    pub fn update(&mut self, signals: &FrameSignals, now_ms: u64) -> InterventionState {
        let fatigue = self.fatigue.observe(signals.yawn_detected);
        if fatigue.energy_break_active && !self.modes.energy_break {
            warn!("energy break started");
            self.modes.energy_break = true;
        }

        if self.modes.energy_break {
            // Only the OK hold dismisses an active energy break
            if self.ok_hold.update(signals.ok_sign, now_ms) {
                self.modes.energy_break = false;
                self.fatigue.dismiss();
                self.ok_hold.clear();
            }
            return self.assemble(self.fatigue.snapshot());
        }

        if self.ok_hold.update(signals.ok_sign, now_ms) {
            self.exit_all_modes();
            self.ok_hold.clear();
        }

        // The raw OK signal also feeds the tracker's own reset hold
        let episode = self
            .episodes
            .observe(signals.proximity_detected, signals.ok_sign, now_ms);
        if episode.intervention_active && !self.modes.breathing {
            info!("anxiety intervention: breathing exercise activated");
            self.modes.breathing = true;
        }
        self.last_episode = episode;

        self.last_posture = self.posture.observe(signals.posture, now_ms);
        self.last_distraction = self.phone.observe(signals.looking_down, now_ms);

        // Mode gestures are suppressed while a mode is active or fingers are
        // near the mouth, so overlapping detections cannot fight
        if !self.modes.any_active() && !signals.proximity_detected {
            self.check_mode_gestures(signals, now_ms);
        }

        self.assemble(fatigue)
    }

    /// Current modes (read-only)
    pub fn modes(&self) -> ModeFlags {
        self.modes
    }

    fn exit_all_modes(&mut self) {
        if self.modes.any_active() || self.fist_warmth {
            info!("exiting all active modes");
        }
        self.modes.clear();
        self.fist_warmth = false;
        self.posture.clear();
        self.phone.clear();
    }

    fn check_mode_gestures(&mut self, signals: &FrameSignals, now_ms: u64) {
        if self.open_palm_hold.update(signals.open_palm, now_ms) {
            info!("open palm held: zen mode");
            self.modes.zen = true;
        }
        if self.raised_hands_hold.update(signals.both_hands_raised, now_ms) {
            info!("both hands raised: guided breathing");
            self.modes.breathing = true;
        }
        if self.ears_hold.update(signals.hands_covering_ears, now_ms) {
            info!("hands on ears: quiet mode");
            self.modes.quiet = true;
        }
        if self.fist_hold.update(signals.clenched_fist, now_ms) {
            info!("clenched fist: box breathing with warmth");
            self.modes.breathing = true;
            self.fist_warmth = true;
        }
        if self.peace_hold.update(signals.peace_sign, now_ms) {
            info!("peace sign: focus pause");
            self.modes.focus = true;
        }
        if self.palms_hold.update(signals.palms_together, now_ms) {
            info!("palms together: mindfulness");
            self.modes.zen = true;
        }
    }

    fn assemble(&self, fatigue: FatigueAnalysis) -> InterventionState {
        let mut warmth = self.last_episode.warmth_percent;
        if self.fist_warmth {
            warmth = warmth.max(FIST_WARMTH);
        }
        if self.last_distraction.warning_active {
            warmth = warmth.max(PHONE_WARMTH);
        }
        if self.last_posture.warning_active {
            warmth = warmth.max(POSTURE_WARMTH);
        }

        InterventionState {
            modes: self.modes,
            warmth_percent: warmth,
            episode: self.last_episode.clone(),
            fatigue,
            posture: self.last_posture.clone(),
            distraction: self.last_distraction.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posture::PostureIssues;

    /// Drives the engine at a fixed 100ms frame cadence
    struct Sim {
        engine: SessionEngine,
        now_ms: u64,
    }

    impl Sim {
        fn new() -> Self {
            Self {
                engine: SessionEngine::new(SessionConfig::default()).unwrap(),
                now_ms: 0,
            }
        }

        fn run(&mut self, signals: FrameSignals, duration_ms: u64) -> InterventionState {
            let end = self.now_ms + duration_ms;
            let mut last = self.engine.update(&signals, self.now_ms);
            while self.now_ms < end {
                self.now_ms += 100;
                last = self.engine.update(&signals, self.now_ms);
            }
            last
        }
    }

    fn idle() -> FrameSignals {
        FrameSignals::default()
    }

    fn proximity() -> FrameSignals {
        FrameSignals {
            proximity_detected: true,
            ..Default::default()
        }
    }

    fn ok_sign() -> FrameSignals {
        FrameSignals {
            ok_sign: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_habit_band_raises_warmth_only() {
        let mut sim = Sim::new();
        for _ in 0..3 {
            sim.run(proximity(), 2500);
            sim.run(idle(), 5000);
        }

        let out = sim.run(idle(), 100);
        assert_eq!(out.episode.episode_count, 3);
        assert_eq!(out.warmth_percent, 30);
        assert!(!out.breathing_active());
    }

    #[test]
    fn test_anxiety_threshold_activates_breathing() {
        let mut sim = Sim::new();
        for _ in 0..6 {
            sim.run(proximity(), 2500);
            sim.run(idle(), 5000);
        }

        let out = sim.run(idle(), 100);
        assert_eq!(out.episode.episode_count, 6);
        assert_eq!(out.warmth_percent, 70);
        assert!(out.breathing_active());
        assert!(out.episode.intervention_active);
    }

    #[test]
    fn test_ok_hold_exits_all_and_resets_episodes() {
        let mut sim = Sim::new();
        for _ in 0..6 {
            sim.run(proximity(), 2500);
            sim.run(idle(), 5000);
        }
        assert!(sim.run(idle(), 100).breathing_active());

        let out = sim.run(ok_sign(), 2000);
        assert!(!out.modes.any_active());
        assert_eq!(out.episode.episode_count, 0);
        assert_eq!(out.warmth_percent, 0);
    }

    #[test]
    fn test_fist_hold_starts_breathing_with_warmth() {
        let mut sim = Sim::new();
        let out = sim.run(
            FrameSignals {
                clenched_fist: true,
                ..Default::default()
            },
            3200,
        );
        assert!(out.modes.breathing);
        assert_eq!(out.warmth_percent, 60);

        // OK hold clears both the mode and the warmth
        sim.run(idle(), 500);
        let out = sim.run(ok_sign(), 1600);
        assert!(!out.modes.breathing);
        assert_eq!(out.warmth_percent, 0);
    }

    #[test]
    fn test_mode_gestures_suppressed_near_mouth() {
        let mut sim = Sim::new();
        let out = sim.run(
            FrameSignals {
                proximity_detected: true,
                open_palm: true,
                ..Default::default()
            },
            4000,
        );
        // Proximity wins: the palm never starts zen mode, the episode counts
        assert!(!out.modes.zen);
        assert_eq!(out.episode.episode_count, 1);
    }

    #[test]
    fn test_mode_gestures_suppressed_while_mode_active() {
        let mut sim = Sim::new();
        let zen = sim.run(
            FrameSignals {
                open_palm: true,
                ..Default::default()
            },
            2100,
        );
        assert!(zen.modes.zen);

        let out = sim.run(
            FrameSignals {
                peace_sign: true,
                ..Default::default()
            },
            3000,
        );
        assert!(out.modes.zen);
        assert!(!out.modes.focus);
    }

    #[test]
    fn test_energy_break_gates_everything_but_dismissal() {
        let mut sim = Sim::new();
        for _ in 0..5 {
            sim.run(
                FrameSignals {
                    yawn_detected: true,
                    ..Default::default()
                },
                200,
            );
            sim.run(idle(), 200);
        }
        assert!(sim.run(idle(), 100).modes.energy_break);

        // Mode gestures are ignored while the break is up
        let out = sim.run(
            FrameSignals {
                open_palm: true,
                ..Default::default()
            },
            2500,
        );
        assert!(out.modes.energy_break);
        assert!(!out.modes.zen);

        sim.run(idle(), 200);
        let out = sim.run(ok_sign(), 1600);
        assert!(!out.modes.energy_break);
        assert_eq!(out.fatigue.yawn_count, 0);
    }

    #[test]
    fn test_posture_warning_raises_warmth() {
        let mut sim = Sim::new();
        sim.run(proximity(), 2500);
        sim.run(idle(), 1000);

        let signals = FrameSignals {
            posture: PostureIssues {
                slouched: true,
                forward_head: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let out = sim.run(signals, 31_000);
        assert!(out.posture.warning_active);
        // max(episode warmth 10%, posture warmth 50%)
        assert_eq!(out.warmth_percent, 50);
    }

    #[test]
    fn test_phone_warning_raises_warmth_and_clears() {
        let mut sim = Sim::new();
        let out = sim.run(
            FrameSignals {
                looking_down: true,
                ..Default::default()
            },
            3500,
        );
        assert!(out.distraction.warning_active);
        assert_eq!(out.warmth_percent, 40);

        let out = sim.run(idle(), 200);
        assert!(!out.distraction.warning_active);
        assert_eq!(out.warmth_percent, 0);
    }
}
