//! Per-frame collaborator contract

use posture::PostureIssues;
use serde::{Deserialize, Serialize};

/// Everything the detection pipeline reports for one frame.
///
/// All signals are plain booleans computed upstream from landmark geometry;
/// an absent detection is simply false.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameSignals {
    /// Fingers within the distance threshold of the mouth
    pub proximity_detected: bool,

    /// OK sign (thumb-index circle); doubles as reset and exit-all
    pub ok_sign: bool,

    /// Open palm facing the camera
    pub open_palm: bool,

    /// Both wrists above the head
    pub both_hands_raised: bool,

    /// Both hands near the ears
    pub hands_covering_ears: bool,

    /// Clenched fist
    pub clenched_fist: bool,

    /// Peace sign
    pub peace_sign: bool,

    /// Palms together
    pub palms_together: bool,

    /// Mouth aspect ratio above the yawn threshold
    pub yawn_detected: bool,

    /// Head dropped below shoulder height
    pub looking_down: bool,

    /// Posture issue flags
    pub posture: PostureIssues,
}
