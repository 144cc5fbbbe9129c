//! Static hand pose classification
//!
//! Looks at a single frame only. Motion (rotation) is handled by the
//! interpreter, which owns the previous-frame state.

use devices::hand::{HandFrame, FINGER_JOINTS};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GestureConfig;

/// What the interpreter concluded for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gesture {
    /// No hand in view; tracking was reset
    NoHand,
    /// First frame after (re)acquiring a hand
    Tracking,
    /// Thumb and index pinched together
    ZoomIn,
    /// Closed fist
    ZoomOut,
    /// Hand visible, no zoom gesture
    Idle,
}

impl Gesture {
    /// Text shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoHand => "No hand detected",
            Self::Tracking => "Tracking hand...",
            Self::ZoomIn => "Zoom In (Pinch)",
            Self::ZoomOut => "Zoom Out (Fist)",
            Self::Idle => "No gesture",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 3D distance between thumb tip and index tip
pub fn pinch_distance(frame: &HandFrame) -> f32 {
    frame.thumb_tip().distance(frame.index_tip())
}

/// Count of non-thumb fingers whose tip sits below its PIP joint
///
/// Image y grows downwards, so with an upright hand a curled finger has
/// `tip.y > pip.y`.
pub fn folded_fingers(frame: &HandFrame) -> usize {
    FINGER_JOINTS
        .iter()
        .filter(|&&(tip, pip)| frame[tip].y > frame[pip].y)
        .count()
}

pub fn is_fist(frame: &HandFrame, min_folded: usize) -> bool {
    folded_fingers(frame) >= min_folded
}

/// Pick the zoom gesture for a frame. Pinch is checked before fist.
pub fn classify(frame: &HandFrame, config: &GestureConfig) -> Gesture {
    if pinch_distance(frame) < config.pinch_threshold {
        Gesture::ZoomIn
    } else if is_fist(frame, config.fist_min_folded) {
        Gesture::ZoomOut
    } else {
        Gesture::Idle
    }
}
