//! Hand detector output and options
//!
//! Mirrors what a landmark detector hands back for one camera frame: zero or
//! more hands, each with a confidence score and a left/right label.

use serde::{Deserialize, Serialize};

use crate::hand::HandFrame;

/// Which hand the detector believes it saw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

fn default_score() -> f32 {
    1.0
}

/// One hand reported by the detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandDetection {
    pub landmarks: HandFrame,
    /// Detection confidence (0.0-1.0)
    #[serde(default = "default_score")]
    pub score: f32,
    #[serde(default)]
    pub handedness: Option<Handedness>,
}

impl HandDetection {
    pub fn new(landmarks: HandFrame) -> Self {
        Self {
            landmarks,
            score: 1.0,
            handedness: None,
        }
    }
}

/// Everything the detector reported for one camera frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(default)]
    pub hands: Vec<HandDetection>,
}

impl DetectionResult {
    /// A frame with no hands in view
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(landmarks: HandFrame) -> Self {
        Self {
            hands: vec![HandDetection::new(landmarks)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Landmarks of the first reported hand, if any
    pub fn primary_hand(&self) -> Option<&HandFrame> {
        self.hands.first().map(|h| &h.landmarks)
    }

    /// Apply the detector's confidence gate and hand limit
    pub fn filtered(mut self, options: &DetectorOptions) -> Self {
        self.hands.retain(|h| h.score >= options.min_detection_confidence);
        self.hands.truncate(options.max_num_hands);
        self
    }
}

/// Settings the landmark detector runs with
///
/// Confidence gating happens here, upstream of gesture interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorOptions {
    pub max_num_hands: usize,
    /// 0 = lite, 1 = full
    pub model_complexity: u8,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
        }
    }
}
