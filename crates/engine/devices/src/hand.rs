//! Hand landmark types
//!
//! A detected hand is reported as 21 normalized 3D points. The index of each
//! point follows the usual hand-landmark convention (wrist first, then four
//! joints per digit from thumb to pinky).

use glam::Vec3;
use serde::{Deserialize, Serialize};

// ============================================================================
// Landmark indices
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one detected hand
pub const LANDMARK_COUNT: usize = 21;

/// (tip, pip) pairs for the four non-thumb fingers, index to pinky
pub const FINGER_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

// ============================================================================
// Landmark
// ============================================================================

/// A single tracked point on a hand
///
/// `x` and `y` are normalized to the input image (0.0 - 1.0, y grows
/// downwards). `z` is relative depth on roughly the same scale as `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// Create a new landmark
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Position as a vector
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to another landmark in normalized space
    pub fn distance(self, other: Landmark) -> f32 {
        self.to_vec3().distance(other.to_vec3())
    }
}

impl From<Vec3> for Landmark {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Landmark> for Vec3 {
    fn from(l: Landmark) -> Self {
        l.to_vec3()
    }
}

// ============================================================================
// HandFrame
// ============================================================================

/// Error returned when building a [`HandFrame`] from the wrong number of points
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {} hand landmarks, got {found}", LANDMARK_COUNT)]
pub struct LandmarkCountError {
    pub found: usize,
}

/// The 21 landmarks of one detected hand
///
/// The fixed-size array makes a short or long frame unrepresentable; loose
/// data from a detector goes through `TryFrom<Vec<Landmark>>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct HandFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandFrame {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn wrist(&self) -> Landmark {
        self.landmarks[WRIST]
    }

    pub fn thumb_tip(&self) -> Landmark {
        self.landmarks[THUMB_TIP]
    }

    pub fn index_tip(&self) -> Landmark {
        self.landmarks[INDEX_TIP]
    }
}

impl std::ops::Index<usize> for HandFrame {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }
}

impl std::ops::IndexMut<usize> for HandFrame {
    fn index_mut(&mut self, index: usize) -> &mut Landmark {
        &mut self.landmarks[index]
    }
}

impl TryFrom<Vec<Landmark>> for HandFrame {
    type Error = LandmarkCountError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        let found = points.len();
        let landmarks: [Landmark; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkCountError { found })?;
        Ok(Self { landmarks })
    }
}

impl From<HandFrame> for Vec<Landmark> {
    fn from(frame: HandFrame) -> Self {
        frame.landmarks.to_vec()
    }
}
