//! Hand-tracking input abstractions
//!
//! Platform-agnostic types for camera-based hand tracking. The detector and
//! the camera live outside this crate; what comes in here is their output.
//!
//! # Modules
//!
//! - [`hand`]: 21-point hand landmarks and their index convention
//! - [`detection`]: per-frame detector output and detector options
//! - [`backend`]: frame sources (recorded, scripted, null)
//! - [`synthetic`]: canned hand poses for demos and tests

pub mod backend;
pub mod detection;
pub mod hand;
pub mod synthetic;

// Re-export commonly used types at crate root
pub use backend::{HandSource, NullSource, RecordedSource, ScriptStep, ScriptedSource, SourceError};
pub use detection::{DetectionResult, DetectorOptions, HandDetection, Handedness};
pub use hand::{HandFrame, Landmark, LandmarkCountError, FINGER_JOINTS, LANDMARK_COUNT};
