//! Gesture interpreter
//!
//! Turns a stream of hand frames into cube rotation and camera zoom.
//!
//! - Moving the index fingertip rotates the cube. A swipe across the whole
//!   frame is one full turn.
//! - Pinching zooms in, a fist zooms out, one step per frame.
//!
//! The interpreter is fed once per camera frame, in capture order. Rotation
//! and zoom are accumulated from per-frame deltas, so skipping or reordering
//! frames changes the result.

use devices::detection::DetectionResult;
use devices::hand::{HandFrame, Landmark};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{classify, Gesture};
use crate::config::GestureConfig;
use crate::error::Result;

/// Mutable state carried between frames
#[derive(Debug, Clone, PartialEq)]
pub struct InterpreterState {
    /// Index fingertip from the last frame that had a hand
    pub last_index_pos: Option<Landmark>,
    /// Accumulated rotation about X (radians, unbounded)
    pub rotation_x: f32,
    /// Accumulated rotation about Y (radians, unbounded)
    pub rotation_y: f32,
    /// Camera distance, kept within the configured zoom range
    pub zoom: f32,
}

impl InterpreterState {
    fn initial(config: &GestureConfig) -> Self {
        Self {
            last_index_pos: None,
            rotation_x: 0.0,
            rotation_y: 0.0,
            zoom: config.initial_zoom,
        }
    }
}

/// Output for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureResult {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub zoom: f32,
    pub gesture: Gesture,
    pub label: String,
}

/// Stateful landmark-to-transform mapper
///
/// Each instance owns its own state; several can run side by side.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    config: GestureConfig,
    state: InterpreterState,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        let config = GestureConfig::default();
        let state = InterpreterState::initial(&config);
        Self { config, state }
    }
}

impl GestureInterpreter {
    /// Create an interpreter with a validated config
    pub fn new(config: GestureConfig) -> Result<Self> {
        config.validate()?;
        let state = InterpreterState::initial(&config);
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    /// Forget the tracking baseline and return to the starting transform
    pub fn reset(&mut self) {
        self.state = InterpreterState::initial(&self.config);
    }

    /// Process the first hand of a detector result
    pub fn process_detection(&mut self, detection: &DetectionResult) -> GestureResult {
        self.process(detection.primary_hand())
    }

    /// Process one frame. `None` means no hand was detected.
    pub fn process(&mut self, frame: Option<&HandFrame>) -> GestureResult {
        let Some(frame) = frame else {
            self.state.last_index_pos = None;
            return self.result(Gesture::NoHand);
        };

        let index_tip = frame.index_tip();

        let Some(last) = self.state.last_index_pos else {
            // Baseline frame, no motion attributed to it
            self.state.last_index_pos = Some(index_tip);
            return self.result(Gesture::Tracking);
        };

        let delta_x = if self.config.mirrored {
            last.x - index_tip.x
        } else {
            index_tip.x - last.x
        };
        let delta_y = index_tip.y - last.y;

        self.state.rotation_y += delta_x * self.config.rotation_per_frame_width;
        self.state.rotation_x += delta_y * self.config.rotation_per_frame_width;
        self.state.last_index_pos = Some(index_tip);

        let gesture = classify(frame, &self.config);
        match gesture {
            Gesture::ZoomIn => self.state.zoom -= self.config.zoom_step,
            Gesture::ZoomOut => self.state.zoom += self.config.zoom_step,
            _ => {}
        }
        self.state.zoom = self.config.clamp_zoom(self.state.zoom);

        debug!(
            delta_x,
            delta_y,
            rotation_x = self.state.rotation_x,
            rotation_y = self.state.rotation_y,
            zoom = self.state.zoom,
            %gesture,
            "processed hand frame"
        );

        self.result(gesture)
    }

    fn result(&self, gesture: Gesture) -> GestureResult {
        GestureResult {
            rotation_x: self.state.rotation_x,
            rotation_y: self.state.rotation_y,
            zoom: self.state.zoom,
            gesture,
            label: gesture.label().to_string(),
        }
    }
}
