//! Gesture tuning configuration
//!
//! All thresholds used by the interpreter live here so they can be tuned from
//! a TOML file. Missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::path::Path;

use crate::error::{Error, Result};

/// Interpreter thresholds and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Thumb-to-index distance (normalized units) below which a pinch is seen
    pub pinch_threshold: f32,
    /// Zoom change applied per pinch/fist frame
    pub zoom_step: f32,
    /// Closest allowed camera distance
    pub min_zoom: f32,
    /// Farthest allowed camera distance
    pub max_zoom: f32,
    /// Camera distance before any gesture
    pub initial_zoom: f32,
    /// Folded fingers (out of four) needed for a fist
    pub fist_min_folded: usize,
    /// Radians of rotation for a swipe across the full frame width
    pub rotation_per_frame_width: f32,
    /// Camera image is mirrored (selfie view), so horizontal motion is inverted
    pub mirrored: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.07,
            zoom_step: 0.08,
            min_zoom: 1.5,
            max_zoom: 7.0,
            initial_zoom: 3.0,
            fist_min_folded: 3,
            rotation_per_frame_width: TAU,
            mirrored: true,
        }
    }
}

impl GestureConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is usable
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("pinch_threshold", self.pinch_threshold),
            ("zoom_step", self.zoom_step),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("initial_zoom", self.initial_zoom),
            ("rotation_per_frame_width", self.rotation_per_frame_width),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::Config(format!("{name} must be finite")));
        }

        if self.pinch_threshold <= 0.0 {
            return Err(Error::Config("pinch_threshold must be > 0".into()));
        }
        if self.zoom_step <= 0.0 {
            return Err(Error::Config("zoom_step must be > 0".into()));
        }
        if self.min_zoom > self.max_zoom {
            return Err(Error::Config(format!(
                "min_zoom ({}) is greater than max_zoom ({})",
                self.min_zoom, self.max_zoom
            )));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.initial_zoom) {
            return Err(Error::Config(format!(
                "initial_zoom ({}) is outside [{}, {}]",
                self.initial_zoom, self.min_zoom, self.max_zoom
            )));
        }
        if !(1..=4).contains(&self.fist_min_folded) {
            return Err(Error::Config(format!(
                "fist_min_folded must be between 1 and 4, got {}",
                self.fist_min_folded
            )));
        }
        Ok(())
    }

    /// Clamp a zoom value into the configured range
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
