//! The scene the gestures act on
//!
//! Rendering is someone else's job. This module keeps the state a renderer
//! would read each frame: the cube's local rotation and a perspective camera
//! sitting on the +Z axis looking at the origin. The hint display holds the
//! gesture label shown to the user.

use gesture::GestureResult;
use glam::{EulerRot, Mat4, Quat, Vec3};
use tracing::info;

use crate::config::SceneConfig;

/// Perspective camera positioned along +Z, looking down -Z
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl PerspectiveCamera {
    pub fn new(config: &SceneConfig, distance: f32) -> Self {
        Self {
            fov_y: config.fov_degrees.to_radians(),
            aspect: config.aspect(),
            near: config.near,
            far: config.far,
            position: Vec3::new(0.0, 0.0, distance),
        }
    }

    pub fn distance(&self) -> f32 {
        self.position.z
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.position.z = distance;
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, Vec3::NEG_Z, Vec3::Y)
    }
}

/// A unit cube at the origin viewed by one camera
#[derive(Debug, Clone, PartialEq)]
pub struct CubeScene {
    /// Local rotation of the cube (Euler XYZ, as set from gestures)
    pub cube_rotation: Quat,
    pub camera: PerspectiveCamera,
}

impl CubeScene {
    pub fn new(config: &SceneConfig, initial_distance: f32) -> Self {
        Self {
            cube_rotation: Quat::IDENTITY,
            camera: PerspectiveCamera::new(config, initial_distance),
        }
    }

    /// Copy a gesture result onto the cube and camera
    pub fn apply(&mut self, result: &GestureResult) {
        self.cube_rotation =
            Quat::from_euler(EulerRot::XYZ, result.rotation_x, result.rotation_y, 0.0);
        self.camera.set_distance(result.zoom);
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_quat(self.cube_rotation)
    }

    /// Full transform a renderer would upload for the cube
    pub fn model_view_projection(&self) -> Mat4 {
        self.camera.projection() * self.camera.view() * self.model()
    }
}

/// Text surface showing the current gesture label
#[derive(Debug, Clone, Default)]
pub struct HintDisplay {
    text: String,
    changes: usize,
}

impl HintDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times the text changed
    pub fn changes(&self) -> usize {
        self.changes
    }

    /// Show `label`, returning whether it differs from what was shown
    pub fn set(&mut self, label: &str) -> bool {
        if self.text == label {
            return false;
        }
        info!(hint = label, "gesture hint changed");
        self.text.clear();
        self.text.push_str(label);
        self.changes += 1;
        true
    }
}
