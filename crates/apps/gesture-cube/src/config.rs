//! Application configuration
//!
//! One TOML file with three optional tables:
//!
//! ```toml
//! [gesture]
//! pinch_threshold = 0.07
//!
//! [detector]
//! min_detection_confidence = 0.7
//!
//! [scene]
//! fov_degrees = 75.0
//! ```

use anyhow::Context;
use devices::DetectorOptions;
use gesture::GestureConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no `--config` is given
pub const CONFIG_ENV: &str = "GESTURE_CUBE_CONFIG";

/// Camera and viewport settings for the modeled scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Vertical field of view
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

impl SceneConfig {
    pub fn aspect(&self) -> f32 {
        self.viewport_width as f32 / self.viewport_height.max(1) as f32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gesture: GestureConfig,
    pub detector: DetectorOptions,
    pub scene: SceneConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in config {}", path.display()))
    }

    /// Load from the explicit path, then `$GESTURE_CUBE_CONFIG`, else defaults
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from));

        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.gesture.validate()?;

        let detector = &self.detector;
        anyhow::ensure!(detector.max_num_hands >= 1, "max_num_hands must be >= 1");
        anyhow::ensure!(
            (0.0..=1.0).contains(&detector.min_detection_confidence),
            "min_detection_confidence must be within [0, 1]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&detector.min_tracking_confidence),
            "min_tracking_confidence must be within [0, 1]"
        );

        let scene = &self.scene;
        anyhow::ensure!(
            scene.fov_degrees > 0.0 && scene.fov_degrees < 180.0,
            "fov_degrees must be within (0, 180)"
        );
        anyhow::ensure!(
            scene.near > 0.0 && scene.far > scene.near,
            "camera planes must satisfy 0 < near < far"
        );
        anyhow::ensure!(
            scene.viewport_width > 0 && scene.viewport_height > 0,
            "viewport must be non-empty"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scene.fov_degrees, 75.0);
        assert_eq!(config.detector.max_num_hands, 1);
        assert_eq!(config.detector.min_detection_confidence, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_tables() {
        let config = AppConfig::from_toml_str(
            "[gesture]\nzoom_step = 0.1\n\n[scene]\nviewport_width = 640\nviewport_height = 480\n",
        )
        .unwrap();
        assert_eq!(config.gesture.zoom_step, 0.1);
        assert_eq!(config.gesture.min_zoom, 1.5);
        assert!((config.scene.aspect() - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(config.detector, DetectorOptions::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(AppConfig::from_toml_str("[scene]\nnear = 5.0\nfar = 1.0\n").is_err());
        assert!(AppConfig::from_toml_str("[detector]\nmin_detection_confidence = 1.5\n").is_err());
        assert!(AppConfig::from_toml_str("[gesture]\nmin_zoom = 9.0\n").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[detector]\nmax_num_hands = 2").unwrap();

        let config = AppConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.detector.max_num_hands, 2);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = AppConfig::load(Path::new("/nonexistent/cube.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
