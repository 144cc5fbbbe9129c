//! gesture-cube: hand gestures to cube rotation and camera zoom
//!
//! Wires a hand-landmark [`devices::HandSource`] to a
//! [`gesture::GestureInterpreter`] and applies each result to a modeled cube
//! scene and a text hint.

pub mod cli;
pub mod config;
pub mod runner;
pub mod scene;

pub use config::{AppConfig, SceneConfig};
pub use runner::{GestureCube, RunSummary};
pub use scene::{CubeScene, HintDisplay, PerspectiveCamera};
