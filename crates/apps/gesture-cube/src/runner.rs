//! Frame loop
//!
//! Pulls detector output from a [`HandSource`], interprets it, and pushes the
//! result into the scene and the hint display. One frame at a time, in the
//! order the source delivers them.

use std::collections::BTreeMap;

use devices::{DetectionResult, DetectorOptions, HandSource};
use gesture::{Gesture, GestureInterpreter, GestureResult};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::scene::{CubeScene, HintDisplay};

/// What happened over a run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub source: String,
    pub frames: usize,
    /// Frames the source could not decode (treated as "no hand")
    pub bad_frames: usize,
    pub gestures: BTreeMap<Gesture, usize>,
    pub last: Option<GestureResult>,
    /// Set when the source failed and the run stopped early
    pub error: Option<String>,
}

/// Interpreter plus everything its output drives
pub struct GestureCube {
    interpreter: GestureInterpreter,
    detector: DetectorOptions,
    scene: CubeScene,
    hint: HintDisplay,
}

impl GestureCube {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let scene = CubeScene::new(&config.scene, config.gesture.initial_zoom);
        let interpreter = GestureInterpreter::new(config.gesture)?;
        Ok(Self {
            interpreter,
            detector: config.detector,
            scene,
            hint: HintDisplay::new(),
        })
    }

    pub fn scene(&self) -> &CubeScene {
        &self.scene
    }

    pub fn hint(&self) -> &HintDisplay {
        &self.hint
    }

    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    /// Handle one detector frame
    pub fn step(&mut self, detection: DetectionResult) -> GestureResult {
        let detection = detection.filtered(&self.detector);
        let result = self.interpreter.process_detection(&detection);
        self.scene.apply(&result);
        self.hint.set(&result.label);
        result
    }

    /// Drain `source`, stopping early after `max_frames` if given
    pub fn run(&mut self, source: &mut dyn HandSource, max_frames: Option<usize>) -> RunSummary {
        let mut summary = RunSummary {
            source: source.name().to_string(),
            ..RunSummary::default()
        };
        info!(source = %summary.source, "starting gesture loop");

        while max_frames.map_or(true, |max| summary.frames < max) {
            let Some(frame) = source.next_frame() else {
                break;
            };

            let detection = match frame {
                Ok(detection) => detection,
                Err(e) if !e.is_recoverable() => {
                    error!(error = %e, "frame source failed, stopping");
                    summary.error = Some(e.to_string());
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "skipping unreadable frame");
                    summary.bad_frames += 1;
                    DetectionResult::empty()
                }
            };

            let result = self.step(detection);
            debug!(frame = summary.frames, label = %result.label, zoom = result.zoom, "frame done");

            summary.frames += 1;
            *summary.gestures.entry(result.gesture).or_default() += 1;
            summary.last = Some(result);
        }

        info!(
            frames = summary.frames,
            bad_frames = summary.bad_frames,
            "gesture loop finished"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devices::synthetic::open_hand;
    use devices::{HandDetection, HandSource, ScriptStep, ScriptedSource, SourceError};
    use glam::Vec2;

    /// Fails on every pull without ever running dry
    struct FailingSource;

    impl HandSource for FailingSource {
        fn next_frame(&mut self) -> Option<Result<DetectionResult, SourceError>> {
            Some(Err(std::io::Error::other("device unplugged").into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_step_applies_to_scene_and_hint() {
        let mut cube = GestureCube::new(AppConfig::default()).unwrap();
        cube.step(DetectionResult::single(open_hand(Vec2::new(0.5, 0.5))));
        assert_eq!(cube.hint().text(), "Tracking hand...");

        let result = cube.step(DetectionResult::single(open_hand(Vec2::new(0.4, 0.5))));
        assert_eq!(cube.hint().text(), "No gesture");
        assert_eq!(cube.scene().camera.distance(), result.zoom);
        assert!(result.rotation_y > 0.0);
    }

    #[test]
    fn test_low_confidence_hand_counts_as_absent() {
        let mut cube = GestureCube::new(AppConfig::default()).unwrap();
        let weak = DetectionResult {
            hands: vec![HandDetection {
                score: 0.2,
                ..HandDetection::new(open_hand(Vec2::new(0.5, 0.5)))
            }],
        };
        let result = cube.step(weak);
        assert_eq!(result.gesture, Gesture::NoHand);
    }

    #[test]
    fn test_run_respects_frame_limit() {
        let mut cube = GestureCube::new(AppConfig::default()).unwrap();
        let mut source = ScriptedSource::new([ScriptStep::Hold { frames: 10 }]);

        let summary = cube.run(&mut source, Some(4));
        assert_eq!(summary.frames, 4);
        assert_eq!(summary.gestures[&Gesture::Tracking], 1);
        assert_eq!(summary.gestures[&Gesture::Idle], 3);
        assert_eq!(source.remaining(), 6);
    }

    #[test]
    fn test_run_stops_on_source_failure() {
        let mut cube = GestureCube::new(AppConfig::default()).unwrap();
        let summary = cube.run(&mut FailingSource, None);

        assert_eq!(summary.frames, 0);
        assert_eq!(summary.bad_frames, 0);
        assert!(summary.error.unwrap().contains("device unplugged"));
    }
}
