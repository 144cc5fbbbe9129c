//! Frame sources for hand tracking
//!
//! A [`HandSource`] delivers detector results one camera frame at a time, in
//! capture order. The host pulls from it once per frame; nothing here spawns
//! threads or registers callbacks.
//!
//! # Example
//!
//! ```ignore
//! let mut source = RecordedSource::open("session.jsonl")?;
//!
//! while let Some(frame) = source.next_frame() {
//!     let detection = frame?;
//!     // Feed detection.primary_hand() to the gesture interpreter
//! }
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::Deserialize;
use tracing::debug;

use crate::detection::{DetectionResult, HandDetection, Handedness};
use crate::hand::{HandFrame, Landmark};
use crate::synthetic;

/// Errors raised while reading frames from a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid frame JSON: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: not valid UTF-8: {source}")]
    Encoding {
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("line {line}: expected 21 hand landmarks, got {found}")]
    LandmarkCount { line: usize, found: usize },

    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),
}

impl SourceError {
    /// Whether the source can keep going after this error
    ///
    /// Per-line decode failures are recoverable; I/O failures end the stream.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::NotAFile(_))
    }
}

/// Trait for anything that can deliver per-frame detector output
pub trait HandSource {
    /// Pull the next frame
    ///
    /// Returns `None` once the source is exhausted. A `Some(Err(_))` that is
    /// [recoverable](SourceError::is_recoverable) marks a single bad frame and
    /// the source can still be pulled afterwards.
    fn next_frame(&mut self) -> Option<Result<DetectionResult, SourceError>>;

    /// Short description for logs
    fn name(&self) -> &str;
}

// ============================================================================
// NullSource
// ============================================================================

/// A source that never produces frames
#[derive(Debug, Default)]
pub struct NullSource;

impl NullSource {
    pub fn new() -> Self {
        Self
    }
}

impl HandSource for NullSource {
    fn next_frame(&mut self) -> Option<Result<DetectionResult, SourceError>> {
        None
    }

    fn name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// RecordedSource
// ============================================================================

#[derive(Deserialize)]
struct RawHand {
    landmarks: Vec<Landmark>,
    #[serde(default)]
    score: Option<f32>,
    #[serde(default)]
    handedness: Option<Handedness>,
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(default)]
    hands: Vec<RawHand>,
}

/// Replays detector output recorded as JSON lines
///
/// Each non-blank line holds one frame:
/// `{"hands":[{"landmarks":[{"x":..,"y":..,"z":..}, ...], "score":0.9, "handedness":"Right"}]}`.
/// An empty `hands` array is a frame with no hand in view.
pub struct RecordedSource<R> {
    reader: R,
    line: usize,
    label: String,
    /// Set after an I/O error; the source yields nothing more
    failed: bool,
}

impl RecordedSource<BufReader<File>> {
    /// Open a recording on disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        if !file.metadata()?.is_file() {
            return Err(SourceError::NotAFile(path.to_path_buf()));
        }
        let mut source = Self::from_reader(BufReader::new(file));
        source.label = path.display().to_string();
        Ok(source)
    }
}

impl<R: BufRead> RecordedSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            label: "recording".to_string(),
            failed: false,
        }
    }

    /// Number of lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }

    fn parse(&self, text: &str) -> Result<DetectionResult, SourceError> {
        let raw: RawFrame = serde_json::from_str(text).map_err(|source| SourceError::Json {
            line: self.line,
            source,
        })?;

        let mut hands = Vec::with_capacity(raw.hands.len());
        for hand in raw.hands {
            let found = hand.landmarks.len();
            let landmarks = HandFrame::try_from(hand.landmarks).map_err(|_| {
                SourceError::LandmarkCount {
                    line: self.line,
                    found,
                }
            })?;
            hands.push(HandDetection {
                landmarks,
                score: hand.score.unwrap_or(1.0),
                handedness: hand.handedness,
            });
        }
        Ok(DetectionResult { hands })
    }
}

impl<R: BufRead> HandSource for RecordedSource<R> {
    fn next_frame(&mut self) -> Option<Result<DetectionResult, SourceError>> {
        if self.failed {
            return None;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let text = match String::from_utf8(std::mem::take(&mut buf)) {
                        Ok(text) => text,
                        Err(source) => {
                            return Some(Err(SourceError::Encoding {
                                line: self.line,
                                source,
                            }))
                        }
                    };
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    return Some(self.parse(text));
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.label
    }
}

// ============================================================================
// ScriptedSource
// ============================================================================

/// One segment of a scripted session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    /// No hand in view
    Absent { frames: usize },
    /// Open hand held still at the current position
    Hold { frames: usize },
    /// Open hand whose index tip moves in a straight line to `to`
    Swipe { to: Vec2, frames: usize },
    /// Thumb and index tip touching
    Pinch { frames: usize },
    /// Closed fist
    Fist { frames: usize },
}

impl ScriptStep {
    fn frames(&self) -> usize {
        match *self {
            Self::Absent { frames }
            | Self::Hold { frames }
            | Self::Swipe { frames, .. }
            | Self::Pinch { frames }
            | Self::Fist { frames } => frames,
        }
    }
}

/// Deterministic synthetic hand driven by a list of [`ScriptStep`]s
///
/// Stands in for a camera when no recording is available.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    steps: VecDeque<ScriptStep>,
    /// Frames already emitted for the front step
    emitted: usize,
    /// Index tip position when the front step started
    start: Vec2,
    position: Vec2,
}

impl ScriptedSource {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        let start = Vec2::new(0.5, 0.5);
        Self {
            steps: steps.into_iter().collect(),
            emitted: 0,
            start,
            position: start,
        }
    }

    /// A short session touching every gesture
    pub fn demo() -> Self {
        Self::new([
            ScriptStep::Absent { frames: 3 },
            ScriptStep::Hold { frames: 2 },
            ScriptStep::Swipe {
                to: Vec2::new(0.3, 0.5),
                frames: 20,
            },
            ScriptStep::Swipe {
                to: Vec2::new(0.3, 0.65),
                frames: 10,
            },
            ScriptStep::Pinch { frames: 12 },
            ScriptStep::Hold { frames: 3 },
            ScriptStep::Fist { frames: 20 },
            ScriptStep::Absent { frames: 2 },
            ScriptStep::Hold { frames: 2 },
        ])
    }

    /// Frames left to emit
    pub fn remaining(&self) -> usize {
        let total: usize = self.steps.iter().map(ScriptStep::frames).sum();
        total - self.emitted
    }

    fn advance_step(&mut self) {
        if let Some(step) = self.steps.pop_front() {
            debug!(?step, "scripted step finished");
        }
        self.emitted = 0;
        self.start = self.position;
    }
}

impl HandSource for ScriptedSource {
    fn next_frame(&mut self) -> Option<Result<DetectionResult, SourceError>> {
        while let Some(step) = self.steps.front() {
            if self.emitted < step.frames() {
                break;
            }
            self.advance_step();
        }
        let step = *self.steps.front()?;
        self.emitted += 1;

        let frame = match step {
            ScriptStep::Absent { .. } => return Some(Ok(DetectionResult::empty())),
            ScriptStep::Hold { .. } => synthetic::open_hand(self.position),
            ScriptStep::Swipe { to, frames } => {
                let t = self.emitted as f32 / frames as f32;
                self.position = self.start.lerp(to, t);
                synthetic::open_hand(self.position)
            }
            ScriptStep::Pinch { .. } => synthetic::pinching_hand(self.position),
            ScriptStep::Fist { .. } => synthetic::fist_hand(self.position),
        };
        Some(Ok(DetectionResult::single(frame)))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
