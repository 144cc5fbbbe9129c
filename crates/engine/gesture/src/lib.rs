//! Hand gesture interpretation
//!
//! Converts 21-point hand landmarks into cube rotation angles, a camera zoom
//! distance, and a short gesture label.
//!
//! | Gesture | Effect |
//! |---|---|
//! | Move index fingertip | Rotate (full frame width = one turn) |
//! | Pinch thumb + index | Zoom in |
//! | Fist (3+ fingers folded) | Zoom out |
//!
//! ```ignore
//! use gesture::{GestureConfig, GestureInterpreter};
//!
//! let mut interpreter = GestureInterpreter::new(GestureConfig::default())?;
//! let result = interpreter.process(detection.primary_hand());
//! println!("{}", result.label);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod interpreter;

pub use classify::{classify, folded_fingers, is_fist, pinch_distance, Gesture};
pub use config::GestureConfig;
pub use error::{Error, Result};
pub use interpreter::{GestureInterpreter, GestureResult, InterpreterState};
