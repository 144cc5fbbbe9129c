//! Command line arguments for gesture-cube

use clap::Parser;
use std::path::PathBuf;

/// Rotate and zoom a cube with hand gestures
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gesture-cube")]
#[command(about = "Map hand-landmark frames to cube rotation and camera zoom", long_about = None)]
pub struct Cli {
    /// Load settings from a TOML file (falls back to $GESTURE_CUBE_CONFIG)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Replay detector output from a JSON-lines recording instead of the scripted demo
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Stop after N frames
    #[arg(long, value_name = "N")]
    pub frames: Option<usize>,

    /// Print the run summary as JSON on stdout
    #[arg(long = "summary-json")]
    pub summary_json: bool,
}
