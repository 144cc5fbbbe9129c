//! Synthetic hand poses
//!
//! Builds plausible upright right-hand landmark sets around a given index
//! fingertip position. Used by the scripted source and by tests that need a
//! hand in a known pose without a detector.

use glam::Vec2;

use crate::hand::*;

/// Horizontal spacing between neighbouring fingers
const FINGER_SPACING: f32 = 0.04;

fn lm(p: Vec2) -> Landmark {
    Landmark::new(p.x, p.y, 0.0)
}

/// Lay out the four non-thumb fingers. `joint_offsets` are the y offsets of
/// (mcp, pip, dip, tip) relative to the index tip row.
fn fingers(frame: &mut HandFrame, index_tip: Vec2, joint_offsets: [f32; 4]) {
    let columns = [
        [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
        [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
        [RING_MCP, RING_PIP, RING_DIP, RING_TIP],
        [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
    ];
    for (i, joints) in columns.iter().enumerate() {
        let x = index_tip.x + i as f32 * FINGER_SPACING;
        for (joint, dy) in joints.iter().zip(joint_offsets) {
            frame[*joint] = lm(Vec2::new(x, index_tip.y + dy));
        }
    }
}

fn thumb(frame: &mut HandFrame, tip: Vec2) {
    let wrist = Vec2::new(frame.wrist().x, frame.wrist().y);
    for (k, joint) in [THUMB_CMC, THUMB_MCP, THUMB_IP].iter().enumerate() {
        let t = (k + 1) as f32 / 4.0;
        frame[*joint] = lm(wrist.lerp(tip, t));
    }
    frame[THUMB_TIP] = lm(tip);
}

fn blank(index_tip: Vec2) -> HandFrame {
    let mut frame = HandFrame::new([Landmark::default(); LANDMARK_COUNT]);
    frame[WRIST] = lm(index_tip + Vec2::new(0.06, 0.35));
    frame
}

/// Flat open hand: fingers extended upward, thumb held well away from the index tip
pub fn open_hand(index_tip: Vec2) -> HandFrame {
    let mut frame = blank(index_tip);
    fingers(&mut frame, index_tip, [0.15, 0.10, 0.05, 0.0]);
    thumb(&mut frame, index_tip + Vec2::new(-0.15, 0.20));
    frame
}

/// Open hand with the thumb tip touching the index tip
pub fn pinching_hand(index_tip: Vec2) -> HandFrame {
    let mut frame = open_hand(index_tip);
    thumb(&mut frame, index_tip);
    frame
}

/// Closed fist: every fingertip curled below its PIP joint
pub fn fist_hand(index_tip: Vec2) -> HandFrame {
    let mut frame = blank(index_tip);
    fingers(&mut frame, index_tip, [0.02, -0.04, -0.02, 0.0]);
    thumb(&mut frame, index_tip + Vec2::new(-0.12, 0.10));
    frame
}
