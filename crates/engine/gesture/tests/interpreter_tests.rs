//! Integration tests for the gesture interpreter
//!
//! Each test drives a fresh interpreter with synthetic hands and checks the
//! accumulated transform and label.

use devices::hand::{
    HandFrame, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_TIP,
};
use devices::synthetic::{fist_hand, open_hand, pinching_hand};
use gesture::{Gesture, GestureConfig, GestureInterpreter};
use glam::Vec2;
use std::f32::consts::TAU;

const CENTER: Vec2 = Vec2::new(0.5, 0.5);
const EPS: f32 = 1e-5;

/// Interpreter that has already seen one baseline frame at `at`
fn tracking_at(at: Vec2) -> GestureInterpreter {
    let mut interp = GestureInterpreter::default();
    let result = interp.process(Some(&open_hand(at)));
    assert_eq!(result.gesture, Gesture::Tracking);
    interp
}

#[test]
fn zoom_stays_within_bounds_under_repeated_pinch() {
    let mut interp = tracking_at(CENTER);
    for _ in 0..200 {
        let result = interp.process(Some(&pinching_hand(CENTER)));
        assert!(result.zoom >= 1.5 && result.zoom <= 7.0);
    }
    assert_eq!(interp.state().zoom, 1.5);
}

#[test]
fn zoom_stays_within_bounds_under_repeated_fist() {
    let mut interp = tracking_at(CENTER);
    for _ in 0..200 {
        let result = interp.process(Some(&fist_hand(CENTER)));
        assert!(result.zoom >= 1.5 && result.zoom <= 7.0);
    }
    assert_eq!(interp.state().zoom, 7.0);
}

#[test]
fn missing_hand_freezes_transform_and_resets_baseline() {
    let mut interp = tracking_at(CENTER);
    let moved = interp.process(Some(&fist_hand(Vec2::new(0.4, 0.45))));
    assert_eq!(moved.gesture, Gesture::ZoomOut);

    let lost = interp.process(None);
    assert_eq!(lost.label, "No hand detected");
    assert_eq!(lost.rotation_x, moved.rotation_x);
    assert_eq!(lost.rotation_y, moved.rotation_y);
    assert_eq!(lost.zoom, moved.zoom);
    assert!(interp.state().last_index_pos.is_none());

    // Re-acquired far away: no rotation jump
    let back = interp.process(Some(&open_hand(Vec2::new(0.9, 0.1))));
    assert_eq!(back.label, "Tracking hand...");
    assert_eq!(back.rotation_x, moved.rotation_x);
    assert_eq!(back.rotation_y, moved.rotation_y);
    assert_eq!(back.zoom, moved.zoom);
}

#[test]
fn mirrored_swipe_rotates_about_y() {
    let mut interp = tracking_at(CENTER);
    let result = interp.process(Some(&open_hand(Vec2::new(0.4, 0.5))));

    assert!((result.rotation_y - 0.1 * TAU).abs() < 1e-4);
    assert!((result.rotation_y - 0.628).abs() < 1e-3);
    assert!(result.rotation_x.abs() < EPS);
    assert_eq!(result.label, "No gesture");
}

#[test]
fn rotation_accumulates_across_frames() {
    let mut interp = tracking_at(CENTER);
    for step in 1..=5 {
        let x = 0.5 - step as f32 * 0.02;
        interp.process(Some(&open_hand(Vec2::new(x, 0.5))));
    }
    assert!((interp.state().rotation_y - 0.1 * TAU).abs() < 1e-4);
}

#[test]
fn coincident_tips_pinch_zooms_in_by_one_step() {
    let mut interp = tracking_at(CENTER);
    let result = interp.process(Some(&pinching_hand(CENTER)));

    assert_eq!(result.label, "Zoom In (Pinch)");
    assert!((result.zoom - (3.0 - 0.08)).abs() < EPS);
}

#[test]
fn pinch_at_lower_bound_stays_clamped() {
    let config = GestureConfig {
        initial_zoom: 1.5,
        ..GestureConfig::default()
    };
    let mut interp = GestureInterpreter::new(config).unwrap();
    interp.process(Some(&open_hand(CENTER)));

    let result = interp.process(Some(&pinching_hand(CENTER)));
    assert_eq!(result.gesture, Gesture::ZoomIn);
    assert_eq!(result.zoom, 1.5);
}

#[test]
fn all_fingers_folded_is_fist() {
    let mut frame: HandFrame = open_hand(CENTER);
    for (tip, pip) in [
        (INDEX_TIP, INDEX_PIP),
        (MIDDLE_TIP, MIDDLE_PIP),
        (RING_TIP, RING_PIP),
        (PINKY_TIP, PINKY_PIP),
    ] {
        frame[tip].y = frame[pip].y + 0.02;
    }
    assert!(gesture::is_fist(&frame, 3));

    let mut interp = tracking_at(frame.index_tip().to_vec3().truncate());
    let result = interp.process(Some(&frame));
    assert_eq!(result.label, "Zoom Out (Fist)");
    assert!((result.zoom - 3.08).abs() < EPS);
}

#[test]
fn pinch_takes_priority_over_fist() {
    let mut frame = fist_hand(CENTER);
    frame[THUMB_TIP] = frame.index_tip();

    let mut interp = tracking_at(CENTER);
    let result = interp.process(Some(&frame));
    assert_eq!(result.gesture, Gesture::ZoomIn);
}

#[test]
fn repeated_absence_is_idempotent() {
    let mut interp = tracking_at(CENTER);
    interp.process(Some(&pinching_hand(Vec2::new(0.45, 0.5))));

    let first = interp.process(None);
    let second = interp.process(None);
    assert_eq!(first, second);
    assert_eq!(first.label, "No hand detected");
}

#[test]
fn interpreters_do_not_share_state() {
    let mut a = tracking_at(CENTER);
    let mut b = GestureInterpreter::default();

    a.process(Some(&fist_hand(Vec2::new(0.3, 0.5))));
    let from_b = b.process(Some(&open_hand(CENTER)));

    assert_eq!(from_b.gesture, Gesture::Tracking);
    assert_eq!(from_b.zoom, 3.0);
    assert_eq!(from_b.rotation_y, 0.0);
    assert!(a.state().rotation_y > 0.0);
}

#[test]
fn custom_thresholds_are_honoured() {
    let config = GestureConfig {
        pinch_threshold: 0.5,
        zoom_step: 1.0,
        ..GestureConfig::default()
    };
    let mut interp = GestureInterpreter::new(config).unwrap();
    interp.process(Some(&open_hand(CENTER)));

    // Thumb is ~0.25 away on an open hand: a pinch under the wide threshold
    let result = interp.process(Some(&open_hand(CENTER)));
    assert_eq!(result.gesture, Gesture::ZoomIn);
    assert!((result.zoom - 2.0).abs() < EPS);
}
