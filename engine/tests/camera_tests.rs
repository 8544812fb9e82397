//! Camera Tests - Zoom, Rotation Queue and Projection
//!
//! Tests for the isometric CameraController: clamped zoom, animated 90°
//! rotation with a one-deep queue, and resize handling.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Duration;

use glam::Vec3;
use isoview_engine::camera::controller::{
    CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, ROTATION_DURATION,
};
use isoview_engine::camera::{
    CameraController, CameraSettings, ISO_ANGLE, RotationDirection, RotationState,
};
use isoview_engine::error::ControlError;

const EPS: f32 = 1e-4;

/// Tick the controller until the running animation (and any queued one)
/// completes.
fn finish_animations(camera: &mut CameraController) {
    let step = 1.0 / 60.0;
    for _ in 0..1000 {
        if !camera.is_animating() {
            return;
        }
        camera.update(step);
    }
    panic!("rotation never finished");
}

// ============================================================================
// Zoom Tests
// ============================================================================

#[test]
fn test_zoom_out_compounds() {
    let mut camera = CameraController::default();
    assert_eq!(camera.distance(), 40.0);

    camera.zoom_out();
    assert!((camera.distance() - 44.0).abs() < EPS);

    camera.zoom_out();
    assert!((camera.distance() - 48.4).abs() < EPS);
}

#[test]
fn test_zoom_in_reduces_distance() {
    let mut camera = CameraController::default();
    camera.zoom_in();
    assert!((camera.distance() - 36.0).abs() < EPS);
}

#[test]
fn test_set_zoom_clamps_to_bounds() {
    let mut camera = CameraController::default();

    camera.set_zoom(5.0);
    assert_eq!(camera.distance(), CAMERA_MIN_DISTANCE);

    camera.set_zoom(500.0);
    assert_eq!(camera.distance(), CAMERA_MAX_DISTANCE);

    camera.set_zoom(25.0);
    assert_eq!(camera.distance(), 25.0);
}

#[test]
fn test_repeated_zoom_stays_in_bounds() {
    let mut camera = CameraController::default();
    for _ in 0..50 {
        camera.zoom_out();
    }
    assert_eq!(camera.distance(), CAMERA_MAX_DISTANCE);

    for _ in 0..50 {
        camera.zoom_in();
    }
    assert_eq!(camera.distance(), CAMERA_MIN_DISTANCE);
}

#[test]
fn test_zoom_updates_projection_bounds() {
    let mut camera = CameraController::new(CameraSettings::default(), 2.0);
    camera.set_zoom(20.0);

    let ortho = camera.camera();
    assert_eq!(ortho.top, 20.0);
    assert_eq!(ortho.bottom, -20.0);
    assert_eq!(ortho.right, 40.0);
    assert_eq!(ortho.left, -40.0);
}

#[test]
fn test_camera_position_follows_distance() {
    let mut camera = CameraController::default();
    camera.set_zoom(30.0);

    let pos = camera.camera().position;
    assert!((pos.y - 30.0).abs() < EPS);
    // Horizontal radius is √2 · distance
    let radius = (pos.x * pos.x + pos.z * pos.z).sqrt();
    assert!((radius - 30.0 * std::f32::consts::SQRT_2).abs() < EPS);
}

// ============================================================================
// Rotation Tests
// ============================================================================

#[test]
fn test_rotate_right_quarter_turn() {
    let mut camera = CameraController::default();
    camera.rotate(1).unwrap();
    assert!(camera.is_animating());

    finish_animations(&mut camera);

    assert_eq!(camera.angle(), 2.0 * ISO_ANGLE);
    assert!((camera.angle() - FRAC_PI_2).abs() < 1e-6);
    assert!(matches!(camera.rotation_state(), RotationState::Idle));
}

#[test]
fn test_rotation_is_animated_over_duration() {
    let mut camera = CameraController::default();
    camera.rotate(1).unwrap();

    // Halfway through a linear tween
    camera.update(ROTATION_DURATION.as_secs_f32() / 2.0);
    assert!(camera.is_animating());
    assert!((camera.angle() - FRAC_PI_2 / 2.0).abs() < 1e-3);
}

#[test]
fn test_rotate_left_wraps_angle() {
    let mut camera = CameraController::default();
    camera.rotate(-1).unwrap();
    finish_animations(&mut camera);

    assert!(camera.angle() >= 0.0 && camera.angle() < TAU);
    assert!((camera.angle() - 3.0 * FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn test_two_rapid_rotations_run_back_to_back() {
    let mut camera = CameraController::default();
    camera.rotate(1).unwrap();
    camera.rotate(1).unwrap();
    assert_eq!(camera.pending_rotation(), Some(RotationDirection::Right));

    finish_animations(&mut camera);

    assert!((camera.angle() - PI).abs() < 1e-5);
}

#[test]
fn test_queue_depth_is_one() {
    let mut camera = CameraController::default();
    camera.rotate(1).unwrap();
    camera.rotate(-1).unwrap();
    // Further requests are dropped, the first queued one wins
    camera.rotate(1).unwrap();
    camera.rotate(1).unwrap();
    camera.rotate(1).unwrap();
    assert_eq!(camera.pending_rotation(), Some(RotationDirection::Left));

    finish_animations(&mut camera);

    // +90° then -90°
    assert!(camera.angle().abs() < 1e-5 || (camera.angle() - TAU).abs() < 1e-5);
}

#[test]
fn test_queued_rotation_starts_after_completion() {
    let mut camera = CameraController::default();
    camera.rotate(1).unwrap();
    camera.rotate(1).unwrap();

    camera.update(ROTATION_DURATION.as_secs_f32());

    // First step done, second already running with an empty queue
    assert!(camera.is_animating());
    assert_eq!(camera.pending_rotation(), None);
    assert!((camera.angle() - FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn test_invalid_direction_rejected_without_state_change() {
    let mut camera = CameraController::default();
    let before = camera.camera().position;

    assert_eq!(camera.rotate(0), Err(ControlError::InvalidRotationDirection(0)));
    assert_eq!(camera.rotate(2), Err(ControlError::InvalidRotationDirection(2)));

    assert!(!camera.is_animating());
    assert_eq!(camera.angle(), 0.0);
    assert_eq!(camera.camera().position, before);
}

#[test]
fn test_invalid_direction_does_not_fill_queue() {
    let mut camera = CameraController::default();
    camera.rotate(1).unwrap();
    assert!(camera.rotate(3).is_err());
    assert_eq!(camera.pending_rotation(), None);
}

#[test]
fn test_full_turn_returns_to_start() {
    let settings = CameraSettings {
        rotation_duration: Duration::from_millis(100),
        ..Default::default()
    };
    let mut camera = CameraController::new(settings, 1.0);
    let start = camera.camera().position;

    for _ in 0..4 {
        camera.rotate(1).unwrap();
        finish_animations(&mut camera);
    }

    assert!(camera.angle() < 1e-4 || (TAU - camera.angle()) < 1e-4);
    assert!((camera.camera().position - start).length() < 1e-3);
}

// ============================================================================
// Viewport Tests
// ============================================================================

#[test]
fn test_resize_updates_aspect_only() {
    let mut camera = CameraController::default();
    camera.set_angle(1.0);

    camera.on_resize(1600, 800);

    assert_eq!(camera.aspect(), 2.0);
    assert_eq!(camera.angle(), 1.0);
    assert_eq!(camera.camera().right, 80.0);
}

#[test]
fn test_resize_ignores_zero_size() {
    let mut camera = CameraController::with_viewport(CameraSettings::default(), 800, 600);
    let aspect = camera.aspect();

    camera.on_resize(0, 600);
    camera.on_resize(800, 0);

    assert_eq!(camera.aspect(), aspect);
}

#[test]
fn test_camera_looks_at_origin() {
    let camera = CameraController::default();
    let ortho = camera.camera();
    assert_eq!(ortho.target, Vec3::ZERO);

    let expected = (Vec3::ZERO - ortho.position).normalize();
    assert!((ortho.forward() - expected).length() < 1e-5);
}
