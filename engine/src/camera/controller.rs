//! Isometric Camera Controller
//!
//! Owns an orthographic camera orbiting the scene origin at true isometric
//! elevation. Zoom is continuous and applied immediately; rotation moves in
//! 90° steps animated by a [`Tween`], with at most one step queued behind the
//! running animation.
//!
//! Every change to distance, angle or aspect recomputes the projection
//! bounds and camera position before the mutator returns.

use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec3;
use log::debug;

use super::projection::{DEFAULT_FAR, DEFAULT_NEAR, OrthographicCamera};
use super::tween::{Easing, Tween};
use crate::error::ControlError;

/// Isometric azimuth offset: atan(1) = 45°.
pub const ISO_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

/// Orbit radius per unit of distance, `1 / cos(ISO_ANGLE)`.
///
/// With height equal to distance this puts the camera at the isometric
/// elevation of atan(1/√2) ≈ 35.26°.
pub const ISO_CAMERA_RADIUS: f32 = std::f32::consts::SQRT_2;

pub const CAMERA_MIN_DISTANCE: f32 = 15.0;
pub const CAMERA_MAX_DISTANCE: f32 = 60.0;
pub const CAMERA_INITIAL_DISTANCE: f32 = 40.0;
/// Fraction of the current distance added or removed per zoom step.
pub const CAMERA_ZOOM_SPEED: f32 = 0.1;
/// Duration of one animated rotation step.
pub const ROTATION_DURATION: Duration = Duration::from_millis(500);

/// Direction of a discrete rotation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationDirection {
    Left,
    Right,
}

impl RotationDirection {
    /// Signed multiplier: -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            RotationDirection::Left => -1.0,
            RotationDirection::Right => 1.0,
        }
    }
}

impl TryFrom<i32> for RotationDirection {
    type Error = ControlError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(RotationDirection::Left),
            1 => Ok(RotationDirection::Right),
            other => Err(ControlError::InvalidRotationDirection(other)),
        }
    }
}

/// Rotation animation state.
#[derive(Clone, Debug, Default)]
pub enum RotationState {
    #[default]
    Idle,
    Animating {
        tween: Tween,
        /// Follow-up step started when the current animation completes
        pending: Option<RotationDirection>,
    },
}

/// Tunable controller parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub min_distance: f32,
    pub max_distance: f32,
    pub initial_distance: f32,
    pub zoom_speed: f32,
    pub rotation_duration: Duration,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            initial_distance: CAMERA_INITIAL_DISTANCE,
            zoom_speed: CAMERA_ZOOM_SPEED,
            rotation_duration: ROTATION_DURATION,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

/// Isometric orbit camera with clamped zoom and queued 90° rotation.
#[derive(Clone, Debug)]
pub struct CameraController {
    camera: OrthographicCamera,
    settings: CameraSettings,
    distance: f32,
    /// Radians around the vertical axis, wrapped to [0, 2π) between animations
    angle: f32,
    aspect: f32,
    rotation: RotationState,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraSettings::default(), 1.0)
    }
}

impl CameraController {
    /// Create a controller for a viewport with the given aspect ratio.
    pub fn new(settings: CameraSettings, aspect: f32) -> Self {
        let mut controller = Self {
            camera: OrthographicCamera::new(settings.near, settings.far),
            settings,
            distance: settings.min_distance,
            angle: 0.0,
            aspect,
            rotation: RotationState::Idle,
        };
        controller.set_zoom(settings.initial_distance);
        controller
    }

    /// Create a controller sized for a `width` x `height` viewport.
    pub fn with_viewport(settings: CameraSettings, width: u32, height: u32) -> Self {
        let aspect = if width > 0 && height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        Self::new(settings, aspect)
    }

    pub fn camera(&self) -> &OrthographicCamera {
        &self.camera
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn rotation_state(&self) -> &RotationState {
        &self.rotation
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.rotation, RotationState::Animating { .. })
    }

    pub fn pending_rotation(&self) -> Option<RotationDirection> {
        match &self.rotation {
            RotationState::Idle => None,
            RotationState::Animating { pending, .. } => *pending,
        }
    }

    // =========================================================================
    // ZOOM
    // =========================================================================

    /// Set the zoom distance, clamped to the configured bounds.
    ///
    /// NaN leaves the current distance unchanged; infinities land on a bound.
    pub fn set_zoom(&mut self, raw_distance: f32) {
        if raw_distance.is_nan() {
            debug!("Ignoring NaN zoom distance");
        } else {
            // max/min instead of clamp: never panics on inverted bounds
            self.distance = raw_distance
                .max(self.settings.min_distance)
                .min(self.settings.max_distance);
        }
        self.camera.set_bounds(self.distance, self.aspect);
        self.update_camera_position();
    }

    /// Move away from the scene by `zoom_speed` of the current distance.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.distance + self.distance * self.settings.zoom_speed);
    }

    /// Move toward the scene by `zoom_speed` of the current distance.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.distance - self.distance * self.settings.zoom_speed);
    }

    // =========================================================================
    // ROTATION
    // =========================================================================

    /// Set the orbit angle directly and recompute the camera position.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.update_camera_position();
    }

    /// Request a 90° rotation step; `direction` must be -1 or +1.
    ///
    /// Invalid directions are rejected without touching any state.
    pub fn rotate(&mut self, direction: i32) -> Result<(), ControlError> {
        let direction = RotationDirection::try_from(direction)?;
        self.rotate_step(direction);
        Ok(())
    }

    /// Request a 90° rotation step.
    ///
    /// Starts an animation when idle. While animating, the first request is
    /// queued and any further request is dropped.
    pub fn rotate_step(&mut self, direction: RotationDirection) {
        if let RotationState::Animating { pending, .. } = &mut self.rotation {
            match pending {
                None => {
                    debug!("Queued {:?} rotation behind running animation", direction);
                    *pending = Some(direction);
                }
                Some(queued) => {
                    debug!("Dropped {:?} rotation, {:?} already queued", direction, queued);
                }
            }
            return;
        }
        self.start_rotation(direction);
    }

    fn start_rotation(&mut self, direction: RotationDirection) {
        let target = self.angle + 2.0 * ISO_ANGLE * direction.sign();
        let tween = Tween::new(
            self.angle,
            target,
            self.settings.rotation_duration,
            Easing::Linear,
        );
        debug!("Rotating {:?}: {:.4} -> {:.4}", direction, self.angle, target);
        self.rotation = RotationState::Animating {
            tween,
            pending: None,
        };
        // Zero-length animations complete on the next tick
    }

    /// Advance the rotation animation by `delta_time` seconds.
    ///
    /// Call once per frame. On completion the angle lands exactly on the
    /// target, is wrapped into [0, 2π), and any queued step starts.
    pub fn update(&mut self, delta_time: f32) {
        let RotationState::Animating { tween, pending } = &mut self.rotation else {
            return;
        };

        let angle = tween.advance(delta_time);
        let finished = tween.is_finished();
        let pending = *pending;

        if !finished {
            self.set_angle(angle);
            return;
        }

        self.rotation = RotationState::Idle;
        self.set_angle(angle.rem_euclid(TAU));

        if let Some(direction) = pending {
            self.start_rotation(direction);
        }
    }

    // =========================================================================
    // VIEWPORT
    // =========================================================================

    /// Recompute the aspect ratio for a resized viewport.
    ///
    /// The angle is untouched; zero-sized viewports (minimized windows) are
    /// ignored.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        debug!("Camera aspect {:.3} ({}x{})", self.aspect, width, height);
        self.set_zoom(self.distance);
    }

    /// Place the camera on its orbit from cylindrical coordinates and aim it
    /// at the scene origin.
    fn update_camera_position(&mut self) {
        let radius = ISO_CAMERA_RADIUS * self.distance;
        let azimuth = ISO_ANGLE + self.angle;
        self.camera.position = Vec3::new(
            radius * azimuth.sin(),
            self.distance,
            radius * azimuth.cos(),
        );
        self.camera.look_at(Vec3::ZERO);
    }
}
