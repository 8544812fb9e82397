//! Camera Module
//!
//! Isometric camera control, screen-to-world raycasting and grid picking.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod controller;
pub mod picking;
pub mod projection;
pub mod raycast;
pub mod tween;

pub use controller::{
    CameraController, CameraSettings, ISO_ANGLE, ISO_CAMERA_RADIUS, RotationDirection,
    RotationState,
};
pub use picking::PickingService;
pub use projection::OrthographicCamera;
pub use raycast::{GroundPlane, Ray, normalize_mouse, ray_from_camera};
pub use tween::{Easing, Tween};
