//! Orthographic Camera
//!
//! The camera object read by the renderer: projection bounds plus a
//! world-space pose. Window-system agnostic; it only holds state and math.

use glam::{Mat4, Vec3};

/// Default near clip distance.
pub const DEFAULT_NEAR: f32 = 1.0;
/// Default far clip distance.
pub const DEFAULT_FAR: f32 = 1000.0;

/// Orthographic camera with explicit view-volume bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    /// Point the camera is looking at
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            top: 1.0,
            bottom: -1.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl OrthographicCamera {
    pub fn new(near: f32, far: f32) -> Self {
        Self {
            near,
            far,
            ..Default::default()
        }
    }

    /// Set symmetric bounds: `half_height` vertically, scaled by `aspect` horizontally.
    pub fn set_bounds(&mut self, half_height: f32, aspect: f32) {
        self.left = -half_height * aspect;
        self.right = half_height * aspect;
        self.top = half_height;
        self.bottom = -half_height;
    }

    /// Orient the camera toward `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Unit vector from the camera toward its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Camera-space right axis in world coordinates.
    pub fn right_vector(&self) -> Vec3 {
        let forward = self.forward();
        // Looking straight up or down - fall back to world X
        if forward.cross(self.up).length_squared() < 1e-8 {
            return Vec3::X;
        }
        forward.cross(self.up).normalize()
    }

    /// Camera-space up axis in world coordinates.
    pub fn up_vector(&self) -> Vec3 {
        self.right_vector().cross(self.forward()).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Right-handed orthographic projection with depth in `[0, 1]`.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Visible width and height of the view volume.
    pub fn view_size(&self) -> (f32, f32) {
        (self.right - self.left, self.top - self.bottom)
    }
}
