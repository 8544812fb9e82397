//! Raycast Module
//!
//! Screen-to-world ray construction for the orthographic camera and
//! intersection against the finite ground rectangle.

use glam::{Vec2, Vec3};

use super::projection::OrthographicCamera;

/// Convert element-local mouse pixels to normalized device coordinates.
///
/// Screen Y grows downward, device Y grows upward, so Y is flipped.
/// Returns `None` for a zero-sized viewport.
pub fn normalize_mouse(mouse_x: f32, mouse_y: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        2.0 * mouse_x / width - 1.0,
        1.0 - 2.0 * mouse_y / height,
    ))
}

/// A half-line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Build the picking ray through `ndc` for an orthographic camera.
///
/// All orthographic rays share the camera's forward direction; the origin is
/// shifted across the view plane in proportion to the view-volume size.
pub fn ray_from_camera(camera: &OrthographicCamera, ndc: Vec2) -> Ray {
    let (view_width, view_height) = camera.view_size();
    let center_x = (camera.left + camera.right) * 0.5;
    let center_y = (camera.top + camera.bottom) * 0.5;

    let offset_x = center_x + ndc.x * view_width * 0.5;
    let offset_y = center_y + ndc.y * view_height * 0.5;

    let origin = camera.position
        + camera.right_vector() * offset_x
        + camera.up_vector() * offset_y;

    Ray::new(origin, camera.forward())
}

/// Finite horizontal rectangle centered on the world origin.
///
/// Covers `x ∈ [-half_extent_x, half_extent_x]` and
/// `z ∈ [-half_extent_z, half_extent_z]` at `y = height`. Only its upper face
/// is pickable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    pub height: f32,
    pub half_extent_x: f32,
    pub half_extent_z: f32,
}

impl GroundPlane {
    pub fn new(height: f32, half_extent_x: f32, half_extent_z: f32) -> Self {
        Self {
            height,
            half_extent_x,
            half_extent_z,
        }
    }

    /// Whether the XZ projection of `point` lies inside the rectangle.
    pub fn contains_xz(&self, point: Vec3) -> bool {
        point.x.abs() <= self.half_extent_x && point.z.abs() <= self.half_extent_z
    }

    /// Nearest intersection of `ray` with the upper face, if any.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        // Parallel rays and rays arriving from below never hit the face
        if ray.direction.y > -1e-6 {
            return None;
        }

        let t = (self.height - ray.origin.y) / ray.direction.y;
        if t < 0.0 {
            // Intersection is behind the ray origin
            return None;
        }

        let hit = ray.at(t);
        self.contains_xz(hit).then_some(hit)
    }
}
