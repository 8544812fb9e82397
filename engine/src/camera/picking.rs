//! Picking Service
//!
//! Maps a mouse position to the world point under it on the ground plane,
//! and from there to a grid cell. Only the ground plane is tested, so objects
//! standing on the grid never occlude a pick.

use glam::Vec3;

use super::projection::OrthographicCamera;
use super::raycast::{GroundPlane, normalize_mouse, ray_from_camera};
use crate::world::{GridCell, GridMapper};

/// Stateless screen-to-grid picker.
#[derive(Clone, Copy, Debug, Default)]
pub struct PickingService;

impl PickingService {
    pub fn new() -> Self {
        Self
    }

    /// World point on `plane` under the mouse, or `None` if the ray misses.
    pub fn pick(
        &self,
        mouse_x: f32,
        mouse_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        camera: &OrthographicCamera,
        plane: &GroundPlane,
    ) -> Option<Vec3> {
        let ndc = normalize_mouse(mouse_x, mouse_y, viewport_width, viewport_height)?;
        let ray = ray_from_camera(camera, ndc);
        plane.intersect(&ray)
    }

    /// In-bounds grid cell under the mouse.
    pub fn pick_cell(
        &self,
        mouse_x: f32,
        mouse_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        camera: &OrthographicCamera,
        grid: &GridMapper,
    ) -> Option<GridCell> {
        let point = self.pick(
            mouse_x,
            mouse_y,
            viewport_width,
            viewport_height,
            camera,
            &grid.footprint(),
        )?;
        let cell = grid.world_to_cell(point);
        // The footprint's far edges floor into the next cell
        grid.contains(cell).then_some(cell)
    }
}
