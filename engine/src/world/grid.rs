//! Grid Mapping Module
//!
//! Converts between integer grid cells and world-space positions.
//!
//! ## Axis convention
//! The grid is centered on the world origin and lies on the XZ plane:
//! - grid X (width axis) runs along world -Z
//! - grid Y (height axis) runs along world +X
//! - objects rest on a ground slab one unit thick, so their centers sit at
//!   world Y = unit_size / 2
//!
//! This matches the rotation applied to the grid mesh, so placed objects line
//! up with the drawn cells.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::raycast::GroundPlane;

/// Default grid width in cells.
pub const GRID_WIDTH: u32 = 10;
/// Default grid height in cells.
pub const GRID_HEIGHT: u32 = 5;
/// Default edge length of one cell in world units.
pub const GRID_UNIT_SIZE: f32 = 10.0;

/// A cell of the logical occupancy grid.
///
/// Coordinates are signed so that out-of-range picks can be represented;
/// use [`GridMapper::contains`] to bounds-check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Pure transform between grid cells and world positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapper {
    width: u32,
    height: u32,
    unit_size: f32,
}

impl Default for GridMapper {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT, GRID_UNIT_SIZE)
    }
}

impl GridMapper {
    pub fn new(width: u32, height: u32, unit_size: f32) -> Self {
        Self {
            width,
            height,
            unit_size,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn unit_size(&self) -> f32 {
        self.unit_size
    }

    /// Half the grid extent along the width axis (world Z).
    fn width_offset(&self) -> f32 {
        (self.width as f32 * self.unit_size) / 2.0
    }

    /// Half the grid extent along the height axis (world X).
    fn height_offset(&self) -> f32 {
        (self.height as f32 * self.unit_size) / 2.0
    }

    /// World-space center of `cell`, on top of the ground slab.
    pub fn cell_to_world(&self, cell: GridCell) -> Vec3 {
        let half_unit = self.unit_size / 2.0;
        let grid_x = cell.x as f32 * self.unit_size + half_unit;
        let grid_y = cell.y as f32 * self.unit_size + half_unit;

        let translated_x = grid_x - self.width_offset();
        let translated_y = grid_y - self.height_offset();

        Vec3::new(translated_y, half_unit, -translated_x)
    }

    /// Cell containing `pos`. Y is ignored and no bounds check is applied.
    pub fn world_to_cell(&self, pos: Vec3) -> GridCell {
        let grid_x = -pos.z + self.width_offset();
        let grid_y = pos.x + self.height_offset();

        GridCell {
            x: (grid_x / self.unit_size).floor() as i32,
            y: (grid_y / self.unit_size).floor() as i32,
        }
    }

    /// Whether `cell` lies within `[0, width) x [0, height)`.
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// The finite ground rectangle at Y=0 covered by the grid.
    pub fn footprint(&self) -> GroundPlane {
        GroundPlane::new(0.0, self.height_offset(), self.width_offset())
    }

    /// Iterate over every valid cell, row by row along the width axis.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| GridCell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_cell_world_position() {
        let grid = GridMapper::default();
        let pos = grid.cell_to_world(GridCell::new(0, 0));
        assert_eq!(pos, Vec3::new(-20.0, 5.0, 45.0));
    }

    #[test]
    fn test_far_corner_cell_world_position() {
        let grid = GridMapper::default();
        let pos = grid.cell_to_world(GridCell::new(9, 4));
        assert_eq!(pos, Vec3::new(20.0, 5.0, -45.0));
    }

    #[test]
    fn test_world_to_cell_floors_negative() {
        let grid = GridMapper::default();
        // Just past the +Z edge (width axis below zero)
        let cell = grid.world_to_cell(Vec3::new(0.0, 0.0, 50.5));
        assert_eq!(cell.x, -1);
        assert!(!grid.contains(cell));
    }

    #[test]
    fn test_contains() {
        let grid = GridMapper::default();
        assert!(grid.contains(GridCell::new(0, 0)));
        assert!(grid.contains(GridCell::new(9, 4)));
        assert!(!grid.contains(GridCell::new(10, 0)));
        assert!(!grid.contains(GridCell::new(0, 5)));
        assert!(!grid.contains(GridCell::new(-1, 2)));
    }

    #[test]
    fn test_cells_count() {
        let grid = GridMapper::new(3, 2, 1.0);
        assert_eq!(grid.cells().count(), 6);
    }
}
