//! World Module
//!
//! World-space layout: the logical grid and its mapping to world coordinates.

pub mod grid;

pub use grid::{GRID_HEIGHT, GRID_UNIT_SIZE, GRID_WIDTH, GridCell, GridMapper};
