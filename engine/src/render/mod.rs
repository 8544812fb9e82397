//! Render Module
//!
//! wgpu rendering for the isometric scene: a GPU context owning the device
//! and window surface, and a single scene pass drawing the grid, the cube and
//! the hover cursor.

pub mod gpu_context;
pub mod scene_pass;

pub use gpu_context::{
    DEPTH_FORMAT, DepthBuffer, GpuContext, choose_present_mode, choose_surface_format,
};
pub use scene_pass::{
    GRID_LINE_COLOR, HOVER_COLOR, SCENE_SHADER, ScenePass, SceneUniforms, SceneVertex, cell_quad,
    cube_mesh, grid_lines,
};
