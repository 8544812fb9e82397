//! Scene Render Pass
//!
//! Draws the grid wireframe, the cube and the hover cursor with one shader.
//! Geometry is built on the CPU in world space by the pure builder functions
//! below; the GPU side only needs the camera's view-projection matrix.

use glam::{Mat4, Vec3};
use static_assertions::assert_eq_size;

use super::gpu_context::{DEPTH_FORMAT, GpuContext};
use crate::scene::World;
use crate::world::{GridCell, GridMapper};

/// WGSL source for every scene pipeline.
pub const SCENE_SHADER: &str = include_str!("../../../shaders/scene.wgsl");

/// Grid wireframe color: green at 30% opacity.
pub const GRID_LINE_COLOR: [f32; 4] = [0.0, 0.8, 0.0, 0.3];
/// Hover cursor color.
pub const HOVER_COLOR: [f32; 4] = [1.0, 0.85, 0.2, 0.45];
/// Hover quad height above the ground, to stay clear of the grid lines.
pub const HOVER_LIFT: f32 = 0.05;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Vertex for scene rendering (position, color)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

assert_eq_size!(SceneVertex, [u8; 28]);

impl SceneVertex {
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SceneVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Uniform data for scene rendering
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
}

assert_eq_size!(SceneUniforms, [u8; 64]);

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        }
    }
}

impl SceneUniforms {
    pub fn from_matrix(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

// ============================================================================
// GEOMETRY BUILDERS
// ============================================================================

/// Line-list vertices outlining every cell of `grid` on the ground (Y = 0).
pub fn grid_lines(grid: &GridMapper, color: [f32; 4]) -> Vec<SceneVertex> {
    let plane = grid.footprint();
    let (half_x, half_z) = (plane.half_extent_x, plane.half_extent_z);
    let unit = grid.unit_size();

    let mut vertices = Vec::with_capacity(2 * (grid.width() as usize + grid.height() as usize + 2));

    // Lines across the width axis, one per row boundary
    for row in 0..=grid.height() {
        let x = -half_x + row as f32 * unit;
        vertices.push(SceneVertex::new(Vec3::new(x, 0.0, -half_z), color));
        vertices.push(SceneVertex::new(Vec3::new(x, 0.0, half_z), color));
    }
    // Lines across the height axis, one per column boundary
    for column in 0..=grid.width() {
        let z = -half_z + column as f32 * unit;
        vertices.push(SceneVertex::new(Vec3::new(-half_x, 0.0, z), color));
        vertices.push(SceneVertex::new(Vec3::new(half_x, 0.0, z), color));
    }

    vertices
}

/// Append a square face to `vertices`/`indices`, counter-clockwise when seen
/// from the side `u × v` points to.
fn push_face(
    vertices: &mut Vec<SceneVertex>,
    indices: &mut Vec<u32>,
    center: Vec3,
    u: Vec3,
    v: Vec3,
    color: [f32; 4],
) {
    let base = vertices.len() as u32;
    for corner in [center - u - v, center + u - v, center + u + v, center - u + v] {
        vertices.push(SceneVertex::new(corner, color));
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Color a face by its outward normal, mapped from [-1, 1] to [0, 1].
fn normal_color(normal: Vec3) -> [f32; 4] {
    let c = normal * 0.5 + Vec3::splat(0.5);
    [c.x, c.y, c.z, 1.0]
}

/// Axis-aligned cube of edge `size` centered on `center`.
///
/// Returns 24 vertices (4 per face so each face gets its own normal color)
/// and 36 triangle-list indices.
pub fn cube_mesh(center: Vec3, size: f32) -> (Vec<SceneVertex>, Vec<u32>) {
    let h = size / 2.0;
    // (outward normal, u, v) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        push_face(
            &mut vertices,
            &mut indices,
            center + normal * h,
            u * h,
            v * h,
            normal_color(normal),
        );
    }
    (vertices, indices)
}

/// Upward-facing quad covering `cell`, raised `lift` above the ground.
pub fn cell_quad(
    grid: &GridMapper,
    cell: GridCell,
    lift: f32,
    color: [f32; 4],
) -> (Vec<SceneVertex>, Vec<u32>) {
    let mut center = grid.cell_to_world(cell);
    center.y = lift;
    let h = grid.unit_size() / 2.0;

    let mut vertices = Vec::with_capacity(4);
    let mut indices = Vec::with_capacity(6);
    push_face(
        &mut vertices,
        &mut indices,
        center,
        Vec3::Z * h,
        Vec3::X * h,
        color,
    );
    (vertices, indices)
}

// ============================================================================
// GPU PASS
// ============================================================================

/// Vertex and index buffers for one drawable mesh.
struct MeshBuffer {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffer {
    fn new(ctx: &GpuContext, label: &str, vertices: &[SceneVertex], indices: &[u32]) -> Self {
        Self {
            vertex_buffer: ctx.create_vertex_buffer(&format!("{} Vertices", label), vertices),
            index_buffer: ctx.create_index_buffer(&format!("{} Indices", label), indices),
            index_count: indices.len() as u32,
        }
    }
}

/// Render pass for the whole isometric scene.
pub struct ScenePass {
    line_pipeline: wgpu::RenderPipeline,
    mesh_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    grid_buffer: wgpu::Buffer,
    grid_vertex_count: u32,
    cube: MeshBuffer,
    cube_cell: GridCell,
    hover: MeshBuffer,
    hovered_cell: Option<GridCell>,
}

impl ScenePass {
    pub fn new(ctx: &GpuContext, world: &World) -> Self {
        let grid = world.grid();

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Scene Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let uniform_buffer = ctx.create_uniform_buffer("Scene Uniforms", &SceneUniforms::default());

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Scene Shader"),
                source: wgpu::ShaderSource::Wgsl(SCENE_SHADER.into()),
            });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let line_pipeline = create_scene_pipeline(
            ctx,
            "Grid Lines",
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::LineList,
            false,
        );
        let mesh_pipeline = create_scene_pipeline(
            ctx,
            "Scene Mesh",
            &shader,
            &pipeline_layout,
            wgpu::PrimitiveTopology::TriangleList,
            true,
        );

        let grid_vertices = grid_lines(grid, GRID_LINE_COLOR);
        let grid_buffer = ctx.create_vertex_buffer("Grid Lines", &grid_vertices);

        let cube_cell = world.cube_cell();
        let (cube_vertices, cube_indices) = cube_mesh(world.cube_position(), grid.unit_size());
        let cube = MeshBuffer::new(ctx, "Cube", &cube_vertices, &cube_indices);

        let (hover_vertices, hover_indices) =
            cell_quad(grid, GridCell::new(0, 0), HOVER_LIFT, HOVER_COLOR);
        let hover = MeshBuffer::new(ctx, "Hover", &hover_vertices, &hover_indices);

        Self {
            line_pipeline,
            mesh_pipeline,
            uniform_buffer,
            bind_group,
            grid_buffer,
            grid_vertex_count: grid_vertices.len() as u32,
            cube,
            cube_cell,
            hover,
            hovered_cell: None,
        }
    }

    /// Upload the camera matrix and any geometry that moved since last frame.
    pub fn prepare(&mut self, ctx: &GpuContext, world: &World) {
        let view_proj = world.camera().camera().view_projection();
        ctx.write_buffer(&self.uniform_buffer, &[SceneUniforms::from_matrix(view_proj)]);

        let grid = world.grid();

        let cube_cell = world.cube_cell();
        if cube_cell != self.cube_cell {
            let (vertices, _) = cube_mesh(world.cube_position(), grid.unit_size());
            ctx.write_buffer(&self.cube.vertex_buffer, &vertices);
            self.cube_cell = cube_cell;
        }

        let hovered = world.hovered_cell();
        if hovered != self.hovered_cell {
            if let Some(cell) = hovered {
                let (vertices, _) = cell_quad(grid, cell, HOVER_LIFT, HOVER_COLOR);
                ctx.write_buffer(&self.hover.vertex_buffer, &vertices);
            }
            self.hovered_cell = hovered;
        }
    }

    /// Record the scene into `encoder`, clearing `color_view` and `depth_view`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.bind_group, &[]);

        // Opaque cube first so the translucent layers blend over it
        render_pass.set_pipeline(&self.mesh_pipeline);
        draw_mesh(&mut render_pass, &self.cube);

        render_pass.set_pipeline(&self.line_pipeline);
        render_pass.set_vertex_buffer(0, self.grid_buffer.slice(..));
        render_pass.draw(0..self.grid_vertex_count, 0..1);

        if self.hovered_cell.is_some() {
            render_pass.set_pipeline(&self.mesh_pipeline);
            draw_mesh(&mut render_pass, &self.hover);
        }
    }
}

fn draw_mesh(render_pass: &mut wgpu::RenderPass<'_>, mesh: &MeshBuffer) {
    render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
}

fn create_scene_pipeline(
    ctx: &GpuContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    topology: wgpu::PrimitiveTopology,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    let cull_mode = match topology {
        wgpu::PrimitiveTopology::TriangleList => Some(wgpu::Face::Back),
        _ => None,
    };

    ctx.device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} Pipeline", label)),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[SceneVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.format(),
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth_write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
