//! Isometric Grid Viewer
//!
//! Run with: `cargo run --bin iso_viewer -- --config viewer.json`
//!
//! Renders a green wireframe grid with a cube on it, seen through an
//! isometric orthographic camera.
//!
//! Controls:
//! - Mouse wheel: Zoom
//! - Q / E: Rotate camera 90° left / right
//! - [ / ]: Rotate camera left / right (on-screen buttons)
//! - Left click: Move the cube to the highlighted cell
//! - ESC: Exit

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use isoview_engine::input::{KeyCode, MouseButton, WheelDelta};
use isoview_engine::render::{GpuContext, ScenePass};
use isoview_engine::{ViewerConfig, World};

#[derive(Parser, Debug)]
#[command(about = "Interactive isometric grid viewer", version)]
struct Args {
    /// Optional JSON viewer configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured VSync setting
    #[arg(long)]
    vsync: Option<bool>,

    /// Override the grid width in cells
    #[arg(long)]
    grid_width: Option<u32>,

    /// Override the grid height in cells
    #[arg(long)]
    grid_height: Option<u32>,
}

impl Args {
    fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ViewerConfig::default(),
        };

        if let Some(vsync) = self.vsync {
            config.window.vsync = vsync;
        }
        if let Some(width) = self.grid_width {
            config.grid.width = width;
        }
        if let Some(height) = self.grid_height {
            config.grid.height = height;
        }
        config.validate().context("invalid command-line overrides")?;

        Ok(config)
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    world: World,
    scene_pass: ScenePass,
    last_frame: Instant,
}

impl AppState {
    fn new(window: Arc<Window>, config: &ViewerConfig) -> Result<Self> {
        let gpu = GpuContext::new(Arc::clone(&window), config.window.vsync)
            .context("initialising GPU")?;

        let (width, height) = gpu.dimensions();
        let world = World::new(config, width, height);
        let scene_pass = ScenePass::new(&gpu, &world);

        Ok(Self {
            window,
            gpu,
            world,
            scene_pass,
            last_frame: Instant::now(),
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.gpu.resize(size.width, size.height);
        self.world.resize(size.width, size.height);
    }

    fn handle_key(&mut self, key: winit::keyboard::KeyCode, pressed: bool) {
        let key = KeyCode::from_winit(key);
        let input = self.world.input_mut();
        match (key, pressed) {
            (KeyCode::BracketLeft, true) => input.click_rotate_left(),
            (KeyCode::BracketRight, true) => input.click_rotate_right(),
            (key, true) => input.key_down(key),
            (key, false) => input.key_up(key),
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.world.update(dt);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.scene_pass.prepare(&self.gpu, &self.world);

        let output = self.gpu.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        self.scene_pass
            .render(&mut encoder, &view, &self.gpu.depth.view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    config: ViewerConfig,
    state: Option<AppState>,
    /// Fatal error raised inside the event loop, reported by `main`
    error: Option<anyhow::Error>,
}

impl App {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{:#}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fail(event_loop, anyhow!("creating window: {}", err));
                return;
            }
        };

        match AppState::new(window, &self.config) {
            Ok(state) => {
                info!(
                    "Viewer ready: {}x{} grid, wheel to zoom, Q/E or [/] to rotate, click to place",
                    self.config.grid.width, self.config.grid.height
                );
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::Focused(false) => {
                state.world.input_mut().focus_lost();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;

                if key == winit::keyboard::KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                state.handle_key(key, pressed);
            }
            WindowEvent::MouseInput {
                button,
                state: btn_state,
                ..
            } => {
                state
                    .world
                    .input_mut()
                    .mouse_button(MouseButton::from_winit(button), btn_state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                state
                    .world
                    .input_mut()
                    .mouse_move(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = WheelDelta::from_winit(delta);
                if !delta.is_zero() {
                    state.world.input_mut().wheel(delta);
                }
            }
            WindowEvent::RedrawRequested => {
                state.update();

                match state.render() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.gpu.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        self.fail(event_loop, anyhow!("GPU out of memory"));
                        return;
                    }
                    Err(e) => warn!("Render error: {:?}", e),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.viewer_config()?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        config,
        state: None,
        error: None,
    };
    event_loop.run_app(&mut app).context("running event loop")?;

    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
