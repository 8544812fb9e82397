//! isoview Engine Library
//!
//! An interactive isometric grid viewer: an orthographic camera orbiting the
//! scene at true isometric elevation, mouse picking onto a ground grid, and
//! normalized keyboard/mouse input published as semantic events.
//!
//! # Modules
//!
//! - [`world`] - Grid cell <-> world-space mapping
//! - [`input`] - Platform-agnostic input normalization and event bus
//! - [`camera`] - Isometric camera controller, rotation tween, picking
//! - [`scene`] - The [`World`] orchestrator wiring input to camera and picking
//! - [`render`] - wgpu GPU context and scene pass
//! - [`config`] - JSON viewer configuration
//!
//! # Example
//!
//! ```rust
//! use isoview_engine::{ViewerConfig, World};
//! use isoview_engine::input::WheelDelta;
//!
//! let mut world = World::new(&ViewerConfig::default(), 1280, 720);
//!
//! // Wheel toward the user zooms out by 10%
//! world.input_mut().wheel(WheelDelta(100.0));
//! assert!((world.camera().distance() - 44.0).abs() < 1e-4);
//!
//! // Advance animations once per frame
//! world.update(1.0 / 60.0);
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod scene;
pub mod world;

pub use camera::{CameraController, CameraSettings, PickingService, RotationDirection};
pub use config::ViewerConfig;
pub use error::{ConfigError, ControlError, GpuError};
pub use input::{InputEvent, InputEventKind, InputManager, KeyBindings, KeyCode, MouseButton};
pub use scene::World;
pub use world::{GridCell, GridMapper};
