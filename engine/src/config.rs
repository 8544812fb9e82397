//! Viewer Configuration
//!
//! Grid layout, camera limits, window parameters and key bindings, loadable
//! from a JSON file. Every section falls back to the built-in defaults, so a
//! config file only needs the fields it changes.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::camera::CameraSettings;
use crate::camera::controller::{
    CAMERA_INITIAL_DISTANCE, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_ZOOM_SPEED,
    ROTATION_DURATION,
};
use crate::camera::projection::{DEFAULT_FAR, DEFAULT_NEAR};
use crate::error::ConfigError;
use crate::input::KeyBindings;
use crate::world::{GRID_HEIGHT, GRID_UNIT_SIZE, GRID_WIDTH, GridMapper};

/// Largest accepted grid width or height, in cells.
pub const MAX_GRID_DIMENSION: u32 = 4096;

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    pub unit_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            unit_size: GRID_UNIT_SIZE,
        }
    }
}

impl GridConfig {
    pub fn mapper(&self) -> GridMapper {
        GridMapper::new(self.width, self.height, self.unit_size)
    }
}

/// Camera limits and animation timing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub initial_distance: f32,
    pub zoom_speed: f32,
    pub rotation_duration_ms: u64,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            initial_distance: CAMERA_INITIAL_DISTANCE,
            zoom_speed: CAMERA_ZOOM_SPEED,
            rotation_duration_ms: ROTATION_DURATION.as_millis() as u64,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl CameraConfig {
    pub fn settings(&self) -> CameraSettings {
        CameraSettings {
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            initial_distance: self.initial_distance,
            zoom_speed: self.zoom_speed,
            rotation_duration: Duration::from_millis(self.rotation_duration_ms),
            near: self.near,
            far: self.far,
        }
    }
}

/// Initial window parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Use VSync (true = capped to monitor refresh, false = uncapped FPS)
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "isoview".to_string(),
            vsync: true,
        }
    }
}

/// Complete viewer configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub grid: GridConfig,
    pub camera: CameraConfig,
    pub window: WindowConfig,
    pub bindings: KeyBindings,
}

impl ViewerConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the viewer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if grid.width == 0 || grid.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one cell (got {}x{})",
                grid.width, grid.height
            )));
        }
        if grid.width > MAX_GRID_DIMENSION || grid.height > MAX_GRID_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "grid may be at most {0}x{0} cells (got {1}x{2})",
                MAX_GRID_DIMENSION, grid.width, grid.height
            )));
        }
        if !(grid.unit_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid unit_size must be positive (got {})",
                grid.unit_size
            )));
        }

        let camera = &self.camera;
        if !(camera.min_distance > 0.0 && camera.min_distance <= camera.max_distance) {
            return Err(ConfigError::Invalid(format!(
                "camera distance bounds must satisfy 0 < min <= max (got {}..{})",
                camera.min_distance, camera.max_distance
            )));
        }
        if !(camera.zoom_speed > 0.0 && camera.zoom_speed < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "camera zoom_speed must be in (0, 1) (got {})",
                camera.zoom_speed
            )));
        }
        if !(camera.near < camera.far) {
            return Err(ConfigError::Invalid(format!(
                "camera near plane must be closer than far plane (got {}..{})",
                camera.near, camera.far
            )));
        }

        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
