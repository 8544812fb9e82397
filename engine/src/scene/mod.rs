//! Scene Orchestrator
//!
//! [`World`] owns the input manager and wires its events to the camera
//! controller and the picking service. The binary feeds raw device input
//! through [`World::input_mut`], calls [`World::update`] once per frame and
//! renders from the accessors.
//!
//! Event handlers run synchronously inside the input manager, so the state
//! they write (camera, hovered cell, cube cell) is shared through
//! `Rc<RefCell<_>>` / `Rc<Cell<_>>`. Nothing else writes that state.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use glam::Vec3;
use log::{debug, warn};

use crate::camera::{CameraController, PickingService};
use crate::config::ViewerConfig;
use crate::input::{InputEvent, InputEventKind, InputManager, MouseButton};
use crate::world::{GridCell, GridMapper};

/// Viewport size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// State shared between the world and its input handlers.
#[derive(Debug)]
struct Shared {
    camera: RefCell<CameraController>,
    grid: GridMapper,
    picking: PickingService,
    viewport: Cell<Viewport>,
    hovered: Cell<Option<GridCell>>,
    /// Last cursor position seen by the mouse-move handler
    cursor: Cell<Option<(f32, f32)>>,
    cube: Cell<GridCell>,
}

impl Shared {
    /// Re-pick the cell under `(x, y)` against the current camera.
    fn hover_at(&self, x: f32, y: f32) {
        let viewport = self.viewport.get();
        let camera = self.camera.borrow();
        let cell = self.picking.pick_cell(
            x,
            y,
            viewport.width as f32,
            viewport.height as f32,
            camera.camera(),
            &self.grid,
        );
        self.hovered.set(cell);
    }

    /// Re-pick under the last known cursor after the camera changed.
    fn refresh_hover(&self) {
        if let Some((x, y)) = self.cursor.get() {
            self.hover_at(x, y);
        }
    }
}

/// The isometric grid scene: one cube on a grid, an orbiting camera and a
/// hover cursor.
#[derive(Debug)]
pub struct World {
    shared: Rc<Shared>,
    input: InputManager,
}

impl World {
    /// Build the scene for a `width` x `height` viewport and subscribe the
    /// camera and picking handlers.
    pub fn new(config: &ViewerConfig, width: u32, height: u32) -> Self {
        let camera = CameraController::with_viewport(config.camera.settings(), width, height);
        let shared = Rc::new(Shared {
            camera: RefCell::new(camera),
            grid: config.grid.mapper(),
            picking: PickingService::new(),
            viewport: Cell::new(Viewport::new(width, height)),
            hovered: Cell::new(None),
            cursor: Cell::new(None),
            cube: Cell::new(GridCell::new(0, 0)),
        });

        let mut input = InputManager::new(config.bindings.clone());
        subscribe_handlers(&mut input, &shared);

        Self { shared, input }
    }

    // =========================================================================
    // FRAME LOOP
    // =========================================================================

    /// Advance animations by `delta_time` seconds.
    pub fn update(&mut self, delta_time: f32) {
        let animating = {
            let mut camera = self.shared.camera.borrow_mut();
            let was_animating = camera.is_animating();
            camera.update(delta_time);
            was_animating
        };

        // The ground under a still cursor moves while the camera turns
        if animating {
            self.shared.refresh_hover();
        }
    }

    /// Resize the viewport. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!("Ignoring zero-sized viewport {}x{}", width, height);
            return;
        }
        self.shared.viewport.set(Viewport::new(width, height));
        self.shared.camera.borrow_mut().on_resize(width, height);
        self.shared.refresh_hover();
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Raw device input goes in here.
    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    /// Borrow the camera controller.
    ///
    /// The borrow must be released before feeding more input.
    pub fn camera(&self) -> Ref<'_, CameraController> {
        self.shared.camera.borrow()
    }

    pub fn grid(&self) -> &GridMapper {
        &self.shared.grid
    }

    pub fn viewport(&self) -> Viewport {
        self.shared.viewport.get()
    }

    pub fn hovered_cell(&self) -> Option<GridCell> {
        self.shared.hovered.get()
    }

    pub fn cube_cell(&self) -> GridCell {
        self.shared.cube.get()
    }

    /// World-space center of the cube.
    pub fn cube_position(&self) -> Vec3 {
        self.shared.grid.cell_to_world(self.shared.cube.get())
    }

    /// Move the cube to `cell`. Out-of-bounds cells are rejected.
    pub fn place_cube(&mut self, cell: GridCell) -> bool {
        place_cube(&self.shared, cell)
    }
}

fn place_cube(shared: &Shared, cell: GridCell) -> bool {
    if !shared.grid.contains(cell) {
        warn!("Refusing to place cube outside the grid at {:?}", cell);
        return false;
    }
    debug!("Cube moved to cell ({}, {})", cell.x, cell.y);
    shared.cube.set(cell);
    true
}

fn subscribe_handlers(input: &mut InputManager, shared: &Rc<Shared>) {
    let s = Rc::clone(shared);
    input.on(InputEventKind::ScrollUp, move |_| {
        s.camera.borrow_mut().zoom_out();
        s.refresh_hover();
    });

    let s = Rc::clone(shared);
    input.on(InputEventKind::ScrollDown, move |_| {
        s.camera.borrow_mut().zoom_in();
        s.refresh_hover();
    });

    let s = Rc::clone(shared);
    input.on(InputEventKind::RotateRightPress, move |_| {
        if let Err(err) = s.camera.borrow_mut().rotate(1) {
            warn!("Rotate right failed: {}", err);
        }
    });

    let s = Rc::clone(shared);
    input.on(InputEventKind::RotateLeftPress, move |_| {
        if let Err(err) = s.camera.borrow_mut().rotate(-1) {
            warn!("Rotate left failed: {}", err);
        }
    });

    let s = Rc::clone(shared);
    input.on(InputEventKind::MouseMove, move |event| {
        if let InputEvent::MouseMove { x, y } = *event {
            s.cursor.set(Some((x, y)));
            s.hover_at(x, y);
        }
    });

    let s = Rc::clone(shared);
    input.on(InputEventKind::MouseDown, move |event| {
        if *event != InputEvent::MouseDown(MouseButton::Left) {
            return;
        }
        // Pick against the current camera, not a possibly stale hover
        s.refresh_hover();
        if let Some(cell) = s.hovered.get() {
            place_cube(&s, cell);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, WheelDelta};

    fn world() -> World {
        World::new(&ViewerConfig::default(), 800, 600)
    }

    #[test]
    fn test_cube_starts_at_origin_cell() {
        let world = world();
        assert_eq!(world.cube_cell(), GridCell::new(0, 0));
        assert_eq!(world.cube_position(), Vec3::new(-20.0, 5.0, 45.0));
    }

    #[test]
    fn test_scroll_zooms_camera() {
        let mut world = world();
        world.input_mut().wheel(WheelDelta(100.0));
        assert!((world.camera().distance() - 44.0).abs() < 1e-4);

        world.input_mut().wheel(WheelDelta(-100.0));
        assert!((world.camera().distance() - 39.6).abs() < 1e-4);
    }

    #[test]
    fn test_rotate_key_starts_animation() {
        let mut world = world();
        world.input_mut().key_down(KeyCode::E);
        assert!(world.camera().is_animating());

        world.update(1.0);
        assert!(!world.camera().is_animating());
    }

    #[test]
    fn test_place_cube_rejects_out_of_bounds() {
        let mut world = world();
        assert!(!world.place_cube(GridCell::new(10, 0)));
        assert_eq!(world.cube_cell(), GridCell::new(0, 0));
        assert!(world.place_cube(GridCell::new(3, 2)));
        assert_eq!(world.cube_cell(), GridCell::new(3, 2));
    }
}
