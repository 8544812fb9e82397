//! Input Manager
//!
//! Turns raw device input into semantic [`InputEvent`]s and keeps a polled
//! [`InputState`] snapshot. The manager is the only writer of that state;
//! consumers either subscribe to events or read the snapshot.
//!
//! Key presses and releases are de-bounced against the held flags: a
//! pressed event fires only on the first key-down of an action and a
//! released event only if the action was held. This suppresses OS
//! auto-repeat and stray key-ups after focus changes.

use log::trace;

use super::bindings::{InputAction, KeyBindings};
use super::events::{EventBus, InputEvent, InputEventKind, SubscriptionId};
use super::keyboard::KeyCode;
use super::mouse::{MouseButton, Position, WheelDelta};

/// Polled input snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub mouse_down: bool,
    /// Last element-local mouse position, `None` until the first move
    pub mouse_position: Option<Position>,
}

impl InputState {
    /// Check if any directional key is held.
    pub fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Up/down axis: +1 up, -1 down, 0 when neither or both.
    pub fn vertical_axis(&self) -> i32 {
        (self.up as i32) - (self.down as i32)
    }

    /// Left/right axis: +1 right, -1 left, 0 when neither or both.
    pub fn horizontal_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    fn held(&self, action: InputAction) -> bool {
        match action {
            InputAction::Up => self.up,
            InputAction::Down => self.down,
            InputAction::Left => self.left,
            InputAction::Right => self.right,
            InputAction::RotateLeft => self.rotate_left,
            InputAction::RotateRight => self.rotate_right,
        }
    }

    fn set_held(&mut self, action: InputAction, held: bool) {
        match action {
            InputAction::Up => self.up = held,
            InputAction::Down => self.down = held,
            InputAction::Left => self.left = held,
            InputAction::Right => self.right = held,
            InputAction::RotateLeft => self.rotate_left = held,
            InputAction::RotateRight => self.rotate_right = held,
        }
    }
}

fn pressed_event(action: InputAction) -> InputEvent {
    match action {
        InputAction::Up => InputEvent::UpPressed,
        InputAction::Down => InputEvent::DownPressed,
        InputAction::Left => InputEvent::LeftPressed,
        InputAction::Right => InputEvent::RightPressed,
        InputAction::RotateLeft => InputEvent::RotateLeftPress,
        InputAction::RotateRight => InputEvent::RotateRightPress,
    }
}

fn released_event(action: InputAction) -> InputEvent {
    match action {
        InputAction::Up => InputEvent::UpReleased,
        InputAction::Down => InputEvent::DownReleased,
        InputAction::Left => InputEvent::LeftReleased,
        InputAction::Right => InputEvent::RightReleased,
        InputAction::RotateLeft => InputEvent::RotateLeftReleased,
        InputAction::RotateRight => InputEvent::RotateRightReleased,
    }
}

/// Normalizes device input into semantic events plus polled state.
#[derive(Debug, Default)]
pub struct InputManager {
    bindings: KeyBindings,
    state: InputState,
    bus: EventBus<InputEventKind, InputEvent>,
}

impl InputManager {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            state: InputState::default(),
            bus: EventBus::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    // =========================================================================
    // PUB/SUB
    // =========================================================================

    /// Subscribe to one kind of semantic event.
    pub fn on<F>(&mut self, kind: InputEventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&InputEvent) + 'static,
    {
        self.bus.on(kind, handler)
    }

    pub fn off(&mut self, id: SubscriptionId) -> bool {
        self.bus.off(id)
    }

    /// Publish `event` to its subscribers. Does not touch the polled state.
    pub fn emit(&mut self, event: InputEvent) {
        trace!("input event {}", event.name());
        self.bus.emit(&event.kind(), &event);
    }

    // =========================================================================
    // RAW DEVICE INPUT
    // =========================================================================

    /// Handle a key press. Unbound keys are ignored.
    pub fn key_down(&mut self, key: KeyCode) {
        let actions = self.bindings.actions_for(key);
        if actions.is_empty() {
            trace!("ignoring unbound key {:?}", key);
            return;
        }
        for action in actions {
            if !self.state.held(action) {
                self.state.set_held(action, true);
                self.emit(pressed_event(action));
            }
        }
    }

    /// Handle a key release. Actions that were not held emit nothing.
    pub fn key_up(&mut self, key: KeyCode) {
        for action in self.bindings.actions_for(key) {
            if self.state.held(action) {
                self.state.set_held(action, false);
                self.emit(released_event(action));
            }
        }
    }

    /// On-screen "rotate left" control.
    pub fn click_rotate_left(&mut self) {
        self.emit(InputEvent::RotateLeftPress);
    }

    /// On-screen "rotate right" control.
    pub fn click_rotate_right(&mut self) {
        self.emit(InputEvent::RotateRightPress);
    }

    /// Handle a signed vertical wheel delta (positive = toward the user).
    pub fn wheel(&mut self, delta: WheelDelta) {
        let WheelDelta(delta_y) = delta;
        if delta_y > 0.0 {
            self.emit(InputEvent::ScrollUp(delta_y));
        } else if delta_y < 0.0 {
            self.emit(InputEvent::ScrollDown(-delta_y));
        }
    }

    /// Handle a mouse button press or release.
    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        self.state.mouse_down = pressed;
        if pressed {
            self.emit(InputEvent::MouseDown(button));
        } else {
            self.emit(InputEvent::MouseUp(button));
        }
    }

    /// Handle cursor movement in element-local pixels.
    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.state.mouse_position = Some(Position::new(x, y));
        self.emit(InputEvent::MouseMove { x, y });
    }

    /// Release everything held, e.g. when the window loses focus.
    pub fn focus_lost(&mut self) {
        for action in InputAction::ALL {
            if self.state.held(action) {
                self.state.set_held(action, false);
                self.emit(released_event(action));
            }
        }
        if self.state.mouse_down {
            self.state.mouse_down = false;
            self.emit(InputEvent::MouseUp(MouseButton::Left));
        }
    }

    // =========================================================================
    // POLLED STATE
    // =========================================================================

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn up(&self) -> bool {
        self.state.up
    }

    pub fn down(&self) -> bool {
        self.state.down
    }

    pub fn left(&self) -> bool {
        self.state.left
    }

    pub fn right(&self) -> bool {
        self.state.right
    }

    pub fn mouse_down(&self) -> bool {
        self.state.mouse_down
    }

    pub fn mouse_position(&self) -> Option<Position> {
        self.state.mouse_position
    }
}
