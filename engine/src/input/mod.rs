//! Input Module
//!
//! Platform-agnostic input normalization for keyboard, mouse and on-screen
//! controls. Raw device events go in, semantic events and a polled state
//! snapshot come out. The windowing layer only has to translate its own
//! key/button/wheel types (see the `from_winit` constructors).
//!
//! # Example
//!
//! ```rust
//! use isoview_engine::input::{InputEvent, InputEventKind, InputManager, KeyBindings, KeyCode};
//!
//! let mut input = InputManager::new(KeyBindings::default());
//! input.on(InputEventKind::RotateRightPress, |event| {
//!     assert_eq!(*event, InputEvent::RotateRightPress);
//! });
//!
//! input.key_down(KeyCode::E); // rightPressed + rotateRightPress
//! assert!(input.right());
//! ```

pub mod bindings;
pub mod events;
pub mod keyboard;
pub mod manager;
pub mod mouse;

pub use bindings::{InputAction, KeyBindings};
pub use events::{EventBus, InputEvent, InputEventKind, SubscriptionId};
pub use keyboard::KeyCode;
pub use manager::{InputManager, InputState};
pub use mouse::{MouseButton, PIXELS_PER_LINE, Position, WheelDelta};
