//! Input Tests - Key Handling, Wheel, Mouse and Event Publishing
//!
//! Tests for InputManager: alias keys, pressed/released de-bouncing, wheel
//! direction mapping, on-screen rotate controls and subscriptions.

use std::cell::RefCell;
use std::rc::Rc;

use isoview_engine::input::{
    InputAction, InputEvent, InputEventKind, InputManager, InputState, KeyBindings, KeyCode,
    MouseButton, Position, WheelDelta,
};

/// Subscribe a recorder to every event kind.
fn record_all(input: &mut InputManager) -> Rc<RefCell<Vec<InputEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let kinds = [
        InputEventKind::UpPressed,
        InputEventKind::UpReleased,
        InputEventKind::DownPressed,
        InputEventKind::DownReleased,
        InputEventKind::LeftPressed,
        InputEventKind::LeftReleased,
        InputEventKind::RightPressed,
        InputEventKind::RightReleased,
        InputEventKind::RotateLeftPress,
        InputEventKind::RotateLeftReleased,
        InputEventKind::RotateRightPress,
        InputEventKind::RotateRightReleased,
        InputEventKind::ScrollUp,
        InputEventKind::ScrollDown,
        InputEventKind::MouseDown,
        InputEventKind::MouseUp,
        InputEventKind::MouseMove,
    ];
    for kind in kinds {
        let log = Rc::clone(&log);
        input.on(kind, move |event| log.borrow_mut().push(*event));
    }
    log
}

// ============================================================================
// Keyboard Tests
// ============================================================================

#[test]
fn test_alias_keys_set_same_flag() {
    for key in [KeyCode::W, KeyCode::ArrowUp, KeyCode::P, KeyCode::Comma] {
        let mut input = InputManager::default();
        input.key_down(key);
        assert!(input.up(), "{:?} should press up", key);
        input.key_up(key);
        assert!(!input.up(), "{:?} should release up", key);
    }
}

#[test]
fn test_key_down_emits_pressed_once() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.key_down(KeyCode::W);
    // OS auto-repeat
    input.key_down(KeyCode::W);
    input.key_down(KeyCode::ArrowUp);

    assert_eq!(*log.borrow(), vec![InputEvent::UpPressed]);
}

#[test]
fn test_release_without_press_is_silent() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.key_up(KeyCode::S);
    input.key_up(KeyCode::E);

    assert!(log.borrow().is_empty());
    assert!(!input.down());
}

#[test]
fn test_q_moves_left_and_rotates() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.key_down(KeyCode::Q);
    assert!(input.left());
    assert!(input.state().rotate_left);

    input.key_up(KeyCode::Q);
    assert!(!input.left());

    assert_eq!(
        *log.borrow(),
        vec![
            InputEvent::LeftPressed,
            InputEvent::RotateLeftPress,
            InputEvent::LeftReleased,
            InputEvent::RotateLeftReleased,
        ]
    );
}

#[test]
fn test_e_moves_right_and_rotates() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.key_down(KeyCode::E);

    assert!(input.right());
    assert_eq!(
        *log.borrow(),
        vec![InputEvent::RightPressed, InputEvent::RotateRightPress]
    );
}

#[test]
fn test_unmapped_key_ignored() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.key_down(KeyCode::Z);
    input.key_up(KeyCode::Z);

    assert!(log.borrow().is_empty());
    assert_eq!(*input.state(), InputState::default());
}

#[test]
fn test_custom_bindings() {
    let mut bindings = KeyBindings::empty();
    bindings.bind(KeyCode::Space, InputAction::RotateRight);
    let mut input = InputManager::new(bindings);
    let log = record_all(&mut input);

    input.key_down(KeyCode::E);
    input.key_down(KeyCode::Space);

    assert_eq!(*log.borrow(), vec![InputEvent::RotateRightPress]);
}

#[test]
fn test_focus_lost_releases_held_keys() {
    let mut input = InputManager::default();
    input.key_down(KeyCode::W);
    input.mouse_button(MouseButton::Left, true);
    let log = record_all(&mut input);

    input.focus_lost();

    assert!(!input.up());
    assert!(!input.mouse_down());
    assert_eq!(
        *log.borrow(),
        vec![InputEvent::UpReleased, InputEvent::MouseUp(MouseButton::Left)]
    );
}

// ============================================================================
// On-screen Control Tests
// ============================================================================

#[test]
fn test_click_rotate_emits_without_state() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.click_rotate_left();
    input.click_rotate_right();
    input.click_rotate_right();

    assert_eq!(
        *log.borrow(),
        vec![
            InputEvent::RotateLeftPress,
            InputEvent::RotateRightPress,
            InputEvent::RotateRightPress,
        ]
    );
    assert!(!input.state().rotate_left);
    assert!(!input.state().rotate_right);
}

// ============================================================================
// Wheel Tests
// ============================================================================

#[test]
fn test_wheel_direction_mapping() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.wheel(WheelDelta(120.0));
    input.wheel(WheelDelta(-53.0));
    input.wheel(WheelDelta(0.0));

    assert_eq!(
        *log.borrow(),
        vec![InputEvent::ScrollUp(120.0), InputEvent::ScrollDown(53.0)]
    );
}

#[test]
fn test_winit_line_delta_conversion() {
    // winit: positive lines = wheel pushed away from the user
    let away = WheelDelta::from_winit(winit::event::MouseScrollDelta::LineDelta(0.0, 1.0));
    assert_eq!(away, WheelDelta(-100.0));

    let toward = WheelDelta::from_winit(winit::event::MouseScrollDelta::LineDelta(0.0, -2.0));
    assert_eq!(toward, WheelDelta(200.0));
}

// ============================================================================
// Mouse Tests
// ============================================================================

#[test]
fn test_mouse_buttons() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.mouse_button(MouseButton::Left, true);
    assert!(input.mouse_down());
    input.mouse_button(MouseButton::Left, false);
    assert!(!input.mouse_down());

    assert_eq!(
        *log.borrow(),
        vec![
            InputEvent::MouseDown(MouseButton::Left),
            InputEvent::MouseUp(MouseButton::Left),
        ]
    );
}

#[test]
fn test_mouse_move_tracks_position() {
    let mut input = InputManager::default();
    let log = record_all(&mut input);

    input.mouse_move(120.0, 48.5);

    assert_eq!(input.mouse_position(), Some(Position::new(120.0, 48.5)));
    assert_eq!(*log.borrow(), vec![InputEvent::MouseMove { x: 120.0, y: 48.5 }]);
}

// ============================================================================
// Subscription Tests
// ============================================================================

#[test]
fn test_off_stops_delivery() {
    let mut input = InputManager::default();
    let count = Rc::new(RefCell::new(0));

    let c = Rc::clone(&count);
    let id = input.on(InputEventKind::ScrollUp, move |_| *c.borrow_mut() += 1);

    input.wheel(WheelDelta(1.0));
    assert!(input.off(id));
    input.wheel(WheelDelta(1.0));

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_emit_does_not_touch_state() {
    let mut input = InputManager::default();
    input.emit(InputEvent::UpPressed);
    assert!(!input.up());
}
