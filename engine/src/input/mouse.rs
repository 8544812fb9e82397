//! Mouse Input Module
//!
//! Mouse button identifiers, element-local positions and wheel deltas.
//! Decoupled from winit to use generic types.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

impl MouseButton {
    /// Translate a winit mouse button.
    pub fn from_winit(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Back => MouseButton::Other(3),
            winit::event::MouseButton::Forward => MouseButton::Other(4),
            winit::event::MouseButton::Other(id) => MouseButton::Other(id),
        }
    }
}

/// 2D position in element-local pixels, origin top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to tuple.
    pub fn to_tuple(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl From<(f32, f32)> for Position {
    fn from(tuple: (f32, f32)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Position> for (f32, f32) {
    fn from(pos: Position) -> (f32, f32) {
        (pos.x, pos.y)
    }
}

/// Pixels per wheel line, used to express line deltas as pixel deltas.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Signed vertical wheel delta in pixels.
///
/// Positive values mean the wheel was pulled toward the user (content scrolls
/// down), matching DOM `WheelEvent.deltaY`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelDelta(pub f32);

impl WheelDelta {
    /// Convert a winit scroll delta.
    ///
    /// winit reports wheel-away-from-user as positive, so the sign is flipped.
    pub fn from_winit(delta: winit::event::MouseScrollDelta) -> Self {
        match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => WheelDelta(-y * PIXELS_PER_LINE),
            winit::event::MouseScrollDelta::PixelDelta(pos) => WheelDelta(-(pos.y as f32)),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_tuple_round_trip() {
        let pos = Position::from((3.0, 4.0));
        assert_eq!(pos.to_tuple(), (3.0, 4.0));
    }

    #[test]
    fn test_wheel_line_delta_sign() {
        // Wheel pushed away from the user scrolls content up
        let delta = WheelDelta::from_winit(winit::event::MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(delta, WheelDelta(-100.0));
    }

    #[test]
    fn test_wheel_pixel_delta_sign() {
        let delta = WheelDelta::from_winit(winit::event::MouseScrollDelta::PixelDelta(
            winit::dpi::PhysicalPosition::new(0.0, -42.0),
        ));
        assert_eq!(delta, WheelDelta(42.0));
        assert!(!delta.is_zero());
    }

    #[test]
    fn test_button_from_winit() {
        assert_eq!(MouseButton::from_winit(winit::event::MouseButton::Left), MouseButton::Left);
        assert_eq!(
            MouseButton::from_winit(winit::event::MouseButton::Other(7)),
            MouseButton::Other(7)
        );
    }
}
