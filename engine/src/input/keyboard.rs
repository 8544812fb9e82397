//! Keyboard Input Module
//!
//! Generic key codes, independent of the windowing system, plus the
//! translation from winit physical keys.

use serde::{Deserialize, Serialize};

/// Generic key codes for viewer input.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyCode {
    // Letter keys
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Punctuation and brackets
    BracketLeft,
    BracketRight,
    Comma,
    Period,
    Minus,
    Equal,

    // Control keys
    Space,
    Escape,
    Enter,
    Tab,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Translate a winit physical key code.
    pub fn from_winit(code: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as Winit;

        match code {
            Winit::KeyA => KeyCode::A,
            Winit::KeyB => KeyCode::B,
            Winit::KeyC => KeyCode::C,
            Winit::KeyD => KeyCode::D,
            Winit::KeyE => KeyCode::E,
            Winit::KeyF => KeyCode::F,
            Winit::KeyG => KeyCode::G,
            Winit::KeyH => KeyCode::H,
            Winit::KeyI => KeyCode::I,
            Winit::KeyJ => KeyCode::J,
            Winit::KeyK => KeyCode::K,
            Winit::KeyL => KeyCode::L,
            Winit::KeyM => KeyCode::M,
            Winit::KeyN => KeyCode::N,
            Winit::KeyO => KeyCode::O,
            Winit::KeyP => KeyCode::P,
            Winit::KeyQ => KeyCode::Q,
            Winit::KeyR => KeyCode::R,
            Winit::KeyS => KeyCode::S,
            Winit::KeyT => KeyCode::T,
            Winit::KeyU => KeyCode::U,
            Winit::KeyV => KeyCode::V,
            Winit::KeyW => KeyCode::W,
            Winit::KeyX => KeyCode::X,
            Winit::KeyY => KeyCode::Y,
            Winit::KeyZ => KeyCode::Z,
            Winit::ArrowUp => KeyCode::ArrowUp,
            Winit::ArrowDown => KeyCode::ArrowDown,
            Winit::ArrowLeft => KeyCode::ArrowLeft,
            Winit::ArrowRight => KeyCode::ArrowRight,
            Winit::BracketLeft => KeyCode::BracketLeft,
            Winit::BracketRight => KeyCode::BracketRight,
            Winit::Comma => KeyCode::Comma,
            Winit::Period => KeyCode::Period,
            Winit::Minus => KeyCode::Minus,
            Winit::Equal => KeyCode::Equal,
            Winit::Space => KeyCode::Space,
            Winit::Escape => KeyCode::Escape,
            Winit::Enter => KeyCode::Enter,
            Winit::Tab => KeyCode::Tab,
            Winit::ShiftLeft => KeyCode::ShiftLeft,
            Winit::ShiftRight => KeyCode::ShiftRight,
            Winit::ControlLeft => KeyCode::ControlLeft,
            Winit::ControlRight => KeyCode::ControlRight,
            _ => KeyCode::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_winit_letters_and_arrows() {
        assert_eq!(KeyCode::from_winit(winit::keyboard::KeyCode::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from_winit(winit::keyboard::KeyCode::KeyQ), KeyCode::Q);
        assert_eq!(
            KeyCode::from_winit(winit::keyboard::KeyCode::ArrowLeft),
            KeyCode::ArrowLeft
        );
        assert_eq!(KeyCode::from_winit(winit::keyboard::KeyCode::Comma), KeyCode::Comma);
    }

    #[test]
    fn test_from_winit_unmapped() {
        assert_eq!(KeyCode::from_winit(winit::keyboard::KeyCode::F5), KeyCode::Unknown);
    }

    #[test]
    fn test_key_code_serde_names() {
        let json = serde_json::to_string(&KeyCode::ArrowUp).unwrap();
        assert_eq!(json, "\"ArrowUp\"");
        let key: KeyCode = serde_json::from_str("\"Comma\"").unwrap();
        assert_eq!(key, KeyCode::Comma);
    }
}
