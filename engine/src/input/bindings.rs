//! Input Bindings Module
//!
//! Maps physical keys to logical actions. Each action accepts several alias
//! keys and one key may drive several actions (Q both strafes left and
//! rotates left by default).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Logical keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    RotateLeft,
    RotateRight,
}

impl InputAction {
    pub const ALL: [InputAction; 6] = [
        InputAction::Up,
        InputAction::Down,
        InputAction::Left,
        InputAction::Right,
        InputAction::RotateLeft,
        InputAction::RotateRight,
    ];
}

/// Action → keys table, serializable as `{ "Up": ["W", "ArrowUp"], ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    action_to_keys: BTreeMap<InputAction, Vec<KeyCode>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create the default bindings.
    ///
    /// - Up: W, ArrowUp, P, Comma
    /// - Down: S, ArrowDown, O
    /// - Left: A, ArrowLeft, Q
    /// - Right: D, ArrowRight, E
    /// - RotateLeft: Q
    /// - RotateRight: E
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        for key in [KeyCode::W, KeyCode::ArrowUp, KeyCode::P, KeyCode::Comma] {
            bindings.bind(key, InputAction::Up);
        }
        for key in [KeyCode::S, KeyCode::ArrowDown, KeyCode::O] {
            bindings.bind(key, InputAction::Down);
        }
        for key in [KeyCode::A, KeyCode::ArrowLeft, KeyCode::Q] {
            bindings.bind(key, InputAction::Left);
        }
        for key in [KeyCode::D, KeyCode::ArrowRight, KeyCode::E] {
            bindings.bind(key, InputAction::Right);
        }
        bindings.bind(KeyCode::Q, InputAction::RotateLeft);
        bindings.bind(KeyCode::E, InputAction::RotateRight);

        bindings
    }

    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            action_to_keys: BTreeMap::new(),
        }
    }

    /// Add `key` as an alias for `action`. Existing bindings are kept.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        let keys = self.action_to_keys.entry(action).or_default();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    /// Remove `key` from every action.
    pub fn unbind_key(&mut self, key: KeyCode) {
        for keys in self.action_to_keys.values_mut() {
            keys.retain(|k| *k != key);
        }
    }

    /// Remove every key bound to `action`.
    pub fn unbind_action(&mut self, action: InputAction) {
        self.action_to_keys.remove(&action);
    }

    /// Actions driven by `key`, in declaration order.
    pub fn actions_for(&self, key: KeyCode) -> Vec<InputAction> {
        self.action_to_keys
            .iter()
            .filter(|(_, keys)| keys.contains(&key))
            .map(|(action, _)| *action)
            .collect()
    }

    /// Keys bound to `action`.
    pub fn keys_for(&self, action: InputAction) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `key` drives any action.
    pub fn is_bound(&self, key: KeyCode) -> bool {
        self.action_to_keys.values().any(|keys| keys.contains(&key))
    }
}
