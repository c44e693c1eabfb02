//! Logical keyboard state
//!
//! The browser glue feeds key events in; the simulation only asks whether a
//! logical key is currently held.

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    W,
    A,
    S,
    D,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a logical key.
    /// Letters are case-insensitive so Shift or Caps Lock don't drop input.
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::Space),
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            _ => None,
        }
    }

    /// Bit position in `KeyState`
    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Set of currently held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    held: u16,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state with the given keys held (handy for scripted input)
    pub fn with(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for &key in keys {
            state.press(key);
        }
        state
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    /// Drop everything (window lost focus, so key-up events won't arrive)
    pub fn release_all(&mut self) {
        self.held = 0;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    /// True if either the primary key or its alias is held
    pub fn either(&self, primary: Key, alias: Key) -> bool {
        self.is_down(primary) || self.is_down(alias)
    }

    pub fn is_empty(&self) -> bool {
        self.held == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut keys = KeyState::new();
        assert!(keys.is_empty());

        keys.press(Key::Space);
        keys.press(Key::W);
        assert!(keys.is_down(Key::Space));
        assert!(keys.is_down(Key::W));
        assert!(!keys.is_down(Key::Up));

        keys.release(Key::Space);
        assert!(!keys.is_down(Key::Space));
        assert!(keys.is_down(Key::W));

        keys.release_all();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_alias() {
        let keys = KeyState::with(&[Key::A]);
        assert!(keys.either(Key::Left, Key::A));
        assert!(!keys.either(Key::Right, Key::D));
    }

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
        assert_eq!(Key::from_dom_key("W"), Some(Key::W));
        assert_eq!(Key::from_dom_key("d"), Some(Key::D));
        assert_eq!(Key::from_dom_key("Enter"), None);
    }

    #[test]
    fn test_every_key_has_distinct_bit() {
        let all = [
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
            Key::Space,
            Key::W,
            Key::A,
            Key::S,
            Key::D,
        ];
        let mut seen = 0u16;
        for key in all {
            assert_eq!(seen & key.bit(), 0);
            seen |= key.bit();
        }
    }
}
