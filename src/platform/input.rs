//! Keyboard input
//!
//! winit delivers key transitions as events; the game asks "is this key down
//! right now?". `Keyboard` turns the former into the latter.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Keys the game can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
}

/// Current pressed/released state of the keyboard
pub trait KeyState {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Map a winit physical key to a game key
pub fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),
        _ => None,
    }
}

/// Set of keys currently held down
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    pressed: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Apply a raw winit key event
    pub fn handle_key(&mut self, key_code: KeyCode, state: ElementState) {
        if let Some(key) = map_key(key_code) {
            match state {
                ElementState::Pressed => self.key_down(key),
                ElementState::Released => self.key_up(key),
            }
        }
    }

    /// Forget every held key (focus lost: release events will not arrive)
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }
}

impl KeyState for Keyboard {
    fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::ArrowLeft, ElementState::Pressed);
        keyboard.handle_key(KeyCode::ArrowUp, ElementState::Pressed);
        assert!(keyboard.is_pressed(Key::Left));
        assert!(keyboard.is_pressed(Key::Up));

        keyboard.handle_key(KeyCode::ArrowLeft, ElementState::Released);
        assert!(!keyboard.is_pressed(Key::Left));
        assert!(keyboard.is_pressed(Key::Up));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::Escape, ElementState::Pressed);
        assert!(keyboard.pressed.is_empty());
    }

    #[test]
    fn test_release_all() {
        let mut keyboard = Keyboard::new();
        keyboard.key_down(Key::Right);
        keyboard.key_down(Key::Down);
        keyboard.release_all();
        assert!(!keyboard.is_pressed(Key::Right));
        assert!(!keyboard.is_pressed(Key::Down));
    }
}
