//! Keyboard input handling

use game_core::{Key, KeyAction};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a physical key to a game key; anything else is ignored
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        _ => None,
    }
}

pub fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Pressed, false) => KeyAction::Press,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Released, _) => KeyAction::Release,
    }
}

/// Translate a winit key event into a game key transition
pub fn translate(event: &KeyEvent) -> Option<(Key, KeyAction)> {
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    map_key(code).map(|key| (key, key_action(event.state, event.repeat)))
}

pub fn is_escape(event: &KeyEvent) -> bool {
    event.state == ElementState::Pressed && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_keys_mapped() {
        assert_eq!(map_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(map_key(KeyCode::KeyS), Some(Key::S));
        assert_eq!(map_key(KeyCode::ArrowUp), Some(Key::Up));
        assert_eq!(map_key(KeyCode::ArrowDown), Some(Key::Down));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(map_key(KeyCode::KeyA), None);
        assert_eq!(map_key(KeyCode::Space), None);
        assert_eq!(map_key(KeyCode::Escape), None);
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(key_action(ElementState::Pressed, false), KeyAction::Press);
        assert_eq!(key_action(ElementState::Pressed, true), KeyAction::Repeat);
        assert_eq!(key_action(ElementState::Released, false), KeyAction::Release);
    }
}
