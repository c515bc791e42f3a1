use hecs::World;

use crate::{Config, Paddle, Rect2D, Side};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::W, Key::S, Key::Up, Key::Down];

    fn slot(self) -> usize {
        self as usize
    }
}

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}

/// Persistent pressed/released table for the game keys
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    pressed: [bool; Key::ALL.len()],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, key: Key, action: KeyAction) {
        match action {
            KeyAction::Press => self.pressed[key.slot()] = true,
            KeyAction::Release => self.pressed[key.slot()] = false,
            KeyAction::Repeat => {}
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.slot()]
    }

    /// Vertical direction requested for a paddle: 1 = up, -1 = down, 0 = hold.
    /// Both keys held cancel out.
    pub fn paddle_dir(&self, side: Side) -> f32 {
        let (up, down) = match side {
            Side::Left => (Key::W, Key::S),
            Side::Right => (Key::Up, Key::Down),
        };

        match (self.is_pressed(up), self.is_pressed(down)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

/// Set paddle vertical velocity from the current key state
pub fn apply_paddle_input(world: &mut World, keys: &KeyState, config: &Config) {
    for (_entity, (rect, paddle)) in world.query_mut::<(&mut Rect2D, &Paddle)>() {
        rect.speed.y = keys.paddle_dir(paddle.side) * config.paddle_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyState::new();
        keys.apply(Key::W, KeyAction::Press);
        assert!(keys.is_pressed(Key::W));
        keys.apply(Key::W, KeyAction::Repeat);
        assert!(keys.is_pressed(Key::W), "Repeat should not change state");
        keys.apply(Key::W, KeyAction::Release);
        assert!(!keys.is_pressed(Key::W));
    }

    #[test]
    fn test_paddle_dir_combinations() {
        let mut keys = KeyState::new();
        assert_eq!(keys.paddle_dir(Side::Left), 0.0);

        keys.apply(Key::W, KeyAction::Press);
        assert_eq!(keys.paddle_dir(Side::Left), 1.0);

        keys.apply(Key::S, KeyAction::Press);
        assert_eq!(keys.paddle_dir(Side::Left), 0.0, "Both keys cancel out");

        keys.apply(Key::W, KeyAction::Release);
        assert_eq!(keys.paddle_dir(Side::Left), -1.0);
        assert_eq!(
            keys.paddle_dir(Side::Right),
            0.0,
            "Player 1 keys must not move player 2"
        );
    }

    #[test]
    fn test_apply_paddle_input_sets_speed() {
        let mut world = World::new();
        let config = Config::new();
        let left = create_paddle(&mut world, Side::Left, &config);
        let right = create_paddle(&mut world, Side::Right, &config);

        let mut keys = KeyState::new();
        keys.apply(Key::Down, KeyAction::Press);
        apply_paddle_input(&mut world, &keys, &config);

        assert_eq!(world.get::<&Rect2D>(left).unwrap().speed.y, 0.0);
        assert_eq!(
            world.get::<&Rect2D>(right).unwrap().speed.y,
            -config.paddle_speed
        );
    }
}
