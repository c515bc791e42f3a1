//! Simulation half of the game context

use hecs::{Entity, World};

use crate::systems::*;
use crate::{
    create_ball, create_divider, create_paddle, Arena, Clock, Config, FrameTime, Rect2D,
    RoundState, Score, Side,
};

/// All game objects plus the per-frame state the loop mutates
pub struct Game {
    pub world: World,
    pub config: Config,
    pub arena: Arena,
    pub time: FrameTime,
    pub keys: KeyState,
    pub round: RoundState,
    pub score: Score,
    pub player_1: Entity,
    pub player_2: Entity,
    pub ball: Entity,
    pub lines: Vec<Entity>,
}

impl Game {
    pub fn new(config: Config) -> Self {
        let arena = Arena::new();
        let mut world = World::new();

        let player_1 = create_paddle(&mut world, Side::Left, &config);
        let player_2 = create_paddle(&mut world, Side::Right, &config);
        let ball = create_ball(&mut world, &config);
        let lines = arena
            .divider_lines(&config)
            .into_iter()
            .map(|rect| create_divider(&mut world, rect))
            .collect();

        Self {
            world,
            config,
            arena,
            time: FrameTime::default(),
            keys: KeyState::new(),
            round: RoundState::new(),
            score: Score::new(),
            player_1,
            player_2,
            ball,
            lines,
        }
    }

    /// Set the frame-time baseline right before the first frame
    pub fn start(&mut self, clock: &impl Clock) {
        self.time = FrameTime::new(clock.now());
    }

    /// Fixed draw order: paddle 1, paddle 2, ball, divider lines
    pub fn draw_order(&self) -> impl Iterator<Item = Entity> + '_ {
        [self.player_1, self.player_2, self.ball]
            .into_iter()
            .chain(self.lines.iter().copied())
    }

    pub fn rect(&self, entity: Entity) -> Option<Rect2D> {
        self.world.get::<&Rect2D>(entity).ok().map(|rect| *rect)
    }

    /// Update the key table and re-derive both paddle speeds
    pub fn handle_key(&mut self, key: Key, action: KeyAction) {
        self.keys.apply(key, action);
        apply_paddle_input(&mut self.world, &self.keys, &self.config);
    }

    /// Advance one frame: measure elapsed time, then run the simulation
    pub fn step(&mut self, clock: &mut impl Clock) {
        self.time.tick(clock.now());

        move_bodies(&mut self.world, &self.time);

        if self.round.in_play() {
            check_paddle_collisions(&mut self.world, &self.config);
            check_scoring(&self.world, &mut self.round, &mut self.score, &self.config);
        } else {
            check_ball_exit(&self.world, &mut self.round, &self.arena);
        }

        if self.round.should_reset_ball {
            self.reset_ball(clock);
        }

        check_wall_collisions(&mut self.world, &self.arena);
    }

    /// Re-serve the ball after a real-time pause that is kept out of the next delta
    pub fn reset_ball(&mut self, clock: &mut impl Clock) {
        respawn_ball(&mut self.world, &mut self.round, &self.config);

        let pause = self.config.respawn_pause;
        log::info!("ball reset, resuming in {:.1}s", pause.as_secs_f32());
        clock.pause(pause);
        self.time.skip(pause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(Config::new());

        assert_eq!(game.lines.len(), game.config.num_lines);
        assert_eq!(game.draw_order().count(), 3 + game.config.num_lines);

        let order: Vec<Entity> = game.draw_order().take(3).collect();
        assert_eq!(order, vec![game.player_1, game.player_2, game.ball]);

        let ball = game.rect(game.ball).unwrap();
        assert_eq!(ball.position, Vec2::new(0.0, 0.5));
        assert_eq!(ball.speed, Vec2::new(1.5, 0.0));
    }

    #[test]
    fn test_handle_key_moves_paddle() {
        let mut game = Game::new(Config::new());

        game.handle_key(Key::W, KeyAction::Press);
        assert_eq!(game.rect(game.player_1).unwrap().speed.y, 2.5);

        game.handle_key(Key::S, KeyAction::Press);
        assert_eq!(game.rect(game.player_1).unwrap().speed.y, 0.0);

        game.handle_key(Key::W, KeyAction::Release);
        assert_eq!(game.rect(game.player_1).unwrap().speed.y, -2.5);
    }
}
