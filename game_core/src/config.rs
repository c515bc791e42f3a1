use std::time::Duration;

use glam::Vec2;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub player_1_spawn: Vec2,
    pub player_2_spawn: Vec2,
    pub ball_width: f32,
    pub ball_height: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_reflect: f32,
    pub ball_spawn: Vec2,
    pub ball_max_deflection_deg: f32,
    pub ball_pass_through_limit: f32,
    pub respawn_pause: Duration,
    pub lines_width: f32,
    pub lines_height: f32,
    pub lines_gap: f32,
    pub num_lines: usize,
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            player_1_spawn: Vec2::from_array(Params::PLAYER_1_POS_INITIAL),
            player_2_spawn: Vec2::from_array(Params::PLAYER_2_POS_INITIAL),
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_reflect: Params::BALL_SPEED_REFLECT,
            ball_spawn: Vec2::from_array(Params::BALL_POS_INITIAL),
            ball_max_deflection_deg: Params::BALL_MAX_DEFLECTION_DEG,
            ball_pass_through_limit: Params::BALL_PASS_THROUGH_LIMIT,
            respawn_pause: Duration::from_secs(Params::RESPAWN_PAUSE_SECS),
            lines_width: Params::LINES_WIDTH,
            lines_height: Params::LINES_HEIGHT,
            lines_gap: Params::LINES_GAP,
            num_lines: Params::NUM_LINES,
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            window_title: Params::WINDOW_TITLE.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn position of the paddle defending `side`
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => self.player_1_spawn,
            Side::Right => self.player_2_spawn,
        }
    }

    /// Velocity the ball is served with after a reset
    pub fn ball_serve_speed(&self) -> Vec2 {
        Vec2::new(self.ball_speed_initial, 0.0)
    }
}
