use glam::Vec2;

use crate::{Config, Params, Rect2D};

/// Projection plane - the orthographic view volume the game is played in.
///
/// The same bounds drive the camera, the wall bounces and the
/// off-screen checks after a point has been scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub up: f32,
    pub down: f32,
    pub left: f32,
    pub right: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            up: Params::PROJ_UP,
            down: Params::PROJ_DOWN,
            left: Params::PROJ_LEFT,
            right: Params::PROJ_RIGHT,
            near: Params::PROJ_NEAR,
            far: Params::PROJ_FAR,
        }
    }
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest centre y a rectangle may have before touching the top wall
    pub fn top_limit(&self, rect: &Rect2D) -> f32 {
        self.up - rect.half_height()
    }

    /// Lowest centre y a rectangle may have before touching the bottom wall
    pub fn bottom_limit(&self, rect: &Rect2D) -> f32 {
        self.down + rect.half_height()
    }

    /// Rectangle has fully left through the left edge
    pub fn is_past_left(&self, rect: &Rect2D) -> bool {
        rect.position.x + rect.half_width() <= self.left
    }

    /// Rectangle has fully left through the right edge
    pub fn is_past_right(&self, rect: &Rect2D) -> bool {
        rect.position.x - rect.half_width() >= self.right
    }

    /// Dashed centre line, top to bottom
    pub fn divider_lines(&self, config: &Config) -> Vec<Rect2D> {
        let height = config.lines_height;
        let step = height + config.lines_gap;
        let first_y = self.up - height / 2.0;

        (0..config.num_lines)
            .map(|i| {
                let y = first_y - step * i as f32;
                Rect2D::new(config.lines_width, height, Vec2::new(0.0, y))
            })
            .collect()
    }
}
