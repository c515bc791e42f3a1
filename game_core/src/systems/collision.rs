use crate::{Arena, Ball, Config, Paddle, Rect2D, Side};
use glam::Vec2;
use hecs::World;

/// Vertical line in front of a paddle that the ball centre must cross to hit it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPlane {
    pub x: f32,
    pub lower: f32,
    pub upper: f32,
}

impl CollisionPlane {
    /// Plane sits half a paddle plus half a ball away from the paddle centre,
    /// on the side facing the court.
    pub fn for_paddle(paddle: &Rect2D, side: Side, ball: &Rect2D) -> Self {
        let reach = paddle.half_width() + ball.half_width();
        let x = match side {
            Side::Left => paddle.position.x + reach,
            Side::Right => paddle.position.x - reach,
        };

        Self {
            x,
            lower: paddle.position.y - paddle.half_height(),
            upper: paddle.position.y + paddle.half_height(),
        }
    }

    pub fn is_hit(&self, side: Side, ball: Vec2) -> bool {
        let crossed = match side {
            Side::Left => ball.x <= self.x,
            Side::Right => ball.x >= self.x,
        };
        crossed && ball.y >= self.lower && ball.y <= self.upper
    }

    /// Closest x on the court side of the plane
    fn snap_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.x.next_up(),
            Side::Right => self.x.next_down(),
        }
    }
}

/// Ball velocity after a paddle hit.
///
/// `offset` is ball y minus paddle y. The reflect speed is rotated by an angle
/// linear in the offset, reaching the maximum deflection at the paddle edge.
/// Hits above the centre always leave upward, whichever paddle was hit.
pub fn deflect(side: Side, offset: f32, paddle_height: f32, config: &Config) -> Vec2 {
    let angle_deg = 2.0 * config.ball_max_deflection_deg / paddle_height * offset;
    let angle = angle_deg.to_radians();
    let speed = config.ball_speed_reflect;

    match side {
        Side::Left => Vec2::from_angle(angle).rotate(Vec2::new(speed, 0.0)),
        Side::Right => Vec2::from_angle(-angle).rotate(Vec2::new(-speed, 0.0)),
    }
}

/// Bounce the ball off either paddle
pub fn check_paddle_collisions(world: &mut World, config: &Config) {
    // Copy paddles out first so the ball can be borrowed mutably
    let mut paddles: Vec<(Side, Rect2D)> = world
        .query::<(&Rect2D, &Paddle)>()
        .iter()
        .map(|(_e, (rect, paddle))| (paddle.side, *rect))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, (ball, _)) in world.query_mut::<(&mut Rect2D, &Ball)>() {
        for (side, paddle) in &paddles {
            let plane = CollisionPlane::for_paddle(paddle, *side, ball);
            if !plane.is_hit(*side, ball.position) {
                continue;
            }

            ball.position.x = plane.snap_x(*side);
            let offset = ball.position.y - paddle.position.y;
            ball.speed = deflect(*side, offset, paddle.height, config);

            log::debug!(
                "ball hit {:?} paddle at offset {:.3}, new speed {:?}",
                side,
                offset,
                ball.speed
            );
        }
    }
}

/// Bounce the ball off the top and bottom of the arena
pub fn check_wall_collisions(world: &mut World, arena: &Arena) {
    for (_entity, (ball, _)) in world.query_mut::<(&mut Rect2D, &Ball)>() {
        let top = arena.top_limit(ball);
        if ball.position.y >= top {
            ball.position.y = top.next_down();
            ball.speed.y = -ball.speed.y;
        }

        let bottom = arena.bottom_limit(ball);
        if ball.position.y <= bottom {
            ball.position.y = bottom.next_up();
            ball.speed.y = -ball.speed.y;
        }
    }
}
