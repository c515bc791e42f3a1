use crate::{Arena, Ball, Config, Paddle, Rect2D, RoundState, Score, Side};
use hecs::World;

/// x the ball has to pass behind a paddle before the point is decided.
/// The ball may partly travel through the paddle before it counts.
pub fn pass_through_x(paddle: &Rect2D, side: Side, config: &Config) -> f32 {
    let limit = paddle.width * config.ball_pass_through_limit;
    match side {
        Side::Left => paddle.position.x - limit,
        Side::Right => paddle.position.x + limit,
    }
}

/// Award the point once the ball got past a paddle
pub fn check_scoring(world: &World, round: &mut RoundState, score: &mut Score, config: &Config) {
    let Some(ball_x) = world
        .query::<(&Rect2D, &Ball)>()
        .iter()
        .next()
        .map(|(_e, (rect, _))| rect.position.x)
    else {
        return;
    };

    let mut paddles: Vec<(Side, Rect2D)> = world
        .query::<(&Rect2D, &Paddle)>()
        .iter()
        .map(|(_e, (rect, paddle))| (paddle.side, *rect))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (side, paddle) in &paddles {
        let limit = pass_through_x(paddle, *side, config);
        match side {
            Side::Left if ball_x <= limit => {
                round.p2_scored = true;
                score.increment_right();
            }
            Side::Right if ball_x >= limit => {
                round.p1_scored = true;
                score.increment_left();
            }
            _ => continue,
        }

        log::info!(
            "point to player {} (score {} - {})",
            if round.p1_scored { 1 } else { 2 },
            score.left,
            score.right
        );
        return;
    }
}

/// After a point, wait for the ball to leave the screen on the losing side
pub fn check_ball_exit(world: &World, round: &mut RoundState, arena: &Arena) {
    if round.in_play() || round.ball_out_of_bounds {
        return;
    }

    let gone = world
        .query::<(&Rect2D, &Ball)>()
        .iter()
        .any(|(_e, (rect, _))| {
            if round.p2_scored {
                arena.is_past_left(rect)
            } else {
                arena.is_past_right(rect)
            }
        });

    if gone {
        round.ball_out_of_bounds = true;
        round.should_reset_ball = true;
    }
}
