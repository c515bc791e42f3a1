use crate::{Ball, Config, Rect2D, RoundState};
use hecs::World;

/// Put the ball back on the centre spot and start a fresh round
pub fn respawn_ball(world: &mut World, round: &mut RoundState, config: &Config) {
    for (_entity, (ball, _)) in world.query_mut::<(&mut Rect2D, &Ball)>() {
        ball.position = config.ball_spawn;
        ball.speed = config.ball_serve_speed();
    }
    round.clear();
}
