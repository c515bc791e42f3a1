pub mod arena;
pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use systems::*;

use hecs::World;

/// Helper to create a paddle entity at its spawn position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let rect = Rect2D::new(
        config.paddle_width,
        config.paddle_height,
        config.paddle_spawn(side),
    );
    world.spawn((rect, Paddle::new(side)))
}

/// Helper to create the ball entity, served from the centre spot
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let rect = Rect2D::new(config.ball_width, config.ball_height, config.ball_spawn)
        .with_speed(config.ball_serve_speed());
    world.spawn((rect, Ball))
}

/// Helper to create one divider line segment
pub fn create_divider(world: &mut World, rect: Rect2D) -> hecs::Entity {
    world.spawn((rect, Divider))
}
