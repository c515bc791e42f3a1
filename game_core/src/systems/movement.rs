use crate::{FrameTime, Rect2D};
use hecs::World;

/// Integrate every rectangle's position by its velocity
pub fn move_bodies(world: &mut World, time: &FrameTime) {
    for (_entity, rect) in world.query_mut::<&mut Rect2D>() {
        rect.position += rect.speed * time.delta_time;
    }
}
