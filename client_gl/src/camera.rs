//! Fixed orthographic camera over the arena

use game_core::Arena;
use glam::{Mat4, Vec3};

/// Camera at `(0, 0, 1)` looking at the origin, +Y up
pub fn view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::Y)
}

/// Orthographic volume matching the arena's projection plane
pub fn projection(arena: &Arena) -> Mat4 {
    Mat4::orthographic_rh_gl(
        arena.left,
        arena.right,
        arena.down,
        arena.up,
        arena.near,
        arena.far,
    )
}

pub fn view_projection(arena: &Arena) -> Mat4 {
    projection(arena) * view()
}
