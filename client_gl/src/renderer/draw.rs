use std::mem::size_of;

use game_core::{Game, Rect2D};

use super::backend::GlBackend;
use super::{Renderer, RendererError};

const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Draw every primitive in the game's fixed order.
///
/// Primitives share one index buffer; each draw starts where the previous
/// one's indices ended.
pub fn draw_frame<G: GlBackend>(renderer: &Renderer<G>, game: &Game) -> Result<(), RendererError> {
    let gl = &renderer.gl;

    gl.clear(CLEAR_COLOR);
    renderer.shaders.enable_shaders(gl);
    renderer.buffers.bind_index_buffer(gl);

    let offset = renderer.shaders.uniform_location(gl, "offset");
    let view_projection = renderer.shaders.uniform_location(gl, "view_projection");
    gl.set_uniform_mat4(view_projection.as_ref(), &renderer.view_projection);

    let mut first_index = 0;
    for entity in game.draw_order() {
        let rect = game.world.get::<&Rect2D>(entity)?;
        gl.set_uniform_vec2(offset.as_ref(), rect.position);
        gl.draw_triangles(rect.num_indices(), first_index * size_of::<u32>());
        first_index += rect.num_indices();
    }

    renderer.buffers.unbind_index_buffer(gl);
    renderer.shaders.disable_shaders(gl);
    Ok(())
}
