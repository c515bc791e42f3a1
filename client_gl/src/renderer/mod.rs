pub mod backend;
pub mod buffers;
pub mod draw;
pub mod init;
pub mod shaders;

#[cfg(test)]
mod mock;

use game_core::{Game, Rect2D};
use glam::Mat4;
use thiserror::Error;

use crate::camera;
pub use backend::{BufferTarget, GlBackend, ShaderStage};
use buffers::BufferHandler;
pub use shaders::{ShaderError, ShaderHandler, ShaderState};

#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to create {what}: {reason}")]
    Create { what: &'static str, reason: String },
    #[error("GPU buffers have not been generated")]
    BuffersNotGenerated,
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error("primitive missing from the world: {0}")]
    MissingPrimitive(#[from] hecs::ComponentError),
}

/// GPU half of the game context: geometry, shader program and projection
pub struct Renderer<G: GlBackend> {
    gl: G,
    buffers: BufferHandler<G>,
    shaders: ShaderHandler<G>,
    view_projection: Mat4,
}

impl<G: GlBackend> Renderer<G> {
    /// Upload every primitive of `game` and build the shader program
    pub fn new(gl: G, game: &Game) -> Result<Self, RendererError> {
        let mut buffers = BufferHandler::new();
        buffers.generate_buffers(&gl)?;

        for (slot, entity) in game.draw_order().enumerate() {
            let mut rect = *game.world.get::<&Rect2D>(entity)?;
            rect.offset_indices(slot as u32);
            buffers.add_vertex_data(rect.vertices());
            buffers.add_index_data(rect.indices());
        }
        buffers.load_data_to_gpu(&gl)?;

        let shaders = ShaderHandler::build(
            &gl,
            &[
                (ShaderStage::Vertex, shaders::VERTEX_SHADER),
                (ShaderStage::Fragment, shaders::FRAGMENT_SHADER),
            ],
        )?;

        Ok(Self {
            gl,
            buffers,
            shaders,
            view_projection: camera::view_projection(&game.arena),
        })
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    pub fn view_projection(&self) -> Mat4 {
        self.view_projection
    }

    pub fn resize(&self, width: u32, height: u32) {
        log::debug!("viewport {width}x{height}");
        self.gl.viewport(width as i32, height as i32);
    }

    pub fn draw(&self, game: &Game) -> Result<(), RendererError> {
        draw::draw_frame(self, game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::mock::{Call, RecordingGl};
    use game_core::Config;

    #[test]
    fn test_primitives_uploaded_in_draw_order() {
        let game = Game::new(Config::new());
        let renderer = Renderer::new(RecordingGl::new(), &game).unwrap();
        let gl = renderer.gl();

        let primitives = 3 + game.config.num_lines;
        let vertices = gl.uploaded(BufferTarget::Vertex);
        assert_eq!(vertices.len(), primitives * 8 * 4);

        let index_bytes = gl.uploaded(BufferTarget::Index);
        let indices: &[u32] = bytemuck::cast_slice(&index_bytes);
        assert_eq!(indices.len(), primitives * 6);
        assert_eq!(&indices[..6], &[0, 1, 3, 1, 2, 3]);
        assert_eq!(&indices[6..12], &[4, 5, 7, 5, 6, 7]);

        // Paddle 1 first: its unit quad scaled to 0.1 x 0.5
        let first: &[f32] = bytemuck::cast_slice(&vertices[..32]);
        assert_eq!(first, game.rect(game.player_1).unwrap().vertices());
    }

    #[test]
    fn test_indices_in_world_left_untouched() {
        let game = Game::new(Config::new());
        let _renderer = Renderer::new(RecordingGl::new(), &game).unwrap();

        let ball = game.rect(game.ball).unwrap();
        assert_eq!(ball.indices(), &[0, 1, 3, 1, 2, 3]);
    }

    #[test]
    fn test_shader_failure_fails_construction() {
        let mut gl = RecordingGl::new();
        gl.fail_compile = Some(ShaderStage::Vertex);

        let game = Game::new(Config::new());
        let err = Renderer::new(gl, &game).err().unwrap();
        assert!(matches!(
            err,
            RendererError::Shader(ShaderError::Compile {
                stage: ShaderStage::Vertex,
                ..
            })
        ));
    }

    #[test]
    fn test_resize_sets_viewport() {
        let game = Game::new(Config::new());
        let renderer = Renderer::new(RecordingGl::new(), &game).unwrap();
        renderer.gl().clear_calls();

        renderer.resize(1000, 800);
        assert_eq!(renderer.gl().calls(), vec![Call::Viewport(1000, 800)]);
    }
}
