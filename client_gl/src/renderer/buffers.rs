use std::mem::size_of;

use super::backend::{BufferTarget, GlBackend};
use super::RendererError;

/// Floats per vertex (x, y)
const POSITION_COMPONENTS: i32 = 2;

struct BufferIds<G: GlBackend> {
    vao: G::VertexArray,
    vbo: G::Buffer,
    ibo: G::Buffer,
}

/// Packs the geometry of every primitive into one vertex buffer and one index
/// buffer, uploaded once.
///
/// Primitives keep the order they were added in; the recorded per-primitive
/// sizes give each one's byte offset inside the GPU buffers.
pub struct BufferHandler<G: GlBackend> {
    vertices: Vec<f32>,
    vertex_sizes: Vec<usize>,
    indices: Vec<u32>,
    index_sizes: Vec<usize>,
    ids: Option<BufferIds<G>>,
}

impl<G: GlBackend> Default for BufferHandler<G> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_sizes: Vec::new(),
            indices: Vec::new(),
            index_sizes: Vec::new(),
            ids: None,
        }
    }
}

impl<G: GlBackend> BufferHandler<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_buffers(&mut self, gl: &G) -> Result<(), RendererError> {
        let vao = gl
            .create_vertex_array()
            .map_err(|reason| RendererError::Create {
                what: "vertex array",
                reason,
            })?;
        let ibo = gl.create_buffer().map_err(|reason| RendererError::Create {
            what: "index buffer",
            reason,
        })?;
        let vbo = gl.create_buffer().map_err(|reason| RendererError::Create {
            what: "vertex buffer",
            reason,
        })?;

        log::debug!("generated buffers vao={vao:?} vbo={vbo:?} ibo={ibo:?}");
        self.ids = Some(BufferIds { vao, vbo, ibo });
        Ok(())
    }

    pub fn add_vertex_data(&mut self, vertices: &[f32]) {
        self.vertices.extend_from_slice(vertices);
        self.vertex_sizes.push(vertices.len());
    }

    pub fn add_index_data(&mut self, indices: &[u32]) {
        self.indices.extend_from_slice(indices);
        self.index_sizes.push(indices.len());
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Byte offset and contents of every primitive's vertex range
    pub fn vertex_ranges(&self) -> Vec<(usize, &[f32])> {
        sub_ranges(&self.vertices, &self.vertex_sizes)
    }

    /// Byte offset and contents of every primitive's index range
    pub fn index_ranges(&self) -> Vec<(usize, &[u32])> {
        sub_ranges(&self.indices, &self.index_sizes)
    }

    pub fn load_data_to_gpu(&self, gl: &G) -> Result<(), RendererError> {
        let ids = self.ids.as_ref().ok_or(RendererError::BuffersNotGenerated)?;

        gl.bind_vertex_array(Some(ids.vao));

        gl.bind_buffer(BufferTarget::Vertex, Some(ids.vbo));
        gl.allocate_buffer(BufferTarget::Vertex, self.vertices.len() * size_of::<f32>());
        for (offset, data) in self.vertex_ranges() {
            gl.upload_sub_data(BufferTarget::Vertex, offset, bytemuck::cast_slice(data));
        }
        gl.enable_float_attribute(0, POSITION_COMPONENTS);

        gl.bind_buffer(BufferTarget::Index, Some(ids.ibo));
        gl.allocate_buffer(BufferTarget::Index, self.indices.len() * size_of::<u32>());
        for (offset, data) in self.index_ranges() {
            gl.upload_sub_data(BufferTarget::Index, offset, bytemuck::cast_slice(data));
        }

        gl.bind_vertex_array(None);
        gl.bind_buffer(BufferTarget::Index, None);
        gl.bind_buffer(BufferTarget::Vertex, None);

        log::info!(
            "uploaded {} primitives ({} floats, {} indices)",
            self.vertex_sizes.len(),
            self.vertices.len(),
            self.indices.len()
        );
        Ok(())
    }

    pub fn bind_index_buffer(&self, gl: &G) {
        if let Some(ids) = &self.ids {
            gl.bind_vertex_array(Some(ids.vao));
            gl.bind_buffer(BufferTarget::Index, Some(ids.ibo));
        }
    }

    pub fn unbind_index_buffer(&self, gl: &G) {
        gl.bind_buffer(BufferTarget::Index, None);
        gl.bind_vertex_array(None);
    }
}

fn sub_ranges<'a, T>(data: &'a [T], sizes: &[usize]) -> Vec<(usize, &'a [T])> {
    debug_assert_eq!(sizes.iter().sum::<usize>(), data.len());

    let mut start = 0;
    sizes
        .iter()
        .map(|&len| {
            let range = (start * size_of::<T>(), &data[start..start + len]);
            start += len;
            range
        })
        .collect()
}
