use glam::Vec2;

/// Number of floats in a quad's vertex array (4 corners, x/y each)
pub const QUAD_VERTEX_FLOATS: usize = 8;
/// Number of indices in a quad's index array (2 triangles)
pub const QUAD_INDICES: usize = 6;
/// Number of corners in a quad
pub const QUAD_CORNERS: u32 = 4;

const UNIT_QUAD: [f32; QUAD_VERTEX_FLOATS] = [
    -0.5, -0.5, //
    0.5, -0.5, //
    0.5, 0.5, //
    -0.5, 0.5, //
];

const QUAD_ORDER: [u32; QUAD_INDICES] = [0, 1, 3, 1, 2, 3];

/// Which half of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

/// Axis-aligned quad primitive shared by paddles, the ball and the divider lines.
///
/// The vertex array is the unit quad scaled by `width`/`height`; it is drawn
/// with a per-primitive `position` offset, so moving a rectangle never touches
/// its geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2D {
    pub width: f32,
    pub height: f32,
    pub position: Vec2,
    pub speed: Vec2,
    vertices: [f32; QUAD_VERTEX_FLOATS],
    indices: [u32; QUAD_INDICES],
}

impl Rect2D {
    pub fn new(width: f32, height: f32, position: Vec2) -> Self {
        let mut vertices = UNIT_QUAD;
        for corner in vertices.chunks_exact_mut(2) {
            corner[0] *= width;
            corner[1] *= height;
        }

        Self {
            width,
            height,
            position,
            speed: Vec2::ZERO,
            vertices,
            indices: QUAD_ORDER,
        }
    }

    pub fn with_speed(mut self, speed: Vec2) -> Self {
        self.speed = speed;
        self
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Shift the index array so it addresses this quad's corners inside a
    /// shared vertex buffer, where `slot` quads were loaded before it.
    pub fn offset_indices(&mut self, slot: u32) {
        for index in &mut self.indices {
            *index += slot * QUAD_CORNERS;
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }
}

/// Paddle marker - one per player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// Ball marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Ball;

/// Center line segment, static scenery
#[derive(Debug, Clone, Copy, Default)]
pub struct Divider;
