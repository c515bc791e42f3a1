//! The slice of OpenGL the renderer needs.
//!
//! Buffer and shader handling only talk to this trait, so they can run
//! against a recording fake in tests. `glow::Context` is the real backend.

use std::fmt;

use glam::{Mat4, Vec2};
use glow::HasContext;

/// Buffer binding point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    Vertex,
    Index,
}

/// Programmable pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

pub trait GlBackend {
    type Buffer: Copy + fmt::Debug;
    type VertexArray: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;
    type Shader: Copy + fmt::Debug;
    type UniformLocation: fmt::Debug;

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);
    /// Allocate `size` bytes of static storage for the bound buffer
    fn allocate_buffer(&self, target: BufferTarget, size: usize);
    fn upload_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]);
    /// Attribute `index` reads `components` tightly packed floats per vertex
    fn enable_float_attribute(&self, index: u32, components: i32);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    /// Compile `source` into `shader`, returning the info log on failure
    fn compile_shader(&self, shader: Self::Shader, source: &str) -> Result<(), String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program) -> Result<(), String>;
    fn validate_program(&self, program: Self::Program) -> Result<(), String>;
    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn use_program(&self, program: Option<Self::Program>);

    fn viewport(&self, width: i32, height: i32);
    fn clear(&self, color: [f32; 4]);
    fn set_uniform_vec2(&self, location: Option<&Self::UniformLocation>, value: Vec2);
    fn set_uniform_mat4(&self, location: Option<&Self::UniformLocation>, value: &Mat4);
    /// Draw `count` u32 indices starting `offset` bytes into the bound index buffer
    fn draw_triangles(&self, count: usize, offset: usize);
}

fn gl_target(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Vertex => glow::ARRAY_BUFFER,
        BufferTarget::Index => glow::ELEMENT_ARRAY_BUFFER,
    }
}

// All calls below happen on the thread owning the current context.
impl GlBackend for glow::Context {
    type Buffer = <glow::Context as HasContext>::Buffer;
    type VertexArray = <glow::Context as HasContext>::VertexArray;
    type Program = <glow::Context as HasContext>::Program;
    type Shader = <glow::Context as HasContext>::Shader;
    type UniformLocation = <glow::Context as HasContext>::UniformLocation;

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, gl_target(target), buffer) }
    }

    fn allocate_buffer(&self, target: BufferTarget, size: usize) {
        unsafe {
            HasContext::buffer_data_size(self, gl_target(target), size as i32, glow::STATIC_DRAW)
        }
    }

    fn upload_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]) {
        unsafe { HasContext::buffer_sub_data_u8_slice(self, gl_target(target), offset as i32, data) }
    }

    fn enable_float_attribute(&self, index: u32, components: i32) {
        let stride = components * std::mem::size_of::<f32>() as i32;
        unsafe {
            HasContext::vertex_attrib_pointer_f32(self, index, components, glow::FLOAT, false, stride, 0);
            HasContext::enable_vertex_attrib_array(self, index);
        }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        let kind = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe { HasContext::create_shader(self, kind) }
    }

    fn compile_shader(&self, shader: Self::Shader, source: &str) -> Result<(), String> {
        unsafe {
            HasContext::shader_source(self, shader, source);
            HasContext::compile_shader(self, shader);
            if HasContext::get_shader_compile_status(self, shader) {
                Ok(())
            } else {
                Err(HasContext::get_shader_info_log(self, shader))
            }
        }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) -> Result<(), String> {
        unsafe {
            HasContext::link_program(self, program);
            if HasContext::get_program_link_status(self, program) {
                Ok(())
            } else {
                Err(HasContext::get_program_info_log(self, program))
            }
        }
    }

    fn validate_program(&self, program: Self::Program) -> Result<(), String> {
        unsafe {
            HasContext::validate_program(self, program);
            if HasContext::get_program_validate_status(self, program) {
                Ok(())
            } else {
                Err(HasContext::get_program_info_log(self, program))
            }
        }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { HasContext::get_uniform_location(self, program, name) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn viewport(&self, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, 0, 0, width, height) }
    }

    fn clear(&self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe {
            HasContext::clear_color(self, r, g, b, a);
            HasContext::clear(self, glow::COLOR_BUFFER_BIT);
        }
    }

    fn set_uniform_vec2(&self, location: Option<&Self::UniformLocation>, value: Vec2) {
        unsafe { HasContext::uniform_2_f32(self, location, value.x, value.y) }
    }

    fn set_uniform_mat4(&self, location: Option<&Self::UniformLocation>, value: &Mat4) {
        unsafe {
            HasContext::uniform_matrix_4_f32_slice(self, location, false, &value.to_cols_array())
        }
    }

    fn draw_triangles(&self, count: usize, offset: usize) {
        unsafe {
            HasContext::draw_elements(
                self,
                glow::TRIANGLES,
                count as i32,
                glow::UNSIGNED_INT,
                offset as i32,
            )
        }
    }
}
