//! Recording GL backend for tests

use std::cell::{Cell, RefCell};

use glam::{Mat4, Vec2};

use super::backend::{BufferTarget, GlBackend, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    BindVertexArray(Option<u32>),
    BindBuffer(BufferTarget, Option<u32>),
    Allocate(BufferTarget, usize),
    SubData {
        target: BufferTarget,
        offset: usize,
        len: usize,
    },
    EnableAttribute(u32, i32),
    CompileShader(ShaderStage),
    AttachShader(u32, u32),
    LinkProgram(u32),
    ValidateProgram(u32),
    UseProgram(Option<u32>),
    Viewport(i32, i32),
    Clear,
    UniformVec2(String, Vec2),
    UniformMat4(String),
    DrawTriangles { count: usize, offset: usize },
}

#[derive(Default)]
pub struct RecordingGl {
    pub calls: RefCell<Vec<Call>>,
    pub fail_compile: Option<ShaderStage>,
    pub fail_link: bool,
    pub fail_validate: bool,
    next_id: Cell<u32>,
    shader_stages: RefCell<Vec<(u32, ShaderStage)>>,
    uploads: RefCell<Vec<(BufferTarget, usize, Vec<u8>)>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Bytes written to `target`, reassembled at their offsets
    pub fn uploaded(&self, target: BufferTarget) -> Vec<u8> {
        let mut out = Vec::new();
        for (t, offset, data) in self.uploads.borrow().iter() {
            if *t != target {
                continue;
            }
            if out.len() < offset + data.len() {
                out.resize(offset + data.len(), 0);
            }
            out[*offset..offset + data.len()].copy_from_slice(data);
        }
        out
    }

    pub fn draws(&self) -> Vec<(usize, usize)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::DrawTriangles { count, offset } => Some((*count, *offset)),
                _ => None,
            })
            .collect()
    }
}

// Uniform locations are just the names
impl GlBackend for RecordingGl {
    type Buffer = u32;
    type VertexArray = u32;
    type Program = u32;
    type Shader = u32;
    type UniformLocation = String;

    fn create_buffer(&self) -> Result<u32, String> {
        Ok(self.next())
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        Ok(self.next())
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn allocate_buffer(&self, target: BufferTarget, size: usize) {
        self.record(Call::Allocate(target, size));
    }

    fn upload_sub_data(&self, target: BufferTarget, offset: usize, data: &[u8]) {
        self.record(Call::SubData {
            target,
            offset,
            len: data.len(),
        });
        self.uploads
            .borrow_mut()
            .push((target, offset, data.to_vec()));
    }

    fn enable_float_attribute(&self, index: u32, components: i32) {
        self.record(Call::EnableAttribute(index, components));
    }

    fn create_program(&self) -> Result<u32, String> {
        Ok(self.next())
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.next();
        self.shader_stages.borrow_mut().push((id, stage));
        Ok(id)
    }

    fn compile_shader(&self, shader: u32, _source: &str) -> Result<(), String> {
        let stage = self
            .shader_stages
            .borrow()
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, stage)| *stage)
            .ok_or_else(|| format!("unknown shader {shader}"))?;
        self.record(Call::CompileShader(stage));

        if self.fail_compile == Some(stage) {
            Err("0:1(1): error: syntax error".to_string())
        } else {
            Ok(())
        }
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) -> Result<(), String> {
        self.record(Call::LinkProgram(program));
        if self.fail_link || self.fail_compile.is_some() {
            Err("error: linking with uncompiled shader".to_string())
        } else {
            Ok(())
        }
    }

    fn validate_program(&self, program: u32) -> Result<(), String> {
        self.record(Call::ValidateProgram(program));
        if self.fail_validate {
            Err("validation failed".to_string())
        } else {
            Ok(())
        }
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        Some(name.to_string())
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear(&self, _color: [f32; 4]) {
        self.record(Call::Clear);
    }

    fn set_uniform_vec2(&self, location: Option<&String>, value: Vec2) {
        self.record(Call::UniformVec2(location.cloned().unwrap_or_default(), value));
    }

    fn set_uniform_mat4(&self, location: Option<&String>, _value: &Mat4) {
        self.record(Call::UniformMat4(location.cloned().unwrap_or_default()));
    }

    fn draw_triangles(&self, count: usize, offset: usize) {
        self.record(Call::DrawTriangles { count, offset });
    }
}
