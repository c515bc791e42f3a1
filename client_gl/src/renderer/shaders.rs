//! Shader program lifecycle: add, compile, link, validate, use

use thiserror::Error;

use super::backend::{GlBackend, ShaderStage};

/// Adds the per-primitive offset to each vertex, then projects
pub const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 position;

uniform vec2 offset;
uniform mat4 view_projection;

void main() {
    gl_Position = view_projection * vec4(position + offset, 0.0, 1.0);
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 color;

void main() {
    color = vec4(0.7, 0.7, 0.7, 1.0);
}
"#;

/// Where a program is in its lifecycle; only `Validated` is usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShaderState {
    Uncreated,
    ProgramCreated,
    ShadersAdded,
    Compiled,
    Linked,
    Validated,
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to create shader object: {0}")]
    Create(String),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link: {0}")]
    Link(String),
    #[error("shader program failed validation: {0}")]
    Validate(String),
    #[error("shader program is {found:?}, expected {expected:?}")]
    NotReady {
        expected: ShaderState,
        found: ShaderState,
    },
}

/// Per-stage compile outcome, in the order the shaders were added
#[derive(Debug, Default)]
pub struct CompileReport {
    pub stages: Vec<(ShaderStage, Result<(), String>)>,
}

impl CompileReport {
    pub fn all_compiled(&self) -> bool {
        self.stages.iter().all(|(_, result)| result.is_ok())
    }

    /// First failing stage, if any
    pub fn into_result(self) -> Result<(), ShaderError> {
        match self
            .stages
            .into_iter()
            .find_map(|(stage, result)| result.err().map(|log| (stage, log)))
        {
            Some((stage, log)) => Err(ShaderError::Compile { stage, log }),
            None => Ok(()),
        }
    }
}

struct ShaderSource<G: GlBackend> {
    stage: ShaderStage,
    source: String,
    shader: G::Shader,
}

/// Owns one program and the shaders attached to it
pub struct ShaderHandler<G: GlBackend> {
    program: Option<G::Program>,
    shaders: Vec<ShaderSource<G>>,
    state: ShaderState,
}

impl<G: GlBackend> Default for ShaderHandler<G> {
    fn default() -> Self {
        Self {
            program: None,
            shaders: Vec::new(),
            state: ShaderState::Uncreated,
        }
    }
}

impl<G: GlBackend> ShaderHandler<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add, compile, link and validate `sources` into a ready program
    pub fn build(gl: &G, sources: &[(ShaderStage, &str)]) -> Result<Self, ShaderError> {
        let mut handler = Self::new();
        for (stage, source) in sources {
            handler.add(gl, *stage, source)?;
        }

        let report = handler.compile_shaders(gl)?;
        let linked = handler.link_shaders(gl);
        // A compile error explains a failed link better than the link log does
        report.into_result()?;
        linked?;
        handler.validate_shaders(gl)?;

        log::info!("shader program ready ({} stages)", sources.len());
        Ok(handler)
    }

    pub fn state(&self) -> ShaderState {
        self.state
    }

    pub fn add(&mut self, gl: &G, stage: ShaderStage, source: &str) -> Result<(), ShaderError> {
        if self.program.is_none() {
            self.program = Some(gl.create_program().map_err(ShaderError::Create)?);
            self.state = ShaderState::ProgramCreated;
        }

        let shader = gl.create_shader(stage).map_err(ShaderError::Create)?;
        self.shaders.push(ShaderSource {
            stage,
            source: source.to_owned(),
            shader,
        });
        self.state = ShaderState::ShadersAdded;
        Ok(())
    }

    /// Compile and attach every added shader.
    ///
    /// The program moves on to `Compiled` even when a stage fails; the report
    /// carries the per-stage outcome.
    pub fn compile_shaders(&mut self, gl: &G) -> Result<CompileReport, ShaderError> {
        let program = self.require(ShaderState::ShadersAdded)?;

        let mut report = CompileReport::default();
        for entry in &self.shaders {
            let result = gl.compile_shader(entry.shader, &entry.source);
            match &result {
                Ok(()) => log::debug!("compiled {} shader", entry.stage),
                Err(info) => log::error!("{} shader compilation failed: {info}", entry.stage),
            }
            gl.attach_shader(program, entry.shader);
            report.stages.push((entry.stage, result));
        }

        self.state = ShaderState::Compiled;
        Ok(report)
    }

    pub fn link_shaders(&mut self, gl: &G) -> Result<(), ShaderError> {
        let program = self.require(ShaderState::Compiled)?;

        gl.link_program(program).map_err(|info| {
            log::error!("shader program linking failed: {info}");
            ShaderError::Link(info)
        })?;
        self.state = ShaderState::Linked;
        Ok(())
    }

    pub fn validate_shaders(&mut self, gl: &G) -> Result<(), ShaderError> {
        let program = self.require(ShaderState::Linked)?;

        gl.validate_program(program).map_err(|info| {
            log::error!("shader program validation failed: {info}");
            ShaderError::Validate(info)
        })?;
        self.state = ShaderState::Validated;
        Ok(())
    }

    pub fn uniform_location(&self, gl: &G, name: &str) -> Option<G::UniformLocation> {
        let location = gl.uniform_location(self.program?, name);
        if location.is_none() {
            log::warn!("uniform `{name}` not found in shader program");
        }
        location
    }

    pub fn enable_shaders(&self, gl: &G) {
        gl.use_program(self.program);
    }

    pub fn disable_shaders(&self, gl: &G) {
        gl.use_program(None);
    }

    fn require(&self, expected: ShaderState) -> Result<G::Program, ShaderError> {
        match self.program {
            Some(program) if self.state == expected => Ok(program),
            _ => Err(ShaderError::NotReady {
                expected,
                found: self.state,
            }),
        }
    }
}
