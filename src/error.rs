use thiserror::Error;

use crate::gpu::ShaderStage;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("cannot create {stage} shader: {reason}")]
    CreateShader { stage: ShaderStage, reason: String },
    #[error("failed to compile {stage} shader:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("cannot create program: {0}")]
    CreateProgram(String),
    #[error("failed to link program:\n{log}")]
    Link { log: String },
}

impl ShaderError {
    /// Driver diagnostics attached to a compile or link failure.
    pub fn log(&self) -> Option<&str> {
        match self {
            ShaderError::Compile { log, .. } | ShaderError::Link { log } => Some(log),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
#[error("OpenGL error(s) {} after `{call}` at {file}:{line}", format_codes(.codes))]
pub struct GlError {
    pub codes: Vec<u32>,
    pub call: &'static str,
    pub file: &'static str,
    pub line: u32,
}

fn format_codes(codes: &[u32]) -> String {
    codes
        .iter()
        .map(|&code| format!("0x{code:04X} ({})", crate::debug::gl_error_name(code)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Gl(#[from] GlError),
    #[error("cannot create {what}: {reason}")]
    CreateResource { what: &'static str, reason: String },
    #[error("vertex data holds {len} floats, expected pairs of x, y")]
    InvalidVertexData { len: usize },
    #[error("index {index} refers past the last of {num_vtx} vertices")]
    IndexOutOfRange { index: u32, num_vtx: usize },
    #[error("uniform `{0}` is not active in the program")]
    MissingUniform(&'static str),
    #[error("eframe was not started with the glow backend")]
    MissingGlContext,
}
