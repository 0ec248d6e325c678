use crate::error::ShaderError;
use crate::gpu::{Gpu, ShaderStage};
use crate::scoped::Scoped;

pub fn shader_version() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        "#version 300 es"
    } else {
        "#version 330 core"
    }
}

/// Prefix a shader body with the platform's `#version` line.
pub fn with_version(body: &str) -> String {
    format!("{}\n{body}", shader_version())
}

fn diagnostics(log: String) -> String {
    if log.trim().is_empty() {
        "(the driver returned an empty info log)".to_owned()
    } else {
        log
    }
}

/// Compile one stage. On failure the shader object is already deleted.
pub fn compile_stage<G: Gpu>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, ShaderError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|reason| ShaderError::CreateShader { stage, reason })?;
    let shader = Scoped::new(gl, shader, G::delete_shader);
    gl.shader_source(shader.get(), source);
    gl.compile_shader(shader.get());
    if !gl.shader_compile_status(shader.get()) {
        let log = diagnostics(gl.shader_info_log(shader.get()));
        log::error!("failed to compile {stage} shader:\n{log}");
        return Err(ShaderError::Compile { stage, log });
    }
    Ok(shader.into_inner())
}

/// Compile and link a vertex/fragment pair into a program.
///
/// The intermediate shader objects never outlive this call, and no program
/// handle escapes unless linking succeeded.
pub fn link_program<G: Gpu>(
    gl: &G,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<G::Program, ShaderError> {
    let vertex = Scoped::new(
        gl,
        compile_stage(gl, ShaderStage::Vertex, vertex_source)?,
        G::delete_shader,
    );
    let fragment = Scoped::new(
        gl,
        compile_stage(gl, ShaderStage::Fragment, fragment_source)?,
        G::delete_shader,
    );
    let program = gl.create_program().map_err(ShaderError::CreateProgram)?;
    let program = Scoped::new(gl, program, G::delete_program);
    for shader in [vertex.get(), fragment.get()] {
        gl.attach_shader(program.get(), shader);
    }
    gl.link_program(program.get());
    if !gl.program_link_status(program.get()) {
        let log = diagnostics(gl.program_info_log(program.get()));
        log::error!("failed to link program:\n{log}");
        return Err(ShaderError::Link { log });
    }
    for shader in [vertex.get(), fragment.get()] {
        gl.detach_shader(program.get(), shader);
    }
    Ok(program.into_inner())
}
