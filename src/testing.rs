//! A [`Gpu`] that records calls instead of talking to a driver.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use crate::gpu::{Gpu, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource { shader: u32, len: usize },
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData { target: u32, len: usize },
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    VertexAttribPointer { index: u32, size: i32, stride: i32, offset: i32 },
    EnableVertexAttribArray(u32),
    ClearColor([f32; 4]),
    Clear(u32),
    DrawArrays { mode: u32, first: i32, count: i32 },
    DrawElements { mode: u32, count: i32 },
    Uniform4([f32; 4]),
    Other(&'static str),
}

#[derive(Default)]
pub struct RecordingGpu {
    next_handle: Cell<u32>,
    calls: RefCell<Vec<Call>>,
    stages: RefCell<HashMap<u32, ShaderStage>>,
    sources: RefCell<HashMap<u32, String>>,
    errors: RefCell<VecDeque<u32>>,
    compile_failure: Option<(ShaderStage, String)>,
    link_failure: Option<String>,
    no_uniforms: bool,
    buffer_limit: Option<usize>,
}

impl RecordingGpu {
    /// `stage` fails to compile and the driver reports `log`.
    pub fn failing_stage(stage: ShaderStage, log: &str) -> Self {
        Self {
            compile_failure: Some((stage, log.to_owned())),
            ..Default::default()
        }
    }

    pub fn failing_link(log: &str) -> Self {
        Self {
            link_failure: Some(log.to_owned()),
            ..Default::default()
        }
    }

    pub fn missing_uniforms() -> Self {
        Self {
            no_uniforms: true,
            ..Default::default()
        }
    }

    /// Buffer creation fails once `limit` buffers exist.
    pub fn buffer_limit(limit: usize) -> Self {
        Self {
            buffer_limit: Some(limit),
            ..Default::default()
        }
    }

    fn injected_log(&self, shader: u32) -> Option<String> {
        let stage = self.stages.borrow().get(&shader).copied();
        match &self.compile_failure {
            Some((failing, log)) if stage == Some(*failing) => Some(log.clone()),
            _ => None,
        }
    }

    fn has_empty_source(&self, shader: u32) -> bool {
        self.sources
            .borrow()
            .get(&shader)
            .map_or(true, |src| src.trim().is_empty())
    }

    fn handle(&self) -> u32 {
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        handle
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

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn push_error(&self, code: u32) {
        self.errors.borrow_mut().push_back(code);
    }

    pub fn pending_errors(&self) -> usize {
        self.errors.borrow().len()
    }

    fn created(&self, pred: impl Fn(&Call) -> Option<u32>) -> Vec<u32> {
        self.calls.borrow().iter().filter_map(pred).collect()
    }

    /// Handles created but never deleted, across all object kinds.
    pub fn live_handles(&self) -> Vec<u32> {
        let created = self.created(|c| match c {
            Call::CreateShader(_, h)
            | Call::CreateProgram(h)
            | Call::CreateBuffer(h)
            | Call::CreateVertexArray(h) => Some(*h),
            _ => None,
        });
        let deleted = self.created(|c| match c {
            Call::DeleteShader(h)
            | Call::DeleteProgram(h)
            | Call::DeleteBuffer(h)
            | Call::DeleteVertexArray(h) => Some(*h),
            _ => None,
        });
        created.into_iter().filter(|h| !deleted.contains(h)).collect()
    }
}

impl Gpu for RecordingGpu {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = u32;

    fn version_string(&self) -> String {
        "3.3.0 recording".to_owned()
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let shader = self.handle();
        self.stages.borrow_mut().insert(shader, stage);
        self.record(Call::CreateShader(stage, shader));
        Ok(shader)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_owned());
        self.record(Call::ShaderSource {
            shader,
            len: source.len(),
        });
    }

    fn compile_shader(&self, _shader: u32) {
        self.record(Call::Other("compile_shader"));
    }

    // like a real driver, a source without any code does not compile
    fn shader_compile_status(&self, shader: u32) -> bool {
        self.injected_log(shader).is_none() && !self.has_empty_source(shader)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        match self.injected_log(shader) {
            Some(log) => log,
            None if self.has_empty_source(shader) => {
                "ERROR: 0:1: '' : function 'main' is not defined".to_owned()
            }
            None => String::new(),
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let program = self.handle();
        self.record(Call::CreateProgram(program));
        Ok(program)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        self.link_failure.is_none()
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.link_failure.clone().unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let created = self.count(|c| matches!(c, Call::CreateBuffer(_)));
        if self.buffer_limit.is_some_and(|limit| created >= limit) {
            return Err("out of buffer names".to_owned());
        }
        let buffer = self.handle();
        self.record(Call::CreateBuffer(buffer));
        Ok(buffer)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: u32, data: &[u8], _usage: u32) {
        self.record(Call::BufferData {
            target,
            len: data.len(),
        });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let vertex_array = self.handle();
        self.record(Call::CreateVertexArray(vertex_array));
        Ok(vertex_array)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.record(Call::VertexAttribPointer {
            index,
            size,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(Call::ClearColor(rgba));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(Call::DrawArrays { mode, first, count });
    }

    fn draw_elements(&self, mode: u32, count: i32, _element_type: u32, _offset: i32) {
        self.record(Call::DrawElements { mode, count });
    }

    fn uniform_location(&self, _program: u32, _name: &str) -> Option<u32> {
        if self.no_uniforms {
            None
        } else {
            Some(self.handle())
        }
    }

    fn uniform_4_f32(&self, _location: Option<&u32>, v: [f32; 4]) {
        self.record(Call::Uniform4(v));
    }

    fn get_error(&self) -> u32 {
        self.errors.borrow_mut().pop_front().unwrap_or(glow::NO_ERROR)
    }
}

pub fn is_draw(call: &Call) -> bool {
    matches!(call, Call::DrawArrays { .. } | Call::DrawElements { .. })
}
