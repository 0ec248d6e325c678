//! An indexed quad whose red channel pulses through the `u_Color` uniform.
//!
//! The shader pair comes from a single file split by [`ShaderSource`], and
//! every GPU call is checked with [`gl_call!`](crate::gl_call).

use std::path::Path;

use eframe::egui;

use crate::color::{validate_rgba, ColorCycle};
use crate::drawer_vtx2xy::Drawer;
use crate::error::DemoError;
use crate::gl_call;
use crate::gpu::Gpu;
use crate::input::InputEvent;
use crate::program::link_program;
use crate::render_loop::Demo;
use crate::scoped::Scoped;
use crate::shader_source::ShaderSource;

pub const QUAD_VTX2XY: [f32; 8] = [-0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, 0.5];
pub const QUAD_TRI2VTX: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Uploaded once before the first frame. The alpha of 1.9 is outside the
/// valid range; it is reported, then sent as is.
pub const INITIAL_COLOR: [f32; 4] = [0.8, 0.3, 0.8, 1.9];
pub const COLOR_UNIFORM: &str = "u_Color";

pub struct QuadDemo<G: Gpu> {
    quad: Option<Drawer<G>>,
    program: Option<G::Program>,
    loc_color: G::UniformLocation,
    red: ColorCycle,
}

impl<G: Gpu> QuadDemo<G> {
    pub fn new(gl: &G, shader_path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let source = ShaderSource::from_file(shader_path);
        Self::from_source(gl, &source)
    }

    pub fn from_source(gl: &G, source: &ShaderSource) -> Result<Self, DemoError> {
        let program = gl_call!(gl, link_program(gl, &source.vertex, &source.fragment))?;
        let program = Scoped::new(gl, program, G::delete_program);
        gl_call!(gl, gl.use_program(Some(program.get())));

        let loc_color = gl_call!(gl, gl.uniform_location(program.get(), COLOR_UNIFORM))
            .ok_or(DemoError::MissingUniform(COLOR_UNIFORM))?;
        if let Err(err) = validate_rgba(&INITIAL_COLOR) {
            log::warn!("initial {COLOR_UNIFORM}: {err}");
        }
        gl_call!(gl, gl.uniform_4_f32(Some(&loc_color), INITIAL_COLOR));

        let quad = gl_call!(
            gl,
            Drawer::from_elem2vtx_vtx2xy(gl, glow::TRIANGLES, &QUAD_TRI2VTX[..], &QUAD_VTX2XY)
        )?;
        gl_call!(gl, gl.use_program(None));

        Ok(Self {
            quad: Some(quad),
            program: Some(program.into_inner()),
            loc_color,
            red: ColorCycle::default(),
        })
    }

    pub fn red(&self) -> f32 {
        self.red.value()
    }
}

impl<G: Gpu> Demo for QuadDemo<G> {
    type Gpu = G;

    fn draw(&mut self, gl: &G) {
        let (Some(program), Some(quad)) = (self.program, &self.quad) else {
            return;
        };
        let red = self.red.advance();
        gl_call!(gl, gl.use_program(Some(program)));
        gl_call!(gl, gl.uniform_4_f32(Some(&self.loc_color), [red, 0.3, 0.8, 1.0]));
        gl_call!(gl, quad.draw(gl));
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if event.is_key_press(egui::Key::Space) {
            log::info!("Spacebar pressed!");
        } else if event.is_button_press(egui::PointerButton::Primary) {
            log::info!("Left mouse button clicked!");
        }
    }

    fn destroy(&mut self, gl: &G) {
        if let Some(quad) = self.quad.take() {
            quad.destroy(gl);
        }
        if let Some(program) = self.program.take() {
            gl.delete_program(program);
        }
    }
}
