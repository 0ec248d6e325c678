//! Two triangles; space swaps between an orange and a yellow program.

use eframe::egui;

use crate::drawer_vtx2xy::Drawer;
use crate::error::DemoError;
use crate::gpu::Gpu;
use crate::input::InputEvent;
use crate::program::{link_program, with_version};
use crate::render_loop::Demo;
use crate::scoped::Scoped;

pub const TRIANGLE_ONE: [f32; 6] = [-1.0, 0.0, -0.9, 0.5, -0.8, 0.0];
pub const TRIANGLE_TWO: [f32; 6] = [0.0, 0.0, 0.1, 0.5, 0.2, 0.0];

const VS_SRC: &str = r#"
layout (location = 0) in vec2 aPos;
void main() {
    gl_Position = vec4(aPos, 0.0, 1.0);
}
"#;

const FS_ORANGE: &str = r#"
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

const FS_YELLOW: &str = r#"
out vec4 FragColor;
void main() {
    FragColor = vec4(1.0, 1.0, 0.0, 1.0);
}
"#;

/// Which of two linked programs is in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramToggle<P> {
    pub orange: P,
    pub yellow: P,
    pub is_yellow: bool,
}

impl<P: Copy> ProgramToggle<P> {
    pub fn new(orange: P, yellow: P) -> Self {
        Self {
            orange,
            yellow,
            is_yellow: false,
        }
    }

    pub fn toggle(&mut self) {
        self.is_yellow = !self.is_yellow;
    }

    pub fn active(&self) -> P {
        if self.is_yellow {
            self.yellow
        } else {
            self.orange
        }
    }
}

pub struct TrianglesDemo<G: Gpu> {
    triangles: Vec<Drawer<G>>,
    programs: Option<ProgramToggle<G::Program>>,
}

impl<G: Gpu> TrianglesDemo<G> {
    pub fn new(gl: &G) -> Result<Self, DemoError> {
        let vs = with_version(VS_SRC);
        let yellow = Scoped::new(
            gl,
            link_program(gl, &vs, &with_version(FS_YELLOW))?,
            G::delete_program,
        );
        let orange = Scoped::new(
            gl,
            link_program(gl, &vs, &with_version(FS_ORANGE))?,
            G::delete_program,
        );
        let first = Drawer::from_vtx2xy(gl, glow::TRIANGLES, &TRIANGLE_ONE)?;
        let second = match Drawer::from_vtx2xy(gl, glow::TRIANGLES, &TRIANGLE_TWO) {
            Ok(drawer) => drawer,
            Err(err) => {
                first.destroy(gl);
                return Err(err);
            }
        };
        Ok(Self {
            triangles: vec![first, second],
            programs: Some(ProgramToggle::new(orange.into_inner(), yellow.into_inner())),
        })
    }

    pub fn active_program(&self) -> Option<G::Program> {
        self.programs.as_ref().map(ProgramToggle::active)
    }
}

impl<G: Gpu> Demo for TrianglesDemo<G> {
    type Gpu = G;

    fn draw(&mut self, gl: &G) {
        let Some(programs) = &self.programs else {
            return;
        };
        gl.use_program(Some(programs.active()));
        for triangle in &self.triangles {
            triangle.draw(gl);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) {
        if event.is_key_press(egui::Key::Space) {
            if let Some(programs) = &mut self.programs {
                programs.toggle();
                log::info!(
                    "Spacebar pressed! now drawing {}",
                    if programs.is_yellow { "yellow" } else { "orange" }
                );
            }
        } else if event.is_button_press(egui::PointerButton::Primary) {
            log::info!("Left mouse button clicked!");
        }
    }

    fn destroy(&mut self, gl: &G) {
        for triangle in self.triangles.drain(..) {
            triangle.destroy(gl);
        }
        if let Some(programs) = self.programs.take() {
            gl.delete_program(programs.orange);
            gl.delete_program(programs.yellow);
        }
    }
}
