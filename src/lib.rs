//! Two small OpenGL demos on glow and eframe, plus the pieces they share:
//! a shader-file splitter, checked shader compilation, 2D vertex drawers
//! and a clear/draw/swap/poll render loop.

pub mod app;
pub mod color;
pub mod config;
pub mod debug;
pub mod demo_quad;
pub mod demo_triangles;
pub mod drawer_vtx2xy;
pub mod error;
pub mod gpu;
pub mod input;
pub mod program;
pub mod render_loop;
pub mod scoped;
pub mod shader_source;

#[cfg(test)]
mod testing;

pub use config::WindowConfig;
pub use error::{DemoError, GlError, ShaderError};
pub use gpu::{Gpu, ShaderStage};
