//! Hosting a [`Demo`] inside eframe's glow backend.

use std::sync::Arc;

use eframe::egui::mutex::Mutex;
use eframe::{egui, egui_glow, glow};

use crate::config::WindowConfig;
use crate::error::DemoError;
use crate::gpu::Gpu;
use crate::input::InputEvent;
use crate::render_loop::{render_frame, Demo, LoopState, RenderLoop, SharedDemo, Surface};

/// One eframe frame seen through the [`Surface`] interface.
pub struct EframeSurface<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EframeSurface<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl<D> Surface<D> for EframeSurface<'_>
where
    D: Demo<Gpu = glow::Context> + Send + 'static,
{
    fn close_requested(&self) -> bool {
        self.ctx.input(|i| i.viewport().close_requested())
    }

    fn present(&mut self, demo: &SharedDemo<D>) {
        let demo = Arc::clone(demo);
        let callback = egui::PaintCallback {
            rect: self.ctx.screen_rect(),
            callback: Arc::new(egui_glow::CallbackFn::new(move |_info, painter| {
                render_frame(&**painter.gl(), &mut *demo.lock());
            })),
        };
        self.ctx
            .layer_painter(egui::LayerId::background())
            .add(callback);
    }

    /// eframe swaps once painting is done; this keeps the next frame coming.
    fn swap_buffers(&mut self) {
        self.ctx.request_repaint();
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.ctx
            .input(|i| i.events.iter().filter_map(InputEvent::from_egui).collect())
    }
}

pub struct DemoApp<D> {
    demo: SharedDemo<D>,
    render_loop: RenderLoop,
}

impl<D> DemoApp<D>
where
    D: Demo<Gpu = glow::Context> + Send + 'static,
{
    pub fn new<F>(cc: &eframe::CreationContext<'_>, setup: F) -> Result<Self, DemoError>
    where
        F: FnOnce(&glow::Context) -> Result<D, DemoError>,
    {
        let gl = cc.gl.as_ref().ok_or(DemoError::MissingGlContext)?;
        log::info!("OpenGL version: {}", gl.version_string());
        let demo = setup(&**gl)?;
        Ok(Self {
            demo: Arc::new(Mutex::new(demo)),
            render_loop: RenderLoop::new(),
        })
    }
}

impl<D> eframe::App for DemoApp<D>
where
    D: Demo<Gpu = glow::Context> + Send + 'static,
{
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut surface = EframeSurface::new(ctx);
        if self.render_loop.step(&mut surface, &self.demo) == LoopState::Closed {
            log::debug!("render loop closed after {} frame(s)", self.render_loop.frames());
        }
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.demo.lock().destroy(gl);
        }
    }
}

/// Open a window and run `setup`'s demo until the window closes.
///
/// A window or context that cannot be created, or a failing `setup`, comes
/// back as `Err`, so `main` exits non-zero.
pub fn run_demo<D, F>(config: &WindowConfig, setup: F) -> eframe::Result
where
    D: Demo<Gpu = glow::Context> + Send + 'static,
    F: FnOnce(&glow::Context) -> Result<D, DemoError> + 'static,
{
    eframe::run_native(
        &config.title,
        config.native_options(),
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc, setup)?))),
    )
}
