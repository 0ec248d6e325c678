//! Per-frame sequencing: clear, draw, swap, poll.

use std::sync::Arc;

use eframe::egui::mutex::Mutex;

use crate::gpu::Gpu;
use crate::input::InputEvent;

/// Behind an `Arc<Mutex<…>>` so a paint callback can draw it later.
pub type SharedDemo<D> = Arc<Mutex<D>>;

pub trait Demo {
    type Gpu: Gpu;

    fn clear_color(&self) -> [f32; 4] {
        [0.0, 0.0, 0.0, 1.0]
    }

    /// Issue this frame's draw calls. The color buffer is already cleared.
    fn draw(&mut self, gl: &Self::Gpu);

    fn handle_input(&mut self, event: &InputEvent);

    /// Release every GPU resource the demo owns.
    fn destroy(&mut self, gl: &Self::Gpu);
}

/// The windowing side of the loop.
pub trait Surface<D: Demo> {
    fn close_requested(&self) -> bool;

    /// Get `render_frame` run for this iteration, now or at paint time.
    fn present(&mut self, demo: &SharedDemo<D>);

    fn swap_buffers(&mut self);

    fn poll_events(&mut self) -> Vec<InputEvent>;
}

pub fn render_frame<D: Demo>(gl: &D::Gpu, demo: &mut D) {
    gl.clear_color(demo.clear_color());
    gl.clear(glow::COLOR_BUFFER_BIT);
    demo.draw(gl);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closed,
}

#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    frames: u64,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One iteration. Events polled at the end reach the demo before the
    /// next iteration starts.
    pub fn step<D: Demo, S: Surface<D>>(
        &mut self,
        surface: &mut S,
        demo: &SharedDemo<D>,
    ) -> LoopState {
        if self.state == LoopState::Closed {
            return self.state;
        }
        if surface.close_requested() {
            log::info!("close requested after {} frame(s)", self.frames);
            self.state = LoopState::Closed;
            return self.state;
        }
        surface.present(demo);
        surface.swap_buffers();
        for event in surface.poll_events() {
            demo.lock().handle_input(&event);
        }
        self.frames += 1;
        self.state
    }

    pub fn run<D: Demo, S: Surface<D>>(&mut self, surface: &mut S, demo: &SharedDemo<D>) {
        while self.step(surface, demo) == LoopState::Running {}
    }
}
