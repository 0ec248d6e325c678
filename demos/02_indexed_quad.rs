#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use glow_first_light::demo_quad::QuadDemo;
use glow_first_light::WindowConfig;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=info`).
    let config = WindowConfig {
        title: "Hello World".to_owned(),
        vsync: true,
        ..Default::default()
    };
    glow_first_light::app::run_demo(&config, |gl| QuadDemo::new(gl, "Basic.shader"))
}
