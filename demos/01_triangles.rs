#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use glow_first_light::demo_triangles::TrianglesDemo;
use glow_first_light::WindowConfig;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=info`).
    let config = WindowConfig {
        title: "Triangle!".to_owned(),
        vsync: false,
        ..Default::default()
    };
    glow_first_light::app::run_demo(&config, |gl| TrianglesDemo::new(gl))
}
