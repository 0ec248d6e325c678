use eframe::egui;

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Swap interval of one when set.
    pub vsync: bool,
    pub multisampling: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glow".to_owned(),
            width: 640.0,
            height: 480.0,
            vsync: true,
            multisampling: 4,
        }
    }
}

impl WindowConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_title(self.title.clone()),
            vsync: self.vsync,
            multisampling: self.multisampling,
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_options_follow_config() {
        let config = WindowConfig {
            title: "Triangle!".to_owned(),
            vsync: false,
            ..Default::default()
        };
        let options = config.native_options();
        assert!(!options.vsync);
        assert_eq!(options.multisampling, 4);
        assert_eq!(options.renderer, eframe::Renderer::Glow);
        assert_eq!(options.viewport.inner_size, Some(egui::vec2(640.0, 480.0)));
        assert_eq!(options.viewport.title.as_deref(), Some("Triangle!"));
    }
}
