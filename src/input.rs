use eframe::egui;

/// Press/release events the demos react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: egui::Key, pressed: bool },
    MouseButton { button: egui::PointerButton, pressed: bool },
}

impl InputEvent {
    /// Auto-repeated key presses are dropped.
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::Key {
                key,
                pressed,
                repeat: false,
                ..
            } => Some(InputEvent::Key {
                key: *key,
                pressed: *pressed,
            }),
            egui::Event::PointerButton {
                button, pressed, ..
            } => Some(InputEvent::MouseButton {
                button: *button,
                pressed: *pressed,
            }),
            _ => None,
        }
    }

    pub fn is_key_press(&self, wanted: egui::Key) -> bool {
        matches!(self, InputEvent::Key { key, pressed: true } if *key == wanted)
    }

    pub fn is_button_press(&self, wanted: egui::PointerButton) -> bool {
        matches!(self, InputEvent::MouseButton { button, pressed: true } if *button == wanted)
    }
}
