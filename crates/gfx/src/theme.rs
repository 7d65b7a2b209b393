use egui::Color32;

/// Colors for the input box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputTheme {
    pub input: Color32,
    pub input_active: Color32,
    pub selection: Color32,
    pub text: Color32,
    /// Hint text shown while the field is empty.
    pub text_dim: Color32,
}

impl Default for InputTheme {
    fn default() -> Self {
        Self {
            input: rgb(0.3, 0.3, 0.3),
            input_active: rgb(0.6, 0.3, 0.3),
            selection: rgb(0.25, 0.45, 0.85),
            text: Color32::WHITE,
            text_dim: rgb(0.7, 0.7, 0.7),
        }
    }
}

fn rgb(r: f32, g: f32, b: f32) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(r), channel(g), channel(b))
}
