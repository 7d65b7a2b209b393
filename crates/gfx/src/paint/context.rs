use crate::theme::InputTheme;
use egui::{FontId, Painter};

/// What [`paint_input_box`](super::paint_input_box) needs besides the field
/// itself.
#[derive(Clone, Copy)]
pub struct InputPaintCtx<'a> {
    pub painter: &'a Painter,
    pub theme: &'a InputTheme,
    /// Font at the final (scaled) size.
    pub font_id: &'a FontId,
    pub padding_x: f32,
    pub padding_y: f32,
    pub line_height: f32,
}
