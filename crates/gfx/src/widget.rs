use std::time::Duration;

use egui::{Rect, Sense, Ui, Vec2};
use input_core::{Clock, EditController, FieldFocus, FieldId, FieldRect};

use crate::glyph_metrics::EguiGlyphMetrics;
use crate::input::pointer_sample;
use crate::paint::{InputPaintCtx, paint_input_box};
use crate::theme::InputTheme;

pub fn field_rect(rect: Rect) -> FieldRect {
    FieldRect::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

/// Immediate-mode input box at `rect`, with the default theme.
///
/// Returns `true` while the field has focus.
pub fn input_box<C: Clock>(
    ui: &mut Ui,
    controller: &mut EditController<EguiGlyphMetrics, C>,
    id: FieldId,
    rect: Rect,
    hint: &str,
) -> bool {
    input_box_with_theme(ui, controller, id, rect, hint, &InputTheme::default())
}

pub fn input_box_with_theme<C: Clock>(
    ui: &mut Ui,
    controller: &mut EditController<EguiGlyphMetrics, C>,
    id: FieldId,
    rect: Rect,
    hint: &str,
    theme: &InputTheme,
) -> bool {
    let pointer = pointer_sample(ui.ctx());
    let focus = controller.process_pointer(id, field_rect(rect), &pointer);

    let config = controller.config();
    let font_id = controller.metrics().scaled_font_id(config.text_scale);
    if let Some(view) = controller.view(id) {
        paint_input_box(
            rect,
            &view,
            hint,
            InputPaintCtx {
                painter: ui.painter(),
                theme,
                font_id: &font_id,
                padding_x: config.padding_x,
                padding_y: config.padding_y,
                line_height: config.line_height(),
            },
        );
    }

    let active = focus != FieldFocus::Idle;
    if active && config.blink_period_secs > 0.0 {
        // Wake up for the next blink edge even if no input arrives.
        let half = config.blink_period_secs * config.blink_on_fraction.clamp(0.0, 1.0);
        ui.ctx()
            .request_repaint_after(Duration::from_secs_f64(half.max(0.01)));
    }
    active
}

/// Allocate a box of `width` in the current layout (height from the line
/// height and vertical padding) and draw the input there.
///
/// Returns the allocated rect and whether the field has focus.
pub fn add_input_box<C: Clock>(
    ui: &mut Ui,
    controller: &mut EditController<EguiGlyphMetrics, C>,
    id: FieldId,
    width: f32,
    hint: &str,
) -> (Rect, bool) {
    let config = controller.config();
    let height = config.line_height() + 2.0 * config.padding_y;
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    (rect, input_box(ui, controller, id, rect, hint))
}
