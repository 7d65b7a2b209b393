use egui::Context;
use input_core::PointerSample;

/// This frame's pointer, as the edit controller wants it.
///
/// egui already reports the press edge, so no [`input_core::PointerTracker`]
/// is needed here. Without a known position (pointer left the window) the
/// sample is reported as released, which ends any drag.
pub fn pointer_sample(ctx: &Context) -> PointerSample {
    ctx.input(|i| {
        let shift = i.modifiers.shift;
        match i.pointer.latest_pos() {
            Some(pos) => PointerSample {
                x: pos.x,
                y: pos.y,
                down: i.pointer.primary_down(),
                pressed: i.pointer.primary_pressed(),
                shift,
            },
            None => PointerSample {
                x: f32::NAN,
                y: f32::NAN,
                down: false,
                pressed: false,
                shift,
            },
        }
    })
}
