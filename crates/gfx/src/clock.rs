use egui::Context;
use input_core::Clock;

/// Reads egui's frame time, so the caret blinks in step with what is drawn.
#[derive(Clone)]
pub struct EguiClock {
    ctx: Context,
}

impl EguiClock {
    pub fn new(ctx: &Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl Clock for EguiClock {
    fn now(&self) -> f64 {
        self.ctx.input(|i| i.time)
    }
}
