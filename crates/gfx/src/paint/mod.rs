mod context;
mod input_box;

pub use context::InputPaintCtx;
pub use input_box::paint_input_box;
