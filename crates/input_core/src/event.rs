//! Input events and field geometry, as delivered by the windowing layer.

/// One frame's pointer state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    /// Primary button currently held.
    pub down: bool,
    /// Primary button went down this frame (edge, not level).
    pub pressed: bool,
    /// Shift modifier held.
    pub shift: bool,
}

/// Derives the edge-triggered `pressed` flag from per-frame button levels.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this frame's pointer and return the sample to feed the
    /// controller. `pressed` is only true on the up -> down transition.
    pub fn sample(&mut self, x: f32, y: f32, down: bool, shift: bool) -> PointerSample {
        let pressed = down && !self.was_down;
        self.was_down = down;
        PointerSample {
            x,
            y,
            down,
            pressed,
            shift,
        }
    }
}

/// Logical editing keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKey {
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    SelectAll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

/// Screen-space rectangle of an input field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FieldRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inclusive on all sides.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Screen x of the first glyph's left edge when unscrolled.
    #[inline]
    pub fn text_origin_x(&self, padding_x: f32) -> f32 {
        self.x + padding_x
    }

    /// Width available to text once both horizontal paddings are removed.
    #[inline]
    pub fn viewport_width(&self, padding_x: f32) -> f32 {
        (self.width - 2.0 * padding_x).max(0.0)
    }
}
