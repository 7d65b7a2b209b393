//! Per-field state: buffer, layout and interaction state.
//!
//! An [`EditField`] is owned by the controller; mutation goes through the
//! controller so the caret blink and scroll offset stay in sync with every
//! edit.

use crate::buffer::TextBuffer;
use crate::config::EditConfig;
use crate::error::EditOutcome;
use crate::event::FieldRect;
use crate::layout::TextLayoutCursor;
use crate::metrics::GlyphMetrics;
use crate::view::FieldView;

/// Where a field is in the focus / drag-selection cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldFocus {
    /// Not focused.
    #[default]
    Idle,
    /// Focused, caret blinking, keyboard input goes here.
    Active,
    /// Focused with the pointer button held; pointer motion moves the caret
    /// and extends the selection.
    ActiveDragging,
}

#[derive(Clone, Debug)]
pub struct EditField {
    buffer: TextBuffer,
    layout: TextLayoutCursor,
    focus: FieldFocus,
    blink_origin: f64,
    rect: Option<FieldRect>,
}

impl EditField {
    pub fn new(config: &EditConfig) -> Self {
        Self {
            buffer: TextBuffer::with_capacity(config.capacity),
            layout: TextLayoutCursor::new(config.glyph_spacing),
            focus: FieldFocus::Idle,
            blink_origin: 0.0,
            rect: None,
        }
    }

    #[inline]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[inline]
    pub fn layout(&self) -> &TextLayoutCursor {
        &self.layout
    }

    #[inline]
    pub fn focus_state(&self) -> FieldFocus {
        self.focus
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.focus != FieldFocus::Idle
    }

    #[inline]
    pub fn is_drag_selecting(&self) -> bool {
        self.focus == FieldFocus::ActiveDragging
    }

    /// Time of the last caret move; the blink cycle restarts from here.
    #[inline]
    pub fn blink_origin(&self) -> f64 {
        self.blink_origin
    }

    /// Rect from the most recent pointer pass, if the field has been drawn.
    #[inline]
    pub fn rect(&self) -> Option<FieldRect> {
        self.rect
    }

    /// The caret is drawn iff the field is active and
    /// `(now - blink_origin) mod period < period * on_fraction`.
    pub fn caret_visible(&self, now: f64, config: &EditConfig) -> bool {
        if !self.is_active() {
            return false;
        }
        let period = config.blink_period_secs;
        if period <= 0.0 {
            return true;
        }
        (now - self.blink_origin).rem_euclid(period) < period * config.blink_on_fraction
    }

    /// Read-only snapshot for the renderer.
    pub fn view(&self, now: f64, config: &EditConfig) -> FieldView<'_> {
        let is_active = self.is_active();
        let selection = self.buffer.selection().filter(|_| is_active);
        FieldView {
            text: self.buffer.text(),
            caret: self.buffer.caret(),
            selection,
            scroll_offset: self.layout.scroll_offset(),
            is_active,
            caret_visible: self.caret_visible(now, config),
            caret_x: self.layout.pixel_offset_of_index(self.buffer.caret()),
            selection_span: selection.map(|sel| self.layout.selection_span(sel)),
        }
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub(crate) fn set_focus(&mut self, focus: FieldFocus, now: f64) {
        self.focus = focus;
        self.blink_origin = now;
    }

    /// Leave drag-selection without touching the blink phase.
    pub(crate) fn end_drag(&mut self) {
        if self.focus == FieldFocus::ActiveDragging {
            self.focus = FieldFocus::Active;
        }
    }

    pub(crate) fn reset_blink(&mut self, now: f64) {
        self.blink_origin = now;
    }

    pub(crate) fn set_rect(&mut self, rect: FieldRect) {
        self.rect = Some(rect);
    }

    /// Move the caret; the blink cycle restarts whether or not it moved.
    pub(crate) fn move_caret(&mut self, index: usize, extend: bool, now: f64) -> EditOutcome {
        let outcome = self.buffer.move_caret(index, extend);
        self.reset_blink(now);
        outcome
    }

    /// Caret index under a screen-space pointer x.
    pub(crate) fn index_at_screen_x(&self, screen_x: f32, config: &EditConfig) -> usize {
        let origin = self
            .rect
            .map(|r| r.text_origin_x(config.padding_x))
            .unwrap_or(0.0);
        let local_x = screen_x - origin + self.layout.scroll_offset();
        self.layout.index_at_pixel(local_x)
    }

    /// Bring the layout up to date with the buffer and keep the caret in view.
    pub(crate) fn sync_layout<M: GlyphMetrics + ?Sized>(
        &mut self,
        config: &EditConfig,
        metrics: &M,
    ) {
        self.layout
            .ensure_layout(&self.buffer, config.text_scale, metrics);

        let Some(rect) = self.rect else {
            return;
        };
        let caret_px = self.layout.pixel_offset_of_index(self.buffer.caret());
        self.layout.update_scroll_to_keep_caret_visible(
            caret_px,
            rect.viewport_width(config.padding_x),
            config.caret_margin_px,
        );
    }

    pub(crate) fn invalidate_layout(&mut self) {
        self.layout.invalidate();
    }
}
