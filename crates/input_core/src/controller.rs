//! Binds buffers and layouts to pointer and keyboard input.
//!
//! The controller owns every field's state and the single focus reference.
//! Integration layers feed it one pointer sample per field per frame, plus
//! the frame's key and character events, and read [`FieldView`]s back for
//! drawing.

use crate::clock::{Clock, MonotonicClock};
use crate::config::EditConfig;
use crate::error::{EditError, EditOutcome};
use crate::event::{EditKey, FieldRect, KeyAction, PointerSample};
use crate::field::{EditField, FieldFocus};
use crate::id::FieldId;
use crate::metrics::GlyphMetrics;
use crate::text::is_printable;
use crate::view::FieldView;
use std::collections::HashMap;

const LOG_TARGET: &str = "input_core.controller";

/// Interaction state machine for a set of single-line input fields.
///
/// At most one field is focused; keyboard and character input always go to
/// it. Fields are created on first use, so an immediate-mode caller can
/// simply pass the same [`FieldId`] every frame.
///
/// # Example
///
/// ```
/// use input_core::{
///     EditConfig, EditController, EditKey, FieldId, FieldRect, FixedAdvance, KeyAction,
///     ManualClock, PointerTracker,
/// };
///
/// let clock = ManualClock::new(0.0);
/// let mut ctl = EditController::with_clock(EditConfig::default(), FixedAdvance::new(8.0), &clock);
/// let id = FieldId::from_raw(1);
/// let rect = FieldRect::new(0.0, 0.0, 200.0, 26.0);
///
/// let mut pointer = PointerTracker::new();
/// ctl.process_pointer(id, rect, &pointer.sample(10.0, 10.0, true, false));
/// ctl.process_pointer(id, rect, &pointer.sample(10.0, 10.0, false, false));
///
/// ctl.handle_char('H').unwrap();
/// ctl.handle_char('i').unwrap();
/// ctl.handle_key(EditKey::Home, KeyAction::Press, false);
///
/// let view = ctl.view(id).unwrap();
/// assert_eq!(view.text, "Hi");
/// assert_eq!(view.caret, 0);
/// assert!(view.is_active);
/// ```
#[derive(Debug)]
pub struct EditController<M, C = MonotonicClock> {
    fields: HashMap<FieldId, EditField>,
    focused: Option<FieldId>,
    config: EditConfig,
    metrics: M,
    clock: C,
}

impl<M: GlyphMetrics> EditController<M, MonotonicClock> {
    pub fn new(config: EditConfig, metrics: M) -> Self {
        Self::with_clock(config, metrics, MonotonicClock::new())
    }
}

impl<M: GlyphMetrics, C: Clock> EditController<M, C> {
    pub fn with_clock(config: EditConfig, metrics: M, clock: C) -> Self {
        Self {
            fields: HashMap::new(),
            focused: None,
            config,
            metrics,
            clock,
        }
    }

    #[inline]
    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    #[inline]
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Swap the glyph metrics (e.g. after a font change) and rebuild every
    /// field's layout against them.
    pub fn set_metrics(&mut self, metrics: M) {
        self.metrics = metrics;
        self.invalidate_layouts();
    }

    /// The field for `id`, created empty if it does not exist yet.
    pub fn ensure_field(&mut self, id: FieldId) -> &EditField {
        let config = &self.config;
        self.fields
            .entry(id)
            .or_insert_with(|| EditField::new(config))
    }

    pub fn field(&self, id: FieldId) -> Option<&EditField> {
        self.fields.get(&id)
    }

    /// Drop a field's state, clearing focus if it was focused.
    pub fn remove_field(&mut self, id: FieldId) -> Option<EditField> {
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.fields.remove(&id)
    }

    #[inline]
    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    /// Replace a field's content (creating the field if needed).
    pub fn set_text(&mut self, id: FieldId, text: &str) -> EditOutcome {
        let Self {
            fields,
            config,
            metrics,
            ..
        } = self;
        let field = fields
            .entry(id)
            .or_insert_with(|| EditField::new(config));
        let outcome = field.buffer_mut().set_text(text);
        field.sync_layout(config, metrics);
        outcome
    }

    /// Give `id` keyboard focus, taking it from whichever field had it.
    pub fn focus(&mut self, id: FieldId) {
        if self.focused == Some(id) {
            return;
        }
        let now = self.clock.now();
        self.release_focus(now);

        let config = &self.config;
        self.fields
            .entry(id)
            .or_insert_with(|| EditField::new(config))
            .set_focus(FieldFocus::Active, now);
        self.focused = Some(id);
        log::debug!(target: LOG_TARGET, "{id} focused");
    }

    /// Clear focus. The blurred field keeps its content and caret.
    pub fn blur(&mut self) {
        let now = self.clock.now();
        self.release_focus(now);
    }

    /// Run one frame of pointer handling for the field drawn at `rect`.
    ///
    /// Call once per field per frame, in draw order. Returns the field's
    /// focus state after the sample has been applied.
    pub fn process_pointer(
        &mut self,
        id: FieldId,
        rect: FieldRect,
        pointer: &PointerSample,
    ) -> FieldFocus {
        let now = self.clock.now();
        let inside = rect.contains(pointer.x, pointer.y);

        if pointer.pressed && inside && self.focused != Some(id) {
            self.release_focus(now);
            self.focused = Some(id);
            log::debug!(target: LOG_TARGET, "{id} focused by pointer");
        }

        let Self {
            fields,
            focused,
            config,
            metrics,
            ..
        } = self;
        let field = fields
            .entry(id)
            .or_insert_with(|| EditField::new(config));
        field.set_rect(rect);
        // Hit-testing below must see this frame's content and scroll.
        field.sync_layout(config, metrics);

        if pointer.pressed {
            if inside {
                field.set_focus(FieldFocus::ActiveDragging, now);
                let index = field.index_at_screen_x(pointer.x, config);
                field.move_caret(index, pointer.shift, now);
                log::trace!(
                    target: LOG_TARGET,
                    "{id} press at x={:.1} -> caret {index}",
                    pointer.x
                );
            } else if *focused == Some(id) {
                field.set_focus(FieldFocus::Idle, now);
                *focused = None;
                log::debug!(target: LOG_TARGET, "{id} blurred by outside press");
            }
        } else if !pointer.down {
            field.end_drag();
        } else if field.is_drag_selecting() {
            let index = field.index_at_screen_x(pointer.x, config);
            if index != field.buffer().caret() {
                log::trace!(target: LOG_TARGET, "{id} drag -> caret {index}");
            }
            // The caret stays solid for as long as the button is held.
            field.move_caret(index, true, now);
        }

        field.sync_layout(config, metrics);
        field.focus_state()
    }

    /// Type one character into the focused field, replacing any selection.
    ///
    /// Without a focused field, or for a non-printable character, this is a
    /// `NoOp`.
    pub fn handle_char(&mut self, ch: char) -> Result<EditOutcome, EditError> {
        if !is_printable(ch) {
            log::trace!(target: LOG_TARGET, "dropping non-printable {ch:?}");
            return Ok(EditOutcome::NoOp);
        }
        let now = self.clock.now();
        let Self {
            fields,
            focused,
            config,
            metrics,
            ..
        } = self;
        let Some(field) = focused.and_then(|id| fields.get_mut(&id)) else {
            log::debug!(target: LOG_TARGET, "dropping {ch:?}, no field focused");
            return Ok(EditOutcome::NoOp);
        };

        let buffer = field.buffer_mut();
        let deleted = buffer.delete_selection();
        let caret = buffer.caret();
        let result = buffer.insert_at(caret, ch);

        field.reset_blink(now);
        field.sync_layout(config, metrics);

        match result {
            Ok(inserted) => Ok(if deleted.is_applied() {
                EditOutcome::Applied
            } else {
                inserted
            }),
            Err(err) => {
                log::debug!(target: LOG_TARGET, "dropping {ch:?}: {err}");
                Err(err)
            }
        }
    }

    /// Apply an editing key to the focused field.
    ///
    /// Releases are ignored; a repeat behaves like a press.
    pub fn handle_key(&mut self, key: EditKey, action: KeyAction, shift: bool) -> EditOutcome {
        if action == KeyAction::Release {
            return EditOutcome::NoOp;
        }
        let now = self.clock.now();
        let Self {
            fields,
            focused,
            config,
            metrics,
            ..
        } = self;
        let Some(field) = focused.and_then(|id| fields.get_mut(&id)) else {
            log::trace!(target: LOG_TARGET, "dropping {key:?}, no field focused");
            return EditOutcome::NoOp;
        };

        let buffer = field.buffer_mut();
        let caret = buffer.caret();
        let outcome = match key {
            EditKey::Left => match buffer.selection() {
                Some(sel) if !shift => buffer.move_caret(sel.start, false),
                _ => buffer.move_caret(caret.saturating_sub(1), shift),
            },
            EditKey::Right => match buffer.selection() {
                Some(sel) if !shift => buffer.move_caret(sel.end, false),
                _ => buffer.move_caret(caret + 1, shift),
            },
            EditKey::Home => buffer.move_caret(0, shift),
            EditKey::End => {
                let len = buffer.len();
                buffer.move_caret(len, shift)
            }
            EditKey::Backspace => buffer.backspace(),
            EditKey::Delete => buffer.delete_forward(),
            EditKey::SelectAll => buffer.select_all(),
        };

        field.reset_blink(now);
        field.sync_layout(config, metrics);
        log::trace!(target: LOG_TARGET, "{key:?} ({action:?}, shift={shift}) -> {outcome:?}");
        outcome
    }

    /// Snapshot of a field for drawing, or `None` if it was never used.
    pub fn view(&self, id: FieldId) -> Option<FieldView<'_>> {
        let now = self.clock.now();
        self.fields.get(&id).map(|f| f.view(now, &self.config))
    }

    /// Rebuild every field's layout on its next use, e.g. after the font
    /// changed underneath the metrics provider.
    pub fn invalidate_layouts(&mut self) {
        let Self {
            fields,
            config,
            metrics,
            ..
        } = self;
        for field in fields.values_mut() {
            field.invalidate_layout();
            field.sync_layout(config, metrics);
        }
    }

    fn release_focus(&mut self, now: f64) {
        let Some(prev) = self.focused.take() else {
            return;
        };
        if let Some(field) = self.fields.get_mut(&prev) {
            field.set_focus(FieldFocus::Idle, now);
        }
        log::debug!(target: LOG_TARGET, "{prev} lost focus");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::metrics::FixedAdvance;
    use crate::selection::SelectionRange;

    const A: FieldId = FieldId::from_raw(1);
    const B: FieldId = FieldId::from_raw(2);

    // 10px per glyph at scale 1; 110px wide rect -> 100px viewport.
    fn controller(clock: &ManualClock) -> EditController<FixedAdvance, &ManualClock> {
        let config = EditConfig {
            text_scale: 1.0,
            ..EditConfig::default()
        };
        EditController::with_clock(config, FixedAdvance::new(10.0), clock)
    }

    fn rect_a() -> FieldRect {
        FieldRect::new(0.0, 0.0, 110.0, 26.0)
    }

    fn rect_b() -> FieldRect {
        FieldRect::new(0.0, 40.0, 110.0, 26.0)
    }

    fn press(x: f32, y: f32) -> PointerSample {
        PointerSample {
            x,
            y,
            down: true,
            pressed: true,
            shift: false,
        }
    }

    fn hold(x: f32, y: f32) -> PointerSample {
        PointerSample {
            x,
            y,
            down: true,
            pressed: false,
            shift: false,
        }
    }

    fn release(x: f32, y: f32) -> PointerSample {
        PointerSample {
            x,
            y,
            down: false,
            pressed: false,
            shift: false,
        }
    }

    fn text(ctl: &EditController<FixedAdvance, &ManualClock>, id: FieldId) -> String {
        ctl.field(id)
            .map(|f| f.buffer().text().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn press_inside_focuses_and_places_caret() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "hello");

        // Text origin is x=5; x=28 is local 23, right half of glyph 1.
        let state = ctl.process_pointer(A, rect_a(), &press(28.0, 10.0));
        assert_eq!(state, FieldFocus::ActiveDragging);
        assert_eq!(ctl.focused(), Some(A));
        assert_eq!(ctl.field(A).unwrap().buffer().caret(), 2);

        let state = ctl.process_pointer(A, rect_a(), &release(28.0, 10.0));
        assert_eq!(state, FieldFocus::Active);
    }

    #[test]
    fn drag_extends_selection_from_press_point() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "hello");

        ctl.process_pointer(A, rect_a(), &press(44.0, 10.0));
        ctl.process_pointer(A, rect_a(), &hold(14.0, 10.0));
        ctl.process_pointer(A, rect_a(), &release(14.0, 10.0));

        let buf = ctl.field(A).unwrap().buffer();
        assert_eq!(buf.selection(), Some(SelectionRange::new(1, 4)));
        assert_eq!(buf.caret(), 1);
        assert_eq!(buf.selection_anchor(), 4);
    }

    #[test]
    fn moving_without_button_does_not_select() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "hello");
        ctl.process_pointer(A, rect_a(), &press(5.0, 10.0));
        ctl.process_pointer(A, rect_a(), &release(5.0, 10.0));
        ctl.process_pointer(A, rect_a(), &release(50.0, 10.0));

        assert_eq!(ctl.field(A).unwrap().buffer().selection(), None);
    }

    #[test]
    fn shift_press_keeps_anchor() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "hello");
        ctl.process_pointer(A, rect_a(), &press(5.0, 10.0));
        ctl.process_pointer(A, rect_a(), &release(5.0, 10.0));

        let shifted = PointerSample {
            shift: true,
            ..press(36.0, 10.0)
        };
        ctl.process_pointer(A, rect_a(), &shifted);
        assert_eq!(
            ctl.field(A).unwrap().buffer().selection(),
            Some(SelectionRange::new(0, 3))
        );
    }

    #[test]
    fn press_outside_blurs_focused_field() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.process_pointer(A, rect_a(), &press(5.0, 5.0));
        assert_eq!(ctl.focused(), Some(A));

        let state = ctl.process_pointer(A, rect_a(), &press(300.0, 300.0));
        assert_eq!(state, FieldFocus::Idle);
        assert_eq!(ctl.focused(), None);
    }

    #[test]
    fn pressing_another_field_moves_focus() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        let p = press(10.0, 50.0);

        ctl.process_pointer(A, rect_a(), &press(10.0, 10.0));
        ctl.process_pointer(A, rect_a(), &release(10.0, 10.0));
        ctl.process_pointer(B, rect_b(), &release(10.0, 10.0));

        ctl.process_pointer(A, rect_a(), &p);
        ctl.process_pointer(B, rect_b(), &p);

        assert_eq!(ctl.focused(), Some(B));
        assert!(!ctl.field(A).unwrap().is_active());
        assert!(ctl.field(B).unwrap().is_drag_selecting());
    }

    #[test]
    fn typing_replaces_selection() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "Hello");
        ctl.focus(A);
        ctl.handle_key(EditKey::Left, KeyAction::Press, true);
        ctl.handle_key(EditKey::Left, KeyAction::Press, true);

        assert_eq!(ctl.handle_char('!'), Ok(EditOutcome::Applied));
        assert_eq!(text(&ctl, A), "Hel!");
        assert_eq!(ctl.field(A).unwrap().buffer().caret(), 4);
    }

    #[test]
    fn chars_without_focus_are_dropped() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "x");
        assert_eq!(ctl.handle_char('y'), Ok(EditOutcome::NoOp));
        assert_eq!(ctl.handle_key(EditKey::Backspace, KeyAction::Press, false), EditOutcome::NoOp);
        assert_eq!(text(&ctl, A), "x");
    }

    #[test]
    fn non_printable_char_is_noop() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.focus(A);
        assert_eq!(ctl.handle_char('\n'), Ok(EditOutcome::NoOp));
        assert_eq!(ctl.handle_char('é'), Ok(EditOutcome::NoOp));
        assert_eq!(text(&ctl, A), "");
    }

    #[test]
    fn full_buffer_reports_capacity() {
        let clock = ManualClock::new(0.0);
        let config = EditConfig::with_capacity(4);
        let mut ctl = EditController::with_clock(config, FixedAdvance::new(10.0), &clock);
        ctl.focus(A);
        for ch in "abc".chars() {
            ctl.handle_char(ch).unwrap();
        }
        assert_eq!(ctl.handle_char('d'), Err(EditError::CapacityExceeded { capacity: 4 }));
        assert_eq!(ctl.field(A).unwrap().buffer().text(), "abc");
    }

    #[test]
    fn left_right_collapse_selection() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "Hello");
        ctl.focus(A);
        ctl.handle_key(EditKey::SelectAll, KeyAction::Press, false);

        ctl.handle_key(EditKey::Left, KeyAction::Press, false);
        let buf = ctl.field(A).unwrap().buffer();
        assert_eq!((buf.caret(), buf.selection()), (0, None));

        ctl.handle_key(EditKey::SelectAll, KeyAction::Press, false);
        ctl.handle_key(EditKey::Right, KeyAction::Press, false);
        let buf = ctl.field(A).unwrap().buffer();
        assert_eq!((buf.caret(), buf.selection()), (5, None));

        ctl.handle_key(EditKey::Right, KeyAction::Repeat, false);
        assert_eq!(ctl.field(A).unwrap().buffer().caret(), 5);
    }

    #[test]
    fn home_end_and_release() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "Hello");
        ctl.focus(A);

        assert_eq!(ctl.handle_key(EditKey::Home, KeyAction::Release, false), EditOutcome::NoOp);
        assert_eq!(ctl.field(A).unwrap().buffer().caret(), 5);

        ctl.handle_key(EditKey::Home, KeyAction::Press, false);
        assert_eq!(ctl.field(A).unwrap().buffer().caret(), 0);
        ctl.handle_key(EditKey::End, KeyAction::Press, true);
        assert_eq!(
            ctl.field(A).unwrap().buffer().selection(),
            Some(SelectionRange::new(0, 5))
        );
    }

    #[test]
    fn key_press_restarts_blink() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "Hello");
        ctl.focus(A);

        clock.set(0.6);
        assert!(!ctl.view(A).unwrap().caret_visible);
        ctl.handle_key(EditKey::Left, KeyAction::Press, false);
        assert!(ctl.view(A).unwrap().caret_visible);
    }

    #[test]
    fn held_drag_keeps_caret_solid() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "hello");
        ctl.process_pointer(A, rect_a(), &press(24.0, 10.0));

        // Pointer held still across a full blink period.
        for step in 1..=8 {
            clock.set(0.15 * step as f64);
            ctl.process_pointer(A, rect_a(), &hold(24.0, 10.0));
            assert!(ctl.view(A).unwrap().caret_visible);
        }

        ctl.process_pointer(A, rect_a(), &release(24.0, 10.0));
        clock.set(1.2 + 0.6);
        assert!(!ctl.view(A).unwrap().caret_visible);
    }

    #[test]
    fn ensure_field_creates_an_idle_empty_field_once() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        assert!(ctl.field(A).is_none());

        let field = ctl.ensure_field(A);
        assert!(field.buffer().is_empty());
        assert_eq!(field.focus_state(), FieldFocus::Idle);
        assert_eq!(ctl.focused(), None);

        ctl.set_text(A, "kept");
        assert_eq!(ctl.ensure_field(A).buffer().text(), "kept");
    }

    #[test]
    fn typing_past_the_viewport_scrolls() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.process_pointer(A, rect_a(), &press(5.0, 5.0));
        ctl.process_pointer(A, rect_a(), &release(5.0, 5.0));

        for _ in 0..25 {
            ctl.handle_char('x').unwrap();
        }
        // caret 250px, viewport 100px -> clamped to 150.
        assert_eq!(ctl.view(A).unwrap().scroll_offset, 150.0);

        ctl.handle_key(EditKey::Home, KeyAction::Press, false);
        assert_eq!(ctl.view(A).unwrap().scroll_offset, 0.0);
    }

    #[test]
    fn remove_field_clears_focus() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.focus(A);
        assert!(ctl.remove_field(A).is_some());
        assert_eq!(ctl.focused(), None);
        assert!(ctl.view(A).is_none());
    }

    #[test]
    fn blur_keeps_content() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.focus(A);
        ctl.handle_char('q').unwrap();
        ctl.blur();

        let view = ctl.view(A).unwrap();
        assert!(!view.is_active);
        assert!(!view.caret_visible);
        assert_eq!(view.text, "q");
    }

    #[test]
    fn set_metrics_relayouts_fields() {
        let clock = ManualClock::new(0.0);
        let mut ctl = controller(&clock);
        ctl.set_text(A, "abc");
        assert_eq!(ctl.field(A).unwrap().layout().total_width(), 30.0);

        ctl.set_metrics(FixedAdvance::new(4.0));
        assert_eq!(ctl.field(A).unwrap().layout().total_width(), 12.0);
    }
}
