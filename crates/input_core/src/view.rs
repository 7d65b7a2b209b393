use crate::selection::SelectionRange;

/// Everything a renderer needs to draw one field for the current frame.
///
/// Pixel values are text-local: subtract `scroll_offset` and add the field's
/// text origin to get screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldView<'a> {
    pub text: &'a str,
    pub caret: usize,
    /// Only reported while the field is active.
    pub selection: Option<SelectionRange>,
    pub scroll_offset: f32,
    pub is_active: bool,
    pub caret_visible: bool,
    pub caret_x: f32,
    pub selection_span: Option<(f32, f32)>,
}

impl FieldView<'_> {
    /// Caret x relative to the visible text origin.
    #[inline]
    pub fn caret_x_in_viewport(&self) -> f32 {
        self.caret_x - self.scroll_offset
    }

    /// Selection extent relative to the visible text origin.
    pub fn selection_span_in_viewport(&self) -> Option<(f32, f32)> {
        self.selection_span
            .map(|(x0, x1)| (x0 - self.scroll_offset, x1 - self.scroll_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_helpers_subtract_scroll() {
        let view = FieldView {
            text: "scrolled",
            caret: 8,
            selection: Some(SelectionRange::new(2, 8)),
            scroll_offset: 25.0,
            is_active: true,
            caret_visible: true,
            caret_x: 80.0,
            selection_span: Some((20.0, 80.0)),
        };
        assert_eq!(view.caret_x_in_viewport(), 55.0);
        assert_eq!(view.selection_span_in_viewport(), Some((-5.0, 55.0)));
    }

    #[test]
    fn no_selection_no_span() {
        let view = FieldView {
            text: "",
            caret: 0,
            selection: None,
            scroll_offset: 0.0,
            is_active: false,
            caret_visible: false,
            caret_x: 0.0,
            selection_span: None,
        };
        assert_eq!(view.selection_span_in_viewport(), None);
    }
}
