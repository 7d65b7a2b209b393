use super::context::InputPaintCtx;
use egui::{Align2, Pos2, Rect, Stroke, Vec2};
use input_core::FieldView;

/// Draw one input box: background, selection, text (or hint) and caret.
///
/// Text is shifted left by the view's scroll offset and clipped to the
/// padded inner width; the box itself is never clipped.
pub fn paint_input_box(rect: Rect, view: &FieldView<'_>, hint: &str, ctx: InputPaintCtx<'_>) {
    let painter = ctx.painter;
    let theme = ctx.theme;

    let fill = if view.is_active {
        theme.input_active
    } else {
        theme.input
    };
    painter.rect_filled(rect, 0.0, fill);

    let inner_min = rect.min + Vec2::new(ctx.padding_x, ctx.padding_y);
    let inner_max_x = (rect.max.x - ctx.padding_x).max(inner_min.x);
    let clip_rect = Rect::from_min_max(
        Pos2::new(inner_min.x, rect.min.y),
        Pos2::new(inner_max_x, rect.max.y),
    )
    .intersect(painter.clip_rect());
    let clip_painter = painter.with_clip_rect(clip_rect);

    let text_x = inner_min.x - view.scroll_offset;
    let text_y = inner_min.y;

    if let Some((x0, x1)) = view.selection_span_in_viewport() {
        let sel_rect = Rect::from_min_max(
            Pos2::new(inner_min.x + x0, text_y),
            Pos2::new(inner_min.x + x1, text_y + ctx.line_height),
        );
        clip_painter.rect_filled(sel_rect, 0.0, theme.selection);
    }

    if !view.text.is_empty() {
        clip_painter.text(
            Pos2::new(text_x, text_y),
            Align2::LEFT_TOP,
            view.text,
            ctx.font_id.clone(),
            theme.text,
        );
    } else if !hint.is_empty() {
        clip_painter.text(
            Pos2::new(inner_min.x, text_y),
            Align2::LEFT_TOP,
            hint,
            ctx.font_id.clone(),
            theme.text_dim,
        );
    }

    if view.caret_visible {
        let x = inner_min.x + view.caret_x_in_viewport();
        clip_painter.line_segment(
            [Pos2::new(x, text_y), Pos2::new(x, text_y + ctx.line_height)],
            Stroke::new(1.0, theme.text),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::InputTheme;
    use egui::{Color32, Context, FontId, LayerId, RawInput, Shape, epaint::ClippedShape};
    use input_core::SelectionRange;

    fn paint(view: &FieldView<'_>, hint: &str) -> Vec<ClippedShape> {
        let ctx = Context::default();
        let theme = InputTheme::default();
        let font_id = FontId::monospace(16.0);
        let output = ctx.run(RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(LayerId::background());
            paint_input_box(
                Rect::from_min_size(Pos2::new(100.0, 200.0), Vec2::new(300.0, 30.0)),
                view,
                hint,
                InputPaintCtx {
                    painter: &painter,
                    theme: &theme,
                    font_id: &font_id,
                    padding_x: 5.0,
                    padding_y: 5.0,
                    line_height: 16.0,
                },
            );
        });
        output.shapes
    }

    fn filled_rects(shapes: &[ClippedShape]) -> Vec<(Rect, Color32)> {
        shapes
            .iter()
            .filter_map(|s| match &s.shape {
                Shape::Rect(r) => Some((r.rect, r.fill)),
                _ => None,
            })
            .collect()
    }

    fn caret_lines(shapes: &[ClippedShape]) -> Vec<[Pos2; 2]> {
        shapes
            .iter()
            .filter_map(|s| match &s.shape {
                Shape::LineSegment { points, .. } => Some(*points),
                _ => None,
            })
            .collect()
    }

    fn text_count(shapes: &[ClippedShape]) -> usize {
        shapes
            .iter()
            .filter(|s| matches!(s.shape, Shape::Text(_)))
            .count()
    }

    #[test]
    fn active_field_draws_selection_and_caret() {
        let theme = InputTheme::default();
        let view = FieldView {
            text: "Hello",
            caret: 4,
            selection: Some(SelectionRange::new(1, 4)),
            scroll_offset: 0.0,
            is_active: true,
            caret_visible: true,
            caret_x: 40.0,
            selection_span: Some((10.0, 40.0)),
        };
        let shapes = paint(&view, "");

        let rects = filled_rects(&shapes);
        assert!(rects.iter().any(|(_, c)| *c == theme.input_active));
        let (sel, _) = rects
            .iter()
            .find(|(_, c)| *c == theme.selection)
            .copied()
            .unwrap();
        assert_eq!(sel.min, Pos2::new(115.0, 205.0));
        assert_eq!(sel.max, Pos2::new(145.0, 221.0));

        assert_eq!(
            caret_lines(&shapes),
            vec![[Pos2::new(145.0, 205.0), Pos2::new(145.0, 221.0)]]
        );
        assert_eq!(text_count(&shapes), 1);
    }

    #[test]
    fn idle_empty_field_shows_hint_without_caret() {
        let theme = InputTheme::default();
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
        let shapes = paint(&view, "Enter text here...");

        let rects = filled_rects(&shapes);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].1, theme.input);
        assert!(caret_lines(&shapes).is_empty());
        assert_eq!(text_count(&shapes), 1);
    }

    #[test]
    fn scroll_shifts_selection_left() {
        let theme = InputTheme::default();
        let view = FieldView {
            text: "a long line of text",
            caret: 19,
            selection: Some(SelectionRange::new(10, 19)),
            scroll_offset: 40.0,
            is_active: true,
            caret_visible: false,
            caret_x: 190.0,
            selection_span: Some((100.0, 190.0)),
        };
        let shapes = paint(&view, "");
        let (sel, _) = filled_rects(&shapes)
            .into_iter()
            .find(|(_, c)| *c == theme.selection)
            .unwrap();
        assert_eq!(sel.min.x, 165.0);
        assert_eq!(sel.max.x, 255.0);
    }

    #[test]
    fn scroll_shifts_caret_left() {
        let view = FieldView {
            text: "a long line",
            caret: 11,
            selection: None,
            scroll_offset: 60.0,
            is_active: true,
            caret_visible: true,
            caret_x: 350.0,
            selection_span: None,
        };
        let shapes = paint(&view, "");
        let lines = caret_lines(&shapes);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][0].x, 395.0);
    }
}
