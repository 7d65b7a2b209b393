//! Per-character pixel layout, hit-testing and horizontal scrolling.
//!
//! The layout is derived state: it is rebuilt from the buffer content, the
//! text scale and the glyph metrics. Only the scroll offset is authoritative
//! and carries over from frame to frame.

use crate::buffer::TextBuffer;
use crate::metrics::GlyphMetrics;
use crate::selection::SelectionRange;

const LOG_TARGET: &str = "input_core.layout";

#[derive(Clone, Copy, Debug, PartialEq)]
struct LayoutKey {
    revision: u64,
    scale_bits: u32,
}

/// Glyph offsets and scroll state for one field.
///
/// `cumulative_offsets[i]` is the left edge of character `i`;
/// `cumulative_offsets[len]` is the total text width.
#[derive(Clone, Debug)]
pub struct TextLayoutCursor {
    glyph_advances: Vec<f32>,
    cumulative_offsets: Vec<f32>,
    glyph_spacing: f32,
    scroll_offset: f32,
    key: Option<LayoutKey>,
}

impl Default for TextLayoutCursor {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl TextLayoutCursor {
    /// Empty layout. `glyph_spacing` (font units) is added to the advance of
    /// every glyph the metrics define.
    pub fn new(glyph_spacing: f32) -> Self {
        Self {
            glyph_advances: Vec::new(),
            cumulative_offsets: vec![0.0],
            glyph_spacing,
            scroll_offset: 0.0,
            key: None,
        }
    }

    /// Rebuild the advances and offsets for `content` from scratch.
    ///
    /// Each advance is `(metrics.advance(ch) + glyph_spacing) * scale`;
    /// characters without a glyph are zero-width.
    pub fn recompute_layout<M: GlyphMetrics + ?Sized>(
        &mut self,
        content: &str,
        scale: f32,
        metrics: &M,
    ) {
        let scale = scale.max(0.0);

        self.glyph_advances.clear();
        self.cumulative_offsets.clear();
        self.cumulative_offsets.push(0.0);

        let mut total = 0.0f32;
        for ch in content.chars() {
            let advance = metrics
                .advance(ch)
                .map(|w| ((w + self.glyph_spacing) * scale).max(0.0))
                .unwrap_or(0.0);
            total += advance;
            self.glyph_advances.push(advance);
            self.cumulative_offsets.push(total);
        }

        self.key = None;
        log::trace!(
            target: LOG_TARGET,
            "layout rebuilt: {} glyphs, {total:.1}px wide",
            self.glyph_advances.len()
        );
    }

    /// Rebuild only if the buffer content or the scale changed since the last
    /// call. Returns `true` if a rebuild happened.
    pub fn ensure_layout<M: GlyphMetrics + ?Sized>(
        &mut self,
        buffer: &TextBuffer,
        scale: f32,
        metrics: &M,
    ) -> bool {
        let key = LayoutKey {
            revision: buffer.revision(),
            scale_bits: scale.to_bits(),
        };
        if self.key == Some(key) && self.len() == buffer.len() {
            return false;
        }

        self.recompute_layout(buffer.text(), scale, metrics);
        self.key = Some(key);
        true
    }

    /// Forget the cache key so the next [`ensure_layout`](Self::ensure_layout)
    /// rebuilds (e.g. after the font changed).
    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// Number of laid-out characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyph_advances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyph_advances.is_empty()
    }

    #[inline]
    pub fn glyph_advances(&self) -> &[f32] {
        &self.glyph_advances
    }

    #[inline]
    pub fn cumulative_offsets(&self) -> &[f32] {
        &self.cumulative_offsets
    }

    #[inline]
    pub fn total_width(&self) -> f32 {
        self.cumulative_offsets.last().copied().unwrap_or(0.0)
    }

    /// Left edge of character `index`, in text-local pixels.
    pub fn pixel_offset_of_index(&self, index: usize) -> f32 {
        if index == 0 {
            return 0.0;
        }
        if index >= self.len() {
            return self.total_width();
        }
        self.cumulative_offsets[index]
    }

    /// Caret index for a text-local x coordinate.
    ///
    /// Scans left to right and returns the first character whose midpoint
    /// lies right of `local_x`. A click on the left half of a glyph lands
    /// before it, a click on the right half lands after it.
    pub fn index_at_pixel(&self, local_x: f32) -> usize {
        if local_x <= 0.0 {
            return 0;
        }
        if local_x >= self.total_width() {
            return self.len();
        }

        self.glyph_advances
            .iter()
            .zip(&self.cumulative_offsets)
            .position(|(advance, start)| local_x < start + advance * 0.5)
            .unwrap_or(self.len())
    }

    /// Pixel extent `(x0, x1)` of a selection, for the highlight rect.
    pub fn selection_span(&self, range: SelectionRange) -> (f32, f32) {
        (
            self.pixel_offset_of_index(range.start),
            self.pixel_offset_of_index(range.end),
        )
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Largest scroll offset that still fills the viewport.
    pub fn max_scroll(&self, viewport_width: f32) -> f32 {
        (self.total_width() - viewport_width.max(0.0)).max(0.0)
    }

    /// Scroll just enough to keep `caret_px` at least `margin_px` away from
    /// both viewport edges, then clamp into `[0, max_scroll]`.
    ///
    /// Returns the new scroll offset.
    pub fn update_scroll_to_keep_caret_visible(
        &mut self,
        caret_px: f32,
        viewport_width: f32,
        margin_px: f32,
    ) -> f32 {
        let viewport_width = viewport_width.max(0.0);
        let mut scroll = self.scroll_offset;

        if caret_px > scroll + viewport_width - margin_px {
            scroll = caret_px - viewport_width + margin_px;
        } else if caret_px < scroll + margin_px {
            scroll = (caret_px - margin_px).max(0.0);
        }

        let scroll = scroll.clamp(0.0, self.max_scroll(viewport_width));
        if scroll != self.scroll_offset {
            log::trace!(
                target: LOG_TARGET,
                "scroll {:.1} -> {scroll:.1} (caret at {caret_px:.1}px)",
                self.scroll_offset
            );
        }
        self.scroll_offset = scroll;
        scroll
    }
}
