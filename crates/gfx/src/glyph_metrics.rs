use std::cell::RefCell;
use std::collections::HashMap;

use egui::{Color32, Context, FontId};
use input_core::{GlyphMetrics, is_printable};

/// `egui`-backed glyph widths for the edit engine.
///
/// Glyphs are measured at the size they are painted at (base size times the
/// text scale) and reported in base units, so the engine's `advance * scale`
/// lands on the drawn glyph edges. Widths are cached per character. Measuring
/// needs egui's fonts, which only exist once the context has run its first
/// pass.
pub struct EguiGlyphMetrics {
    ctx: Context,
    font_id: FontId,
    text_scale: f32,
    width_cache: RefCell<HashMap<char, f32>>,
}

impl EguiGlyphMetrics {
    /// Base size matching an 8px bitmap font.
    pub const DEFAULT_FONT_PX: f32 = 8.0;

    /// Glyphs of the run used to average out per-glyph pixel snapping.
    const RUN: usize = 8;

    /// `text_scale` must be the scale the layout is computed and painted with.
    pub fn new(ctx: &Context, font_id: FontId, text_scale: f32) -> Self {
        Self {
            ctx: ctx.clone(),
            font_id,
            text_scale: if text_scale > 0.0 { text_scale } else { 1.0 },
            width_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Monospace at [`DEFAULT_FONT_PX`](Self::DEFAULT_FONT_PX).
    pub fn monospace(ctx: &Context, text_scale: f32) -> Self {
        Self::new(ctx, FontId::monospace(Self::DEFAULT_FONT_PX), text_scale)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn font_id(&self) -> &FontId {
        &self.font_id
    }

    pub fn text_scale(&self) -> f32 {
        self.text_scale
    }

    /// The font to paint with so drawn glyphs line up with the layout.
    pub fn scaled_font_id(&self, scale: f32) -> FontId {
        FontId::new(self.font_id.size * scale, self.font_id.family.clone())
    }

    /// Advance of `ch` at the painted size.
    fn measure(&self, ch: char) -> f32 {
        // NBSP is the most stable in egui
        let glyph = if ch == ' ' { '\u{00A0}' } else { ch };

        // Difference between a run and a single glyph: the advance without
        // the first glyph's side bearings.
        let single = self.layout_width(glyph.to_string());
        let run = self.layout_width(glyph.to_string().repeat(Self::RUN + 1));
        let w = (run - single) / Self::RUN as f32;
        if w.is_finite() && w > 0.0 {
            return w;
        }
        if single.is_finite() && single > 0.0 {
            return single;
        }
        if ch == ' ' {
            (self.font_id.size * self.text_scale * 0.33).max(1.0)
        } else {
            0.0
        }
    }

    fn layout_width(&self, text: String) -> f32 {
        // Color does not affect text metrics.
        let font_id = self.scaled_font_id(self.text_scale);
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text, font_id, Color32::WHITE)
                .rect
                .width()
        })
    }
}

impl GlyphMetrics for EguiGlyphMetrics {
    fn advance(&self, ch: char) -> Option<f32> {
        if !is_printable(ch) {
            return None;
        }
        if let Some(w) = self.width_cache.borrow().get(&ch).copied() {
            return Some(w);
        }
        let w = self.measure(ch) / self.text_scale;
        self.width_cache.borrow_mut().insert(ch, w);
        Some(w)
    }
}
