//! Glyph metrics seam.
//!
//! The layout never talks to a font system directly. Integration layers
//! implement [`GlyphMetrics`] over whatever they render with (egui's font
//! atlas, a bitmap font table); tests use [`FixedAdvance`] or
//! [`AdvanceTable`].

use crate::text::is_printable;

/// Source of per-character advance widths.
pub trait GlyphMetrics {
    /// Advance of `ch` in font units at scale `1.0`, or `None` when the font
    /// has no glyph for it. Undefined glyphs take up no horizontal space.
    fn advance(&self, ch: char) -> Option<f32>;
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for &T {
    #[inline]
    fn advance(&self, ch: char) -> Option<f32> {
        (**self).advance(ch)
    }
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for Box<T> {
    #[inline]
    fn advance(&self, ch: char) -> Option<f32> {
        (**self).advance(ch)
    }
}

/// Monospace metrics: every printable character has the same advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    advance: f32,
}

impl FixedAdvance {
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl GlyphMetrics for FixedAdvance {
    fn advance(&self, ch: char) -> Option<f32> {
        is_printable(ch).then_some(self.advance)
    }
}

const TABLE_LEN: usize = ('~' as usize) - (' ' as usize) + 1;

/// Proportional metrics from a lookup table covering `' '..='~'`.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvanceTable {
    advances: [f32; TABLE_LEN],
}

impl AdvanceTable {
    /// Build a table by asking `f` for every printable character.
    pub fn from_fn(mut f: impl FnMut(char) -> f32) -> Self {
        let mut advances = [0.0; TABLE_LEN];
        for (slot, ch) in advances.iter_mut().zip(' '..='~') {
            *slot = f(ch).max(0.0);
        }
        Self { advances }
    }
}

impl GlyphMetrics for AdvanceTable {
    fn advance(&self, ch: char) -> Option<f32> {
        if !is_printable(ch) {
            return None;
        }
        self.advances.get(ch as usize - ' ' as usize).copied()
    }
}
