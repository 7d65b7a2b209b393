/// Tunables shared by every field a controller owns.
#[derive(Clone, Debug, PartialEq)]
pub struct EditConfig {
    /// Buffer capacity including the reserved terminator slot; a field holds
    /// at most `capacity - 1` characters.
    pub capacity: usize,
    /// Multiplier applied to glyph advances (font units -> pixels).
    pub text_scale: f32,
    /// Extra advance added to every defined glyph, in font units.
    pub glyph_spacing: f32,
    /// Minimum distance kept between the caret and either viewport edge.
    pub caret_margin_px: f32,
    /// Horizontal inset of the text inside the field rect.
    pub padding_x: f32,
    /// Vertical inset of the text inside the field rect.
    pub padding_y: f32,
    /// Length of one caret blink cycle.
    pub blink_period_secs: f64,
    /// Fraction of the cycle during which the caret is drawn.
    pub blink_on_fraction: f64,
}

impl EditConfig {
    pub const DEFAULT_CAPACITY: usize = 256;
    pub const DEFAULT_TEXT_SCALE: f32 = 2.0;
    pub const DEFAULT_CARET_MARGIN_PX: f32 = 10.0;
    pub const DEFAULT_PADDING: f32 = 5.0;

    /// Config with a different capacity and everything else default.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Height of one text line in pixels, for an 8-unit-tall font.
    pub fn line_height(&self) -> f32 {
        8.0 * self.text_scale
    }
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            text_scale: Self::DEFAULT_TEXT_SCALE,
            glyph_spacing: 0.0,
            caret_margin_px: Self::DEFAULT_CARET_MARGIN_PX,
            padding_x: Self::DEFAULT_PADDING,
            padding_y: Self::DEFAULT_PADDING,
            blink_period_secs: 1.0,
            blink_on_fraction: 0.5,
        }
    }
}
