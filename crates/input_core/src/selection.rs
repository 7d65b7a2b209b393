//! Text selection representation.

/// A selection as a half-open character range `[start, end)`.
///
/// Always normalized so that `start <= end`. The buffer stores the anchor and
/// caret separately (so drag direction survives); this type is what readers
/// get back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// First selected character (inclusive).
    pub start: usize,
    /// One past the last selected character (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range, normalizing the order of `a` and `b`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if `index` lies inside the range.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns the selected substring from the given value.
    ///
    /// Out-of-range ends are clamped to `value.len()`.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        let end = self.end.min(value.len());
        let start = self.start.min(end);
        &value[start..end]
    }
}
