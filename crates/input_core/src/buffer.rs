//! The character sequence of one field plus its caret and selection anchor.
//!
//! All indices are character indices in `[0, len]`. Content is restricted to
//! printable ASCII, so a character index is also a valid byte index into
//! [`TextBuffer::text`].

use crate::config::EditConfig;
use crate::error::{EditError, EditOutcome};
use crate::selection::SelectionRange;
use crate::text::{clamp_index, filter_printable, is_printable};

const LOG_TARGET: &str = "input_core.buffer";

/// Bounded single-line text buffer with a caret and a selection anchor.
///
/// A selection exists iff `caret != selection_anchor`. The anchor is the end
/// that stays put while the caret moves, so a right-to-left drag keeps
/// `anchor > caret`; [`TextBuffer::selection`] normalizes on read.
///
/// # Example
///
/// ```
/// use input_core::TextBuffer;
///
/// let mut buf = TextBuffer::with_capacity(16);
/// buf.insert_at(0, 'H').unwrap();
/// buf.insert_at(1, 'i').unwrap();
///
/// assert_eq!(buf.text(), "Hi");
/// assert_eq!(buf.caret(), 2);
/// assert_eq!(buf.selection(), None);
/// ```
#[derive(Clone, Debug)]
pub struct TextBuffer {
    content: String,
    capacity: usize,
    caret: usize,
    selection_anchor: usize,
    revision: u64,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::with_capacity(EditConfig::DEFAULT_CAPACITY)
    }
}

impl TextBuffer {
    /// Create an empty buffer. One slot of `capacity` is reserved, so at most
    /// `capacity - 1` characters fit.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            content: String::with_capacity(capacity - 1),
            capacity,
            caret: 0,
            selection_anchor: 0,
            revision: 0,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest number of characters the buffer will hold.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.capacity - 1
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= self.max_len()
    }

    #[inline]
    pub fn caret(&self) -> usize {
        self.caret
    }

    #[inline]
    pub fn selection_anchor(&self) -> usize {
        self.selection_anchor
    }

    /// Monotonic counter bumped on every content change.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn has_selection(&self) -> bool {
        self.caret != self.selection_anchor
    }

    /// The normalized selection, or `None` when the caret and anchor coincide.
    pub fn selection(&self) -> Option<SelectionRange> {
        self.has_selection()
            .then(|| SelectionRange::new(self.selection_anchor, self.caret))
    }

    /// Replace the whole content.
    ///
    /// Non-printable characters are dropped and the result is truncated to
    /// [`max_len`](Self::max_len). The caret moves to the end and any
    /// selection collapses.
    pub fn set_text(&mut self, text: &str) -> EditOutcome {
        let filtered = filter_printable(text);
        let keep = filtered.len().min(self.max_len());
        let new_text = &filtered[..keep];

        let end = new_text.len();
        let changed = self.content != new_text || self.caret != end || self.selection_anchor != end;

        if self.content != new_text {
            self.content.clear();
            self.content.push_str(new_text);
            self.mark_dirty();
        }
        self.caret = end;
        self.selection_anchor = end;

        EditOutcome::from_changed(changed)
    }

    /// Insert `ch` at `index` and place the caret right after it.
    ///
    /// Characters outside `' '..='~'` are ignored (`NoOp`). Fails with
    /// [`EditError::CapacityExceeded`] when the buffer is already full; the
    /// content is left untouched in both cases. Any existing selection is
    /// collapsed, not replaced: callers that want typing to overwrite the
    /// selection delete it first.
    pub fn insert_at(&mut self, index: usize, ch: char) -> Result<EditOutcome, EditError> {
        if !is_printable(ch) {
            log::trace!(target: LOG_TARGET, "ignoring non-printable {ch:?}");
            return Ok(EditOutcome::NoOp);
        }
        if self.is_full() {
            log::debug!(
                target: LOG_TARGET,
                "insert of {ch:?} refused, buffer holds {} of {} chars",
                self.len(),
                self.max_len()
            );
            return Err(EditError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let index = clamp_index(index, self.len());
        self.content.insert(index, ch);
        self.caret = index + 1;
        self.selection_anchor = self.caret;
        self.mark_dirty();
        Ok(EditOutcome::Applied)
    }

    /// Insert the printable characters of `s` at `index`, in order.
    ///
    /// Stops early once the buffer is full. Returns how many characters were
    /// inserted; fails only when `s` had something to insert and none of it
    /// fit.
    pub fn insert_str(&mut self, index: usize, s: &str) -> Result<usize, EditError> {
        let filtered = filter_printable(s);
        let mut at = clamp_index(index, self.len());
        let mut inserted = 0usize;

        for ch in filtered.chars() {
            match self.insert_at(at, ch) {
                Ok(_) => {
                    at += 1;
                    inserted += 1;
                }
                Err(err) if inserted == 0 => return Err(err),
                Err(_) => break,
            }
        }

        Ok(inserted)
    }

    /// Remove the characters in `[a, b)` and collapse the caret to `a`.
    ///
    /// Both ends are clamped and put in order first; an empty range is a
    /// `NoOp` and leaves the caret alone.
    pub fn delete_range(&mut self, a: usize, b: usize) -> EditOutcome {
        let range = SelectionRange::new(clamp_index(a, self.len()), clamp_index(b, self.len()));
        if range.is_empty() {
            return EditOutcome::NoOp;
        }

        self.content.drain(range.start..range.end);
        self.caret = range.start;
        self.selection_anchor = range.start;
        self.mark_dirty();
        EditOutcome::Applied
    }

    /// Delete the selected characters, if any.
    pub fn delete_selection(&mut self) -> EditOutcome {
        match self.selection() {
            Some(sel) => self.delete_range(sel.start, sel.end),
            None => EditOutcome::NoOp,
        }
    }

    /// Delete the selection, or else the character before the caret.
    pub fn backspace(&mut self) -> EditOutcome {
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.caret == 0 {
            return EditOutcome::NoOp;
        }
        self.delete_range(self.caret - 1, self.caret)
    }

    /// Delete the selection, or else the character at the caret. The caret
    /// does not move.
    pub fn delete_forward(&mut self) -> EditOutcome {
        if self.has_selection() {
            return self.delete_selection();
        }
        if self.caret >= self.len() {
            return EditOutcome::NoOp;
        }
        self.delete_range(self.caret, self.caret + 1)
    }

    /// Move the caret to `new_index` (clamped into `[0, len]`).
    ///
    /// With `extend_selection` the anchor stays where it is; otherwise it
    /// follows the caret and any selection collapses.
    pub fn move_caret(&mut self, new_index: usize, extend_selection: bool) -> EditOutcome {
        let caret = clamp_index(new_index, self.len());
        let anchor = if extend_selection {
            self.selection_anchor
        } else {
            caret
        };

        let changed = caret != self.caret || anchor != self.selection_anchor;
        self.caret = caret;
        self.selection_anchor = anchor;
        EditOutcome::from_changed(changed)
    }

    /// Select the whole content, caret at the end.
    pub fn select_all(&mut self) -> EditOutcome {
        let end = self.len();
        let changed = self.selection_anchor != 0 || self.caret != end;
        self.selection_anchor = 0;
        self.caret = end;
        EditOutcome::from_changed(changed)
    }

    fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.clamp_indices();
    }

    fn clamp_indices(&mut self) {
        let len = self.len();
        self.caret = clamp_index(self.caret, len);
        self.selection_anchor = clamp_index(self.selection_anchor, len);
    }
}
