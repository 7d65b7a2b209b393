//! Character-class helpers for the single-line editor.
//!
//! The editor only ever stores printable ASCII (`' '..='~'`), so a character
//! index is also a byte index into the backing `String`. Everything that can
//! put characters into a buffer goes through [`is_printable`] first.

use std::borrow::Cow;

/// Returns `true` for characters the editor accepts (`0x20..=0x7E`).
///
/// # Examples
///
/// ```
/// use input_core::is_printable;
///
/// assert!(is_printable('a'));
/// assert!(is_printable(' '));
/// assert!(is_printable('~'));
/// assert!(!is_printable('\n'));
/// assert!(!is_printable('\u{7f}'));
/// assert!(!is_printable('€'));
/// ```
#[inline]
pub fn is_printable(ch: char) -> bool {
    matches!(ch, ' '..='~')
}

/// Drop every character the editor would refuse.
///
/// Returns a `Cow::Borrowed` if the string is already printable ASCII (fast
/// path), or a `Cow::Owned` with the offending characters removed.
///
/// # Examples
///
/// ```
/// use input_core::filter_printable;
///
/// assert_eq!(filter_printable("hello"), "hello");
/// assert_eq!(filter_printable("a\r\nb"), "ab");
/// assert_eq!(filter_printable("5€"), "5");
/// ```
pub fn filter_printable(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_printable) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| is_printable(*c)).collect())
}

/// Clamp an arbitrary index into `[0, len]`.
#[inline]
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len)
}
