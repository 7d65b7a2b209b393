//! Edit results.
//!
//! Nothing in the editor is fatal. An edit either changed something
//! ([`EditOutcome::Applied`]), changed nothing because the request was empty
//! or already at a boundary ([`EditOutcome::NoOp`]), or was refused because
//! the buffer is full ([`EditError::CapacityExceeded`]).

/// What an edit did to the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Content, caret or selection changed.
    Applied,
    /// Nothing changed: empty range, no selection, caret already at the
    /// boundary, or a character outside the printable range.
    NoOp,
}

impl EditOutcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        matches!(self, EditOutcome::Applied)
    }

    #[inline]
    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed {
            EditOutcome::Applied
        } else {
            EditOutcome::NoOp
        }
    }
}

/// An edit the buffer refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditError {
    /// Insert attempted while the buffer already holds `capacity - 1`
    /// characters.
    CapacityExceeded { capacity: usize },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::CapacityExceeded { capacity } => {
                write!(f, "text buffer is full (capacity {capacity})")
            }
        }
    }
}

impl std::error::Error for EditError {}
