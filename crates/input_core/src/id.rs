//! Identifier for input fields registered with an [`EditController`](crate::EditController).
//!
//! This type intentionally uses a plain `u64` so the host toolkit can derive
//! it from whatever it already uses to tell widgets apart (a hashed label, a
//! slot index, an egui `Id`).

/// Opaque identifier for one input field.
///
/// A lightweight, copyable key. Each id owns exactly one text buffer, layout
/// cache and interaction state inside the controller; state is never shared
/// between ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    /// Create a `FieldId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for FieldId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<FieldId> for u64 {
    #[inline]
    fn from(id: FieldId) -> Self {
        id.as_raw()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field#{}", self.0)
    }
}
