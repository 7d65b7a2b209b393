//! # input_core
//!
//! UI-agnostic editing engine for single-line text input boxes.
//!
//! This crate provides the building blocks of an immediate-mode input field:
//! - [`TextBuffer`]: bounded printable-ASCII content with a caret and a selection anchor
//! - [`TextLayoutCursor`]: per-glyph pixel offsets, hit-testing and horizontal scrolling
//! - [`EditController`]: the focus / drag-selection state machine that binds
//!   pointer and keyboard events to the two above
//!
//! ## Design Principles
//!
//! This crate does not depend on any graphics framework or windowing system.
//! Glyph widths come in through the [`GlyphMetrics`] trait and time through
//! [`Clock`], so the full editing behavior can be driven and tested headless.
//!
//! ## Integration
//!
//! A host toolkit implements [`GlyphMetrics`] over its font system, converts its
//! events into [`PointerSample`] / [`EditKey`] / `char`, and draws from the
//! [`FieldView`] returned by [`EditController::view`]. The `gfx` crate does this
//! for egui.

mod buffer;
mod clock;
mod config;
mod controller;
mod error;
mod event;
mod field;
mod id;
mod layout;
mod metrics;
mod selection;
mod text;
mod view;

pub use buffer::TextBuffer;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::EditConfig;
pub use controller::EditController;
pub use error::{EditError, EditOutcome};
pub use event::{EditKey, FieldRect, KeyAction, PointerSample, PointerTracker};
pub use field::{EditField, FieldFocus};
pub use id::FieldId;
pub use layout::TextLayoutCursor;
pub use metrics::{AdvanceTable, FixedAdvance, GlyphMetrics};
pub use selection::SelectionRange;
pub use text::{clamp_index, filter_printable, is_printable};
pub use view::FieldView;
