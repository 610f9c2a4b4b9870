//! Text-control trait: the host widget as seen by the editing layer.
//!
//! The phone input never owns a text box. Deferred caret work is applied
//! through this trait, so any frontend (or a test double) can sit behind it.
//!
//! # Design Principles
//!
//! - Offsets are byte offsets into the buffer the host currently displays
//! - The trait is object-safe; the deferred queue drains into `&mut dyn TextControl`
//! - Hosts clamp out-of-range selections themselves

use crate::selection::SelectionRange;

/// Trait defining the host text-control interface.
pub trait TextControl {
    // =========================================================================
    // Focus
    // =========================================================================

    /// Give the control keyboard focus.
    fn focus(&mut self);

    /// Remove keyboard focus from the control.
    fn blur(&mut self);

    /// Returns `true` if the control currently has focus.
    fn has_focus(&self) -> bool;

    // =========================================================================
    // Selection
    // =========================================================================

    /// Current selection (a collapsed range for a bare caret).
    fn selection(&self) -> SelectionRange;

    /// Replace the selection.
    fn set_selection(&mut self, selection: SelectionRange);

    /// Place a bare caret.
    #[inline]
    fn set_caret(&mut self, pos: usize) {
        self.set_selection(SelectionRange::caret(pos));
    }
}

// =============================================================================
// Implementation for MemoryControl
// =============================================================================

impl TextControl for crate::store::MemoryControl {
    #[inline]
    fn focus(&mut self) {
        crate::store::MemoryControl::focus(self)
    }

    #[inline]
    fn blur(&mut self) {
        crate::store::MemoryControl::blur(self)
    }

    #[inline]
    fn has_focus(&self) -> bool {
        crate::store::MemoryControl::has_focus(self)
    }

    #[inline]
    fn selection(&self) -> SelectionRange {
        crate::store::MemoryControl::selection(self)
    }

    #[inline]
    fn set_selection(&mut self, selection: SelectionRange) {
        crate::store::MemoryControl::set_selection(self, selection)
    }
}
