//! In-memory text control.
//!
//! A headless stand-in for a single-line text box: it holds the displayed
//! value, caret, selection anchor and focus flag, and performs the default
//! editing a browser would do before reporting the new text. Tests, fuzzers
//! and benchmarks drive the phone input through it.

use crate::selection::SelectionRange;
use crate::text::{clamp_to_char_boundary, next_char_boundary, prev_char_boundary};

/// Headless single-line text control.
///
/// # Example
///
/// ```
/// use input_core::{MemoryControl, SelectionRange};
///
/// let mut control = MemoryControl::new("+1 555");
/// control.set_selection(SelectionRange::caret(4));
/// control.insert_text("9");
///
/// assert_eq!(control.value(), "+1 5955");
/// assert_eq!(control.selection(), SelectionRange::caret(5));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryControl {
    value: String,
    caret: usize,
    selection_anchor: Option<usize>,
    focused: bool,
}

impl MemoryControl {
    /// A control showing `value` with the caret at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let caret = value.len();
        Self {
            value,
            caret,
            selection_anchor: None,
            focused: false,
        }
    }

    /// The displayed text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current caret byte index.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Re-render with a new value.
    ///
    /// The caret and anchor are clamped to the new text; the selection
    /// survives when it still fits.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.clamp_state();
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.clamp_state();
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.clamp_state();
        self.selection_anchor = None;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn selection(&self) -> SelectionRange {
        match self.selection_anchor {
            Some(anchor) => SelectionRange::new(anchor, self.caret),
            None => SelectionRange::caret(self.caret),
        }
    }

    /// Replace the selection; the caret ends up at `selection.end`.
    pub fn set_selection(&mut self, selection: SelectionRange) {
        let start = clamp_to_char_boundary(&self.value, selection.start);
        let end = clamp_to_char_boundary(&self.value, selection.end);
        self.caret = end;
        self.selection_anchor = (start != end).then_some(start);
    }

    /// Type `s` at the caret, replacing any selection.
    pub fn insert_text(&mut self, s: &str) {
        self.clamp_state();
        self.delete_selection_if_any();

        let caret = self.caret;
        self.value.insert_str(caret, s);
        self.caret = clamp_to_char_boundary(&self.value, caret + s.len());
    }

    /// Replace the whole value, as autofill does. The caret goes to the end.
    pub fn replace_all(&mut self, s: &str) {
        self.value.clear();
        self.value.push_str(s);
        self.caret = self.value.len();
        self.selection_anchor = None;
    }

    /// Delete the selection or the character before the caret.
    pub fn backspace(&mut self) {
        self.clamp_state();
        if self.delete_selection_if_any() || self.caret == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.value, self.caret);
        self.value.drain(prev..self.caret);
        self.caret = prev;
    }

    /// Delete the selection or the character after the caret.
    pub fn delete(&mut self) {
        self.clamp_state();
        if self.delete_selection_if_any() || self.caret >= self.value.len() {
            return;
        }
        let next = next_char_boundary(&self.value, self.caret);
        self.value.drain(self.caret..next);
    }

    fn delete_selection_if_any(&mut self) -> bool {
        let sel = self.selection();
        self.selection_anchor = None;
        if sel.is_collapsed() {
            return false;
        }
        self.value.drain(sel.start..sel.end);
        self.caret = sel.start;
        true
    }

    fn clamp_state(&mut self) {
        self.caret = clamp_to_char_boundary(&self.value, self.caret);
        if let Some(a) = self.selection_anchor {
            let a = clamp_to_char_boundary(&self.value, a);
            // A collapsed selection clears the anchor to avoid a "sticky" selection.
            self.selection_anchor = (a != self.caret).then_some(a);
        }
    }
}
