//! Text selection representation.

/// Represents a text selection (or a bare caret) as a byte range.
///
/// The range is always normalized such that `start <= end`. A collapsed range
/// (`start == end`) is a caret. Offsets are byte offsets into the phone buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection at `pos`.
    #[inline]
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns `true` if the selection is a bare caret (zero-width).
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers `0..len` of a non-empty buffer.
    #[inline]
    pub fn covers_all(&self, len: usize) -> bool {
        self.start == 0 && self.end == len
    }

    /// Clamp both ends to `len`, keeping the range normalized.
    #[inline]
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_range_normalizes() {
        let range = SelectionRange::new(10, 5);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 10);
    }

    #[test]
    fn selection_range_len() {
        let range = SelectionRange::new(2, 7);
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn selection_range_is_collapsed() {
        assert!(SelectionRange::caret(3).is_collapsed());
        assert!(SelectionRange::new(3, 3).is_collapsed());
        assert!(!SelectionRange::new(3, 5).is_collapsed());
    }

    #[test]
    fn covers_all_requires_exact_bounds() {
        assert!(SelectionRange::new(0, 10).covers_all(10));
        assert!(!SelectionRange::new(1, 10).covers_all(10));
        assert!(!SelectionRange::new(0, 9).covers_all(10));
    }

    #[test]
    fn clamped_stays_in_bounds() {
        assert_eq!(SelectionRange::new(4, 40).clamped(10), SelectionRange::new(4, 10));
        assert_eq!(SelectionRange::caret(99).clamped(3), SelectionRange::caret(3));
    }
}
