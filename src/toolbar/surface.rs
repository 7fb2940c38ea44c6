use thiserror::Error;

/// A selected range of characters in a text surface.
///
/// Offsets count `char`s from the start of the buffer. `start <= end` always
/// holds; an empty selection is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    start: usize,
    end: usize,
}

/// Why a requested selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection start {start} is after end {end}")]
    Inverted { start: usize, end: usize },
    #[error("offset {offset} is past the end of the buffer ({len} chars)")]
    OutOfBounds { offset: usize, len: usize },
}

impl Selection {
    /// Build a selection from two offsets in either order.
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A collapsed selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Build a selection, rejecting inverted ranges and offsets past `len`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Inverted`] when `start > end` and
    /// [`SelectionError::OutOfBounds`] when `end > len`.
    pub const fn try_new(start: usize, end: usize, len: usize) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::Inverted { start, end });
        }
        if end > len {
            return Err(SelectionError::OutOfBounds { offset: end, len });
        }
        Ok(Self { start, end })
    }

    pub const fn start(self) -> usize {
        self.start
    }

    pub const fn end(self) -> usize {
        self.end
    }

    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Shrink the selection so neither bound exceeds `len`.
    pub fn clamp_to(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

/// The capabilities a host text surface lends to the toolbar.
///
/// The toolbar only ever inserts; it never deletes or replaces text.
pub trait TextSurface {
    /// The active selection, or `None` when the surface has no focus/caret.
    fn selection(&self) -> Option<Selection>;

    /// The characters covered by `selection`.
    fn slice(&self, selection: Selection) -> String;

    /// Insert `text` so its first character lands at char `offset`.
    fn insert_at(&mut self, offset: usize, text: &str);

    /// Collapse the selection to a caret at char `offset`.
    fn set_cursor(&mut self, offset: usize);

    /// Buffer length in chars.
    fn len_chars(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_offsets() {
        let sel = Selection::new(7, 3);
        assert_eq!(sel.start(), 3);
        assert_eq!(sel.end(), 7);
        assert_eq!(sel.len(), 4);
    }

    #[test]
    fn test_caret_is_empty() {
        assert!(Selection::caret(5).is_empty());
        assert_eq!(Selection::default(), Selection::caret(0));
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        assert_eq!(
            Selection::try_new(4, 2, 10),
            Err(SelectionError::Inverted { start: 4, end: 2 })
        );
    }

    #[test]
    fn test_try_new_rejects_past_end() {
        assert_eq!(
            Selection::try_new(0, 11, 10),
            Err(SelectionError::OutOfBounds { offset: 11, len: 10 })
        );
    }

    #[test]
    fn test_try_new_accepts_boundaries() {
        assert!(Selection::try_new(0, 0, 0).is_ok());
        assert!(Selection::try_new(10, 10, 10).is_ok());
    }

    #[test]
    fn test_clamp_to_shrinks_both_ends() {
        let sel = Selection::new(8, 12).clamp_to(10);
        assert_eq!(sel, Selection::new(8, 10));
        let sel = Selection::new(15, 20).clamp_to(10);
        assert_eq!(sel, Selection::caret(10));
    }

    #[test]
    fn test_error_messages() {
        let err = SelectionError::OutOfBounds { offset: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "offset 3 is past the end of the buffer (2 chars)"
        );
    }
}
