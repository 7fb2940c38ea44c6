use ropey::{Rope, RopeSlice};

use crate::toolbar::{Selection, SelectionError, TextSurface};

/// Cursor position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, in chars within the line.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope data structure.
///
/// Positions are char offsets into the rope. The caret is the selection
/// head; when an anchor is set the text between anchor and head is selected.
pub struct EditorBuffer {
    rope: Rope,
    head: usize,
    anchor: Option<usize>,
    /// Remembered column for vertical movement (sticky column).
    col_memory: usize,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            head: 0,
            anchor: None,
            col_memory: 0,
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The caret position as line and column.
    pub fn cursor(&self) -> Cursor {
        let line = self.rope.char_to_line(self.head);
        Cursor {
            line,
            col: self.head - self.rope.line_to_char(line),
        }
    }

    /// The caret as a char offset.
    pub const fn offset(&self) -> usize {
        self.head
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line, without the line break that ends it.
    ///
    /// The break set is the rope's own: LF, CR, CRLF, VT, FF, NEL, U+2028
    /// and U+2029.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let end = line.len_chars() - line_break_len(line);
        Some(line.slice(..end).to_string())
    }

    /// Char offset where a line begins, clamped to the buffer.
    pub fn line_start(&self, line_idx: usize) -> usize {
        self.rope.line_to_char(line_idx.min(self.rope.len_lines()))
    }

    /// Every line, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|idx| self.line_at(idx))
            .collect()
    }

    /// Length of a line in chars, without its line break.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        line.len_chars() - line_break_len(line)
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The selected range, `None` for a bare caret.
    pub fn selection_range(&self) -> Option<Selection> {
        self.anchor
            .filter(|&anchor| anchor != self.head)
            .map(|anchor| Selection::new(anchor, self.head))
    }

    /// Select `start..end`, leaving the caret at `end`.
    ///
    /// # Errors
    ///
    /// Fails when the range is inverted or reaches past the end of the buffer.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), SelectionError> {
        let sel = Selection::try_new(start, end, self.len_chars())?;
        self.anchor = Some(sel.start());
        self.set_head(sel.end());
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.anchor = Some(0);
        self.set_head(self.len_chars());
    }

    pub const fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Insert `text` at char `offset`, shifting the caret and anchor along
    /// when they sit at or after the insertion point.
    pub fn insert_at(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = self.outside_crlf(offset.min(self.len_chars()));
        self.rope.insert(offset, text);
        let added = text.chars().count();
        if self.head >= offset {
            self.head = self.outside_crlf(self.head + added);
        }
        if let Some(anchor) = self.anchor
            && anchor >= offset
        {
            self.anchor = Some(self.outside_crlf(anchor + added));
        }
        self.col_memory = self.cursor().col;
        self.dirty = true;
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut tmp));
    }

    /// Insert a string at the cursor position, collapsing any selection.
    pub fn insert_str(&mut self, s: &str) {
        self.anchor = None;
        self.insert_at(self.head, s);
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the selection, or the character before the cursor (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.head == 0 {
            return false;
        }
        let mut start = self.head - 1;
        if start > 0 && self.rope.char(start) == '\n' && self.rope.char(start - 1) == '\r' {
            start -= 1;
        }
        self.rope.remove(start..self.head);
        self.set_head(start);
        self.dirty = true;
        true
    }

    /// Delete the selection, or the character at the cursor (Delete key).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.head >= self.len_chars() {
            return false;
        }
        let mut end = self.head + 1;
        if end < self.len_chars()
            && self.rope.char(self.head) == '\r'
            && self.rope.char(end) == '\n'
        {
            end += 1;
        }
        self.rope.remove(self.head..end);
        // A lone CR and LF that meet here now form one CRLF break.
        self.set_head(self.head);
        self.dirty = true;
        true
    }

    /// Move the cursor in the given direction, dropping any selection.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.anchor = None;
        self.step(direction);
    }

    /// Move the cursor in the given direction, growing the selection.
    pub fn extend_selection(&mut self, direction: Direction) {
        if self.anchor.is_none() {
            self.anchor = Some(self.head);
        }
        self.step(direction);
    }

    /// Move cursor to the beginning of the line (Home).
    pub fn move_home(&mut self) {
        let line = self.cursor().line;
        self.anchor = None;
        self.set_head(self.rope.line_to_char(line));
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        let line = self.cursor().line;
        self.anchor = None;
        self.set_head(self.rope.line_to_char(line) + self.line_len(line));
    }

    /// Move cursor one word to the left (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        self.anchor = None;
        let Cursor { line, col } = self.cursor();
        if col == 0 {
            if line > 0 {
                self.move_to(line - 1, self.line_len(line - 1));
            }
            return;
        }

        let chars: Vec<char> = self.line_at(line).unwrap_or_default().chars().collect();
        let mut pos = col.min(chars.len());
        while pos > 0 && !is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        self.move_to(line, pos);
    }

    /// Move cursor one word to the right (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        self.anchor = None;
        let Cursor { line, col } = self.cursor();
        let chars: Vec<char> = self.line_at(line).unwrap_or_default().chars().collect();
        if col >= chars.len() {
            if line + 1 < self.line_count() {
                self.move_to(line + 1, 0);
            }
            return;
        }

        let mut pos = col.min(chars.len());
        while pos < chars.len() && is_word_char(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !is_word_char(chars[pos]) {
            pos += 1;
        }
        self.move_to(line, pos);
    }

    /// Move cursor to a specific line and column, clamped to the buffer.
    pub fn move_to(&mut self, line: usize, col: usize) {
        self.anchor = None;
        self.place(line, col);
    }

    /// Extend the selection to a specific line and column (mouse drag).
    pub fn drag_to(&mut self, line: usize, col: usize) {
        if self.anchor.is_none() {
            self.anchor = Some(self.head);
        }
        self.place(line, col);
    }

    /// Move cursor to the start of the buffer (Ctrl+Home).
    pub fn move_to_start(&mut self) {
        self.anchor = None;
        self.set_head(0);
    }

    /// Move cursor to the end of the buffer (Ctrl+End).
    pub fn move_to_end(&mut self) {
        self.anchor = None;
        self.set_head(self.len_chars());
    }

    // --- Private helpers ---

    fn place(&mut self, line: usize, col: usize) {
        let line = line.min(self.line_count().saturating_sub(1));
        let col = col.min(self.line_len(line));
        self.set_head(self.rope.line_to_char(line) + col);
    }

    fn set_head(&mut self, offset: usize) {
        self.head = self.outside_crlf(offset.min(self.len_chars()));
        self.col_memory = self.cursor().col;
    }

    /// `offset`, moved back to the CR when it falls inside a CRLF pair.
    fn outside_crlf(&self, offset: usize) -> usize {
        if offset > 0
            && offset < self.len_chars()
            && self.rope.char(offset - 1) == '\r'
            && self.rope.char(offset) == '\n'
        {
            offset - 1
        } else {
            offset
        }
    }

    fn delete_selection(&mut self) -> bool {
        let Some(sel) = self.selection_range() else {
            self.anchor = None;
            return false;
        };
        self.rope.remove(sel.start()..sel.end());
        self.anchor = None;
        self.set_head(sel.start());
        self.dirty = true;
        true
    }

    fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_vertical(false),
            Direction::Down => self.move_vertical(true),
        }
    }

    fn move_left(&mut self) {
        let Cursor { line, col } = self.cursor();
        if col > 0 {
            self.set_head(self.head - 1);
        } else if line > 0 {
            self.place(line - 1, self.line_len(line - 1));
        }
    }

    fn move_right(&mut self) {
        let Cursor { line, col } = self.cursor();
        if col < self.line_len(line) {
            self.set_head(self.head + 1);
        } else if line + 1 < self.line_count() {
            self.place(line + 1, 0);
        }
    }

    fn move_vertical(&mut self, down: bool) {
        let line = self.cursor().line;
        let target = if down {
            if line + 1 >= self.line_count() {
                return;
            }
            line + 1
        } else {
            if line == 0 {
                return;
            }
            line - 1
        };
        let memory = self.col_memory;
        let col = memory.min(self.line_len(target));
        self.head = self.rope.line_to_char(target) + col;
        self.col_memory = memory;
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Chars of `line` taken up by its trailing line break.
fn line_break_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len >= 2 && line.char(len - 2) == '\r' && line.char(len - 1) == '\n' {
        2
    } else if len >= 1
        && matches!(
            line.char(len - 1),
            '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    {
        1
    } else {
        0
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl TextSurface for EditorBuffer {
    fn selection(&self) -> Option<Selection> {
        Some(
            self.selection_range()
                .unwrap_or_else(|| Selection::caret(self.head)),
        )
    }

    fn slice(&self, selection: Selection) -> String {
        let sel = selection.clamp_to(self.len_chars());
        self.rope.slice(sel.start()..sel.end()).to_string()
    }

    fn insert_at(&mut self, offset: usize, text: &str) {
        Self::insert_at(self, offset, text);
    }

    fn set_cursor(&mut self, offset: usize) {
        self.anchor = None;
        self.set_head(offset);
    }

    fn len_chars(&self) -> usize {
        Self::len_chars(self)
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("head", &self.head)
            .field("anchor", &self.anchor)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_from_text_preserves_content() {
        let buf = EditorBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(buf.line_at(1), Some("world".to_string()));
    }

    #[test]
    fn test_from_text_trailing_newline() {
        let buf = EditorBuffer::from_text("hello\n");
        assert_eq!(buf.lines(), vec!["hello".to_string(), String::new()]);
    }

    #[test]
    fn test_line_at_out_of_bounds_returns_none() {
        let buf = EditorBuffer::from_text("hello");
        assert_eq!(buf.line_at(1), None);
    }

    #[test]
    fn test_line_len_counts_chars() {
        let buf = EditorBuffer::from_text("héllo\nhi");
        assert_eq!(buf.line_len(0), 5);
        assert_eq!(buf.line_len(1), 2);
    }

    #[test]
    fn test_cursor_starts_at_origin() {
        let buf = EditorBuffer::from_text("hello\nworld");
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
        assert_eq!(buf.offset(), 0);
    }

    // --- Dirty tracking ---

    #[test]
    fn test_insert_marks_dirty_and_mark_clean_resets() {
        let mut buf = EditorBuffer::from_text("hello");
        assert!(!buf.is_dirty());
        buf.insert_char('!');
        assert!(buf.is_dirty());
        buf.mark_clean();
        assert!(!buf.is_dirty());
    }

    // --- Insertion ---

    #[test]
    fn test_insert_char_advances_cursor() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.insert_char('H');
        assert_eq!(buf.text(), "Hhello");
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_insert_multibyte_char() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.move_to(0, 1);
        buf.insert_char('é');
        assert_eq!(buf.text(), "aéb");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_split_line_in_middle() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_to(0, 2);
        buf.split_line();
        assert_eq!(buf.lines(), vec!["he".to_string(), "llo".to_string()]);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_insert_at_before_caret_shifts_it() {
        let mut buf = EditorBuffer::from_text("world");
        buf.move_to(0, 3);
        buf.insert_at(0, "> ");
        assert_eq!(buf.text(), "> world");
        assert_eq!(buf.offset(), 5);
    }

    #[test]
    fn test_insert_at_after_caret_leaves_it() {
        let mut buf = EditorBuffer::from_text("world");
        buf.move_to(0, 1);
        buf.insert_at(3, "**");
        assert_eq!(buf.text(), "wor**ld");
        assert_eq!(buf.offset(), 1);
    }

    #[test]
    fn test_insert_at_keeps_selection_on_same_text() {
        let mut buf = EditorBuffer::from_text("say hi");
        buf.select(4, 6).unwrap();
        buf.insert_at(0, "> ");
        let sel = buf.selection_range().unwrap();
        assert_eq!(buf.slice(sel), "hi");
    }

    #[test]
    fn test_insert_at_past_end_appends() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.insert_at(10, "c");
        assert_eq!(buf.text(), "abc");
    }

    // --- Deletion ---

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        assert!(!buf.delete_back());
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_delete_back_joins_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_delete_back_removes_crlf_together() {
        let mut buf = EditorBuffer::from_text("ab\r\ncd");
        buf.move_to(1, 0);
        buf.delete_back();
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn test_delete_forward_removes_crlf_together() {
        let mut buf = EditorBuffer::from_text("ab\r\ncd");
        buf.move_to(0, 2);
        buf.delete_forward();
        assert_eq!(buf.text(), "abcd");
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_lone_cr_is_a_line_break() {
        let buf = EditorBuffer::from_text("a\rx\nb");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(
            buf.lines(),
            vec!["a".to_string(), "x".to_string(), "b".to_string()]
        );
        assert_eq!(buf.line_len(0), 1);
    }

    #[test]
    fn test_unicode_line_separator_is_a_line_break() {
        let mut buf = EditorBuffer::from_text("one\u{2028}two\u{2029}");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line_at(0), Some("one".to_string()));
        assert_eq!(buf.line_at(1), Some("two".to_string()));
        assert_eq!(buf.line_len(1), 3);

        buf.move_to(0, 10);
        assert_eq!(buf.cursor(), Cursor::at(0, 3));
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
        buf.move_word_left();
        assert_eq!(buf.cursor(), Cursor::at(0, 3));
    }

    #[test]
    fn test_backspace_joining_cr_and_lf_keeps_caret_before_pair() {
        let mut buf = EditorBuffer::from_text("a\rx\nb");
        buf.move_to(1, 1);
        assert!(buf.delete_back());

        assert_eq!(buf.text(), "a\r\nb");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
        assert!(buf.cursor().col <= buf.line_len(0));

        buf.move_word_left();
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
        buf.move_to(0, 1);
        buf.move_word_right();
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_delete_forward_joining_cr_and_lf_keeps_caret_before_pair() {
        let mut buf = EditorBuffer::from_text("a\rx\nb");
        buf.move_to(1, 0);
        assert!(buf.delete_forward());

        assert_eq!(buf.text(), "a\r\nb");
        assert_eq!(buf.offset(), 1);
        buf.insert_str("**");
        assert_eq!(buf.text(), "a**\r\nb");
    }

    #[test]
    fn test_insert_inside_crlf_lands_before_it() {
        let mut buf = EditorBuffer::from_text("a\r\nb");
        buf.insert_at(2, "*");
        assert_eq!(buf.text(), "a*\r\nb");
    }

    #[test]
    fn test_delete_back_multibyte() {
        let mut buf = EditorBuffer::from_text("aé");
        buf.move_to_end();
        buf.delete_back();
        assert_eq!(buf.text(), "a");
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = EditorBuffer::from_text("hi");
        buf.move_to_end();
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_delete_forward_joins_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        buf.delete_forward();
        assert_eq!(buf.text(), "abcd");
    }

    #[test]
    fn test_delete_back_removes_selection() {
        let mut buf = EditorBuffer::from_text("one two three");
        buf.select(4, 8).unwrap();
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "one three");
        assert_eq!(buf.offset(), 4);
        assert_eq!(buf.selection_range(), None);
    }

    // --- Movement ---

    #[test]
    fn test_move_left_wraps_to_prev_line() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_move_right_wraps_to_next_line() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(0, 2);
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_right_at_end_is_noop() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.move_to_end();
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
    }

    #[test]
    fn test_move_up_at_first_line_is_noop() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(0, 1);
        buf.move_cursor(Direction::Up);
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_column_memory_across_short_line() {
        let mut buf = EditorBuffer::from_text("hello\nhi\nworld");
        buf.move_to(0, 4);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor(), Cursor::at(2, 4));
    }

    #[test]
    fn test_move_home_and_end() {
        let mut buf = EditorBuffer::from_text("ab\ncdef");
        buf.move_to(1, 2);
        buf.move_home();
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
        buf.move_end();
        assert_eq!(buf.cursor(), Cursor::at(1, 4));
    }

    #[test]
    fn test_move_word_left_and_right() {
        let mut buf = EditorBuffer::from_text("hello big world");
        buf.move_to(0, 8);
        buf.move_word_left();
        assert_eq!(buf.cursor(), Cursor::at(0, 6));
        buf.move_word_right();
        assert_eq!(buf.cursor(), Cursor::at(0, 10));
    }

    #[test]
    fn test_move_to_clamps() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(9, 9);
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
    }

    // --- Selection ---

    #[test]
    fn test_select_validates_range() {
        let mut buf = EditorBuffer::from_text("abc");
        assert_eq!(
            buf.select(2, 1),
            Err(SelectionError::Inverted { start: 2, end: 1 })
        );
        assert_eq!(
            buf.select(0, 4),
            Err(SelectionError::OutOfBounds { offset: 4, len: 3 })
        );
        assert!(buf.select(0, 3).is_ok());
        assert_eq!(buf.offset(), 3);
    }

    #[test]
    fn test_extend_selection_backwards() {
        let mut buf = EditorBuffer::from_text("abcd");
        buf.move_to(0, 3);
        buf.extend_selection(Direction::Left);
        buf.extend_selection(Direction::Left);
        assert_eq!(buf.selection_range(), Some(Selection::new(1, 3)));
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.selection_range(), None);
    }

    #[test]
    fn test_drag_to_selects_across_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(0, 1);
        buf.drag_to(1, 1);
        let sel = buf.selection_range().unwrap();
        assert_eq!(buf.slice(sel), "b\nc");
    }

    #[test]
    fn test_select_all() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.select_all();
        assert_eq!(buf.selection_range(), Some(Selection::new(0, 5)));
    }

    // --- Text surface ---

    #[test]
    fn test_surface_reports_caret_when_nothing_selected() {
        let mut buf = EditorBuffer::from_text("abc");
        buf.move_to(0, 2);
        assert_eq!(TextSurface::selection(&buf), Some(Selection::caret(2)));
    }

    #[test]
    fn test_surface_set_cursor_collapses_selection() {
        let mut buf = EditorBuffer::from_text("abc");
        buf.select(0, 3).unwrap();
        buf.set_cursor(1);
        assert_eq!(buf.selection_range(), None);
        assert_eq!(buf.offset(), 1);
    }

    #[test]
    fn test_type_then_backspace_then_type() {
        let mut buf = EditorBuffer::empty();
        buf.insert_str("helo");
        buf.delete_back();
        buf.insert_str("lo");
        assert_eq!(buf.text(), "hello");
    }
}
