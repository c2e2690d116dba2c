//! Draft text binding for the goal input field
//!
//! Holds the in-progress goal text and a cursor. No validation happens here;
//! the add transition decides whether the draft is acceptable.

use ratatui::text::Span;
use tracing::trace;

/// Input binder: owns the draft text
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputBinder {
    text: String,
    /// Byte offset, always on a char boundary
    cursor: usize,
}

impl InputBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the draft verbatim and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
        trace!(len = self.text.len(), "InputBinder::set_text: called");
    }

    /// Clear the draft
    pub fn reset(&mut self) {
        trace!("InputBinder::reset: called");
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert text at the cursor (typed char or paste)
    pub fn insert_str(&mut self, s: &str) {
        let mut next = self.text.clone();
        next.insert_str(self.cursor, s);
        let cursor = self.cursor + s.len();
        self.set_text(next);
        self.cursor = cursor;
    }

    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.prev_char_boundary(self.cursor);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let end = self.next_char_boundary(self.cursor);
        self.text.drain(self.cursor..end);
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_char_boundary(self.cursor);
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Display width of the text before the cursor, in terminal columns
    pub fn cursor_column(&self) -> usize {
        Span::raw(&self.text[..self.cursor]).width()
    }

    fn prev_char_boundary(&self, pos: usize) -> usize {
        let mut new_pos = pos.saturating_sub(1);
        while new_pos > 0 && !self.text.is_char_boundary(new_pos) {
            new_pos -= 1;
        }
        new_pos
    }

    fn next_char_boundary(&self, pos: usize) -> usize {
        let mut new_pos = pos + 1;
        while new_pos < self.text.len() && !self.text.is_char_boundary(new_pos) {
            new_pos += 1;
        }
        new_pos.min(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_is_verbatim() {
        let mut input = InputBinder::new();
        input.set_text("  spaced  ");
        assert_eq!(input.text(), "  spaced  ");
        assert_eq!(input.cursor(), 10);
    }

    #[test]
    fn test_reset() {
        let mut input = InputBinder::new();
        input.set_text("Buy milk");
        input.reset();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = InputBinder::new();
        for c in "Walk dg".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.insert_char('o');
        assert_eq!(input.text(), "Walk dog");

        input.move_home();
        input.delete();
        assert_eq!(input.text(), "alk dog");

        input.move_end();
        input.backspace();
        assert_eq!(input.text(), "alk do");
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut input = InputBinder::new();
        input.set_text("café");
        input.backspace();
        assert_eq!(input.text(), "caf");

        input.set_text("añb");
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor_column(), 1);
        input.delete();
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        let mut input = InputBinder::new();
        input.set_text("日本語");
        assert_eq!(input.cursor_column(), 6);

        input.move_left();
        assert_eq!(input.cursor_column(), 4);

        input.set_text("a日b");
        input.move_left();
        assert_eq!(input.cursor_column(), 3);
    }

    #[test]
    fn test_insert_str_at_cursor() {
        let mut input = InputBinder::new();
        input.set_text("Buy ");
        input.move_home();
        input.insert_str(">> ");
        assert_eq!(input.text(), ">> Buy ");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_edges_are_noops() {
        let mut input = InputBinder::new();
        input.backspace();
        input.delete();
        input.move_left();
        input.move_right();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
