//! Reusable UTF-8 safe text input state with cursor management.
//!
//! Shared by the search box and the comment form. The comment form may hold
//! line breaks; the search box never inserts one.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- Getters -----
    pub fn input(&self) -> &str {
        &self.input
    }
    /// True when the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Number of lines in the buffer; an empty buffer still has one.
    pub fn line_count(&self) -> usize {
        self.input.split('\n').count()
    }

    /// Zero-based line of the cursor.
    pub fn cursor_line(&self) -> u16 {
        self.input[..self.cursor].matches('\n').count() as u16
    }

    /// Display column of the cursor within its line, accounting for wide
    /// characters.
    pub fn cursor_column(&self) -> u16 {
        let before = &self.input[..self.cursor];
        let line_start = before.rfind('\n').map_or(0, |index| index + 1);
        before[line_start..].width() as u16
    }

    // ----- Setters -----

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    /// Returns the buffer and leaves the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.input)
    }

    // ----- Editing primitives (UTF-8 safe) -----

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(previous) = self.input[..self.cursor].chars().last() {
            self.cursor -= previous.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(previous) = self.input[..self.cursor].chars().last() {
            let start = self.cursor - previous.len_utf8();
            self.input.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.input[self.cursor..].chars().next() {
            let end = self.cursor + next.len_utf8();
            self.input.drain(self.cursor..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInputState {
        let mut st = TextInputState::new();
        text.chars().for_each(|character| st.insert_char(character));
        st
    }

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = typed("hไทยllo");
        st.move_home();
        st.move_right();
        st.insert_char('e');
        assert_eq!(st.input(), "heไทยllo");
        st.move_right();
        st.backspace();
        assert_eq!(st.input(), "heทยllo");
        st.delete();
        assert_eq!(st.input(), "heยllo");
        st.move_end();
        st.backspace();
        assert_eq!(st.input(), "heยll");
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut st = typed("日本語");
        assert_eq!(st.cursor_column(), 6);
        st.move_left();
        assert_eq!(st.cursor_column(), 4);
    }

    #[test]
    fn take_empties_the_buffer() {
        assert!(typed("  ").is_blank());
        let mut st = typed("nice docs");
        assert_eq!(st.take(), "nice docs");
        assert_eq!(st.input(), "");
        assert_eq!(st.cursor_column(), 0);
        st.insert_char('x');
        assert_eq!(st.input(), "x");
    }

    #[test]
    fn line_breaks_move_the_cursor_to_a_new_line() {
        let mut st = typed("first\nsé");
        assert_eq!(st.line_count(), 2);
        assert_eq!(st.cursor_line(), 1);
        assert_eq!(st.cursor_column(), 2);
        st.move_left();
        st.move_left();
        st.move_left();
        assert_eq!((st.cursor_line(), st.cursor_column()), (0, 5));
        assert_eq!(TextInputState::new().line_count(), 1);
    }
}
