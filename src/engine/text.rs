use std::ops::Deref;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// One-line text field backed by a `TextArea`.
///
/// Line breaks never survive an edit: anything that would split the line is
/// folded back into a single row.
pub struct SingleLineInput(TextArea<'static>);

impl SingleLineInput {
    pub fn new(text: &str) -> Self {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.set_cursor_line_style(Style::default());
        area.move_cursor(CursorMove::End);
        Self(area)
    }

    pub fn value(&self) -> &str {
        self.0.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Cursor position as a char column.
    pub fn cursor(&self) -> usize {
        self.0.cursor().1
    }

    pub fn set_value(&mut self, text: &str) {
        *self = Self::new(text);
    }

    /// Feeds a key press to the field. Returns true when the text changed.
    ///
    /// A key that splits the line is undone by joining the rows again, with
    /// the cursor kept at the same place in the text.
    pub fn input(&mut self, key: crossterm::event::KeyEvent) -> bool {
        let before = self.value().to_string();
        if !self.0.input(key) {
            return false;
        }
        if self.0.lines().len() > 1 {
            let (row, col) = self.0.cursor();
            let col = self.0.lines()[..row]
                .iter()
                .map(|line| line.chars().count())
                .sum::<usize>()
                + col;
            let joined = self.0.lines().concat();
            self.set_value(&joined);
            self.0.move_cursor(CursorMove::Jump(0, col as u16));
        }
        self.value() != before
    }
}

impl Default for SingleLineInput {
    fn default() -> Self {
        Self::new("")
    }
}

impl Clone for SingleLineInput {
    fn clone(&self) -> Self {
        let mut input = Self::new(self.value());
        input
            .0
            .move_cursor(CursorMove::Jump(0, self.cursor() as u16));
        input
    }
}

impl std::fmt::Debug for SingleLineInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SingleLineInput")
            .field("value", &self.value())
            .field("cursor", &self.cursor())
            .finish()
    }
}

impl PartialEq for SingleLineInput {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value() && self.cursor() == other.cursor()
    }
}

impl Deref for SingleLineInput {
    type Target = TextArea<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = SingleLineInput::default();
        assert!(input.input(press(KeyCode::Char('T'))));
        assert!(input.input(press(KeyCode::Char('w'))));
        assert_eq!(input.value(), "Tw");
        assert!(input.input(press(KeyCode::Backspace)));
        assert_eq!(input.value(), "T");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_cursor_motion_is_not_a_modification() {
        let mut input = SingleLineInput::new("abc");
        assert!(!input.input(press(KeyCode::Left)));
        assert_eq!(input.cursor(), 2);
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_newline_is_folded_back() {
        let mut input = SingleLineInput::new("abc");
        input.input(press(KeyCode::Left));
        input.input(press(KeyCode::Left));
        assert_eq!(input.cursor(), 1);

        let changed = input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL));
        assert!(!changed);
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 1);

        assert!(!input.input(press(KeyCode::Enter)));
        assert_eq!(input.cursor(), 1);
        assert!(input.input(press(KeyCode::Char('x'))));
        assert_eq!(input.value(), "axbc");
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut input = SingleLineInput::new("x");
        input.set_value("Three");
        assert_eq!(input.value(), "Three");
        assert_eq!(input.cursor(), 5);
    }
}
