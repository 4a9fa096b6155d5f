use super::{InteractionEngine, SingleLineInput};
use crate::domain::DropdownOption;
use crossterm::event::KeyEvent;
use tracing::debug;

/// Default engine.
///
/// Highlight policy: the highlight is dropped whenever the visible list may
/// have changed (text edits, close, select, clear) and never clamped.
/// Keyboard movement wraps around the visible list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Autocomplete {
    is_open: bool,
    input: SingleLineInput,
    highlighted_index: Option<usize>,
    selected: Option<(usize, DropdownOption)>,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    fn text_changed(&mut self) {
        self.is_open = true;
        self.highlighted_index = None;
    }
}

impl InteractionEngine for Autocomplete {
    fn is_open(&self) -> bool {
        self.is_open
    }

    fn input_value(&self) -> &str {
        self.input.value()
    }

    fn cursor(&self) -> usize {
        self.input.cursor()
    }

    fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    fn selected_item(&self) -> Option<&DropdownOption> {
        self.selected.as_ref().map(|(_, item)| item)
    }

    fn selected_key(&self) -> Option<usize> {
        self.selected.as_ref().map(|(key, _)| *key)
    }

    fn toggle_menu(&mut self) {
        if self.is_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    fn open_menu(&mut self) {
        self.is_open = true;
    }

    fn close_menu(&mut self) {
        self.is_open = false;
        self.highlighted_index = None;
    }

    fn change_input(&mut self, text: &str) {
        self.input.set_value(text);
        self.text_changed();
        debug!(text, "input changed");
    }

    fn input_key(&mut self, key: KeyEvent) -> bool {
        let modified = self.input.input(key);
        if modified {
            self.text_changed();
            debug!(text = self.input.value(), "input changed");
        }
        modified
    }

    fn highlight(&mut self, index: Option<usize>, item_count: usize) {
        self.highlighted_index = index.filter(|&i| i < item_count);
    }

    fn highlight_next(&mut self, item_count: usize) {
        self.is_open = true;
        self.highlighted_index = match (item_count, self.highlighted_index) {
            (0, _) => None,
            (n, Some(i)) if i + 1 < n => Some(i + 1),
            _ => Some(0),
        };
    }

    fn highlight_prev(&mut self, item_count: usize) {
        self.is_open = true;
        self.highlighted_index = match (item_count, self.highlighted_index) {
            (0, _) => None,
            (n, Some(i)) if i > 0 && i < n => Some(i - 1),
            (n, _) => Some(n - 1),
        };
    }

    fn select_item(&mut self, key: usize, item: DropdownOption) {
        self.input.set_value(&item.value);
        self.selected = Some((key, item));
        self.close_menu();
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.input.set_value("");
        self.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MenuPhase;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_char(engine: &mut Autocomplete, c: char) {
        engine.input_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn test_initial_state_is_closed() {
        let engine = Autocomplete::new();
        assert_eq!(engine.phase(), MenuPhase::Closed);
        assert_eq!(engine.highlighted_index(), None);
        assert!(engine.selected_item().is_none());
    }

    #[test]
    fn test_phase_transitions() {
        let mut engine = Autocomplete::new();
        engine.toggle_menu();
        assert_eq!(engine.phase(), MenuPhase::OpenUnfiltered);
        type_char(&mut engine, 'o');
        assert_eq!(engine.phase(), MenuPhase::OpenFiltered);
        engine.input_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(engine.phase(), MenuPhase::OpenUnfiltered);
        engine.toggle_menu();
        assert_eq!(engine.phase(), MenuPhase::Closed);
    }

    #[test]
    fn test_typing_opens_and_drops_highlight() {
        let mut engine = Autocomplete::new();
        engine.highlight_next(5);
        engine.highlight_next(5);
        assert_eq!(engine.highlighted_index(), Some(1));
        type_char(&mut engine, 'T');
        assert!(engine.is_open());
        assert_eq!(engine.highlighted_index(), None);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut engine = Autocomplete::new();
        engine.highlight_prev(3);
        assert_eq!(engine.highlighted_index(), Some(2));
        engine.highlight_next(3);
        assert_eq!(engine.highlighted_index(), Some(0));
        engine.highlight_prev(3);
        assert_eq!(engine.highlighted_index(), Some(2));
    }

    #[test]
    fn test_highlight_out_of_range_resets() {
        let mut engine = Autocomplete::new();
        engine.open_menu();
        engine.highlight(Some(4), 2);
        assert_eq!(engine.highlighted_index(), None);
        engine.highlight(Some(1), 2);
        assert_eq!(engine.highlighted_index(), Some(1));
        engine.highlight_next(0);
        assert_eq!(engine.highlighted_index(), None);
    }

    #[test]
    fn test_moving_highlight_opens_menu() {
        let mut engine = Autocomplete::new();
        engine.highlight_next(2);
        assert!(engine.is_open());
        assert_eq!(engine.highlighted_index(), Some(0));
    }

    #[test]
    fn test_select_then_clear() {
        let mut engine = Autocomplete::new();
        engine.open_menu();
        engine.select_item(2, DropdownOption::new("Three"));
        assert!(!engine.is_open());
        assert_eq!(engine.input_value(), "Three");
        assert_eq!(engine.selected_key(), Some(2));

        engine.clear_selection();
        assert!(engine.selected_item().is_none());
        assert_eq!(engine.input_value(), "");
        assert!(!engine.is_open());
    }

    #[test]
    fn test_change_input_replaces_text() {
        let mut engine = Autocomplete::new();
        engine.change_input("Fi");
        assert_eq!(engine.input_value(), "Fi");
        assert_eq!(engine.cursor(), 2);
        assert!(engine.is_open());
    }
}
