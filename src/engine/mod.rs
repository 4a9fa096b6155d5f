//! Headless interaction state for the dropdown.
//!
//! The dropdown never tracks open/close, text, highlight or selection itself;
//! it drives an [`InteractionEngine`] and reads its state back when drawing.
//! [`Autocomplete`] is the default engine.

mod autocomplete;
pub mod text;

pub use autocomplete::Autocomplete;
pub use text::SingleLineInput;

use crate::domain::DropdownOption;
use crossterm::event::KeyEvent;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    OpenUnfiltered,
    OpenFiltered,
}

/// State machine behind the dropdown.
///
/// Highlight calls take the length of the currently visible list so that
/// `highlighted_index` always points into it.
pub trait InteractionEngine {
    fn is_open(&self) -> bool;
    fn input_value(&self) -> &str;
    /// Char column of the text cursor.
    fn cursor(&self) -> usize {
        self.input_value().chars().count()
    }
    fn highlighted_index(&self) -> Option<usize>;
    fn selected_item(&self) -> Option<&DropdownOption>;
    /// Position of the selected item in the full option list.
    fn selected_key(&self) -> Option<usize>;

    fn toggle_menu(&mut self);
    fn open_menu(&mut self);
    fn close_menu(&mut self);

    /// Replaces the text as if the user typed it.
    fn change_input(&mut self, text: &str);
    /// Returns true when the key changed the text.
    fn input_key(&mut self, key: KeyEvent) -> bool;

    fn highlight(&mut self, index: Option<usize>, item_count: usize);
    fn highlight_next(&mut self, item_count: usize);
    fn highlight_prev(&mut self, item_count: usize);

    fn select_item(&mut self, key: usize, item: DropdownOption);
    fn clear_selection(&mut self);

    fn phase(&self) -> MenuPhase {
        match (self.is_open(), self.input_value().is_empty()) {
            (false, _) => MenuPhase::Closed,
            (true, true) => MenuPhase::OpenUnfiltered,
            (true, false) => MenuPhase::OpenFiltered,
        }
    }
}
