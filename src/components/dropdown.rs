use crate::domain::{filter_options, DropdownOption};
use crate::engine::{Autocomplete, InteractionEngine};
use crossterm::event::KeyEvent;
use tracing::{debug, info};

/// Receives the chosen value on select, or `""` on clear.
#[cfg_attr(test, mockall::automock)]
pub trait ChangeListener {
    fn on_change(&mut self, value: &str);
}

impl<F> ChangeListener for F
where
    F: FnMut(&str),
{
    fn on_change(&mut self, value: &str) {
        self(value);
    }
}

/// Render-time view of one visible row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemProps<'a> {
    /// Position in the full option list; rows are keyed by it.
    pub key: usize,
    pub label: &'a str,
    pub is_highlighted: bool,
    pub is_selected: bool,
}

/// Filterable selector over a fixed option list.
pub struct Dropdown<E = Autocomplete> {
    options: Vec<DropdownOption>,
    engine: E,
    on_change: Option<Box<dyn ChangeListener + Send>>,
}

impl Dropdown<Autocomplete> {
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self::with_engine(options, Autocomplete::new())
    }
}

impl<E: InteractionEngine> Dropdown<E> {
    pub fn with_engine(options: Vec<DropdownOption>, engine: E) -> Self {
        Self {
            options,
            engine,
            on_change: None,
        }
    }

    #[must_use]
    pub fn on_change(mut self, listener: impl ChangeListener + Send + 'static) -> Self {
        self.set_on_change(listener);
        self
    }

    pub fn set_on_change(&mut self, listener: impl ChangeListener + Send + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_open(&self) -> bool {
        self.engine.is_open()
    }

    pub fn input_value(&self) -> &str {
        self.engine.input_value()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.engine.highlighted_index()
    }

    pub fn selected_item(&self) -> Option<&DropdownOption> {
        self.engine.selected_item()
    }

    /// Option-list positions matching the current text, recomputed per call.
    pub fn visible(&self) -> Vec<usize> {
        filter_options(&self.options, self.engine.input_value())
    }

    /// Rows to draw; empty while the menu is closed.
    pub fn item_props(&self) -> Vec<ItemProps<'_>> {
        if !self.engine.is_open() {
            return Vec::new();
        }
        let highlighted = self.engine.highlighted_index();
        let selected = self.engine.selected_key();
        self.visible()
            .into_iter()
            .enumerate()
            .map(|(index, key)| ItemProps {
                key,
                label: &self.options[key].value,
                is_highlighted: highlighted == Some(index),
                is_selected: selected == Some(key),
            })
            .collect()
    }

    pub fn on_text_key(&mut self, key: KeyEvent) -> bool {
        self.engine.input_key(key)
    }

    pub fn on_text_change(&mut self, text: &str) {
        self.engine.change_input(text);
    }

    pub fn on_toggle(&mut self) {
        self.engine.toggle_menu();
        debug!(open = self.engine.is_open(), "menu toggled");
    }

    pub fn close(&mut self) {
        self.engine.close_menu();
    }

    pub fn highlight(&mut self, index: usize) {
        let count = self.visible().len();
        self.engine.highlight(Some(index), count);
    }

    pub fn highlight_next(&mut self) {
        let count = self.visible().len();
        self.engine.highlight_next(count);
    }

    pub fn highlight_prev(&mut self) {
        let count = self.visible().len();
        self.engine.highlight_prev(count);
    }

    /// Selects the row at `index` of the visible list.
    pub fn on_item_select(&mut self, index: usize) -> bool {
        let Some(key) = self.visible().get(index).copied() else {
            return false;
        };
        let option = self.options[key].clone();
        info!(value = %option.value, key, "item selected");
        self.engine.select_item(key, option.clone());
        self.notify(&option.value);
        true
    }

    pub fn select_highlighted(&mut self) -> bool {
        if !self.engine.is_open() {
            return false;
        }
        match self.engine.highlighted_index() {
            Some(index) => self.on_item_select(index),
            None => false,
        }
    }

    pub fn on_clear(&mut self) {
        info!("selection cleared");
        self.engine.clear_selection();
        self.notify("");
    }

    fn notify(&mut self, value: &str) {
        if let Some(listener) = &mut self.on_change {
            listener.on_change(value);
        }
    }
}

impl<E: InteractionEngine + std::fmt::Debug> std::fmt::Debug for Dropdown<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("options", &self.options)
            .field("engine", &self.engine)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}
