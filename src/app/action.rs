#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,
    CancelMode, // ESC: close the menu, or quit when already closed

    // --- Dropdown ---
    ToggleMenu,                                // Toggle button / Tab
    TextInput(crossterm::event::KeyEvent),     // Edit the filter text
    HighlightNext,                             // Down
    HighlightPrev,                             // Up
    HighlightIndex(usize),                     // Mouse hover over a row
    SelectHighlighted,                         // Enter
    SelectIndex(usize),                        // Click on a row
    ClearSelection,                            // Clear button / Ctrl-X

    // --- Presentation ---
    CycleTheme,

    // --- Listener Results ---
    // Sent by the dropdown's change listener through the action channel
    SelectionChanged(String),
}

impl Action {
    /// Parses an action name used in custom key bindings.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "quit" => Action::Quit,
            "cancel" => Action::CancelMode,
            "toggle" => Action::ToggleMenu,
            "clear" => Action::ClearSelection,
            "select" => Action::SelectHighlighted,
            "next" => Action::HighlightNext,
            "prev" => Action::HighlightPrev,
            "theme" => Action::CycleTheme,
            _ => return None,
        };
        Some(action)
    }
}
