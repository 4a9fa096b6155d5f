use super::{action::Action, state::AppState};
use crate::theme::Theme;
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: Action) {
    match action {
        // --- Dropdown ---
        Action::ToggleMenu => state.dropdown.on_toggle(),
        Action::TextInput(key) => {
            state.dropdown.on_text_key(key);
        }
        Action::HighlightNext => state.dropdown.highlight_next(),
        Action::HighlightPrev => state.dropdown.highlight_prev(),
        Action::HighlightIndex(i) => {
            if state.dropdown.is_open() {
                state.dropdown.highlight(i);
            }
        }
        Action::SelectHighlighted => {
            if !state.dropdown.select_highlighted() {
                debug!("nothing highlighted to select");
            }
        }
        Action::SelectIndex(i) => {
            if state.dropdown.is_open() {
                state.dropdown.on_item_select(i);
            }
        }
        Action::ClearSelection => state.dropdown.on_clear(),

        // --- Mode Switching ---
        Action::CancelMode => {
            if state.dropdown.is_open() {
                state.dropdown.close();
            } else {
                state.should_quit = true;
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Listener Results ---
        Action::SelectionChanged(value) => {
            info!(%value, "selection changed");
            state.record_change(value);
        }

        // --- Presentation ---
        Action::CycleTheme => {
            state.palette_type = state.palette_type.next();
            state.theme = Theme::from_palette_type(state.palette_type);
            state.status_message = Some(format!("Theme: {}", state.palette_type.label()));
        }

        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Resize(..) => {}
    }
}
