use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::history::ChangeHistory;
use crate::components::{DropdownLayout, DropdownView};

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    Frame,
};

pub struct AppLayout {
    pub main: Vec<Rect>,
    pub body: Vec<Rect>,
    pub dropdown: DropdownLayout,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area)
        .to_vec();

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Percentage(35)])
        .split(main[1])
        .to_vec();

    let dropdown_area = body[0].inner(Margin::new(1, 1));
    let dropdown = &app_state.dropdown;
    let dropdown = DropdownLayout::compute(
        dropdown_area,
        dropdown.item_props().len(),
        dropdown.is_open(),
        dropdown.highlighted_index(),
    );

    AppLayout {
        main,
        body,
        dropdown,
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = &app_state.theme;
    let layout = get_layout(f.area(), app_state);

    // --- Header ---
    f.render_widget(
        Header {
            option_count: app_state.dropdown.options().len(),
            theme_label: app_state.palette_type.label(),
            theme,
        },
        layout.main[0],
    );

    // --- Dropdown ---
    f.render_widget(
        DropdownView {
            dropdown: &app_state.dropdown,
            theme,
            focused: true,
        },
        layout.body[0].inner(Margin::new(1, 1)),
    );

    // --- Change History ---
    if layout.body[1].width > 0 && layout.body[1].height > 0 {
        f.render_widget(
            ChangeHistory {
                records: &app_state.history,
                theme,
            },
            layout.body[1],
        );
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.main[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer::update;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_initial_screen() {
        let state = AppState::default();
        let text = screen(&state, 80, 24);
        assert!(text.contains("PICKLIST"));
        assert!(text.contains("5 options"));
        assert!(text.contains("nothing selected yet"));
        assert!(text.contains("READY"));
    }

    #[test]
    fn test_history_after_selection() {
        let mut state = AppState::default();
        update(&mut state, Action::SelectionChanged("Three".to_string()));
        let text = screen(&state, 80, 24);
        assert!(text.contains("Selected: Three"));
        assert!(text.contains("Three"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::default();
        update(&mut state, Action::ToggleMenu);
        update(&mut state, Action::HighlightPrev);
        for (w, h) in [(1, 1), (3, 2), (10, 4), (30, 6)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|f| draw(f, &state)).unwrap();
        }
    }
}
