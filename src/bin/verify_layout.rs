use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use picklist::app::action::Action;
use picklist::app::reducer::update;
use picklist::app::state::AppState;
use picklist::app::ui;
use picklist::domain::DropdownOption;
use ratatui::{backend::TestBackend, Terminal};

fn sweep(app_state: &AppState) {
    for width in 0..100 {
        for height in 0..50 {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            let _ = terminal.draw(|f| {
                ui::draw(f, app_state);
            });
        }
    }
}

fn main() {
    let options: Vec<DropdownOption> = (0..40)
        .map(|i| DropdownOption::new(format!("Option number {i} with a long label")))
        .collect();
    let mut app_state = AppState::with_options(options);

    // Closed
    sweep(&app_state);

    // Open, highlight near the end of a long list
    update(&mut app_state, Action::ToggleMenu);
    for _ in 0..35 {
        update(&mut app_state, Action::HighlightNext);
    }
    sweep(&app_state);

    // Filtered with text longer than the input
    for c in "Option number 1".chars() {
        update(
            &mut app_state,
            Action::TextInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        );
    }
    update(&mut app_state, Action::HighlightPrev);
    sweep(&app_state);

    // Selected with history
    update(&mut app_state, Action::SelectHighlighted);
    update(&mut app_state, Action::SelectionChanged("Option number 19".to_string()));
    sweep(&app_state);

    // Empty list, menu open
    let mut empty = AppState::with_options(Vec::new());
    update(&mut empty, Action::ToggleMenu);
    sweep(&empty);

    println!("Layout verification completed successfully!");
}
