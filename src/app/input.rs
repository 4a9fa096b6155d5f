use crate::app::{action::Action, state::AppState, ui};
use crate::components::DropdownHit;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if let Some(action) = app_state.keymap.get_action(key) {
                return Some(action);
            }
            match key.code {
                KeyCode::Char(_)
                | KeyCode::Backspace
                | KeyCode::Delete
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Home
                | KeyCode::End => Some(Action::TextInput(key)),
                _ => None,
            }
        }
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let layout = ui::get_layout(area, app_state);
            let dropdown = &layout.dropdown;

            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    match dropdown.hit(mouse.column, mouse.row)? {
                        DropdownHit::Toggle => Some(Action::ToggleMenu),
                        DropdownHit::Clear => Some(Action::ClearSelection),
                        DropdownHit::Item(i) => Some(Action::SelectIndex(i)),
                        DropdownHit::Input => None,
                    }
                }
                MouseEventKind::Moved => match dropdown.hit(mouse.column, mouse.row)? {
                    DropdownHit::Item(i)
                        if app_state.dropdown.highlighted_index() != Some(i) =>
                    {
                        Some(Action::HighlightIndex(i))
                    }
                    _ => None,
                },
                MouseEventKind::ScrollDown if dropdown.menu_contains(mouse.column, mouse.row) => {
                    Some(Action::HighlightNext)
                }
                MouseEventKind::ScrollUp if dropdown.menu_contains(mouse.column, mouse.row) => {
                    Some(Action::HighlightPrev)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    const SIZE: Size = Size {
        width: 80,
        height: 24,
    };

    #[test]
    fn test_keys() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(press(KeyCode::Tab), &state, SIZE),
            Some(Action::ToggleMenu)
        );
        assert_eq!(
            map_event_to_action(press(KeyCode::Char('o')), &state, SIZE),
            Some(Action::TextInput(KeyEvent::new(
                KeyCode::Char('o'),
                KeyModifiers::NONE
            )))
        );
        assert_eq!(map_event_to_action(press(KeyCode::PageUp), &state, SIZE), None);
    }

    #[test]
    fn test_release_is_ignored() {
        let state = AppState::default();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(key), &state, SIZE), None);
    }

    #[test]
    fn test_mouse_on_dropdown_elements() {
        let mut state = AppState::default();
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let layout = ui::get_layout(area, &state);
        let toggle = layout.dropdown.toggle;
        let clear = layout.dropdown.clear;

        assert_eq!(
            map_event_to_action(click(toggle.x + 1, toggle.y + 1), &state, SIZE),
            Some(Action::ToggleMenu)
        );
        assert_eq!(
            map_event_to_action(click(clear.x + 1, clear.y + 1), &state, SIZE),
            Some(Action::ClearSelection)
        );

        state.dropdown.on_toggle();
        let layout = ui::get_layout(area, &state);
        let (_, row) = layout.dropdown.items[3];
        assert_eq!(
            map_event_to_action(click(row.x, row.y), &state, SIZE),
            Some(Action::SelectIndex(3))
        );

        let hover = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: row.x,
            row: row.y,
            modifiers: KeyModifiers::empty(),
        });
        assert_eq!(
            map_event_to_action(hover, &state, SIZE),
            Some(Action::HighlightIndex(3))
        );
    }
}
