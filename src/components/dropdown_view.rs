use super::dropdown::Dropdown;
use crate::engine::InteractionEngine;
use crate::theme::{ElementStyle, Theme, DROPDOWN_STYLES};

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Type to filter";
const SELECTED_MARK: &str = "\u{2713} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownHit {
    Input,
    Toggle,
    Clear,
    /// Position in the visible list.
    Item(usize),
}

/// Screen placement of every dropdown element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropdownLayout {
    pub form: Rect,
    pub input: Rect,
    pub toggle: Rect,
    pub clear: Rect,
    /// Empty while the menu is closed.
    pub menu: Rect,
    /// Drawn rows as `(visible index, rect)`.
    pub items: Vec<(usize, Rect)>,
}

impl DropdownLayout {
    pub fn compute(
        area: Rect,
        item_count: usize,
        is_open: bool,
        highlighted: Option<usize>,
    ) -> Self {
        let styles = &DROPDOWN_STYLES;

        let mut form = styles.form.place(area.x, area.y, area.width);
        form.height = area.height;
        let form = form.intersection(area);

        let input = styles
            .input
            .place(form.x, form.y, form.width)
            .intersection(form);
        let toggle = styles
            .toggle_button
            .place(input.right(), form.y, form.right().saturating_sub(input.right()))
            .intersection(form);
        let clear = styles
            .clear_button
            .place(toggle.right(), form.y, form.right().saturating_sub(toggle.right()))
            .intersection(form);

        let mut layout = Self {
            form,
            input,
            toggle,
            clear,
            ..Self::default()
        };
        if !is_open {
            return layout;
        }

        let below = form.bottom().saturating_sub(input.bottom());
        let wanted = styles.menu.height.saturating_add(item_count as u16);
        let mut menu = styles.menu.place(form.x, input.bottom(), form.width);
        menu.height = wanted.min(below);
        let menu = menu.intersection(form);
        layout.menu = menu;

        let inner = styles.menu.block().inner(menu);
        let rows = inner.height as usize;
        let offset = scroll_offset(highlighted, rows);
        layout.items = (offset..item_count.min(offset + rows))
            .map(|i| {
                let row = styles.item.place(inner.x, inner.y + (i - offset) as u16, inner.width);
                (i, row)
            })
            .collect();
        layout
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<DropdownHit> {
        let pos = Position::new(column, row);
        if self.toggle.contains(pos) {
            return Some(DropdownHit::Toggle);
        }
        if self.clear.contains(pos) {
            return Some(DropdownHit::Clear);
        }
        if self.input.contains(pos) {
            return Some(DropdownHit::Input);
        }
        self.items
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(i, _)| DropdownHit::Item(*i))
    }

    pub fn menu_contains(&self, column: u16, row: u16) -> bool {
        self.menu.contains(Position::new(column, row))
    }
}

/// First row to draw so that the highlighted row stays on screen.
fn scroll_offset(highlighted: Option<usize>, rows: usize) -> usize {
    match highlighted {
        Some(i) if rows > 0 && i >= rows => i + 1 - rows,
        _ => 0,
    }
}

/// Chars to skip and the cursor's screen column so that the cursor cell fits
/// in `width` columns. Widths are display cells, not chars.
fn input_window(value: &str, cursor: usize, width: usize) -> (usize, usize) {
    let widths: Vec<usize> = value
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .collect();
    let mut col: usize = widths.iter().sum();
    let mut skip = 0;
    while col >= width && skip < widths.len() {
        col -= widths[skip];
        skip += 1;
    }
    (skip, col)
}

/// Draws the dropdown; a pure function of its current state.
pub struct DropdownView<'a, E> {
    pub dropdown: &'a Dropdown<E>,
    pub theme: &'a Theme,
    pub focused: bool,
}

impl<E: InteractionEngine> DropdownView<'_, E> {
    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border = if self.focused {
            theme.border_focus
        } else {
            theme.border
        };
        let block = DROPDOWN_STYLES.input.block().border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let engine = self.dropdown.engine();
        let value = engine.input_value();
        let width = inner.width as usize;
        let (skip, cursor_col) = input_window(value, engine.cursor(), width);
        if value.is_empty() {
            let hint = Line::from(Span::styled(PLACEHOLDER, theme.placeholder));
            buf.set_line(inner.x, inner.y, &hint, inner.width);
        } else {
            let mut used = 0;
            let shown: String = value
                .chars()
                .skip(skip)
                .take_while(|c| {
                    used += c.width().unwrap_or(0);
                    used <= width
                })
                .collect();
            buf.set_stringn(inner.x, inner.y, shown, width, theme.input);
        }

        if self.focused && cursor_col < width {
            buf[(inner.x + cursor_col as u16, inner.y)].set_style(theme.input_cursor);
        }
    }

    fn render_button(
        &self,
        style: ElementStyle,
        area: Rect,
        buf: &mut Buffer,
        label: &str,
        active: bool,
    ) {
        let button_style = if active {
            self.theme.button_active
        } else {
            self.theme.button
        };
        Paragraph::new(label.to_string())
            .alignment(style.align)
            .style(button_style)
            .block(style.block().border_style(self.theme.border))
            .render(area, buf);
    }
}

impl<E: InteractionEngine> Widget for DropdownView<'_, E> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let engine = self.dropdown.engine();
        let props = self.dropdown.item_props();
        let layout = DropdownLayout::compute(
            area,
            props.len(),
            engine.is_open(),
            engine.highlighted_index(),
        );

        self.render_input(layout.input, buf);
        let toggle_label = if engine.is_open() { "-" } else { "+" };
        self.render_button(
            DROPDOWN_STYLES.toggle_button,
            layout.toggle,
            buf,
            toggle_label,
            engine.is_open(),
        );
        self.render_button(DROPDOWN_STYLES.clear_button, layout.clear, buf, "x", false);

        if !engine.is_open() {
            return;
        }

        DROPDOWN_STYLES
            .menu
            .block()
            .border_style(self.theme.border_focus)
            .render(layout.menu, buf);

        for (index, rect) in &layout.items {
            let Some(item) = props.get(*index) else {
                continue;
            };
            let style = if item.is_highlighted {
                self.theme.highlight
            } else {
                self.theme.list_item
            };
            buf.set_style(*rect, style);
            let mark = if item.is_selected {
                Span::styled(SELECTED_MARK, style.patch(self.theme.selected_marker))
            } else {
                Span::styled("  ", style)
            };
            let line = Line::from(vec![mark, Span::styled(item.label, style)]);
            buf.set_line(rect.x, rect.y, &line, rect.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo_options;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_lines(dropdown: &Dropdown, width: u16, height: u16) -> Vec<String> {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let view = DropdownView {
                    dropdown,
                    theme: &theme,
                    focused: true,
                };
                f.render_widget(view, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn render_cell(dropdown: &Dropdown, width: u16, height: u16, x: u16, y: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        DropdownView {
            dropdown,
            theme: &theme,
            focused: true,
        }
        .render(area, &mut buf);
        buf[(x, y)].symbol().to_string()
    }

    #[test]
    fn test_layout_places_buttons_after_input() {
        let layout = DropdownLayout::compute(Rect::new(0, 0, 60, 20), 5, false, None);
        assert_eq!(layout.input, Rect::new(2, 0, 24, 3));
        assert_eq!(layout.toggle, Rect::new(26, 0, 5, 3));
        assert_eq!(layout.clear, Rect::new(31, 0, 5, 3));
        assert!(layout.menu.is_empty());
        assert!(layout.items.is_empty());
    }

    #[test]
    fn test_layout_open_menu_rows() {
        let layout = DropdownLayout::compute(Rect::new(0, 0, 60, 20), 3, true, None);
        assert_eq!(layout.menu, Rect::new(2, 3, 24, 5));
        let rows: Vec<_> = layout.items.iter().map(|(i, r)| (*i, r.y)).collect();
        assert_eq!(rows, vec![(0, 4), (1, 5), (2, 6)]);
    }

    #[test]
    fn test_layout_scrolls_to_highlight() {
        // 3 rows of menu, highlight on the 6th item
        let layout = DropdownLayout::compute(Rect::new(0, 0, 60, 8), 10, true, Some(5));
        let indices: Vec<_> = layout.items.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![3, 4, 5]);
    }

    #[test]
    fn test_hit_testing() {
        let layout = DropdownLayout::compute(Rect::new(0, 0, 60, 20), 5, true, None);
        assert_eq!(layout.hit(27, 1), Some(DropdownHit::Toggle));
        assert_eq!(layout.hit(33, 1), Some(DropdownHit::Clear));
        assert_eq!(layout.hit(5, 1), Some(DropdownHit::Input));
        assert_eq!(layout.hit(5, 4), Some(DropdownHit::Item(0)));
        assert_eq!(layout.hit(5, 6), Some(DropdownHit::Item(2)));
        assert_eq!(layout.hit(50, 10), None);
        assert!(layout.menu_contains(2, 3));
    }

    #[test]
    fn test_closed_view_has_no_items() {
        let dropdown = Dropdown::new(demo_options());
        let lines = render_lines(&dropdown, 40, 10);
        assert!(lines[1].contains('+'));
        assert!(lines[1].contains(PLACEHOLDER));
        assert!(lines.iter().all(|l| !l.contains("One")));
    }

    #[test]
    fn test_open_view_shows_filtered_items() {
        let mut dropdown = Dropdown::new(demo_options());
        dropdown.on_text_change("o");
        let lines = render_lines(&dropdown, 40, 12);
        assert!(lines[1].contains('-'));
        assert!(lines[4].contains("Two"));
        assert!(lines[5].contains("Four"));
        assert!(lines
            .iter()
            .all(|l| !l.contains("One") && !l.contains("Three") && !l.contains("Five")));
    }

    #[test]
    fn test_highlighted_row_gets_highlight_style() {
        let theme = Theme::default();
        let mut dropdown = Dropdown::new(demo_options());
        dropdown.on_toggle();
        dropdown.highlight(1);

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        DropdownView {
            dropdown: &dropdown,
            theme: &theme,
            focused: false,
        }
        .render(area, &mut buf);

        let layout = DropdownLayout::compute(area, 5, true, Some(1));
        let (_, row) = layout.items[1];
        assert_eq!(buf[(row.x + 4, row.y)].bg, theme.highlight.bg.unwrap());
        let (_, other) = layout.items[0];
        assert_ne!(buf[(other.x + 4, other.y)].bg, theme.highlight.bg.unwrap());
    }

    #[test]
    fn test_empty_options_render_empty_menu() {
        let mut dropdown = Dropdown::new(Vec::new());
        dropdown.on_toggle();
        let layout = DropdownLayout::compute(Rect::new(0, 0, 40, 10), 0, true, None);
        assert_eq!(layout.menu.height, 2);
        assert!(layout.items.is_empty());
        let lines = render_lines(&dropdown, 40, 10);
        assert!(lines[1].contains('-'));
    }

    #[test]
    fn test_input_window_counts_display_cells() {
        assert_eq!(input_window("abc", 3, 10), (0, 3));
        assert_eq!(input_window("abcdef", 6, 4), (3, 3));
        // each ideograph takes two cells
        assert_eq!(input_window("日日日", 3, 4), (2, 2));
        assert_eq!(input_window("", 0, 0), (0, 0));
    }

    #[test]
    fn test_wide_text_stays_inside_input() {
        let mut dropdown = Dropdown::new(demo_options());
        dropdown.on_text_change(&"日".repeat(30));
        let lines = render_lines(&dropdown, 40, 10);
        let row: Vec<char> = lines[1].chars().collect();
        let layout = DropdownLayout::compute(Rect::new(0, 0, 40, 10), 0, true, None);
        let border = render_cell(&dropdown, 40, 10, layout.input.right() - 1, 1);
        assert_eq!(border, "\u{2502}");
        assert!(row.contains(&'-'));
        assert!(row.contains(&'x'));
    }
}
