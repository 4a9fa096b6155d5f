use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, BorderType, Borders};

/// Fixed layout rules of one dropdown element, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStyle {
    /// `None` fills the parent.
    pub width: Option<u16>,
    pub height: u16,
    pub margin_left: u16,
    pub bordered: bool,
    pub align: Alignment,
}

impl ElementStyle {
    /// Places the element at `(x, y)` inside a parent of `available` width.
    #[must_use]
    pub fn place(&self, x: u16, y: u16, available: u16) -> Rect {
        let available = available.saturating_sub(self.margin_left);
        let width = self.width.map_or(available, |w| w.min(available));
        Rect::new(x.saturating_add(self.margin_left), y, width, self.height)
    }

    #[must_use]
    pub fn block(&self) -> Block<'static> {
        if self.bordered {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
        } else {
            Block::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownStyles {
    pub form: ElementStyle,
    pub input: ElementStyle,
    pub toggle_button: ElementStyle,
    pub clear_button: ElementStyle,
    pub menu: ElementStyle,
    pub item: ElementStyle,
}

pub const DROPDOWN_STYLES: DropdownStyles = DropdownStyles {
    form: ElementStyle {
        width: Some(40),
        height: 0,
        margin_left: 0,
        bordered: false,
        align: Alignment::Left,
    },
    input: ElementStyle {
        width: Some(24),
        height: 3,
        margin_left: 2,
        bordered: true,
        align: Alignment::Left,
    },
    toggle_button: ElementStyle {
        width: Some(5),
        height: 3,
        margin_left: 0,
        bordered: true,
        align: Alignment::Center,
    },
    clear_button: ElementStyle {
        width: Some(5),
        height: 3,
        margin_left: 0,
        bordered: true,
        align: Alignment::Center,
    },
    // Height grows with the visible items.
    menu: ElementStyle {
        width: Some(24),
        height: 2,
        margin_left: 2,
        bordered: true,
        align: Alignment::Left,
    },
    item: ElementStyle {
        width: None,
        height: 1,
        margin_left: 0,
        bordered: false,
        align: Alignment::Left,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_applies_margin_and_width() {
        let rect = DROPDOWN_STYLES.input.place(10, 4, 80);
        assert_eq!(rect, Rect::new(12, 4, 24, 3));
    }

    #[test]
    fn test_place_shrinks_to_parent() {
        let rect = DROPDOWN_STYLES.input.place(0, 0, 10);
        assert_eq!(rect.width, 8);
        let item = DROPDOWN_STYLES.item.place(3, 1, 20);
        assert_eq!(item, Rect::new(3, 1, 20, 1));
    }
}
