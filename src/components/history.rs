use crate::app::state::ChangeRecord;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Widget},
};

/// Values the dropdown reported through its change listener, newest first.
pub struct ChangeHistory<'a> {
    pub records: &'a [ChangeRecord],
    pub theme: &'a Theme,
}

impl Widget for ChangeHistory<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("CHANGES", self.theme.header_item),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        if self.records.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            if inner.height > 0 {
                let hint = Line::from(Span::styled(" nothing selected yet", self.theme.dimmed));
                buf.set_line(inner.x, inner.y, &hint, inner.width);
            }
            return;
        }

        let items: Vec<ListItem> = self
            .records
            .iter()
            .map(|record| {
                let value = if record.value.is_empty() {
                    Span::styled("(cleared)", self.theme.dimmed)
                } else {
                    Span::styled(record.value.as_str(), self.theme.list_item)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", record.at.format("%H:%M:%S")),
                        self.theme.timestamp,
                    ),
                    value,
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
