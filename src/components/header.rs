use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub option_count: usize,
    pub theme_label: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let noun = if self.option_count == 1 {
            "option"
        } else {
            "options"
        };
        let spans = vec![
            Span::styled(" PICKLIST ", self.theme.header_logo),
            Span::raw(" "),
            Span::styled(
                format!(" {} {noun} ", self.option_count),
                self.theme.header_item,
            ),
            Span::raw(" "),
            Span::styled(format!(" {} ", self.theme_label), self.theme.header_item),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
