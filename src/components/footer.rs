use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HINTS: &[(&str, &str)] = &[
    ("\u{2191}/\u{2193}", "highlight"),
    ("enter", "select"),
    ("tab", "toggle"),
    ("ctrl-x", "clear"),
    ("f2", "theme"),
    ("esc", "close/quit"),
];

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let status_span = match &self.state.status_message {
            Some(msg) => Span::styled(format!("  {msg}  "), theme.status_info),
            None => Span::styled("  READY  ", theme.status_ready),
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        let mut width: usize = spans.iter().map(Span::width).sum();
        let available = area.width.saturating_sub(2) as usize;

        for (key, desc) in HINTS {
            let key_span = Span::styled(format!(" {key} "), theme.footer_segment_key);
            let desc_span = Span::styled(format!(" {desc} "), theme.footer_segment_val);
            let needed = key_span.width() + desc_span.width() + 1;
            if width + needed > available {
                break;
            }
            width += needed;
            spans.push(key_span);
            spans.push(desc_span);
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
