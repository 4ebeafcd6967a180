//! Bottom row of key hints for the current mode

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_app::UiMode;

use crate::theme::{palette, styles};

pub struct HelpBar {
    mode: UiMode,
}

impl HelpBar {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Browse => &[
                ("j/k", "scroll"),
                ("1-5", "jump"),
                ("m", "menu"),
                ("c", "contact"),
                ("g/G", "top/bottom"),
                ("q", "quit"),
            ],
            UiMode::Menu => &[
                ("j/k", "move"),
                ("Enter", "go"),
                ("1-5", "jump"),
                ("Esc", "close"),
            ],
            UiMode::ContactForm => &[
                ("Tab", "next field"),
                ("Shift+Tab", "previous"),
                ("Enter", "send"),
                ("Esc", "back"),
            ],
        }
    }
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::accent()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::CARD_BG))
            .render(area, buf);
    }
}
