//! Navigation menu overlay, the terminal's take on the mobile menu

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use folio_core::SectionId;

use crate::layout::centered_rect;
use crate::theme::{palette, styles};

const MENU_WIDTH: u16 = 28;

pub struct NavMenu {
    selected: SectionId,
    active: Option<SectionId>,
}

impl NavMenu {
    pub fn new(selected: SectionId, active: Option<SectionId>) -> Self {
        Self { selected, active }
    }
}

impl Widget for NavMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // One row per link plus the border
        let height = SectionId::ALL.len() as u16 + 2;
        let popup = centered_rect(MENU_WIDTH, height, area);
        Clear.render(popup, buf);

        let block = styles::glass_block(true)
            .title(" Navigate ")
            .style(Style::default().bg(palette::POPUP_BG));

        let lines: Vec<Line> = SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let marker = if self.active == Some(id) { "●" } else { " " };
                let style = if id == self.selected {
                    styles::nav_link(true).add_modifier(Modifier::REVERSED)
                } else {
                    styles::nav_link(false)
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", marker), styles::accent()),
                    Span::styled(format!("{} {:<20}", i + 1, id.label()), style),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(popup, buf);
    }
}
