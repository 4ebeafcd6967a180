//! Navigation bar
//!
//! Initials on the left, one link per section on the right. The link of the
//! active section is highlighted. At the top of the page the bar is a framed
//! three-row block; once scrolled it collapses to a single solid row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use folio_core::{NavigationState, SectionId};

use crate::layout::NARROW_WIDTH;
use crate::theme::{palette, styles};

pub struct NavBar<'a> {
    initials: &'a str,
    nav: &'a NavigationState,
}

impl<'a> NavBar<'a> {
    pub fn new(initials: &'a str, nav: &'a NavigationState) -> Self {
        Self { initials, nav }
    }

    fn links(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            let active = self.nav.active_section == Some(id);
            spans.push(Span::styled(
                format!(" {} {} ", i + 1, id.label()),
                styles::nav_link(active),
            ));
        }
        spans
    }

    fn row(&self, width: u16) -> Line<'static> {
        let logo = Span::styled(format!(" {} ", self.initials), styles::accent_bold());

        let right = if width < NARROW_WIDTH {
            vec![Span::styled("≡ m ", styles::text_secondary())]
        } else {
            self.links()
        };

        let used = logo.content.width() + right.iter().map(|s| s.content.width()).sum::<usize>();
        let gap = (width as usize).saturating_sub(used);

        let mut spans = vec![logo, Span::raw(" ".repeat(gap))];
        spans.extend(right);
        Line::from(spans)
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.nav.scrolled_past_threshold {
            let row = self.row(area.width);
            Paragraph::new(row)
                .style(Style::default().bg(palette::CARD_BG))
                .render(area, buf);
        } else if area.height >= 3 {
            let block = styles::glass_block(false).style(Style::default().bg(palette::DEEPEST_BG));
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(self.row(inner.width)).render(inner, buf);
        } else {
            Paragraph::new(self.row(area.width))
                .style(Style::default().bg(palette::DEEPEST_BG))
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(nav: &NavigationState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(NavBar::new("JD", nav), f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn link_cell(buf: &Buffer, label: &str) -> (u16, u16) {
        for y in 0..buf.area.height {
            let row: String = (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect();
            if let Some(col) = row.find(label) {
                let x = row[..col].chars().count() as u16;
                return (x, y);
            }
        }
        panic!("{} not rendered", label);
    }

    #[test]
    fn test_expanded_bar_shows_all_links() {
        let nav = NavigationState::default();
        let text = buffer_to_string(&draw(&nav, 100, 3));
        assert!(text.contains("JD"));
        for id in SectionId::ALL {
            assert!(text.contains(id.label()), "missing {}", id.label());
        }
        assert!(text.contains('╭'));
    }

    #[test]
    fn test_active_link_is_highlighted() {
        let nav = NavigationState {
            scroll_y: 900,
            scrolled_past_threshold: true,
            active_section: Some(SectionId::Projects),
        };
        let buf = draw(&nav, 100, 1);

        let active = link_cell(&buf, "Projects");
        let inactive = link_cell(&buf, "Skills");
        assert_eq!(buf[active].bg, palette::ACTIVE_LINK_BG);
        assert_ne!(buf[inactive].bg, palette::ACTIVE_LINK_BG);
    }

    #[test]
    fn test_compact_bar_has_no_border() {
        let nav = NavigationState {
            scroll_y: 100,
            scrolled_past_threshold: true,
            active_section: None,
        };
        let text = buffer_to_string(&draw(&nav, 100, 1));
        assert!(!text.contains('╭'));
        assert!(text.contains("About"));
    }

    #[test]
    fn test_narrow_bar_shows_menu_hint() {
        let nav = NavigationState::default();
        let text = buffer_to_string(&draw(&nav, 40, 3));
        assert!(text.contains("≡ m"));
        assert!(!text.contains("Experience"));
    }
}
