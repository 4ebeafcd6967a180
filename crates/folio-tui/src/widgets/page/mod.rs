//! The portfolio page as a list of terminal rows.
//!
//! [`build`] lays every section out for a given width and records where each
//! section starts and ends. The rows are rendered by [`PageView`]; the section
//! spans go back to `folio-app` as the page layout the navigation bar resolves
//! against.

mod about;
mod contact;
mod experience;
mod footer;
mod projects;
mod skills;
pub mod text;

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_app::{ContactFormState, PageLayout};
use folio_core::{Portfolio, RevealItem, RevealTracker, SectionId};

use crate::theme::{palette, styles};

/// Blank rows above the first section and between sections
const SECTION_GAP: usize = 2;

/// Left margin of all page content
const MARGIN: usize = 2;

/// Widest the content column grows on large terminals
const MAX_CONTENT_WIDTH: usize = 96;

/// Everything the page needs to draw one frame
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub reveal: &'a RevealTracker,
    /// Animation clock
    pub now: Duration,
    pub contact: &'a ContactFormState,
    /// Keyboard focus is in the contact form
    pub form_focused: bool,
    pub year: i32,
}

/// Rows built so far plus the section spans
pub struct Document {
    lines: Vec<Line<'static>>,
    layout: PageLayout,
    content_width: usize,
    open_section: Option<(SectionId, usize)>,
}

impl Document {
    pub fn new(width: u16, row_height_px: u32) -> Self {
        let content_width = (width as usize)
            .saturating_sub(MARGIN * 2)
            .clamp(1, MAX_CONTENT_WIDTH);
        Self {
            lines: Vec::new(),
            layout: PageLayout::new(row_height_px),
            content_width,
            open_section: None,
        }
    }

    /// Usable columns for text
    pub fn content_width(&self) -> usize {
        self.content_width
    }

    pub fn rows(&self) -> usize {
        self.lines.len()
    }

    /// Append one row, indented by the page margin
    pub fn push(&mut self, line: Line<'static>) {
        let mut spans = vec![Span::raw(" ".repeat(MARGIN))];
        spans.extend(line.spans);
        self.lines.push(Line::from(spans));
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn blank(&mut self, count: usize) {
        for _ in 0..count {
            self.lines.push(Line::default());
        }
    }

    pub fn begin_section(&mut self, id: SectionId) {
        self.end_section();
        self.open_section = Some((id, self.lines.len()));
    }

    pub fn end_section(&mut self) {
        if let Some((id, start)) = self.open_section.take() {
            self.layout.push(id, start, self.lines.len());
        }
    }

    /// Finished rows and the section layout
    pub fn finish(mut self) -> (Vec<Line<'static>>, PageLayout) {
        self.end_section();
        (self.lines, self.layout)
    }
}

/// Entrance animation state of the items of one section
pub struct RevealScope<'a> {
    tracker: &'a RevealTracker,
    section: SectionId,
    now: Duration,
}

impl<'a> RevealScope<'a> {
    pub fn new(ctx: &PageContext<'a>, section: SectionId) -> Self {
        Self {
            tracker: ctx.reveal,
            section,
            now: ctx.now,
        }
    }

    pub fn progress(&self, item: RevealItem) -> f64 {
        self.tracker.progress(self.section, item, self.now)
    }

    /// Restyle `lines` for the item's current progress.
    ///
    /// Unstarted items keep their rows but render blank so the layout does
    /// not jump; items mid-animation are muted and slide in horizontally.
    pub fn apply(&self, item: RevealItem, lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
        let progress = self.progress(item);
        if progress >= 1.0 {
            return lines;
        }
        if progress <= 0.0 {
            return lines.into_iter().map(|_| Line::default()).collect();
        }

        let (dx, _) = item.initial_offset();
        let shift = (f64::from(dx.unsigned_abs()) * (1.0 - progress) / 10.0).round() as usize;
        lines
            .into_iter()
            .map(|line| {
                let mut spans = Vec::with_capacity(line.spans.len() + 1);
                if shift > 0 {
                    spans.push(Span::raw(" ".repeat(shift)));
                }
                spans.extend(
                    line.spans
                        .into_iter()
                        .map(|span| Span::styled(span.content, fade(span.style, progress))),
                );
                Line::from(spans)
            })
            .collect()
    }

    /// Style for a single span of `item`, e.g. one skill tag in a row of tags
    pub fn style(&self, item: RevealItem, base: Style) -> Option<Style> {
        let progress = self.progress(item);
        if progress <= 0.0 {
            None
        } else if progress >= 1.0 {
            Some(base)
        } else {
            Some(fade(base, progress))
        }
    }
}

fn fade(style: Style, progress: f64) -> Style {
    if progress < 0.5 {
        style.fg(palette::TEXT_MUTED).add_modifier(Modifier::DIM)
    } else {
        style.add_modifier(Modifier::DIM)
    }
}

/// Heading and subtitle rows shared by every section
pub fn section_header(id: SectionId, subtitle: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(id.heading().to_string(), styles::heading())),
        Line::from(Span::styled(
            "─".repeat(id.heading().chars().count()),
            styles::accent(),
        )),
    ];
    lines.extend(
        text::wrap(subtitle, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, styles::text_secondary()))),
    );
    lines.push(Line::default());
    lines
}

/// Wrapped paragraph rows with a fixed prefix on each row
pub fn paragraph(
    text: &str,
    width: usize,
    prefix: &str,
    style: Style,
) -> Vec<Line<'static>> {
    let prefix_width = unicode_width::UnicodeWidthStr::width(prefix);
    text::wrap(text, width.saturating_sub(prefix_width))
        .into_iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(prefix.to_string(), styles::text_muted()),
                Span::styled(row, style),
            ])
        })
        .collect()
}

/// Lay the whole page out at `width` columns
pub fn build(ctx: &PageContext<'_>, width: u16, row_height_px: u32) -> Document {
    let mut doc = Document::new(width, row_height_px);

    doc.blank(SECTION_GAP);
    for id in SectionId::ALL {
        doc.begin_section(id);
        match id {
            SectionId::About => about::render(&mut doc, ctx),
            SectionId::Experience => experience::render(&mut doc, ctx),
            SectionId::Projects => projects::render(&mut doc, ctx),
            SectionId::Skills => skills::render(&mut doc, ctx),
            SectionId::Contact => contact::render(&mut doc, ctx),
        }
        doc.blank(SECTION_GAP);
        doc.end_section();
    }
    footer::render(&mut doc, ctx);

    doc
}

/// Visible window of the page rows
pub struct PageView<'a> {
    lines: &'a [Line<'static>],
    offset: usize,
}

impl<'a> PageView<'a> {
    pub fn new(lines: &'a [Line<'static>], offset: usize) -> Self {
        Self { lines, offset }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let start = self.offset.min(self.lines.len());
        let end = (start + area.height as usize).min(self.lines.len());
        Paragraph::new(self.lines[start..end].to_vec()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::line_text;

    fn context<'a>(
        portfolio: &'a Portfolio,
        reveal: &'a RevealTracker,
        contact: &'a ContactFormState,
    ) -> PageContext<'a> {
        PageContext {
            portfolio,
            reveal,
            now: Duration::ZERO,
            contact,
            form_focused: false,
            year: 2026,
        }
    }

    #[test]
    fn test_sections_laid_out_in_order_without_gaps_between_spans() {
        let portfolio = Portfolio::sample();
        let reveal = RevealTracker::new(false);
        let contact = ContactFormState::new();
        let ctx = context(&portfolio, &reveal, &contact);

        let (lines, layout) = build(&ctx, 80, 16).finish();
        let spans = layout.spans();

        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].id, SectionId::About);
        assert_eq!(spans[0].start_row, SECTION_GAP);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end_row, pair[1].start_row);
            assert!(pair[0].start_row < pair[1].start_row);
        }
        // Footer follows the last section
        assert!(lines.len() > spans[4].end_row);
    }

    #[test]
    fn test_unrevealed_sections_keep_their_rows() {
        let portfolio = Portfolio::sample();
        let contact = ContactFormState::new();
        let shown = RevealTracker::new(false);
        let hidden = RevealTracker::new(true);

        let (shown_lines, shown_layout) =
            build(&context(&portfolio, &shown, &contact), 80, 16).finish();
        let (hidden_lines, hidden_layout) =
            build(&context(&portfolio, &hidden, &contact), 80, 16).finish();

        assert_eq!(shown_lines.len(), hidden_lines.len());
        assert_eq!(shown_layout, hidden_layout);

        let about = hidden_layout.span(SectionId::About).unwrap();
        assert!(hidden_lines[about.start_row..about.end_row]
            .iter()
            .all(|l| line_text(l).trim().is_empty()));
    }

    #[test]
    fn test_narrow_terminal_produces_more_rows() {
        let portfolio = Portfolio::sample();
        let reveal = RevealTracker::new(false);
        let contact = ContactFormState::new();
        let ctx = context(&portfolio, &reveal, &contact);

        let wide = build(&ctx, 120, 16).rows();
        let narrow = build(&ctx, 40, 16).rows();
        assert!(narrow > wide);
    }

    #[test]
    fn test_reveal_scope_blank_then_full() {
        let mut tracker = RevealTracker::new(true);
        tracker.observe(SectionId::Projects, true, Duration::ZERO);
        let portfolio = Portfolio::sample();
        let contact = ContactFormState::new();
        let mut ctx = context(&portfolio, &tracker, &contact);

        let item = RevealItem::ProjectCard(1);
        let rows = || vec![Line::from("card")];

        ctx.now = Duration::from_millis(100);
        let scope = RevealScope::new(&ctx, SectionId::Projects);
        assert_eq!(line_text(&scope.apply(item, rows())[0]), "");

        ctx.now = Duration::from_millis(2000);
        let scope = RevealScope::new(&ctx, SectionId::Projects);
        assert_eq!(line_text(&scope.apply(item, rows())[0]), "card");
    }
}
