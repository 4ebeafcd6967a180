//! Footer: logo, copyright, quick links and back-to-top hint

use ratatui::text::{Line, Span};

use folio_core::SectionId;

use super::{Document, PageContext};
use crate::theme::styles;

pub fn render(doc: &mut Document, ctx: &PageContext<'_>) {
    let width = doc.content_width();
    let portfolio = ctx.portfolio;

    doc.push(Line::from(Span::styled("─".repeat(width), styles::text_muted())));
    doc.push(Line::from(Span::styled(
        portfolio.personal.initials.clone(),
        styles::accent_bold(),
    )));
    doc.push(Line::from(Span::styled(
        portfolio.copyright(ctx.year),
        styles::text_muted(),
    )));

    let mut links = Vec::new();
    for (i, id) in SectionId::ALL.into_iter().enumerate() {
        if i > 0 {
            links.push(Span::styled("  ", styles::text_muted()));
        }
        links.push(Span::styled(
            format!("{} {}", i + 1, id.label()),
            styles::text_secondary(),
        ));
    }
    doc.push(Line::from(links));
    doc.push(Line::from(Span::styled("↑ Back to top (g)", styles::accent())));
    doc.blank(1);
}
