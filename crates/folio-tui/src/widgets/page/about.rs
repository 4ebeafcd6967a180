//! About: bio, stats and key strengths

use ratatui::text::{Line, Span};

use folio_core::{RevealItem, SectionId};

use super::{paragraph, section_header, Document, PageContext, RevealScope};
use crate::theme::styles;

pub fn render(doc: &mut Document, ctx: &PageContext<'_>) {
    let scope = RevealScope::new(ctx, SectionId::About);
    let about = &ctx.portfolio.about;
    let width = doc.content_width();

    let subtitle = SectionId::About.subtitle().unwrap_or_default();
    doc.extend(scope.apply(
        RevealItem::Header,
        section_header(SectionId::About, subtitle, width),
    ));

    let mut bio = paragraph(&about.bio, width, "│ ", styles::text_secondary());
    bio.push(Line::default());
    doc.extend(scope.apply(RevealItem::Staggered(1), bio));

    for (i, stat) in about.stats.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!("{:>6}", stat.value), styles::accent_bold()),
            Span::raw("  "),
            Span::styled(stat.label.clone(), styles::text_muted()),
        ]);
        doc.extend(scope.apply(RevealItem::Stat(i), vec![line]));
    }
    doc.blank(1);

    doc.extend(scope.apply(
        RevealItem::Staggered(2),
        vec![Line::from(Span::styled("Key Strengths", styles::subheading()))],
    ));
    for (i, strength) in about.strengths.iter().enumerate() {
        doc.extend(scope.apply(
            RevealItem::Strength(i),
            paragraph(strength, width, "◆ ", styles::text_secondary()),
        ));
    }
}
