//! Experience: vertical timeline of roles

use ratatui::text::{Line, Span};

use folio_core::{RevealItem, SectionId};

use super::{paragraph, section_header, Document, PageContext, RevealScope};
use crate::theme::styles;

pub fn render(doc: &mut Document, ctx: &PageContext<'_>) {
    let scope = RevealScope::new(ctx, SectionId::Experience);
    let width = doc.content_width();

    let subtitle = SectionId::Experience.subtitle().unwrap_or_default();
    doc.extend(scope.apply(
        RevealItem::Header,
        section_header(SectionId::Experience, subtitle, width),
    ));

    for (i, entry) in ctx.portfolio.experience.iter().enumerate() {
        // The dot pops in after its entry starts sliding
        let dot = match scope.style(RevealItem::TimelineDot(i), styles::accent_bold()) {
            Some(style) => Span::styled("● ", style),
            None => Span::styled("│ ", styles::text_muted()),
        };

        let mut rows = vec![
            Line::from(vec![
                dot,
                Span::styled(entry.role.clone(), styles::subheading()),
            ]),
            Line::from(vec![
                Span::styled("│ ", styles::text_muted()),
                Span::styled(entry.company.clone(), styles::accent()),
                Span::styled(format!("  {}", entry.duration), styles::text_muted()),
            ]),
        ];
        rows.extend(paragraph(
            &entry.description,
            width,
            "│ ",
            styles::text_secondary(),
        ));
        for achievement in entry.shown_achievements() {
            rows.extend(paragraph(achievement, width, "│  ▹ ", styles::text_secondary()));
        }
        rows.push(Line::from(Span::styled("│", styles::text_muted())));

        doc.extend(scope.apply(RevealItem::ExperienceEntry(i), rows));
    }
}
