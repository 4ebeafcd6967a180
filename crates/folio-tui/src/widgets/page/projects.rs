//! Projects: one card per project

use ratatui::text::{Line, Span};

use folio_core::{Project, RevealItem, SectionId};

use super::{paragraph, section_header, Document, PageContext, RevealScope};
use crate::theme::styles;

pub fn render(doc: &mut Document, ctx: &PageContext<'_>) {
    let scope = RevealScope::new(ctx, SectionId::Projects);
    let width = doc.content_width();

    let subtitle = SectionId::Projects.subtitle().unwrap_or_default();
    doc.extend(scope.apply(
        RevealItem::Header,
        section_header(SectionId::Projects, subtitle, width),
    ));

    for (i, project) in ctx.portfolio.projects.iter().enumerate() {
        doc.extend(scope.apply(RevealItem::ProjectCard(i), card(project, width)));
    }
}

fn card(project: &Project, width: usize) -> Vec<Line<'static>> {
    let mut rows = vec![Line::from(vec![
        Span::styled("╭─ ", styles::text_muted()),
        Span::styled(format!("[{}] ", project.monogram()), styles::accent_bold()),
        Span::styled(project.title.clone(), styles::subheading()),
    ])];

    rows.extend(paragraph(
        &project.description,
        width,
        "│ ",
        styles::text_secondary(),
    ));

    if !project.stack.is_empty() {
        rows.extend(paragraph(
            &project.stack.join(" · "),
            width,
            "│ ",
            styles::accent(),
        ));
    }
    for impact in &project.impact {
        rows.extend(paragraph(impact, width, "│ ✔ ", styles::success()));
    }
    for highlight in &project.highlights {
        rows.extend(paragraph(highlight, width, "│ • ", styles::text_secondary()));
    }

    rows.push(Line::from(Span::styled("╰─", styles::text_muted())));
    rows.push(Line::default());
    rows
}
