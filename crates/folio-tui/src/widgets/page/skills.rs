//! Skills: tag cloud per category plus the fixed highlights

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::{RevealItem, SectionId, SkillCategory, SKILL_HIGHLIGHTS};

use super::{paragraph, section_header, Document, PageContext, RevealScope};
use crate::theme::styles;

pub fn render(doc: &mut Document, ctx: &PageContext<'_>) {
    let scope = RevealScope::new(ctx, SectionId::Skills);
    let width = doc.content_width();

    let subtitle = SectionId::Skills.subtitle().unwrap_or_default();
    doc.extend(scope.apply(
        RevealItem::Header,
        section_header(SectionId::Skills, subtitle, width),
    ));

    for (i, category) in SkillCategory::ALL.into_iter().enumerate() {
        let mut rows = vec![Line::from(Span::styled(
            format!("■ {}", category.label()),
            styles::subheading(),
        ))];
        rows.extend(tag_rows(&scope, i, ctx.portfolio.skills.tags(category), width));
        rows.push(Line::default());
        doc.extend(scope.apply(RevealItem::SkillCategory(i), rows));
    }

    let mut highlights = vec![Line::from(Span::styled(
        "What I Bring to the Table",
        styles::heading(),
    ))];
    for highlight in SKILL_HIGHLIGHTS {
        highlights.push(Line::from(Span::styled(
            format!("  {}", highlight.title),
            styles::accent(),
        )));
        highlights.extend(paragraph(highlight.desc, width, "    ", styles::text_secondary()));
    }
    doc.extend(scope.apply(RevealItem::SkillHighlights, highlights));
}

/// Tags flowed into rows, each tag fading in on its own delay
fn tag_rows(
    scope: &RevealScope<'_>,
    category: usize,
    tags: &[String],
    width: usize,
) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for (tag, name) in tags.iter().enumerate() {
        let chip = format!("[{}]", name);
        let chip_width = chip.width() + 1;
        if used > 0 && used + chip_width > width {
            rows.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }

        let item = RevealItem::SkillTag { category, tag };
        let span = match scope.style(item, styles::text_secondary()) {
            Some(style) => Span::styled(chip, style),
            None => Span::raw(" ".repeat(chip.width())),
        };
        spans.push(span);
        spans.push(Span::raw(" "));
        used += chip_width;
    }

    if !spans.is_empty() {
        rows.push(Line::from(spans));
    }
    rows
}
