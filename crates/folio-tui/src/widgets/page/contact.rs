//! Contact: details column and the message form

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_core::{ContactField, RevealItem, SectionId, SubmitStatus};

use super::{paragraph, section_header, text, Document, PageContext, RevealScope};
use crate::theme::{palette, styles};

pub fn render(doc: &mut Document, ctx: &PageContext<'_>) {
    let scope = RevealScope::new(ctx, SectionId::Contact);
    let width = doc.content_width();

    doc.extend(scope.apply(
        RevealItem::Header,
        section_header(SectionId::Contact, &ctx.portfolio.cta, width),
    ));
    doc.extend(scope.apply(RevealItem::ContactInfo, info(ctx, width)));
    doc.extend(scope.apply(RevealItem::ContactForm, form(ctx, width)));
}

fn labelled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), styles::text_muted()),
        Span::styled(value.to_string(), styles::text_secondary()),
    ])
}

fn info(ctx: &PageContext<'_>, width: usize) -> Vec<Line<'static>> {
    let personal = &ctx.portfolio.personal;
    let mut rows = vec![
        Line::from(Span::styled("Contact Information", styles::subheading())),
        labelled("Email", &personal.email),
    ];
    if !personal.location.is_empty() {
        rows.push(labelled("Location", &personal.location));
    }
    rows.push(Line::default());
    rows.extend(paragraph("Connect with me", width, "", styles::text_muted()));
    if !personal.linkedin.is_empty() {
        rows.push(labelled("LinkedIn", &personal.linkedin));
    }
    if !personal.github.is_empty() {
        rows.push(labelled("GitHub", &personal.github));
    }
    rows.push(Line::default());
    rows
}

fn form(ctx: &PageContext<'_>, width: usize) -> Vec<Line<'static>> {
    let contact = ctx.contact;
    let field_width = width.saturating_sub(4).max(8);

    let mut rows = vec![Line::from(vec![
        Span::styled("Send a Message", styles::subheading()),
        Span::styled(
            if ctx.form_focused { "" } else { "  (press c)" },
            styles::text_muted(),
        ),
    ])];

    for field in ContactField::ALL {
        let focused = ctx.form_focused && contact.focused == field;
        rows.push(Line::from(Span::styled(
            field.label().to_string(),
            styles::text_secondary(),
        )));
        rows.push(input_row(contact.form.field(field), field, focused, field_width));
        if let Some(error) = contact.errors.for_field(field) {
            rows.push(Line::from(Span::styled(
                format!("  {}", error),
                styles::error(),
            )));
        }
    }

    rows.push(Line::default());
    let button = if contact.submitting {
        Span::styled(
            "[ Sending... ]",
            styles::text_muted().add_modifier(Modifier::DIM),
        )
    } else {
        Span::styled("[ Send Message ]", styles::accent_bold())
    };
    rows.push(Line::from(button));

    if let Some(status) = contact.status {
        let (icon, style) = match status {
            SubmitStatus::Success => ("✔ ", styles::success()),
            SubmitStatus::Failed => ("✖ ", styles::error()),
        };
        rows.push(Line::from(Span::styled(
            format!("{}{}", icon, status.message()),
            style,
        )));
    }
    rows
}

fn input_row(value: &str, field: ContactField, focused: bool, width: usize) -> Line<'static> {
    let inner = width.saturating_sub(2);
    let style = styles::input(focused);

    let body = if value.is_empty() && !focused {
        let placeholder = text::tail(field.placeholder(), inner);
        let pad = inner.saturating_sub(placeholder.width());
        Span::styled(
            format!("{}{}", placeholder, " ".repeat(pad)),
            style.fg(palette::TEXT_MUTED),
        )
    } else {
        // Reserve one column for the cursor
        let cursor = if focused { "█" } else { "" };
        let visible = text::tail(value, inner.saturating_sub(usize::from(focused)));
        let pad = inner.saturating_sub(visible.width() + usize::from(focused));
        Span::styled(format!("{}{}{}", visible, cursor, " ".repeat(pad)), style)
    };

    Line::from(vec![
        Span::styled("▏", styles::text_muted()),
        body,
        Span::styled("▕", styles::text_muted()),
    ])
}
