//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use folio_app::state::{AppState, UiMode};

use super::{layout, widgets};
use crate::theme::palette;
use crate::widgets::page::{self, PageContext};

/// Render the complete UI (View function in TEA)
///
/// Apart from drawing, this installs the page layout of the frame into
/// `state` so the navigation bar resolves against the rows actually shown.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.navigation().scrolled_past_threshold);

    let (lines, page_layout) = {
        let ctx = PageContext {
            portfolio: &state.portfolio,
            reveal: &state.reveal,
            now: state.elapsed(),
            contact: &state.contact,
            form_focused: state.ui_mode == UiMode::ContactForm,
            year: state.year,
        };
        page::build(&ctx, areas.page.width, state.page_layout.row_height_px()).finish()
    };
    state.apply_layout(page_layout, lines.len(), areas.page.height as usize);

    frame.render_widget(
        widgets::PageView::new(&lines, state.viewport.offset),
        areas.page,
    );

    frame.render_widget(
        widgets::NavBar::new(&state.portfolio.personal.initials, state.navigation()),
        areas.navbar,
    );

    frame.render_widget(widgets::HelpBar::new(state.ui_mode), areas.help);

    if state.ui_mode == UiMode::Menu {
        frame.render_widget(
            widgets::NavMenu::new(state.menu_section(), state.navigation().active_section),
            areas.page,
        );
    }
}
