//! Scroll message handlers
//!
//! Every handler moves the page viewport and then publishes the new position
//! so the navigation bar and entrance animations follow it.

use folio_core::prelude::*;
use folio_core::SectionId;

use crate::state::{AppState, UiMode};

use super::UpdateResult;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_up(1);
    state.publish_scroll();
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_down(1);
    state.publish_scroll();
    UpdateResult::none()
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_to_top();
    state.publish_scroll();
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.viewport.scroll_to_bottom();
    state.publish_scroll();
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.viewport.page_up();
    state.publish_scroll();
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.viewport.page_down();
    state.publish_scroll();
    UpdateResult::none()
}

/// Bring the top of section `id` to the top of the viewport.
///
/// Closes the navigation menu if it was open. Sections that have not been
/// laid out yet are ignored.
pub fn handle_scroll_to_section(state: &mut AppState, id: SectionId) -> UpdateResult {
    if state.ui_mode == UiMode::Menu {
        state.ui_mode = UiMode::Browse;
    }

    let Some(row) = state.page_layout.row_of(id) else {
        debug!("Section {} not laid out yet, ignoring jump", id);
        return UpdateResult::none();
    };

    state.viewport.scroll_to_row(row);
    state.publish_scroll();
    UpdateResult::none()
}
