//! Main update function - handles state transitions (TEA pattern)

use folio_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{contact, keys, scroll, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            let now = state.elapsed();
            state.observe_reveals(now);
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToSection(id) => scroll::handle_scroll_to_section(state, id),

        // ─────────────────────────────────────────────────────────
        // Menu Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleMenu => {
            state.ui_mode = match state.ui_mode {
                UiMode::Menu => UiMode::Browse,
                _ => {
                    state.menu_selected = state
                        .navigation()
                        .active_section
                        .map(|id| id.index())
                        .unwrap_or(0);
                    UiMode::Menu
                }
            };
            UpdateResult::none()
        }

        Message::MenuUp => {
            let count = folio_core::SectionId::ALL.len();
            state.menu_selected = (state.menu_selected + count - 1) % count;
            UpdateResult::none()
        }

        Message::MenuDown => {
            let count = folio_core::SectionId::ALL.len();
            state.menu_selected = (state.menu_selected + 1) % count;
            UpdateResult::none()
        }

        Message::MenuSelect => {
            let target = state.menu_section();
            state.ui_mode = UiMode::Browse;
            UpdateResult::message(Message::ScrollToSection(target))
        }

        // ─────────────────────────────────────────────────────────
        // Contact Form Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenContactForm => contact::handle_open(state),
        Message::CloseContactForm => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }
        Message::ContactNextField => {
            state.contact.focus_next();
            UpdateResult::none()
        }
        Message::ContactPrevField => {
            state.contact.focus_prev();
            UpdateResult::none()
        }
        Message::ContactInput(c) => {
            state.contact.insert_char(c);
            UpdateResult::none()
        }
        Message::ContactBackspace => {
            state.contact.backspace();
            UpdateResult::none()
        }
        Message::SubmitContact => contact::handle_submit(state),
        Message::ContactSubmitted { outcome } => contact::handle_submitted(state, outcome),
        Message::ClearSubmitStatus { token } => {
            if state.contact.clear_status(token) {
                debug!("Submit status cleared");
            }
            UpdateResult::none()
        }
    }
}
