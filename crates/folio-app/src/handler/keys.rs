//! Key event handlers for different UI modes

use folio_core::SectionId;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(key),
        UiMode::Menu => handle_key_menu(key),
        UiMode::ContactForm => handle_key_contact_form(state, key),
    }
}

/// Digit keys 1-5 jump to the matching navigation link
fn section_shortcut(c: char) -> Option<SectionId> {
    let digit = c.to_digit(10)? as usize;
    SectionId::from_index(digit.checked_sub(1)?)
}

/// Handle key events while scrolling the page
fn handle_key_browse(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Scrolling
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char(' ') | InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        // Navigation links
        InputKey::Char(c @ '1'..='5') => section_shortcut(c).map(Message::ScrollToSection),
        InputKey::Char('m') => Some(Message::ToggleMenu),
        InputKey::Char('c') => Some(Message::OpenContactForm),

        _ => None,
    }
}

/// Handle key events while the navigation menu is open
fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::MenuUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::MenuDown),
        InputKey::Enter => Some(Message::MenuSelect),
        InputKey::Char(c @ '1'..='5') => section_shortcut(c).map(Message::ScrollToSection),
        InputKey::Char('m') | InputKey::Esc => Some(Message::ToggleMenu),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while typing into the contact form
fn handle_key_contact_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseContactForm),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Tab | InputKey::Down => Some(Message::ContactNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::ContactPrevField),
        InputKey::Enter if !state.contact.submitting => Some(Message::SubmitContact),
        InputKey::Backspace => Some(Message::ContactBackspace),
        InputKey::Char(c) => Some(Message::ContactInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in(mode: UiMode) -> AppState {
        let mut state = AppState::with_sample();
        state.ui_mode = mode;
        state
    }

    #[test]
    fn test_digit_shortcuts_follow_link_order() {
        let state = state_in(UiMode::Browse);
        assert_eq!(
            handle_key(&state, InputKey::Char('1')),
            Some(Message::ScrollToSection(SectionId::About))
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('5')),
            Some(Message::ScrollToSection(SectionId::Contact))
        );
        assert_eq!(handle_key(&state, InputKey::Char('0')), None);
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        for mode in [UiMode::Browse, UiMode::Menu, UiMode::ContactForm] {
            let state = state_in(mode);
            assert_eq!(
                handle_key(&state, InputKey::CharCtrl('c')),
                Some(Message::Quit)
            );
        }
    }

    #[test]
    fn test_letters_are_typed_in_contact_form() {
        let state = state_in(UiMode::ContactForm);
        assert_eq!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::ContactInput('q'))
        );
        assert_eq!(
            handle_key(&state, InputKey::Char('1')),
            Some(Message::ContactInput('1'))
        );
    }

    #[test]
    fn test_enter_disabled_while_submitting() {
        let mut state = state_in(UiMode::ContactForm);
        state.contact.submitting = true;
        assert_eq!(handle_key(&state, InputKey::Enter), None);
    }

    #[test]
    fn test_menu_keys() {
        let state = state_in(UiMode::Menu);
        assert_eq!(handle_key(&state, InputKey::Down), Some(Message::MenuDown));
        assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::MenuSelect));
        assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::ToggleMenu));
    }
}
