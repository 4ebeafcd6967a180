//! Message types for the application (TEA pattern)

use folio_core::{SectionId, SubmitStatus};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (animation frames, reveal checks)
    Tick,

    /// Quit the viewer (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    /// Smooth-scroll target of a navigation link
    ScrollToSection(SectionId),

    // ─────────────────────────────────────────────────────────
    // Mobile Menu Messages
    // ─────────────────────────────────────────────────────────
    ToggleMenu,
    MenuUp,
    MenuDown,
    /// Follow the link under the menu cursor and close the menu
    MenuSelect,

    // ─────────────────────────────────────────────────────────
    // Contact Form Messages
    // ─────────────────────────────────────────────────────────
    /// Focus the contact form (scrolls to the Contact section)
    OpenContactForm,
    /// Leave the form, keeping its contents
    CloseContactForm,
    ContactNextField,
    ContactPrevField,
    ContactInput(char),
    ContactBackspace,
    /// Validate and submit the form
    SubmitContact,
    /// Simulated submission finished
    ContactSubmitted { outcome: SubmitStatus },
    /// Status banner timer fired; ignored unless `token` is still current
    ClearSubmitStatus { token: u64 },
}
