//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Headings ---
pub fn heading() -> Style {
    Style::default()
        .fg(palette::ACCENT_LIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn subheading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT_LIGHT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT_VIOLET)
        .add_modifier(Modifier::BOLD)
}

// --- Navigation links ---
pub fn nav_link(active: bool) -> Style {
    if active {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::ACTIVE_LINK_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        text_secondary()
    }
}

// --- Form ---
pub fn input(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::POPUP_BG)
    } else {
        Style::default().fg(palette::TEXT_SECONDARY).bg(palette::CARD_BG)
    }
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn success() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

// --- Blocks ---

/// Rounded container with active or dim border
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Style::default().fg(palette::BORDER_ACTIVE)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
}
