//! Color palette: dark slate backgrounds with an indigo/violet accent.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 10, 15);
pub const CARD_BG: Color = Color::Rgb(22, 22, 32);
pub const POPUP_BG: Color = Color::Rgb(30, 30, 44);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 45, 60);
pub const BORDER_ACTIVE: Color = Color::Rgb(129, 140, 248);

// --- Accent ---
pub const ACCENT_LIGHT: Color = Color::Rgb(129, 140, 248);
pub const ACCENT_VIOLET: Color = Color::Rgb(167, 139, 250);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);

// --- Highlight pill behind the active link ---
pub const ACTIVE_LINK_BG: Color = Color::Rgb(48, 48, 66);
