//! Screen layout definitions for the TUI
//!
//! The navigation bar shrinks to a single row once the page has scrolled
//! past the threshold.

use ratatui::layout::{Constraint, Layout, Rect};

/// Navigation bar height at the top of the page
pub const NAVBAR_HEIGHT_EXPANDED: u16 = 3;

/// Navigation bar height once scrolled
pub const NAVBAR_HEIGHT_COMPACT: u16 = 1;

/// Below this width the links collapse into the menu
pub const NARROW_WIDTH: u16 = 64;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation bar
    pub navbar: Rect,

    /// Scrollable page
    pub page: Rect,

    /// Key hints
    pub help: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `compact` - Whether the navigation bar is in its scrolled style
pub fn create(area: Rect, compact: bool) -> ScreenAreas {
    let navbar_height = if compact {
        NAVBAR_HEIGHT_COMPACT
    } else {
        NAVBAR_HEIGHT_EXPANDED
    };

    let chunks = Layout::vertical([
        Constraint::Length(navbar_height),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        navbar: chunks[0],
        page: chunks[1],
        help: chunks[2],
    }
}

/// Rect of `width` x `height` centered in `area`, clamped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_layout() {
        let layout = create(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.navbar.height, 3);
        assert_eq!(layout.page.height, 20);
        assert_eq!(layout.help.y, 23);
    }

    #[test]
    fn test_compact_layout_gives_page_more_rows() {
        let layout = create(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.navbar.height, 1);
        assert_eq!(layout.page.height, 22);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(40, 4, area);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }
}
