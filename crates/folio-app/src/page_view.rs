//! Page view state - scroll position, viewport bounds, and section layout.
//!
//! This module defines the state types used by both the app handler layer
//! (for scroll commands) and the TUI layer (for rendering the page). The TUI
//! lays the page out in terminal rows; the resolver works in pixels, so each
//! row is mapped to a fixed pixel height.

use folio_core::{LayoutProvider, Section, SectionId};

/// Default pixel height of one terminal row
pub const DEFAULT_ROW_HEIGHT_PX: u32 = 16;

// ─────────────────────────────────────────────────────────────────────────────
// PageViewport
// ─────────────────────────────────────────────────────────────────────────────

/// Scroll state of the page, in rows
#[derive(Debug, Clone, Default)]
pub struct PageViewport {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of rows (set during render)
    pub total_rows: usize,
    /// Visible rows (set during render)
    pub visible_rows: usize,
}

impl PageViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest valid offset for the current content
    pub fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }

    /// Scroll up by n rows
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n rows
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Scroll so that `row` is the first visible row, clamped to content
    pub fn scroll_to_row(&mut self, row: usize) {
        self.offset = row.min(self.max_offset());
    }

    /// Page up (scroll by visible height minus 2 for context)
    pub fn page_up(&mut self) {
        let page = self.visible_rows.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    /// Page down
    pub fn page_down(&mut self) {
        let page = self.visible_rows.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update content and viewport size, keeping the offset in range
    pub fn update_content_size(&mut self, total_rows: usize, visible_rows: usize) {
        self.total_rows = total_rows;
        self.visible_rows = visible_rows;
        self.offset = self.offset.min(self.max_offset());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PageLayout
// ─────────────────────────────────────────────────────────────────────────────

/// Row range occupied by one section on the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    /// First row of the section
    pub start_row: usize,
    /// One past the last row of the section
    pub end_row: usize,
}

/// Section positions of the last rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
    row_height_px: u32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_HEIGHT_PX)
    }
}

impl PageLayout {
    pub fn new(row_height_px: u32) -> Self {
        Self {
            spans: Vec::new(),
            row_height_px: row_height_px.max(1),
        }
    }

    /// Record a section occupying `start_row..end_row`
    pub fn push(&mut self, id: SectionId, start_row: usize, end_row: usize) {
        self.spans.push(SectionSpan {
            id,
            start_row,
            end_row: end_row.max(start_row),
        });
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn row_height_px(&self) -> u32 {
        self.row_height_px
    }

    pub fn span(&self, id: SectionId) -> Option<&SectionSpan> {
        self.spans.iter().find(|s| s.id == id)
    }

    /// First row of section `id`, if it was rendered
    pub fn row_of(&self, id: SectionId) -> Option<usize> {
        self.span(id).map(|s| s.start_row)
    }

    /// Pixel offset of `row` from the top of the page
    pub fn row_to_px(&self, row: usize) -> u32 {
        u32::try_from(row)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height_px)
    }
}

impl LayoutProvider for PageLayout {
    fn section_offsets(&self) -> Vec<Section> {
        self.spans
            .iter()
            .map(|s| Section::new(s.id, self.row_to_px(s.start_row)))
            .collect()
    }
}
