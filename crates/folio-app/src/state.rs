//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use folio_core::{
    current_year, in_view, ContactFormState, NavigationState, Portfolio, RevealTracker, SectionId,
    DEFAULT_VIEW_MARGIN,
};

use crate::config::Settings;
use crate::page_view::{PageLayout, PageViewport};
use crate::scroll_feed::{NavigationTracker, ScrollFeed};

/// Lifecycle phase of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Scrolling the page
    #[default]
    Browse,
    /// Navigation menu overlay is open
    Menu,
    /// Keyboard focus is in the contact form
    ContactForm,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current lifecycle phase
    pub phase: AppPhase,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Settings from .folio/config.toml
    pub settings: Settings,

    /// Page text
    pub portfolio: Portfolio,

    /// Footer copyright year
    pub year: i32,

    /// Page scroll position (rows)
    pub viewport: PageViewport,

    /// Section rows from the last render
    pub page_layout: PageLayout,

    /// Scroll position publisher
    pub scroll_feed: ScrollFeed,

    /// Navigation bar, subscribed to `scroll_feed`
    pub navbar: NavigationTracker,

    /// Section entrance animations
    pub reveal: RevealTracker,

    /// Cursor in the navigation menu overlay
    pub menu_selected: usize,

    pub contact: ContactFormState,

    started_at: Instant,
}

impl AppState {
    pub fn new(settings: Settings, portfolio: Portfolio) -> Self {
        let scroll_feed = ScrollFeed::new();
        let navbar = NavigationTracker::mount(&scroll_feed, settings.navigation.to_config());

        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Browse,
            year: current_year(),
            viewport: PageViewport::new(),
            page_layout: PageLayout::new(settings.ui.row_height_px),
            scroll_feed,
            navbar,
            reveal: RevealTracker::new(settings.ui.animations),
            menu_selected: 0,
            contact: ContactFormState::new(),
            started_at: Instant::now(),
            settings,
            portfolio,
        }
    }

    /// State with default settings and the sample portfolio
    pub fn with_sample() -> Self {
        Self::new(Settings::default(), Portfolio::sample())
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Time since startup, the clock for entrance animations
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn navigation(&self) -> &NavigationState {
        self.navbar.state()
    }

    /// Current scroll offset in pixels
    pub fn scroll_y_px(&self) -> u32 {
        self.page_layout.row_to_px(self.viewport.offset)
    }

    /// Publish the scroll position and let subscribers react
    pub fn publish_scroll(&mut self) {
        self.scroll_feed.publish(self.scroll_y_px());
        self.navbar.sync(&self.page_layout);
        let now = self.elapsed();
        self.observe_reveals(now);
    }

    /// Install the layout of a freshly rendered frame
    pub fn apply_layout(&mut self, layout: PageLayout, total_rows: usize, visible_rows: usize) {
        self.viewport.update_content_size(total_rows, visible_rows);
        let moved = layout != self.page_layout;
        self.page_layout = layout;

        self.scroll_feed.publish(self.scroll_y_px());
        if moved {
            self.navbar.refresh(&self.page_layout);
        } else {
            self.navbar.sync(&self.page_layout);
        }
        let now = self.elapsed();
        self.observe_reveals(now);
    }

    /// Mark sections that entered the viewport as revealed at `now`
    pub fn observe_reveals(&mut self, now: Duration) {
        let scroll_y = self.scroll_y_px();
        let viewport_height = self.page_layout.row_to_px(self.viewport.visible_rows);
        for span in self.page_layout.spans() {
            let top = self.page_layout.row_to_px(span.start_row);
            let bottom = self.page_layout.row_to_px(span.end_row);
            let visible = in_view(top, bottom, scroll_y, viewport_height, DEFAULT_VIEW_MARGIN);
            self.reveal.observe(span.id, visible, now);
        }
    }

    /// Section under the menu cursor
    pub fn menu_section(&self) -> SectionId {
        SectionId::from_index(self.menu_selected).unwrap_or(SectionId::About)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_new_state_mounts_navbar() {
        let state = AppState::with_sample();
        assert_eq!(state.scroll_feed.subscriber_count(), 1);
        assert_eq!(state.navigation().active_section, None);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_apply_layout_resolves_navigation() {
        let mut state = AppState::with_sample();
        let mut layout = PageLayout::new(16);
        layout.push(SectionId::About, 30, 60);
        layout.push(SectionId::Experience, 60, 120);

        state.viewport.offset = 40;
        state.apply_layout(layout, 200, 24);

        // 40 rows * 16px = 640px; Experience top 960 - 200 = 760 not reached
        assert_eq!(state.scroll_y_px(), 640);
        assert_eq!(state.navigation().active_section, Some(SectionId::About));
        assert!(state.navigation().scrolled_past_threshold);
    }

    #[test]
    fn test_observe_reveals_marks_visible_sections_only() {
        let mut state = AppState::with_sample();
        let mut layout = PageLayout::new(16);
        layout.push(SectionId::About, 2, 30);
        layout.push(SectionId::Experience, 100, 150);
        state.page_layout = layout;
        state.viewport.update_content_size(200, 40);

        state.observe_reveals(Duration::ZERO);

        assert!(state.reveal.is_revealed(SectionId::About));
        assert!(!state.reveal.is_revealed(SectionId::Experience));
    }
}
