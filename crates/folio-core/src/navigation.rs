//! Active-section resolution for the navigation bar.
//!
//! Maps a vertical scroll offset and the page's section offsets to the
//! navigation bar's visual state: whether the page has scrolled past the top
//! (compact bar) and which section link is highlighted.
//!
//! The resolver is a pure function of its inputs. Section offsets come from a
//! [`LayoutProvider`] so the same logic runs against the terminal page
//! layout, the browser DOM, or synthetic offsets in tests.

use crate::section::{Section, SectionId};

/// Scroll offset (px) past which the navigation bar switches to its compact style
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 50;

/// Look-ahead (px) below the scroll position within which a section counts as reached
pub const DEFAULT_LOOKAHEAD_MARGIN: u32 = 200;

// ─────────────────────────────────────────────────────────────────────────────
// LayoutProvider
// ─────────────────────────────────────────────────────────────────────────────

/// Capability that reports where each section currently sits on the page.
///
/// Implementations return sections in declared order. Offsets are read-only
/// snapshots; the resolver never feeds anything back into layout.
pub trait LayoutProvider {
    fn section_offsets(&self) -> Vec<Section>;
}

impl LayoutProvider for [Section] {
    fn section_offsets(&self) -> Vec<Section> {
        self.to_vec()
    }
}

impl LayoutProvider for Vec<Section> {
    fn section_offsets(&self) -> Vec<Section> {
        self.clone()
    }
}

impl<T: LayoutProvider + ?Sized> LayoutProvider for &T {
    fn section_offsets(&self) -> Vec<Section> {
        (**self).section_offsets()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// What happens to the highlight when no section qualifies as reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmatchedPolicy {
    /// Remove the highlight (e.g. while the hero area above About is in view)
    #[default]
    Clear,
    /// Keep whatever section was active before this scroll event
    Retain,
}

/// Tunables for [`NavigationState::resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationConfig {
    pub scroll_threshold: u32,
    pub lookahead_margin: u32,
    pub unmatched: UnmatchedPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            lookahead_margin: DEFAULT_LOOKAHEAD_MARGIN,
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolver
// ─────────────────────────────────────────────────────────────────────────────

/// Whether `scroll_y` is strictly past `threshold`
pub fn is_scrolled_past(scroll_y: u32, threshold: u32) -> bool {
    scroll_y > threshold
}

/// Find the active section for `scroll_y`.
///
/// Walks `sections` in reverse declared order and returns the first one whose
/// top lies at or above `scroll_y + margin`. Later-declared sections therefore
/// win ties between identical offsets. Returns `None` when no section has been
/// reached yet.
pub fn resolve_active_section(
    scroll_y: u32,
    sections: &[Section],
    margin: u32,
) -> Option<SectionId> {
    let reach = i64::from(scroll_y);
    sections
        .iter()
        .rev()
        .find(|section| reach >= i64::from(section.top) - i64::from(margin))
        .map(|section| section.id)
}

/// Navigation bar state derived from one scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// Scroll offset this state was computed from
    pub scroll_y: u32,
    /// True once the page has scrolled past the compact-bar threshold
    pub scrolled_past_threshold: bool,
    /// Section whose link is highlighted, if any
    pub active_section: Option<SectionId>,
}

impl NavigationState {
    /// Compute the state for `scroll_y` from scratch.
    ///
    /// `previous` only matters under [`UnmatchedPolicy::Retain`], where its
    /// active section carries over when nothing qualifies.
    pub fn resolve(
        previous: &NavigationState,
        scroll_y: u32,
        sections: &[Section],
        config: &NavigationConfig,
    ) -> NavigationState {
        let active_section =
            match resolve_active_section(scroll_y, sections, config.lookahead_margin) {
                Some(id) => Some(id),
                None => match config.unmatched {
                    UnmatchedPolicy::Clear => None,
                    UnmatchedPolicy::Retain => previous.active_section,
                },
            };

        NavigationState {
            scroll_y,
            scrolled_past_threshold: is_scrolled_past(scroll_y, config.scroll_threshold),
            active_section,
        }
    }

    /// Recompute in place from a layout provider, returning whether the
    /// visible state (threshold flag or highlight) changed.
    pub fn update_from<L: LayoutProvider + ?Sized>(
        &mut self,
        scroll_y: u32,
        layout: &L,
        config: &NavigationConfig,
    ) -> bool {
        let sections = layout.section_offsets();
        let next = NavigationState::resolve(self, scroll_y, &sections, config);
        let changed = next.active_section != self.active_section
            || next.scrolled_past_threshold != self.scrolled_past_threshold;
        if next.active_section != self.active_section {
            tracing::trace!(
                "Active section {:?} -> {:?} at scroll_y={}",
                self.active_section,
                next.active_section,
                scroll_y
            );
        }
        *self = next;
        changed
    }

    /// Whether `id` is the highlighted section
    pub fn is_active(&self, id: SectionId) -> bool {
        self.active_section == Some(id)
    }
}
