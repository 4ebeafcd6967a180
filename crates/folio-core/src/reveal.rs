//! Entrance-animation choreography.
//!
//! Each section plays its entrance once, the first time it scrolls into the
//! viewport. Inside a section, items start at staggered delays and ease in
//! over a fixed duration. This module only computes *when* and *how far*
//! each item is revealed; renderers decide what a partial reveal looks like.
//!
//! Time is passed in as a [`Duration`] since an arbitrary epoch chosen by the
//! caller, so the same tracker works with `Instant` on native targets and
//! `performance.now()` in the browser.

use std::collections::HashMap;
use std::time::Duration;

use crate::section::SectionId;

/// Default item animation length
pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

/// Inset (px) applied to each viewport edge before testing visibility
pub const DEFAULT_VIEW_MARGIN: u32 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Easing
// ─────────────────────────────────────────────────────────────────────────────

/// CSS-style cubic Bézier timing function through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// Material "standard" curve used for every section entrance
    pub const STANDARD: CubicBezier = CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    pub const LINEAR: CubicBezier = CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    fn sample(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
    }

    fn sample_derivative(a1: f64, a2: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
    }

    /// Curve parameter whose x coordinate is `x`
    fn solve_x(&self, x: f64) -> f64 {
        // Newton first, bisection if the slope flattens out
        let mut s = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, s) - x;
            if err.abs() < 1e-7 {
                return s;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        s = x;
        while hi - lo > 1e-7 {
            let value = Self::sample(self.x1, self.x2, s);
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// Eased value for linear progress `t` in `0..=1`
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_x(t))
    }

    /// CSS `transition-timing-function` value
    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Choreography
// ─────────────────────────────────────────────────────────────────────────────

/// Animated element within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealItem {
    /// Section title and subtitle
    Header,
    /// Direct child `i` of a staggered container (About columns)
    Staggered(usize),
    /// About: key strength `i`
    Strength(usize),
    /// About: stat card `i`
    Stat(usize),
    /// Experience: timeline entry `i`
    ExperienceEntry(usize),
    /// Experience: timeline dot of entry `i`
    TimelineDot(usize),
    /// Projects: card `i`
    ProjectCard(usize),
    /// Skills: category card `i`
    SkillCategory(usize),
    /// Skills: tag `tag` inside category `category`
    SkillTag { category: usize, tag: usize },
    /// Skills: "what I bring" block
    SkillHighlights,
    /// Contact: information column
    ContactInfo,
    /// Contact: form column
    ContactForm,
    /// Navigation bar sliding down on page load
    NavBar,
    /// Mobile menu link `i`, each time the menu opens
    MenuLink(usize),
}

impl RevealItem {
    /// Start delay after the section enters the viewport
    pub fn delay(self) -> Duration {
        let millis = match self {
            RevealItem::Header => 0,
            RevealItem::Staggered(i) => 100 * i as u64,
            RevealItem::Strength(i) => 300 + 100 * i as u64,
            RevealItem::Stat(i) => 500 + 100 * i as u64,
            RevealItem::ExperienceEntry(i) => 200 * i as u64,
            RevealItem::TimelineDot(i) => 200 * i as u64 + 300,
            RevealItem::ProjectCard(i) => 200 * i as u64,
            RevealItem::SkillCategory(i) => 100 * i as u64,
            RevealItem::SkillTag { category, tag } => 100 * category as u64 + 50 * tag as u64,
            RevealItem::SkillHighlights => 800,
            RevealItem::ContactInfo => 200,
            RevealItem::ContactForm => 300,
            RevealItem::NavBar => 0,
            RevealItem::MenuLink(i) => 100 * i as u64,
        };
        Duration::from_millis(millis)
    }

    /// Starting translation (x, y) in px before the item slides into place
    pub fn initial_offset(self) -> (i32, i32) {
        match self {
            RevealItem::Header
            | RevealItem::Staggered(_)
            | RevealItem::ProjectCard(_)
            | RevealItem::SkillCategory(_)
            | RevealItem::SkillHighlights => (0, 30),
            RevealItem::Strength(_) => (20, 0),
            RevealItem::ExperienceEntry(i) if i % 2 == 0 => (-50, 0),
            RevealItem::ExperienceEntry(_) => (50, 0),
            RevealItem::ContactInfo => (-30, 0),
            RevealItem::ContactForm => (30, 0),
            RevealItem::NavBar => (0, -100),
            RevealItem::MenuLink(_) => (-20, 0),
            RevealItem::Stat(_) | RevealItem::TimelineDot(_) | RevealItem::SkillTag { .. } => {
                (0, 0)
            }
        }
    }

    /// Starting opacity. The navigation bar only slides.
    pub fn initial_opacity(self) -> f64 {
        match self {
            RevealItem::NavBar => 1.0,
            _ => 0.0,
        }
    }

    /// Starting scale for items that grow in instead of sliding
    pub fn initial_scale(self) -> f64 {
        match self {
            RevealItem::Stat(_) | RevealItem::SkillTag { .. } => 0.8,
            RevealItem::TimelineDot(_) => 0.0,
            _ => 1.0,
        }
    }
}

/// Timing of one item's entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl Reveal {
    pub fn for_item(item: RevealItem) -> Self {
        Self {
            delay: item.delay(),
            duration: DEFAULT_DURATION,
            easing: CubicBezier::STANDARD,
        }
    }

    /// Eased progress in `0..=1`, `elapsed` measured from the section reveal
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = active.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.ease(t.min(1.0))
    }

    /// Whether the item has reached its final state
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

/// Whether a region `[top, bottom)` intersects the viewport after insetting
/// each viewport edge by `margin`.
pub fn in_view(top: u32, bottom: u32, scroll_y: u32, viewport_height: u32, margin: u32) -> bool {
    let view_start = scroll_y.saturating_add(margin);
    let view_end = scroll_y
        .saturating_add(viewport_height)
        .saturating_sub(margin);
    view_end > view_start && top < view_end && bottom > view_start
}

// ─────────────────────────────────────────────────────────────────────────────
// RevealTracker
// ─────────────────────────────────────────────────────────────────────────────

/// Remembers when each section first came into view.
///
/// Sections never un-reveal: once observed in view, scrolling away leaves
/// them fully shown.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed_at: HashMap<SectionId, Duration>,
    enabled: bool,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RevealTracker {
    /// `enabled = false` shows everything immediately (reduced motion)
    pub fn new(enabled: bool) -> Self {
        Self {
            revealed_at: HashMap::new(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a visibility observation. Returns `true` on the first reveal.
    pub fn observe(&mut self, section: SectionId, visible: bool, now: Duration) -> bool {
        if !visible || self.revealed_at.contains_key(&section) {
            return false;
        }
        tracing::debug!("Revealing section {}", section);
        self.revealed_at.insert(section, now);
        true
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        !self.enabled || self.revealed_at.contains_key(&section)
    }

    /// Eased progress of `item` in `section` at time `now`
    pub fn progress(&self, section: SectionId, item: RevealItem, now: Duration) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        match self.revealed_at.get(&section) {
            Some(start) => Reveal::for_item(item).progress(now.saturating_sub(*start)),
            None => 0.0,
        }
    }

    /// True while any revealed section still has items mid-animation.
    ///
    /// `longest` is the largest delay used by the caller's items.
    pub fn is_animating(&self, now: Duration, longest: Duration) -> bool {
        self.enabled
            && self
                .revealed_at
                .values()
                .any(|start| now.saturating_sub(*start) < longest + DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_easing_endpoints() {
        let curve = CubicBezier::STANDARD;
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert_eq!(curve.ease(-1.0), 0.0);
        assert_eq!(curve.ease(2.0), 1.0);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let curve = CubicBezier::STANDARD;
        let mut last = 0.0;
        for i in 1..=100 {
            let v = curve.ease(i as f64 / 100.0);
            assert!(v >= last, "not monotonic at {i}");
            last = v;
        }
    }

    #[test]
    fn test_standard_curve_decelerates() {
        // Ease-out heavy: past the halfway point in value before half the time
        assert!(CubicBezier::STANDARD.ease(0.5) > 0.5);
    }

    #[test]
    fn test_linear_curve() {
        let v = CubicBezier::LINEAR.ease(0.25);
        assert!((v - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_delay_table() {
        assert_eq!(RevealItem::Header.delay(), Duration::ZERO);
        assert_eq!(RevealItem::Strength(2).delay(), ms(500));
        assert_eq!(RevealItem::Stat(1).delay(), ms(600));
        assert_eq!(RevealItem::ExperienceEntry(3).delay(), ms(600));
        assert_eq!(RevealItem::TimelineDot(1).delay(), ms(500));
        assert_eq!(
            RevealItem::SkillTag {
                category: 2,
                tag: 4
            }
            .delay(),
            ms(400)
        );
        assert_eq!(RevealItem::SkillHighlights.delay(), ms(800));
        assert_eq!(RevealItem::ContactForm.delay(), ms(300));
    }

    #[test]
    fn test_navigation_entrances() {
        assert_eq!(RevealItem::NavBar.delay(), Duration::ZERO);
        assert_eq!(RevealItem::NavBar.initial_offset(), (0, -100));
        assert_eq!(RevealItem::NavBar.initial_opacity(), 1.0);
        assert_eq!(
            Reveal::for_item(RevealItem::NavBar).easing,
            CubicBezier::STANDARD
        );

        assert_eq!(RevealItem::MenuLink(0).delay(), Duration::ZERO);
        assert_eq!(RevealItem::MenuLink(3).delay(), ms(300));
        assert_eq!(RevealItem::MenuLink(1).initial_offset(), (-20, 0));
        assert_eq!(RevealItem::MenuLink(1).initial_opacity(), 0.0);
    }

    #[test]
    fn test_experience_entries_alternate_sides() {
        assert_eq!(RevealItem::ExperienceEntry(0).initial_offset(), (-50, 0));
        assert_eq!(RevealItem::ExperienceEntry(1).initial_offset(), (50, 0));
        assert_eq!(RevealItem::ExperienceEntry(2).initial_offset(), (-50, 0));
    }

    #[test]
    fn test_reveal_progress_waits_for_delay() {
        let reveal = Reveal::for_item(RevealItem::ProjectCard(1));
        assert_eq!(reveal.progress(ms(100)), 0.0);
        assert_eq!(reveal.progress(ms(200)), 0.0);
        let mid = reveal.progress(ms(500));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(reveal.progress(ms(800)), 1.0);
        assert!(reveal.is_complete(ms(800)));
        assert!(!reveal.is_complete(ms(799)));
    }

    #[test]
    fn test_in_view_applies_margin() {
        // viewport 0..600 shrinks to 100..500
        assert!(in_view(0, 200, 0, 600, 100));
        assert!(!in_view(500, 900, 0, 600, 100));
        assert!(in_view(499, 900, 0, 600, 100));
        assert!(!in_view(0, 100, 0, 600, 100));
    }

    #[test]
    fn test_in_view_tiny_viewport_sees_nothing() {
        assert!(!in_view(0, 1000, 0, 150, 100));
    }

    #[test]
    fn test_tracker_reveals_once() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.observe(SectionId::About, false, ms(0)));
        assert!(!tracker.is_revealed(SectionId::About));

        assert!(tracker.observe(SectionId::About, true, ms(100)));
        assert!(!tracker.observe(SectionId::About, true, ms(5000)));
        assert!(tracker.is_revealed(SectionId::About));

        // Out of view later: stays revealed, timing anchored at first reveal
        tracker.observe(SectionId::About, false, ms(6000));
        assert_eq!(
            tracker.progress(SectionId::About, RevealItem::Header, ms(700)),
            1.0
        );
    }

    #[test]
    fn test_tracker_unrevealed_section_has_zero_progress() {
        let tracker = RevealTracker::default();
        assert_eq!(
            tracker.progress(SectionId::Skills, RevealItem::Header, ms(10_000)),
            0.0
        );
    }

    #[test]
    fn test_disabled_tracker_shows_everything() {
        let tracker = RevealTracker::new(false);
        assert!(tracker.is_revealed(SectionId::Contact));
        assert_eq!(
            tracker.progress(SectionId::Contact, RevealItem::ContactForm, Duration::ZERO),
            1.0
        );
        assert!(!tracker.is_animating(Duration::ZERO, ms(800)));
    }

    #[test]
    fn test_is_animating_window() {
        let mut tracker = RevealTracker::default();
        tracker.observe(SectionId::Projects, true, ms(1000));
        assert!(tracker.is_animating(ms(1500), ms(400)));
        assert!(!tracker.is_animating(ms(2000), ms(400)));
    }
}
