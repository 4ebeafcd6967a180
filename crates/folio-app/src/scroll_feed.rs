//! Scroll event subscription for the navigation bar.
//!
//! The page publishes its scroll offset into a [`ScrollFeed`]; the navigation
//! bar mounts a [`NavigationTracker`] that subscribes to the feed and
//! re-resolves its highlight on every published position. Dropping the
//! tracker drops its receiver, which unsubscribes it.
//!
//! The feed is a `watch` channel, so bursts of scroll events coalesce and the
//! tracker always sees the final resting position.

use tokio::sync::watch;

use folio_core::{LayoutProvider, NavigationConfig, NavigationState};

/// Publisher side of the page scroll position (pixels from the top)
#[derive(Debug)]
pub struct ScrollFeed {
    tx: watch::Sender<u32>,
}

impl Default for ScrollFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Publish a new scroll offset. Works with no subscribers.
    pub fn publish(&self, scroll_y: u32) {
        self.tx.send_replace(scroll_y);
    }

    /// Last published offset
    pub fn current(&self) -> u32 {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> ScrollSubscription {
        ScrollSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Receiving side of a [`ScrollFeed`]. Unsubscribes when dropped.
#[derive(Debug)]
pub struct ScrollSubscription {
    rx: watch::Receiver<u32>,
}

impl ScrollSubscription {
    /// Take the newest offset if one was published since the last poll
    pub fn poll(&mut self) -> Option<u32> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }

    /// Newest offset, whether or not it was already seen
    pub fn latest(&self) -> u32 {
        *self.rx.borrow()
    }

    /// Wait for the next published offset.
    ///
    /// Returns `None` once the feed is gone.
    pub async fn changed(&mut self) -> Option<u32> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

/// Navigation bar state bound to a scroll subscription
#[derive(Debug)]
pub struct NavigationTracker {
    subscription: ScrollSubscription,
    state: NavigationState,
    config: NavigationConfig,
}

impl NavigationTracker {
    /// Subscribe to `feed` and start from its current position
    pub fn mount(feed: &ScrollFeed, config: NavigationConfig) -> Self {
        let subscription = feed.subscribe();
        let state = NavigationState {
            scroll_y: subscription.latest(),
            ..NavigationState::default()
        };
        Self {
            subscription,
            state,
            config,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Handle a pending scroll event, if any.
    ///
    /// Returns whether the scrolled flag or highlight changed.
    pub fn sync<L: LayoutProvider + ?Sized>(&mut self, layout: &L) -> bool {
        match self.subscription.poll() {
            Some(scroll_y) => self.state.update_from(scroll_y, layout, &self.config),
            None => false,
        }
    }

    /// Re-resolve at the latest position, e.g. after the layout moved
    pub fn refresh<L: LayoutProvider + ?Sized>(&mut self, layout: &L) -> bool {
        let scroll_y = self.subscription.latest();
        let _ = self.subscription.poll();
        self.state.update_from(scroll_y, layout, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Section, SectionId, UnmatchedPolicy};

    fn reference_page() -> Vec<Section> {
        vec![
            Section::new(SectionId::About, 600),
            Section::new(SectionId::Experience, 1000),
            Section::new(SectionId::Projects, 1600),
            Section::new(SectionId::Skills, 2400),
            Section::new(SectionId::Contact, 3000),
        ]
    }

    #[test]
    fn test_mount_subscribes_and_drop_unsubscribes() {
        let feed = ScrollFeed::new();
        assert_eq!(feed.subscriber_count(), 0);

        let tracker = NavigationTracker::mount(&feed, NavigationConfig::default());
        assert_eq!(feed.subscriber_count(), 1);

        drop(tracker);
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let feed = ScrollFeed::new();
        feed.publish(120);
        assert_eq!(feed.current(), 120);
    }

    #[test]
    fn test_sync_applies_published_position() {
        let feed = ScrollFeed::new();
        let mut tracker = NavigationTracker::mount(&feed, NavigationConfig::default());
        let page = reference_page();

        feed.publish(850);
        assert!(tracker.sync(&page));
        assert_eq!(tracker.state().active_section, Some(SectionId::Experience));
        assert!(tracker.state().scrolled_past_threshold);

        // Nothing new published
        assert!(!tracker.sync(&page));
    }

    #[test]
    fn test_burst_coalesces_to_final_position() {
        let feed = ScrollFeed::new();
        let mut tracker = NavigationTracker::mount(&feed, NavigationConfig::default());

        for y in [100, 900, 1500, 2250] {
            feed.publish(y);
        }
        tracker.sync(&reference_page());

        assert_eq!(tracker.state().scroll_y, 2250);
        assert_eq!(tracker.state().active_section, Some(SectionId::Skills));
    }

    #[test]
    fn test_refresh_uses_latest_position_with_new_layout() {
        let feed = ScrollFeed::new();
        let mut tracker = NavigationTracker::mount(&feed, NavigationConfig::default());
        feed.publish(850);
        tracker.sync(&reference_page());

        let moved = vec![
            Section::new(SectionId::About, 200),
            Section::new(SectionId::Experience, 2000),
        ];
        assert!(tracker.refresh(&moved));
        assert_eq!(tracker.state().active_section, Some(SectionId::About));
    }

    #[test]
    fn test_retain_policy_flows_through_tracker() {
        let feed = ScrollFeed::new();
        let config = NavigationConfig {
            unmatched: UnmatchedPolicy::Retain,
            ..NavigationConfig::default()
        };
        let mut tracker = NavigationTracker::mount(&feed, config);
        let page = reference_page();

        feed.publish(850);
        tracker.sync(&page);
        feed.publish(0);
        tracker.sync(&page);

        assert_eq!(tracker.state().active_section, Some(SectionId::Experience));
        assert!(!tracker.state().scrolled_past_threshold);
    }

    #[tokio::test]
    async fn test_changed_wakes_on_publish() {
        let feed = ScrollFeed::new();
        let mut sub = feed.subscribe();
        feed.publish(42);
        assert_eq!(sub.changed().await, Some(42));

        drop(feed);
        assert_eq!(sub.changed().await, None);
    }
}
