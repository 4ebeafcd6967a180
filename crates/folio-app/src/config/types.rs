//! Configuration types for Folio
//!
//! Defines:
//! - `Settings` - Global viewer settings
//! - Per-area sub-settings for navigation, the contact form and the UI

use std::time::Duration;

use serde::{Deserialize, Serialize};

use folio_core::{
    NavigationConfig, UnmatchedPolicy, DEFAULT_LOOKAHEAD_MARGIN, DEFAULT_SCROLL_THRESHOLD,
};

use crate::page_view::DEFAULT_ROW_HEIGHT_PX;

/// Global settings from `.folio/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub contact: ContactSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Navigation bar settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Scroll offset (px) past which the bar turns compact
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: u32,

    /// How far ahead (px) a section counts as reached
    #[serde(default = "default_lookahead_margin")]
    pub lookahead_margin: u32,

    /// Keep the previous highlight when no section is reached
    #[serde(default)]
    pub retain_when_unmatched: bool,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            lookahead_margin: default_lookahead_margin(),
            retain_when_unmatched: false,
        }
    }
}

impl NavigationSettings {
    pub fn to_config(&self) -> NavigationConfig {
        NavigationConfig {
            scroll_threshold: self.scroll_threshold,
            lookahead_margin: self.lookahead_margin,
            unmatched: if self.retain_when_unmatched {
                UnmatchedPolicy::Retain
            } else {
                UnmatchedPolicy::Clear
            },
        }
    }
}

/// Contact form timing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactSettings {
    /// Simulated submission latency
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// How long the success/failure banner stays up
    #[serde(default = "default_status_display_ms")]
    pub status_display_ms: u64,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            status_display_ms: default_status_display_ms(),
        }
    }
}

impl ContactSettings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn status_display(&self) -> Duration {
        Duration::from_millis(self.status_display_ms)
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Play entrance animations; false shows every section immediately
    #[serde(default = "default_true")]
    pub animations: bool,

    /// Pixel height of one terminal row for the section resolver
    #[serde(default = "default_row_height_px")]
    pub row_height_px: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            animations: true,
            row_height_px: default_row_height_px(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_scroll_threshold() -> u32 {
    DEFAULT_SCROLL_THRESHOLD
}

fn default_lookahead_margin() -> u32 {
    DEFAULT_LOOKAHEAD_MARGIN
}

fn default_submit_delay_ms() -> u64 {
    1000
}

fn default_status_display_ms() -> u64 {
    5000
}

fn default_row_height_px() -> u32 {
    DEFAULT_ROW_HEIGHT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.navigation.scroll_threshold, 50);
        assert_eq!(settings.navigation.lookahead_margin, 200);
        assert!(!settings.navigation.retain_when_unmatched);
        assert_eq!(settings.contact.submit_delay(), Duration::from_secs(1));
        assert_eq!(settings.contact.status_display(), Duration::from_secs(5));
        assert!(settings.ui.animations);
        assert_eq!(settings.ui.row_height_px, 16);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings: Settings = toml::from_str("[navigation]\nlookahead_margin = 120\n").unwrap();
        assert_eq!(settings.navigation.lookahead_margin, 120);
        assert_eq!(settings.navigation.scroll_threshold, 50);
        assert_eq!(settings.contact, ContactSettings::default());
    }

    #[test]
    fn test_navigation_config_policy() {
        let mut nav = NavigationSettings::default();
        assert_eq!(nav.to_config(), NavigationConfig::default());

        nav.retain_when_unmatched = true;
        assert_eq!(nav.to_config().unmatched, UnmatchedPolicy::Retain);
    }
}
