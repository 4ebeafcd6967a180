//! Page sections - the five named regions of the portfolio page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a page section.
///
/// Declaration order is page order: the navigation bar, the footer quick
/// links and the active-section resolver all iterate [`SectionId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// All sections in declared (page) order
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Identifier used for DOM ids and config keys
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation link label
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }

    /// Section heading shown on the page
    pub fn heading(self) -> &'static str {
        match self {
            SectionId::About => "About Me",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills & Tools",
            SectionId::Contact => "Get in Touch",
        }
    }

    /// Fixed subtitle under the heading. Contact uses the portfolio's `cta`.
    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            SectionId::About => Some("A passionate developer who loves building impactful solutions"),
            SectionId::Experience => Some("My professional journey and contributions"),
            SectionId::Projects => Some("Featured work that showcases my skills and impact"),
            SectionId::Skills => Some("Technologies and tools I work with"),
            SectionId::Contact => None,
        }
    }

    /// In-page anchor, e.g. `#about`
    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Position in declared order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section at a declared-order position
    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown section identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == id)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// A section together with its vertical position on the page.
///
/// `top` is measured in layout pixels from the page origin. It is owned by
/// whichever layout engine produced it and may be zero before the first
/// layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub top: u32,
}

impl Section {
    pub fn new(id: SectionId, top: u32) -> Self {
        Self { id, top }
    }
}
