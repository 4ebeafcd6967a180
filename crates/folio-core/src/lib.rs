//! # folio-core - Core Domain Types
//!
//! Foundation crate for Folio. Provides the page sections, the
//! active-section resolver, portfolio content, contact-form validation,
//! entrance-animation choreography, and error handling.
//!
//! This crate has **zero internal dependencies** and no runtime: everything
//! here is plain data and pure functions, shared by the terminal viewer and
//! the wasm website. File-based logging sits behind the default `logging`
//! feature so the website can opt out of it.
//!
//! ## Public API
//!
//! ### Sections (`section`)
//! - [`SectionId`] - The five page sections in declared order
//! - [`Section`] - A section with its vertical offset
//!
//! ### Navigation (`navigation`)
//! - [`NavigationState`] - Scrolled flag and highlighted section
//! - [`resolve_active_section()`] - Reverse-order first-match resolver
//! - [`LayoutProvider`] - Source of section offsets
//!
//! ### Content (`content`)
//! - [`Portfolio`] - All page text, loaded from `portfolio.toml`
//!
//! ### Contact (`contact`)
//! - [`ContactForm`] - Form fields and validation
//! - [`FieldError`] - Inline field error
//! - [`ContactFormState`] - Editing and submission flow shared by both front ends
//!
//! ### Reveal (`reveal`)
//! - [`RevealTracker`] - One-shot section entrance timing
//! - [`RevealItem`] - Per-item delay table
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod contact;
pub mod content;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod navigation;
pub mod prelude;
pub mod reveal;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use contact::{
    is_valid_email, ContactField, ContactForm, ContactFormState, FieldError, SubmitStatus,
    ValidationErrors,
};
pub use content::{
    current_year, init_portfolio_file, load_portfolio, load_portfolio_or_sample, About,
    Experience, Personal, Portfolio, Project, SkillCategory, Skills, Stat, PORTFOLIO_FILENAME,
    SKILL_HIGHLIGHTS,
};
pub use error::{Error, Result, ResultExt};
pub use navigation::{
    is_scrolled_past, resolve_active_section, LayoutProvider, NavigationConfig, NavigationState,
    UnmatchedPolicy, DEFAULT_LOOKAHEAD_MARGIN, DEFAULT_SCROLL_THRESHOLD,
};
pub use reveal::{in_view, CubicBezier, Reveal, RevealItem, RevealTracker, DEFAULT_VIEW_MARGIN};
pub use section::{Section, SectionId};
