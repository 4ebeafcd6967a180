//! folio-app - Application state and orchestration for Folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the page viewport and section layout, the scroll feed the
//! navigation bar subscribes to, the contact form flow, and configuration
//! loading. It knows nothing about the terminal; `folio-tui` renders
//! [`AppState`] and feeds [`Message`]s back in.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page_view;
pub mod process;
pub mod scroll_feed;
pub mod signals;
pub mod state;

// Re-export primary types
pub use folio_core::ContactFormState;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use page_view::{PageLayout, PageViewport, SectionSpan};
pub use scroll_feed::{NavigationTracker, ScrollFeed, ScrollSubscription};
pub use state::{AppPhase, AppState, UiMode};
