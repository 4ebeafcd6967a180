//! folio-tui - Terminal UI for Folio
//!
//! This crate provides the ratatui-based terminal interface. It lays the
//! portfolio out as one scrollable page, reports section rows back to
//! `folio-app` for the navigation bar, and turns crossterm events into
//! messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main entry points
pub use runner::run_with_project;
