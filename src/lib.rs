//! Folio Library
//!
//! A personal portfolio rendered as a scrollable terminal page, sharing its
//! content model and navigation logic with the website build.

pub use folio_app as app;
pub use folio_core as core;
pub use folio_tui as tui;

use std::path::Path;

use folio_core::prelude::*;

/// Main application entry point for the portfolio in `project_path`
pub async fn run_with_project(project_path: &Path) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging
    folio_core::logging::init()?;

    info!("Project: {}", project_path.display());

    let result = folio_tui::run_with_project(project_path).await;

    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Fatal error: {:?}", e);
        } else {
            error!("Application error: {:?}", e);
        }
        if let Ok(log_file) = folio_core::logging::get_current_log_file() {
            eprintln!("folio: {} (log: {})", e, log_file.display());
        }
    }

    info!("Folio exiting");
    result
}

/// Write the default `.folio/config.toml` and a sample `portfolio.toml`.
///
/// Existing files are left alone. Returns `true` when the portfolio file
/// was written.
pub fn init_project(project_path: &Path) -> Result<bool> {
    folio_app::config::init_config_dir(project_path)?;
    folio_core::init_portfolio_file(project_path)
}
