//! Main TUI runner - entry point and event loop

use std::path::Path;

use tokio::sync::mpsc;

use folio_app::config;
use folio_app::message::Message;
use folio_app::process;
use folio_app::signals;
use folio_app::state::AppState;
use folio_core::load_portfolio_or_sample;
use folio_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI for the portfolio in `project_path`
pub async fn run_with_project(project_path: &Path) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Load configuration and content before touching the terminal so
    // content errors print normally
    let settings = config::load_settings(project_path);
    info!(
        "Loaded settings: threshold={}px lookahead={}px animations={}",
        settings.navigation.scroll_threshold,
        settings.navigation.lookahead_margin,
        settings.ui.animations
    );
    let portfolio = load_portfolio_or_sample(project_path).context("Loading portfolio")?;
    info!("Showing portfolio of {}", portfolio.personal.name);

    // Initialize terminal
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::new(settings, portfolio);

    // Unified message channel for signals and background actions
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process messages from background tasks (submit results, timers, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}
