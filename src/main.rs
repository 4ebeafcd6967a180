//! Folio - a personal portfolio in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use folio_core::prelude::*;

/// Folio - a personal portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse a personal portfolio in the terminal", long_about = None)]
struct Args {
    /// Directory containing portfolio.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write a sample portfolio.toml and .folio/config.toml, then exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Get base path from args or use current directory
    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        if folio::init_project(&base_path)? {
            eprintln!("Wrote sample portfolio to {}", base_path.display());
        } else {
            eprintln!("portfolio.toml already exists in {}", base_path.display());
        }
        return Ok(());
    }

    folio::run_with_project(&base_path).await
}
