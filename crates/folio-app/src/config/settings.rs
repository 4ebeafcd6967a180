//! Settings parser for .folio/config.toml

use super::types::Settings;
use folio_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const FOLIO_DIR: &str = ".folio";

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[navigation]
scroll_threshold = 50          # px scrolled before the bar turns compact
lookahead_margin = 200         # px ahead of the viewport top a section counts as reached
retain_when_unmatched = false  # keep the last highlight above the first section

[contact]
submit_delay_ms = 1000
status_display_ms = 5000

[ui]
animations = true
row_height_px = 16
"#;

/// Path of the settings file for `project_path`
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(FOLIO_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .folio/config.toml
///
/// Missing or broken files fall back to defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write `settings` to .folio/config.toml, creating the directory
pub fn save_settings(project_path: &Path, settings: &Settings) -> Result<()> {
    let folio_dir = project_path.join(FOLIO_DIR);
    std::fs::create_dir_all(&folio_dir)
        .map_err(|e| Error::config(format!("Failed to create .folio dir: {}", e)))?;

    let content = toml::to_string_pretty(settings)?;
    std::fs::write(config_path(project_path), content)?;
    debug!("Saved settings to {:?}", folio_dir);
    Ok(())
}

/// Create default config files in .folio/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let folio_dir = project_path.join(FOLIO_DIR);

    if !folio_dir.exists() {
        std::fs::create_dir_all(&folio_dir)
            .map_err(|e| Error::config(format!("Failed to create .folio dir: {}", e)))?;
    }

    let config_path = folio_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)?;
        info!("Created {:?}", config_path);
    }

    Ok(())
}
