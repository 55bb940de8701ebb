//! XDG directory utilities for interview-scribe.

use std::path::PathBuf;

use anyhow::{Context, Result};
use xdg::BaseDirectories;

const APP_NAME: &str = "interview-scribe";

fn base_dirs() -> BaseDirectories {
    BaseDirectories::with_prefix(APP_NAME)
}

/// Return the XDG config directory (no creation - config may not exist yet).
/// `~/.config/interview-scribe/`
pub fn config_dir() -> Result<PathBuf> {
    base_dirs()
        .get_config_home()
        .context("Could not determine config directory (HOME not set?)")
}

/// Return the XDG data directory, creating it if needed.
/// `~/.local/share/interview-scribe/`
pub fn data_dir() -> Result<PathBuf> {
    let dir = base_dirs()
        .get_data_home()
        .context("Could not determine data directory (HOME not set?)")?;
    std::fs::create_dir_all(&dir).context("Failed to create data directory")?;
    Ok(dir)
}

/// Directory where downloaded recognition models are stored.
/// `~/.local/share/interview-scribe/models/`
pub fn models_dir() -> Result<PathBuf> {
    Ok(data_dir()?.join("models"))
}
