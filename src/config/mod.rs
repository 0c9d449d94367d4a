//! Configuration module for randsearch
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "RANDSEARCH_SETTINGS_PATH";

/// Load settings, searching the usual locations
///
/// An explicit path must exist. Otherwise the first existing file among
/// `RANDSEARCH_SETTINGS_PATH` and the default locations is used, falling
/// back to built-in defaults. Environment overrides are applied last.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        info!("Loading settings from: {}", path.display());
        let mut settings = Settings::from_file(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        settings.merge_env();
        return Ok(settings);
    }

    let from_env = std::env::var(SETTINGS_PATH_VAR).ok().map(PathBuf::from);

    for path in from_env.into_iter().chain(default_paths()) {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)
                .with_context(|| format!("failed to read settings from {}", path.display()))?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/randsearch/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("randsearch/settings.yml"));
    }
    paths
}
