//! Where forest-navigator keeps its files
//!
//! Both directories are created on first use under the platform base from
//! `dirs`, e.g. `~/.config/forest-navigator/` and `~/.cache/forest-navigator/`
//! on Linux.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "forest-navigator";

fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    let dir = base
        .with_context(|| format!("No {} directory on this platform", kind))?
        .join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Holds `config.toml` and the default `catalog.toml`
pub fn config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

/// Holds release-build log files
pub fn cache_dir() -> Result<PathBuf> {
    app_dir(dirs::cache_dir(), "cache")
}

pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn default_catalog_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("catalog.toml"))
}
