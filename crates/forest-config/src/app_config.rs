//! Application configuration
//!
//! Configuration loaded from the first config file found (see
//! [`crate::config_file`]), with environment overrides.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Overrides `catalog_file`
pub const CATALOG_ENV: &str = "FOREST_CATALOG";
/// Overrides `default_pattern`
pub const PATTERN_ENV: &str = "FOREST_PATTERN";

/// Application configuration loaded from .forest-navigator.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Patterns offered in the pattern selector
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Pattern selected at startup
    #[serde(default)]
    pub default_pattern: Option<String>,

    /// Coordinates stored in descending order, whose next/previous is flipped
    #[serde(default = "default_inverse_coordinates")]
    pub inverse_coordinates: Vec<String>,

    /// Echo every dispatched action at info level
    #[serde(default)]
    pub verbose_actions: bool,

    /// TOML catalog to browse; falls back to the config directory's catalog.toml
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

fn default_inverse_coordinates() -> Vec<String> {
    vec!["pressure".to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            default_pattern: None,
            inverse_coordinates: default_inverse_coordinates(),
            verbose_actions: false,
            catalog_file: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// Environment overrides are applied on top.
    pub fn load() -> Self {
        let config = Self::from_file().unwrap_or_else(|| {
            log::debug!("Using default app config");
            Self::default()
        });
        config.with_overrides(|name| env::var(name).ok())
    }

    fn from_file() -> Option<Self> {
        let file = crate::load_config_file()?;
        match toml::from_str(&file.content) {
            Ok(config) => {
                log::info!("Loaded app config from {}", file.path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", file.path.display(), e);
                None
            }
        }
    }

    /// Apply overrides looked up by variable name
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(CATALOG_ENV).filter(|v| !v.is_empty()) {
            log::debug!("{} overrides catalog file: {}", CATALOG_ENV, path);
            self.catalog_file = Some(PathBuf::from(path));
        }
        if let Some(pattern) = lookup(PATTERN_ENV).filter(|v| !v.is_empty()) {
            log::debug!("{} overrides default pattern: {}", PATTERN_ENV, pattern);
            self.default_pattern = Some(pattern);
        }
        self
    }

    /// Pattern to start with: explicit default, else the first known pattern
    pub fn startup_pattern(&self) -> Option<&str> {
        self.default_pattern
            .as_deref()
            .or_else(|| self.patterns.first().map(String::as_str))
    }
}
