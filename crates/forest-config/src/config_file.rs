//! Config file discovery
//!
//! `.forest-navigator.toml` is looked up in the working directory, then the
//! home directory, then as `config.toml` in the app config directory. The
//! first readable file wins.

use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".forest-navigator.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Read the first config file found in the search locations
pub fn load_config_file() -> Option<ConfigFile> {
    read_first(&search_locations())
}

fn search_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(CONFIG_FILE)];
    locations.extend(dirs::home_dir().map(|home| home.join(CONFIG_FILE)));
    locations.extend(crate::paths::app_config_path().ok());
    locations
}

fn read_first(candidates: &[PathBuf]) -> Option<ConfigFile> {
    candidates.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(ConfigFile {
            path: path.to_path_buf(),
            content,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Skipping unreadable config {}: {}", path.display(), e);
            None
        }
    }
}
