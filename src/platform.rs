//! Config file location.
//!
//! Resolution order:
//! 1. Explicit path (`--config`)
//! 2. `~/.tempo-units/config.toml`
//! 3. Platform config directory (XDG on Linux, Application Support on macOS,
//!    AppData on Windows)
//! 4. `.tempo-units/config.toml` in the working directory

use std::path::{Path, PathBuf};

const APP_DIR: &str = "tempo-units";
const CONFIG_FILE: &str = "config.toml";

/// Resolve the config file path. Never fails; a missing file is handled by the loader.
pub fn config_path(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }

    let candidates = candidate_paths(home::home_dir(), dirs::config_dir());
    candidates
        .iter()
        .find(|path| path.is_file())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")).join(CONFIG_FILE))
}

fn candidate_paths(home: Option<PathBuf>, config_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(home) = home {
        paths.push(home.join(format!(".{APP_DIR}")).join(CONFIG_FILE));
    }
    if let Some(config_dir) = config_dir {
        paths.push(config_dir.join(APP_DIR).join(CONFIG_FILE));
    }
    paths.push(PathBuf::from(format!(".{APP_DIR}")).join(CONFIG_FILE));
    paths
}
