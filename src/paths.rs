//! Centralized path definitions for constrain
//!
//! ## Configuration lookup
//!
//! ```text
//! $CONSTRAIN_CONFIG                       # explicit override
//! ./constrain.toml                        # project config
//! <config dir>/constrain/config.toml      # user config (XDG on Linux)
//! ```
//!
//! The first file that exists wins.

use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "CONSTRAIN_CONFIG";

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "constrain.toml";

/// Global config directory name
const GLOBAL_DIR: &str = "constrain";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Default location of declaration files, relative to the project root
pub const DEFAULT_CONSTRAINTS_GLOB: &str = "constraints/**/*.toml";

/// Get the project config file path under `root`.
#[must_use]
pub fn project_config(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG)
}

/// Get the global constrain directory.
///
/// Returns `<config dir>/constrain/`, or `~/.constrain/` when the platform
/// has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(format!(".{GLOBAL_DIR}")),
        |dir| dir.join(GLOBAL_DIR),
    )
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config files to try, in priority order
#[must_use]
pub fn config_candidates(root: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        candidates.push(PathBuf::from(explicit));
    }
    candidates.push(project_config(root));
    candidates.push(global_config());
    candidates
}
