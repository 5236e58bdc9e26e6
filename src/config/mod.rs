mod settings;

pub use settings::{LogSettings, Settings, StoreSettings};

use crate::error::{ClientError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the data directory path (platform data dir, or ~/.clientbook/)
pub fn data_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "clientbook") {
        return Ok(proj_dirs.data_dir().to_path_buf());
    }

    // Fallback to ~/.clientbook/
    let home = dirs_home().ok_or(ClientError::DataDirNotFound)?;
    Ok(home.join(".clientbook"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Expand ~ in paths
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_home() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve a configured path against the data directory
pub fn resolve_dir(configured: &str, data_dir: &Path) -> PathBuf {
    let expanded = expand_path(configured);
    if expanded.is_absolute() {
        expanded
    } else {
        data_dir.join(expanded)
    }
}

/// Load config.toml from the data directory (defaults if missing)
pub fn load_settings(data_dir: &Path) -> Result<Settings> {
    let path = data_dir.join("config.toml");
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| ClientError::ConfigParse { path, source: e })
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[store]
dir = "clientes"          # record directory, relative to the data directory

[log]
file = "clientbook.log"   # append-only log, inside the data directory
level = "info"            # overridden by RUST_LOG
"#;
