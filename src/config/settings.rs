use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Record directory, relative to the data directory unless absolute
    #[serde(default = "default_store_dir")]
    pub dir: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LogSettings {
    #[serde(default = "default_log_file")]
    pub file: String,
    /// Filter directive, e.g. "info" or "clientbook=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_store_dir() -> String {
    "clientes".to_string()
}

fn default_log_file() -> String {
    "clientbook.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
