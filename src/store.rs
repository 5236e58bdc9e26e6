use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::{ClientError, Result};
use crate::model::ClientRecord;

const RECORD_PREFIX: &str = "cliente_";
const RECORD_SUFFIX: &str = ".json";

/// One JSON document per client inside a single directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Open the store, creating its directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{RECORD_PREFIX}{id}{RECORD_SUFFIX}"))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.path_for(id).exists()
    }

    /// Write a record, replacing any previous version. Failures are logged
    /// here and handed back so the caller can report them.
    pub fn save(&self, id: &str, record: &ClientRecord) -> Result<()> {
        let path = self.path_for(id);
        let result = serde_json::to_string_pretty(record)
            .map_err(ClientError::from)
            .and_then(|content| write_atomic(&path, &content));

        match &result {
            Ok(()) => info!(id, path = %path.display(), "client saved"),
            Err(e) => error!(id, error = %e, "failed to save client"),
        }
        result
    }

    /// Read a record. Missing files yield `None`; unreadable or malformed
    /// ones are logged and also yield `None`.
    pub fn load(&self, id: &str) -> Option<ClientRecord> {
        let path = self.path_for(id);
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                error!(id, error = %e, "failed to read client");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => {
                info!(id, "client loaded");
                Some(record)
            }
            Err(e) => {
                error!(id, error = %e, "failed to parse client");
                None
            }
        }
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        let path = self.path_for(id);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(id, "client deleted");
                Ok(())
            }
            Err(e) => {
                error!(id, error = %e, "failed to delete client");
                Err(e.into())
            }
        }
    }

    /// Identifiers of every record file, sorted ascending.
    pub fn ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(id) = name
                .strip_prefix(RECORD_PREFIX)
                .and_then(|rest| rest.strip_suffix(RECORD_SUFFIX))
            {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Every loadable record in identifier order. Broken files are skipped.
    pub fn records(&self) -> Vec<(String, ClientRecord)> {
        let ids = match self.ids() {
            Ok(ids) => ids,
            Err(e) => {
                error!(dir = %self.dir.display(), error = %e, "failed to list clients");
                return Vec::new();
            }
        };

        ids.into_iter()
            .filter_map(|id| self.load(&id).map(|record| (id, record)))
            .collect()
    }
}

/// Write to a temp file beside `path`, then rename over it.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("record");
    let tmp_path = path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    fs::write(&tmp_path, content)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}
