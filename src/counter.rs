use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::error::{ClientError, Result};
use crate::ids::format_client_number;
use crate::store::{write_atomic, RecordStore};

const COUNTER_FILE: &str = "contador.txt";

/// Highest customer number issued so far, mirrored in `contador.txt`.
#[derive(Debug)]
pub struct Counter {
    path: PathBuf,
    last_number: u32,
}

impl Counter {
    /// Read the counter file, or rebuild it from the highest customer number
    /// found among the stored records when it is missing or unreadable.
    pub fn load(store: &RecordStore) -> Result<Self> {
        let path = store.dir().join(COUNTER_FILE);

        if path.exists() {
            match read_counter(&path) {
                Ok(last_number) => return Ok(Self { path, last_number }),
                Err(e) => warn!(error = %e, "counter file unreadable, rebuilding from records"),
            }
        }

        let last_number = store
            .records()
            .iter()
            .filter_map(|(_, record)| record.number_value())
            .max()
            .unwrap_or(0);

        write_atomic(&path, &last_number.to_string())?;
        info!(last_number, "counter initialized from records");
        Ok(Self { path, last_number })
    }

    pub fn last_number(&self) -> u32 {
        self.last_number
    }

    /// Issue the next customer number. The new value is on disk before it is
    /// returned; if persisting fails nothing changes.
    pub fn next(&mut self) -> Result<String> {
        let seq = self
            .last_number
            .checked_add(1)
            .ok_or(ClientError::CounterOverflow(self.last_number))?;
        write_atomic(&self.path, &seq.to_string())?;
        self.last_number = seq;
        Ok(format_client_number(seq))
    }
}

fn read_counter(path: &PathBuf) -> Result<u32> {
    let content = fs::read_to_string(path)?;
    content
        .trim()
        .parse()
        .map_err(|_| ClientError::InvalidCounter {
            path: path.clone(),
            content: content.trim().to_string(),
        })
}
