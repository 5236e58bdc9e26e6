use crate::error::{ClientError, Result};
use crate::model::ClientRecord;
use crate::store::RecordStore;

/// What a search value is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Customer number, case-insensitive exact match
    Number,
    /// Identifier, exact match
    Id,
    /// Substring of "given family", case-insensitive
    Name,
}

impl Criterion {
    /// Menu selector: 1 number, 2 id, 3 name
    pub fn from_choice(choice: &str) -> Result<Self> {
        match choice.trim() {
            "1" => Ok(Criterion::Number),
            "2" => Ok(Criterion::Id),
            "3" => Ok(Criterion::Name),
            other => Err(ClientError::InvalidOption(other.to_string())),
        }
    }

    pub fn matches(&self, id: &str, record: &ClientRecord, value: &str) -> bool {
        match self {
            Criterion::Number => record.number.to_lowercase() == value.to_lowercase(),
            Criterion::Id => id == value,
            Criterion::Name => record
                .full_name()
                .to_lowercase()
                .contains(&value.to_lowercase()),
        }
    }
}

/// Scan every record in the store, in identifier order.
pub fn find(store: &RecordStore, criterion: Criterion, value: &str) -> Vec<(String, ClientRecord)> {
    store
        .records()
        .into_iter()
        .filter(|(id, record)| criterion.matches(id, record, value))
        .collect()
}
