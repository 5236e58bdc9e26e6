use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use tracing::{error, info};

use crate::counter::Counter;
use crate::error::{ClientError, Result};
use crate::ids::generate_unique_id;
use crate::model::{ClientRecord, ClientType, NewClient, REGISTERED_FORMAT};
use crate::search::{find, Criterion};
use crate::store::RecordStore;
use crate::validate::{classify_contact, ContactKind};

/// Result of a successful create
#[derive(Debug, Clone)]
pub struct Created {
    pub id: String,
    pub record: ClientRecord,
}

/// Outcome of an operation that targets a single client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    NotFound,
    /// More than one client matched; nothing was changed
    Ambiguous(Vec<(String, ClientRecord)>),
    /// The single matching client, after the operation was applied
    Done(String, ClientRecord),
}

/// Client operations over a record store. The store is the only source of
/// truth; nothing is cached between calls.
#[derive(Debug)]
pub struct ClientBook {
    store: RecordStore,
    counter: Counter,
}

impl ClientBook {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let store = RecordStore::open(dir)?;
        let counter = Counter::load(&store)?;
        Ok(Self { store, counter })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn last_number(&self) -> u32 {
        self.counter.last_number()
    }

    pub fn create(&mut self, input: NewClient) -> Result<Created> {
        self.create_at(input, Local::now().naive_local())
    }

    /// Validate, assign identifier and customer number, then persist.
    /// Validation failures leave no trace on disk.
    pub fn create_at(&mut self, input: NewClient, now: NaiveDateTime) -> Result<Created> {
        let given_name = input.given_name.trim();
        if given_name.is_empty() {
            return Err(ClientError::EmptyGivenName);
        }
        let family_name = input.family_name.trim();
        if family_name.is_empty() {
            return Err(ClientError::EmptyFamilyName);
        }
        let kind = ClientType::parse(&input.kind)?;

        let contact = input.contact.trim();
        match classify_contact(contact) {
            Some(ContactKind::Phone) => info!(contact, "contact validated as phone"),
            Some(ContactKind::Email) => info!(contact, "contact validated as email"),
            None => return Err(ClientError::InvalidContact(contact.to_string())),
        }

        let id = generate_unique_id(&self.store, given_name, family_name, now.date());
        let number = self.counter.next().inspect_err(|e| {
            error!(id = %id, error = %e, "failed to persist counter");
        })?;

        let record = ClientRecord {
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            kind,
            contact: contact.to_string(),
            services: Vec::new(),
            registered: now.format(REGISTERED_FORMAT).to_string(),
            number,
        };
        self.store.save(&id, &record)?;
        info!(id = %id, number = %record.number, "client created");

        Ok(Created { id, record })
    }

    pub fn find(&self, criterion: Criterion, value: &str) -> Vec<(String, ClientRecord)> {
        find(&self.store, criterion, value.trim())
    }

    /// Append one service to the single client matching the search.
    pub fn add_service(&self, criterion: Criterion, value: &str, service: &str) -> Result<Lookup> {
        self.with_single(criterion, value, |store, id, mut record| {
            let service = service.trim();
            if service.is_empty() {
                return Err(ClientError::EmptyService);
            }
            record.services.push(service.to_string());
            store.save(id, &record)?;
            info!(id, service, "service added");
            Ok(record)
        })
    }

    /// Remove the single client matching the search.
    pub fn delete(&self, criterion: Criterion, value: &str) -> Result<Lookup> {
        self.with_single(criterion, value, |store, id, record| {
            store.remove(id)?;
            Ok(record)
        })
    }

    pub fn list(&self) -> Vec<(String, ClientRecord)> {
        self.store.records()
    }

    fn with_single<F>(&self, criterion: Criterion, value: &str, apply: F) -> Result<Lookup>
    where
        F: FnOnce(&RecordStore, &str, ClientRecord) -> Result<ClientRecord>,
    {
        let mut matches = self.find(criterion, value);
        if matches.len() > 1 {
            return Ok(Lookup::Ambiguous(matches));
        }
        let Some((id, record)) = matches.pop() else {
            return Ok(Lookup::NotFound);
        };

        let record = apply(&self.store, &id, record)?;
        Ok(Lookup::Done(id, record))
    }
}
