use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Could not determine a data directory. Use --data-dir to choose one.")]
    DataDirNotFound,

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid counter file {path}: '{content}' is not a number")]
    InvalidCounter { path: PathBuf, content: String },

    #[error("Customer number counter is exhausted at {0}")]
    CounterOverflow(u32),

    #[error("Given name cannot be empty.")]
    EmptyGivenName,

    #[error("Family name cannot be empty.")]
    EmptyFamilyName,

    #[error("Invalid type '{0}'. Must be 'Persona' or 'Negocio'.")]
    InvalidType(String),

    #[error("Invalid contact '{0}'. Phone must have 10 digits or email must be valid.")]
    InvalidContact(String),

    #[error("Service cannot be empty.")]
    EmptyService,

    #[error("Invalid option '{0}'.")]
    InvalidOption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// True for errors caused by user input rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::EmptyGivenName
                | ClientError::EmptyFamilyName
                | ClientError::InvalidType(_)
                | ClientError::InvalidContact(_)
                | ClientError::EmptyService
                | ClientError::InvalidOption(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
