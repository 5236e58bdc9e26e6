use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ClientError, Result};

/// Timestamp layout used for `fecha_registro`
pub const REGISTERED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ClientType {
    #[serde(rename = "Persona")]
    Person,
    #[serde(rename = "Negocio")]
    Business,
}

impl ClientType {
    /// Parse user input, capitalizing it first ("persona" -> "Persona").
    pub fn parse(input: &str) -> Result<Self> {
        let mut chars = input.trim().chars();
        let normalized: String = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };

        match normalized.as_str() {
            "Persona" => Ok(ClientType::Person),
            "Negocio" => Ok(ClientType::Business),
            _ => Err(ClientError::InvalidType(input.trim().to_string())),
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientType::Person => write!(f, "Persona"),
            ClientType::Business => write!(f, "Negocio"),
        }
    }
}

/// A persisted client. Field names match the on-disk JSON documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientRecord {
    #[serde(rename = "nombre")]
    pub given_name: String,
    #[serde(rename = "apellido")]
    pub family_name: String,
    #[serde(rename = "tipo")]
    pub kind: ClientType,
    #[serde(rename = "contacto")]
    pub contact: String,
    #[serde(rename = "servicios", default)]
    pub services: Vec<String>,
    #[serde(rename = "fecha_registro")]
    pub registered: String,
    #[serde(rename = "numero_cliente")]
    pub number: String,
}

impl ClientRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// Numeric part of the customer number ("C042" -> 42)
    pub fn number_value(&self) -> Option<u32> {
        self.number.strip_prefix('C')?.parse().ok()
    }
}

/// Raw input for a new client, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub given_name: String,
    pub family_name: String,
    pub kind: String,
    pub contact: String,
}
