use regex::Regex;
use std::sync::LazyLock;

static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").unwrap()
});

/// Exactly ten decimal digits (any script), nothing else.
pub fn validate_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

/// `local@domain.tld` shape.
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Which validator a contact string satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
}

pub fn classify_contact(contact: &str) -> Option<ContactKind> {
    if validate_phone(contact) {
        Some(ContactKind::Phone)
    } else if validate_email(contact) {
        Some(ContactKind::Email)
    } else {
        None
    }
}
