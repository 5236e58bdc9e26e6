use clientbook::validate::{classify_contact, ContactKind};
use clientbook::{validate_email, validate_phone, ClientType};

#[test]
fn test_phone_accepts_exactly_ten_digits() {
    for phone in [
        "5512345678",
        "0000000000",
        "9999999999",
        "５５１２３４５６７８",
        "٠١٢٣٤٥٦٧٨٩",
    ] {
        assert!(validate_phone(phone), "{phone} should be valid");
    }
}

#[test]
fn test_phone_rejects_other_shapes() {
    for phone in [
        "",
        "551234567",
        "55123456789",
        "55-1234-5678",
        "551234567a",
        " 5512345678",
        "(55)12345678",
        "５５１２３４５６７",
    ] {
        assert!(!validate_phone(phone), "{phone:?} should be invalid");
    }
}

#[test]
fn test_email_accepts_standard_shapes() {
    for email in [
        "a@b.c",
        "ana@example.com",
        "first.last+tag@mail-server.co.uk",
        "USER_1@Example.COM",
    ] {
        assert!(validate_email(email), "{email} should be valid");
    }
}

#[test]
fn test_email_rejects_missing_parts() {
    for email in [
        "notanemail",
        "ana.example.com",
        "ana@example",
        "@example.com",
        "ana@.com",
        "ana@exa mple.com",
        "ana@@example.com",
    ] {
        assert!(!validate_email(email), "{email:?} should be invalid");
    }
}

#[test]
fn test_classify_contact() {
    assert_eq!(classify_contact("5512345678"), Some(ContactKind::Phone));
    assert_eq!(classify_contact("ana@example.com"), Some(ContactKind::Email));
    assert_eq!(classify_contact("12345"), None);
}

#[test]
fn test_client_type_is_case_normalized() {
    assert_eq!(ClientType::parse("persona").unwrap(), ClientType::Person);
    assert_eq!(ClientType::parse("NEGOCIO").unwrap(), ClientType::Business);
    assert_eq!(ClientType::parse("  Persona ").unwrap(), ClientType::Person);
    assert!(ClientType::parse("Empresa").is_err());
    assert!(ClientType::parse("").is_err());
}
