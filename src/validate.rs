//! Field validation rules
//!
//! Pure predicates over already-trimmed text. The store consults these before
//! any add or update; the form layer consults them before calling the store.

use crate::contact::{Contact, Field};
use crate::error::{ContactError, Result};

/// Country codes a `+`-prefixed phone number may start with
pub const COUNTRY_PREFIXES: &[&str] = &["+44", "+60"];

/// Name must be non-empty
pub fn validate_name(name: &str) -> bool {
    !name.is_empty()
}

/// Digits, `+` and `-` only; a leading `+` must open a whitelisted country code.
/// The empty string is accepted.
pub fn validate_phone(phone: &str) -> bool {
    if !phone
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b'+' || b == b'-')
    {
        return false;
    }
    if phone.starts_with('+') {
        return COUNTRY_PREFIXES.iter().any(|p| phone.starts_with(p));
    }
    true
}

/// Email may be empty; otherwise it needs an `@`
pub fn validate_email(email: &str) -> bool {
    email.is_empty() || email.contains('@')
}

/// Check every rule in form order (name, phone, email), reporting the first
/// failing field
pub fn validate_contact(contact: &Contact) -> Result<()> {
    if !validate_name(&contact.name) {
        return Err(ContactError::ValidationFailed { field: Field::Name });
    }
    if !validate_phone(&contact.phone) {
        return Err(ContactError::ValidationFailed { field: Field::Phone });
    }
    if !validate_email(&contact.email) {
        return Err(ContactError::ValidationFailed { field: Field::Email });
    }
    Ok(())
}
