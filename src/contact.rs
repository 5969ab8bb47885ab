//! Contact record and its per-field length limits

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four text fields of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Name,
    Phone,
    Email,
    Date,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Date => "date",
        }
    }

    /// Maximum stored length in bytes
    pub fn max_len(&self) -> usize {
        match self {
            Field::Name => 99,
            Field::Phone => 29,
            Field::Email => 99,
            Field::Date => 10,
        }
    }

    /// Human-readable rule, shown when validation fails
    pub fn rule(&self) -> &'static str {
        match self {
            Field::Name => "must not be empty",
            Field::Phone => "digits, '+' and '-' only, '+' must start a known country code",
            Field::Email => "must contain '@'",
            Field::Date => "free-form",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single address book entry
///
/// Fields never exceed [`Field::max_len`]; longer input is cut short on
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Free-form, not validated
    pub date: String,
}

impl Contact {
    /// Build a contact, truncating each field to its limit
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: truncated(name.into(), Field::Name.max_len()),
            phone: truncated(phone.into(), Field::Phone.max_len()),
            email: truncated(email.into(), Field::Email.max_len()),
            date: truncated(date.into(), Field::Date.max_len()),
        }
    }

    /// Same record with every field cut to its limit
    pub fn clamped(self) -> Self {
        Self::new(self.name, self.phone, self.email, self.date)
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Date => &self.date,
        }
    }
}

/// Cut `s` to at most `max` bytes without splitting a character
pub fn truncated(mut s: String, max: usize) -> String {
    if s.len() > max {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}
