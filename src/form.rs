//! Add/edit form workflow
//!
//! The presentation layer collects raw text into a [`ContactForm`] and submits
//! it with an [`EditMode`] saying whether this is a new entry or an edit.

use crate::contact::Contact;
use crate::error::Result;
use crate::store::RecordStore;
use crate::validate::validate_contact;

/// Whether the form creates a record or overwrites one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Adding,
    EditingAt(usize),
}

/// Raw field text as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
}

/// Strip trailing whitespace and control characters; leading ones stay
pub fn trim_field(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_whitespace() || c.is_control())
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            date: date.into(),
        }
    }

    /// Pre-fill for editing an existing record
    pub fn from_contact(contact: &Contact) -> Self {
        Self::new(
            contact.name.clone(),
            contact.phone.clone(),
            contact.email.clone(),
            contact.date.clone(),
        )
    }

    /// Copy with each field trimmed
    pub fn trimmed(&self) -> Self {
        Self::new(
            trim_field(&self.name),
            trim_field(&self.phone),
            trim_field(&self.email),
            trim_field(&self.date),
        )
    }

    /// Trim, then check name, phone and email in that order
    pub fn validate(&self) -> Result<Contact> {
        let t = self.trimmed();
        let contact = Contact::new(t.name, t.phone, t.email, t.date);
        validate_contact(&contact)?;
        Ok(contact)
    }

    /// Validate and apply to `store`. Returns the index of the affected record.
    pub fn submit(&self, mode: EditMode, store: &mut RecordStore) -> Result<usize> {
        let contact = self.validate()?;
        match mode {
            EditMode::Adding => {
                store.add(contact)?;
                Ok(store.len() - 1)
            }
            EditMode::EditingAt(index) => {
                store.update(index, contact)?;
                Ok(index)
            }
        }
    }
}
