//! Bounded, ordered contact store
//!
//! Insertion order is kept until an explicit sort. Deletion compacts by
//! shifting later records down one slot; there are no tombstones.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::contact::{Contact, Field};
use crate::error::{ContactError, Result};
use crate::validate::validate_contact;

/// Maximum number of contacts to keep
pub const MAX_CONTACTS: usize = 1000;

/// Fields the store can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Phone,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Phone => "phone",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(SortField::Name),
            "phone" => Some(SortField::Phone),
            _ => None,
        }
    }

    fn field(&self) -> Field {
        match self {
            SortField::Name => Field::Name,
            SortField::Phone => Field::Phone,
        }
    }
}

/// ASCII case-insensitive ordering, byte by byte
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// In-memory contact collection
#[derive(Debug, Clone)]
pub struct RecordStore {
    entries: Vec<Contact>,
    capacity: usize,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create an empty store holding up to [`MAX_CONTACTS`]
    pub fn new() -> Self {
        Self::with_capacity(MAX_CONTACTS)
    }

    /// Create an empty store with a custom bound
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.entries.get(index)
    }

    /// All records in store order
    pub fn contacts(&self) -> &[Contact] {
        &self.entries
    }

    /// Append a validated contact, cutting fields to their limits
    pub fn add(&mut self, contact: Contact) -> Result<()> {
        let contact = contact.clamped();
        validate_contact(&contact)?;
        if self.is_full() {
            return Err(ContactError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.entries.push(contact);
        Ok(())
    }

    /// Overwrite the record at `index` in place, cutting fields to their limits
    pub fn update(&mut self, index: usize, contact: Contact) -> Result<()> {
        self.check_index(index)?;
        let contact = contact.clamped();
        validate_contact(&contact)?;
        self.entries[index] = contact;
        Ok(())
    }

    /// Remove the record at `index`, shifting later records down (O(n))
    pub fn delete(&mut self, index: usize) -> Result<Contact> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Records whose name contains `query` (case-sensitive), with their
    /// store indices. An empty or absent query matches everything.
    pub fn search<'a, 'q>(
        &'a self,
        query: Option<&'q str>,
    ) -> impl Iterator<Item = (usize, &'a Contact)> + use<'a, 'q> {
        let query = query.filter(|q| !q.is_empty());
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, c)| query.is_none_or(|q| c.name.contains(q)))
    }

    /// Like [`search`](Self::search) without the indices
    pub fn filter_by_name_substring(&self, query: Option<&str>) -> Vec<&Contact> {
        self.search(query).map(|(_, c)| c).collect()
    }

    /// Stable ascending sort, ASCII case-insensitive on the chosen field
    pub fn sort_by(&mut self, field: SortField) {
        let field = field.field();
        self.entries
            .sort_by(|a, b| cmp_ignore_case(a.field(field), b.field(field)));
    }

    /// Swap in a freshly loaded set of contacts.
    ///
    /// Keeps at most `capacity` records and returns how many were rejected.
    pub fn replace_all(&mut self, mut contacts: Vec<Contact>) -> usize {
        let rejected = contacts.len().saturating_sub(self.capacity);
        if rejected > 0 {
            log::warn!(
                "Too many contacts loaded: keeping {}, rejecting {}",
                self.capacity,
                rejected
            );
            contacts.truncate(self.capacity);
        }
        self.entries = contacts.into_iter().map(Contact::clamped).collect();
        rejected
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(ContactError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, phone: &str) -> Contact {
        Contact::new(name, phone, "", "")
    }

    fn names(store: &RecordStore) -> Vec<&str> {
        store.contacts().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut store = RecordStore::new();
        store.add(named("Bob", "1")).unwrap();
        store.add(named("Ann", "2")).unwrap();
        assert_eq!(names(&store), ["Bob", "Ann"]);
    }

    #[test]
    fn test_add_rejects_invalid_without_mutating() {
        let mut store = RecordStore::new();
        let err = store.add(named("", "1")).unwrap_err();
        assert!(matches!(err, ContactError::ValidationFailed { field: Field::Name }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut store = RecordStore::new();
        for i in 0..MAX_CONTACTS {
            store.add(named(&format!("c{i}"), "")).unwrap();
        }
        let err = store.add(named("extra", "")).unwrap_err();
        assert!(matches!(err, ContactError::CapacityExceeded { capacity: 1000 }));
        assert_eq!(store.len(), 1000);
    }

    #[test]
    fn test_add_and_update_clamp_struct_literals() {
        let mut store = RecordStore::new();
        store
            .add(Contact {
                name: "n".repeat(300),
                phone: "1".repeat(60),
                email: String::new(),
                date: "2024-01-01T00:00".to_string(),
            })
            .unwrap();
        let c = store.get(0).unwrap();
        assert_eq!(c.name.len(), Field::Name.max_len());
        assert_eq!(c.phone.len(), Field::Phone.max_len());
        assert_eq!(c.date, "2024-01-01");

        store
            .update(
                0,
                Contact {
                    email: format!("x@{}", "e".repeat(200)),
                    ..Contact::new("Ann", "", "", "")
                },
            )
            .unwrap();
        assert_eq!(store.get(0).unwrap().email.len(), Field::Email.max_len());

        let buf = crate::serializer::serialize(store.contacts(), usize::MAX).unwrap();
        assert_eq!(crate::serializer::parse(&buf).contacts, store.contacts());
    }

    #[test]
    fn test_update_in_place() {
        let mut store = RecordStore::new();
        store.add(named("Ann", "1")).unwrap();
        store.add(named("Bob", "2")).unwrap();
        store.update(0, named("Anne", "9")).unwrap();
        assert_eq!(store.get(0).unwrap().name, "Anne");
        assert_eq!(store.get(1).unwrap().name, "Bob");

        let err = store.update(2, named("Zed", "")).unwrap_err();
        assert!(matches!(err, ContactError::IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn test_delete_compacts() {
        let mut store = RecordStore::new();
        for n in ["a", "b", "c", "d"] {
            store.add(named(n, "")).unwrap();
        }
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&store), ["a", "c", "d"]);

        assert!(store.delete(3).is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_sort_by_name_is_stable_and_case_insensitive() {
        let mut store = RecordStore::new();
        store.add(named("bob", "2")).unwrap();
        store.add(named("Bob", "1")).unwrap();
        store.add(named("alice", "3")).unwrap();
        store.sort_by(SortField::Name);

        let pairs: Vec<_> = store
            .contacts()
            .iter()
            .map(|c| (c.name.as_str(), c.phone.as_str()))
            .collect();
        assert_eq!(pairs, [("alice", "3"), ("bob", "2"), ("Bob", "1")]);
    }

    #[test]
    fn test_sort_by_phone() {
        let mut store = RecordStore::new();
        store.add(named("a", "300")).unwrap();
        store.add(named("b", "+44")).unwrap();
        store.add(named("c", "100")).unwrap();
        store.sort_by(SortField::Phone);
        assert_eq!(names(&store), ["b", "c", "a"]);
    }

    #[test]
    fn test_filter_by_name_substring() {
        let mut store = RecordStore::new();
        for n in ["Ann", "Anna", "Bob"] {
            store.add(named(n, "")).unwrap();
        }
        let hits: Vec<_> = store
            .filter_by_name_substring(Some("Ann"))
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(hits, ["Ann", "Anna"]);

        assert_eq!(store.filter_by_name_substring(Some("")).len(), 3);
        assert_eq!(store.filter_by_name_substring(None).len(), 3);
        // Case-sensitive
        assert!(store.filter_by_name_substring(Some("ann")).is_empty());
    }

    #[test]
    fn test_search_reports_store_indices() {
        let mut store = RecordStore::new();
        for n in ["Bob", "Ann", "Anna"] {
            store.add(named(n, "")).unwrap();
        }
        let idx: Vec<_> = store.search(Some("Ann")).map(|(i, _)| i).collect();
        assert_eq!(idx, [1, 2]);

        // Results outlive the query string
        let hits = {
            let query = String::from("Bo");
            store.filter_by_name_substring(Some(&query))
        };
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_replace_all_clamps_to_capacity() {
        let mut store = RecordStore::with_capacity(2);
        store.add(named("old", "")).unwrap();
        let rejected = store.replace_all(vec![named("a", ""), named("b", ""), named("c", "")]);
        assert_eq!(rejected, 1);
        assert_eq!(names(&store), ["a", "b"]);
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!(SortField::from_str("Phone"), Some(SortField::Phone));
        assert_eq!(SortField::from_str("NAME"), Some(SortField::Name));
        assert_eq!(SortField::from_str("email"), None);
    }
}
