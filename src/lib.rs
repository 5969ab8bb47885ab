//! Contact Book - a small bounded address book
//!
//! Core modules:
//! - `store`: Ordered, capacity-bounded contact collection
//! - `validate`: Per-field validation rules
//! - `codec`: Per-byte modular exponentiation transform
//! - `serializer`: `name|phone|email|date` line format
//! - `persistence`: Encoded save/load of the whole store
//! - `form`: Add/edit workflow used by the presentation layer
//! - `settings`: JSON-backed configuration

pub mod codec;
pub mod contact;
pub mod error;
pub mod form;
pub mod persistence;
pub mod serializer;
pub mod settings;
pub mod store;
pub mod validate;

pub use codec::ModExpCodec;
pub use contact::{Contact, Field};
pub use error::{ContactError, Result};
pub use form::{ContactForm, EditMode};
pub use persistence::{LoadOutcome, PersistenceService};
pub use serializer::ParsedContacts;
pub use settings::Settings;
pub use store::{MAX_CONTACTS, RecordStore, SortField};
