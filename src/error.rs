//! Error types shared by the store, codec, and persistence layers.

use std::path::PathBuf;

use thiserror::Error;

use crate::contact::Field;

/// Every recoverable failure the address book can report.
#[derive(Debug, Error)]
pub enum ContactError {
    /// A field failed its validation rule; nothing was mutated.
    #[error("Invalid {field}: {}", .field.rule())]
    ValidationFailed { field: Field },

    /// The store already holds `capacity` records.
    #[error("Contact list is full ({capacity} entries)")]
    CapacityExceeded { capacity: usize },

    /// An index outside `[0, len)` was used for update or delete.
    #[error("No contact at index {index} (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Opening, reading, or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file does not exist. Callers treat this as "nothing to load".
    #[error("No data file found at {}", .0.display())]
    NotFound(PathBuf),

    /// The file decoded, but not a single line held a usable record.
    #[error("No valid contacts found in file")]
    NoValidRecords,

    /// The serialized text is larger than the configured buffer limit.
    #[error("Contact data too large: {size} bytes exceeds limit of {limit}")]
    SerializedTooLarge { size: usize, limit: usize },

    /// Codec constants cannot represent every byte value.
    #[error("Invalid codec key: modulus {modulus} must be in 256..=2147483647")]
    InvalidKey { modulus: u64 },

    /// The settings file exists but is not valid JSON for `Settings`.
    #[error("Invalid settings: {0}")]
    Config(#[from] serde_json::Error),

    /// A sort field name that is neither `name` nor `phone`.
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ContactError>;
