//! Application settings
//!
//! Persisted as JSON next to the data file. Missing files fall back to
//! defaults; malformed files are an error.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::ModExpCodec;
use crate::error::Result;
use crate::persistence::PersistenceService;
use crate::serializer::MAX_SERIALIZED_BYTES;
use crate::store::{MAX_CONTACTS, RecordStore, SortField};

/// Address book settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Encoded contacts file
    pub data_file: PathBuf,
    /// Maximum number of stored contacts
    pub capacity: usize,
    /// Largest serialized text accepted on save or load, in bytes
    pub max_serialized_bytes: usize,
    /// Field used by `sort` when none is given
    pub default_sort: SortField,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("contacts.enc"),
            capacity: MAX_CONTACTS,
            max_serialized_bytes: MAX_SERIALIZED_BYTES,
            default_sort: SortField::Name,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "contact-book.json";

    /// Load settings from `path`, using defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = serde_json::from_str(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// An empty store sized by these settings
    pub fn new_store(&self) -> RecordStore {
        RecordStore::with_capacity(self.capacity)
    }

    /// Persistence bound to these settings' buffer limit
    pub fn persistence(&self) -> PersistenceService {
        PersistenceService::new(ModExpCodec::default(), self.max_serialized_bytes)
    }
}
