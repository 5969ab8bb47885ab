//! Save/load of the whole store to a single encoded file
//!
//! Save: serialize → encode every byte → write fixed-width integers.
//! Load: read integers → decode to bytes → lenient parse → replace store.
//!
//! The store is only touched after a load has fully succeeded and produced at
//! least one record. A failed save may leave a partially written file.

pub mod stream;

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use crate::codec::ModExpCodec;
use crate::contact::Contact;
use crate::error::{ContactError, Result};
use crate::serializer::{self, MAX_SERIALIZED_BYTES, ParsedContacts};
use crate::store::RecordStore;

pub use stream::{ENCODED_WIDTH, read_encoded, write_encoded};

/// What a load did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Store replaced; `rejected` records did not fit the capacity
    Loaded { accepted: usize, rejected: usize },
    /// No data file yet; store untouched
    NothingToLoad,
    /// File decoded but held no usable record; store untouched
    NoValidRecords,
}

/// Codec plus buffer limit, applied to one file at a time
#[derive(Debug, Clone)]
pub struct PersistenceService {
    codec: ModExpCodec,
    max_serialized_bytes: usize,
}

impl Default for PersistenceService {
    fn default() -> Self {
        Self::new(ModExpCodec::default(), MAX_SERIALIZED_BYTES)
    }
}

impl PersistenceService {
    pub fn new(codec: ModExpCodec, max_serialized_bytes: usize) -> Self {
        Self {
            codec,
            max_serialized_bytes,
        }
    }

    /// Write `contacts` to `path`, replacing any previous content
    pub fn save(&self, contacts: &[Contact], path: &Path) -> Result<()> {
        // Serialize first so an oversize store never truncates the file
        let text = serializer::serialize(contacts, self.max_serialized_bytes)?;
        let mut writer = BufWriter::new(File::create(path)?);
        write_encoded(&mut writer, &self.codec, &text)?;
        log::info!(
            "Contacts saved ({} entries, {} bytes) to {}",
            contacts.len(),
            text.len() * ENCODED_WIDTH,
            path.display()
        );
        Ok(())
    }

    /// Read and parse `path` without touching any store.
    ///
    /// A missing file is reported as [`ContactError::NotFound`].
    pub fn load(&self, path: &Path) -> Result<ParsedContacts> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ContactError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        let mut reader = BufReader::new(file);
        let text = read_encoded(&mut reader, &self.codec, self.max_serialized_bytes)?;
        let parsed = serializer::parse(&text);
        log::info!(
            "Loaded {} contact(s) from {} ({} line(s) discarded)",
            parsed.accepted(),
            path.display(),
            parsed.discarded
        );
        Ok(parsed)
    }

    /// Load `path` and, if it yields any records, replace `store` with them.
    ///
    /// Missing files and files without valid records leave `store` as is.
    pub fn load_into(&self, store: &mut RecordStore, path: &Path) -> Result<LoadOutcome> {
        let parsed = match self.load(path) {
            Ok(parsed) => parsed,
            Err(ContactError::NotFound(_)) => {
                log::info!("No data file found at {}, nothing to load", path.display());
                return Ok(LoadOutcome::NothingToLoad);
            }
            Err(e) => return Err(e),
        };
        if parsed.contacts.is_empty() {
            log::warn!("No valid contacts in {}, keeping current list", path.display());
            return Ok(LoadOutcome::NoValidRecords);
        }
        let accepted = parsed.accepted();
        let rejected = store.replace_all(parsed.contacts);
        Ok(LoadOutcome::Loaded {
            accepted: accepted - rejected,
            rejected,
        })
    }
}
