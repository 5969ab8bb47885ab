//! Delimited text format for the whole store
//!
//! One record per line, `name|phone|email|date\n`, fields written verbatim.
//! Nothing is escaped: a `|` or newline inside a field shifts the record
//! boundary on the next parse.

use crate::contact::Contact;
use crate::error::{ContactError, Result};

pub const FIELD_DELIMITER: u8 = b'|';
pub const LINE_TERMINATOR: u8 = b'\n';

/// Default limit for the serialized buffer, in bytes
pub const MAX_SERIALIZED_BYTES: usize = 99_999;

/// Result of a lenient parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContacts {
    /// Accepted records, in file order
    pub contacts: Vec<Contact>,
    /// Non-empty lines dropped for lacking a name
    pub discarded: usize,
}

impl ParsedContacts {
    pub fn accepted(&self) -> usize {
        self.contacts.len()
    }
}

/// Write every contact as one line. Fails without output if the buffer would
/// grow past `limit` bytes.
pub fn serialize(contacts: &[Contact], limit: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for c in contacts {
        let line_len = c.name.len() + c.phone.len() + c.email.len() + c.date.len() + 4;
        if buf.len() + line_len > limit {
            return Err(ContactError::SerializedTooLarge {
                size: buf.len() + line_len,
                limit,
            });
        }
        for (i, field) in [&c.name, &c.phone, &c.email, &c.date].into_iter().enumerate() {
            if i > 0 {
                buf.push(FIELD_DELIMITER);
            }
            buf.extend_from_slice(field.as_bytes());
        }
        buf.push(LINE_TERMINATOR);
    }
    Ok(buf)
}

/// Parse a buffer back into contacts, skipping lines without a name.
///
/// Missing trailing fields become empty, fields past the fourth are ignored,
/// and every field is truncated to its stored limit. Never fails.
pub fn parse(buf: &[u8]) -> ParsedContacts {
    let mut parsed = ParsedContacts::default();
    for line in buf.split(|&b| b == LINE_TERMINATOR) {
        if line.is_empty() {
            continue;
        }
        let mut fields = line
            .split(|&b| b == FIELD_DELIMITER)
            .map(|f| String::from_utf8_lossy(f).into_owned());
        let name = fields.next().unwrap_or_default();
        if name.is_empty() {
            parsed.discarded += 1;
            continue;
        }
        let phone = fields.next().unwrap_or_default();
        let email = fields.next().unwrap_or_default();
        let date = fields.next().unwrap_or_default();
        parsed.contacts.push(Contact::new(name, phone, email, date));
    }
    if parsed.discarded > 0 {
        log::debug!("Discarded {} malformed line(s)", parsed.discarded);
    }
    parsed
}
