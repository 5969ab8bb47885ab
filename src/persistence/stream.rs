//! Encoded integer stream
//!
//! Each plaintext byte becomes one little-endian `i32`. There is no header.

use std::io::{self, Read, Write};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::codec::ModExpCodec;
use crate::error::{ContactError, Result};

/// Width of one encoded value on disk
pub const ENCODED_WIDTH: usize = 4;

/// Encode `bytes` and write them in order, stopping at the first failed write
pub fn write_encoded<W: Write>(
    writer: &mut W,
    codec: &ModExpCodec,
    bytes: &[u8],
) -> io::Result<()> {
    for &b in bytes {
        writer.write_i32::<LittleEndian>(codec.encode_byte(b))?;
    }
    writer.flush()
}

/// Read integers until end of input and decode each back to a byte.
///
/// Fails if more than `limit` bytes would be decoded; at most one value past
/// the limit is ever read. A trailing fragment shorter than one integer is
/// ignored.
pub fn read_encoded<R: Read>(
    reader: &mut R,
    codec: &ModExpCodec,
    limit: usize,
) -> Result<Vec<u8>> {
    let max_raw = (limit as u64).saturating_add(1).saturating_mul(ENCODED_WIDTH as u64);
    let mut raw = Vec::new();
    reader.take(max_raw).read_to_end(&mut raw)?;

    let chunks = raw.chunks_exact(ENCODED_WIDTH);
    let leftover = chunks.remainder().len();
    if leftover > 0 {
        log::warn!(
            "Ignoring {} trailing byte(s) that do not form a whole value",
            leftover
        );
    }
    if chunks.len() > limit {
        return Err(ContactError::SerializedTooLarge {
            size: chunks.len(),
            limit,
        });
    }
    Ok(chunks
        .map(|chunk| codec.decode_integer(LittleEndian::read_i32(chunk)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_layout_is_little_endian_i32() {
        let codec = ModExpCodec::default();
        let mut buf = Vec::new();
        write_encoded(&mut buf, &codec, &[255, 1]).unwrap();
        // 255 -> 865 = 0x0361, 1 -> 1
        assert_eq!(buf, [0x61, 0x03, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_round_trip() {
        let codec = ModExpCodec::default();
        let text = b"Ann|+44123|a@b|2024\n";
        let mut buf = Vec::new();
        write_encoded(&mut buf, &codec, text).unwrap();
        assert_eq!(buf.len(), text.len() * ENCODED_WIDTH);

        let decoded = read_encoded(&mut Cursor::new(buf), &codec, 1000).unwrap();
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_trailing_fragment_ignored() {
        let codec = ModExpCodec::default();
        let mut buf = Vec::new();
        write_encoded(&mut buf, &codec, b"A").unwrap();
        buf.extend_from_slice(&[7, 7]);
        let decoded = read_encoded(&mut Cursor::new(buf), &codec, 1000).unwrap();
        assert_eq!(decoded, b"A");
    }

    #[test]
    fn test_limit_exceeded() {
        let codec = ModExpCodec::default();
        let mut buf = Vec::new();
        write_encoded(&mut buf, &codec, b"abcd").unwrap();
        assert!(read_encoded(&mut Cursor::new(buf.clone()), &codec, 4).is_ok());
        let err = read_encoded(&mut Cursor::new(buf), &codec, 3).unwrap_err();
        assert!(matches!(err, ContactError::SerializedTooLarge { size: 4, limit: 3 }));
    }

    #[test]
    fn test_unbounded_input_stops_at_limit() {
        let codec = ModExpCodec::default();
        let err = read_encoded(&mut io::repeat(0), &codec, 8).unwrap_err();
        assert!(matches!(err, ContactError::SerializedTooLarge { size: 9, limit: 8 }));
    }
}
