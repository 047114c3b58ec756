//! The WOOF frame, the unit that lives in the pixel LSBs:
//!
//! ```text
//! bytes[0..12]      "WOOF_STEG_V2"
//! bytes[12..16]     payload length L, unsigned big-endian
//! bytes[16..16+L]   zlib (deflate) compressed, compact UTF-8 JSON of the document
//! ```

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;
use std::io::{BufReader, Read, Write};

use crate::document::{Absence, MetadataDocument};
use crate::error::WoofError;
use crate::media::CodecOptions;
use crate::result::Result;

pub const MAGIC: &[u8; 12] = b"WOOF_STEG_V2";
pub const LENGTH_SIZE: usize = 4;
pub const HEADER_SIZE: usize = MAGIC.len() + LENGTH_SIZE;
/// Upper bound of the uncompressed document text, on both sides of the codec
pub const MAX_DOCUMENT_LEN: u64 = 64 * 1024 * 1024;

/// A complete frame, ready to be written bit by bit into a carrier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    document_len: usize,
}

impl Frame {
    /// Serializes, compresses and prefixes the document with magic and length.
    pub fn build(document: &MetadataDocument, opts: &CodecOptions) -> Result<Self> {
        let text = serde_json::to_vec(document)?;
        if text.len() as u64 > MAX_DOCUMENT_LEN {
            return Err(WoofError::DocumentTooLarge {
                len: text.len() as u64,
                limit: MAX_DOCUMENT_LEN,
            });
        }
        let payload = compress(&text, opts.get_compression_level())?;
        let length = u32::try_from(payload.len()).map_err(|_| WoofError::CapacityExceeded {
            required: (HEADER_SIZE + payload.len()) as u64 * 8,
            available: (HEADER_SIZE as u64 + u64::from(u32::MAX)) * 8,
        })?;

        let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
        bytes.write_all(MAGIC)?;
        bytes.write_u32::<BigEndian>(length)?;
        bytes.extend_from_slice(&payload);
        debug!(
            "built frame of {} bytes from a {} byte document",
            bytes.len(),
            text.len()
        );

        Ok(Self {
            bytes,
            document_len: text.len(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// number of carrier bits the frame occupies
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8
    }

    /// size of the compressed payload, the value of the length field
    pub fn payload_len(&self) -> usize {
        self.bytes.len() - HEADER_SIZE
    }

    /// size of the uncompressed document text
    pub fn document_len(&self) -> usize {
        self.document_len
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Reads a frame from the start of `content` and parses its document.
///
/// Only the bytes the frame declares are consumed. Every failure is reported
/// as an [`Absence`], nothing here panics on foreign data.
pub fn read_frame(content: &mut dyn Read) -> std::result::Result<MetadataDocument, Absence> {
    let mut magic = [0; MAGIC.len()];
    content
        .read_exact(&mut magic)
        .map_err(|_| Absence::TooSmallForMagic)?;
    if &magic != MAGIC {
        return Err(Absence::MagicMismatch);
    }

    let declared = content
        .read_u32::<BigEndian>()
        .map_err(|_| Absence::MissingLength)? as usize;

    let mut payload = Vec::new();
    content
        .take(declared as u64)
        .read_to_end(&mut payload)
        .map_err(|_| Absence::Truncated {
            declared,
            available: 0,
        })?;
    if payload.len() < declared {
        return Err(Absence::Truncated {
            declared,
            available: payload.len(),
        });
    }

    parse_payload(&payload, MAX_DOCUMENT_LEN)
}

/// Inflates and parses in one pass. The text is never held as a whole and
/// inflating stops after `limit` bytes.
fn parse_payload(payload: &[u8], limit: u64) -> std::result::Result<MetadataDocument, Absence> {
    let text = BufReader::new(ZlibDecoder::new(payload).take(limit));
    serde_json::from_reader(text).map_err(|e| {
        if e.is_io() {
            Absence::Decompression
        } else {
            Absence::Parse
        }
    })
}

fn compress(data: &[u8], level: u32) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
    encoder.write_all(data)?;
    encoder.finish()
}
