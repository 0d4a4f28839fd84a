use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::io::Cursor;

use crate::result::Result;
use crate::ShroudError;

pub const DEFAULT_START_MARKER: &[u8] = b"<<<START>>>";
pub const DEFAULT_END_MARKER: &[u8] = b"<<<END>>>";

/// Start and end byte sequences that delimit a payload inside the unveiled bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    start: Vec<u8>,
    end: Vec<u8>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_vec(),
            end: DEFAULT_END_MARKER.to_vec(),
        }
    }
}

impl Markers {
    pub fn new<S: Into<Vec<u8>>, E: Into<Vec<u8>>>(start: S, end: E) -> Result<Self> {
        let (start, end) = (start.into(), end.into());
        if start.is_empty() || end.is_empty() {
            return Err(ShroudError::InvalidMarkers);
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &[u8] {
        &self.start
    }

    pub fn end(&self) -> &[u8] {
        &self.end
    }

    /// number of bits `frame` produces for a payload of `payload_len` bytes
    pub fn framed_bit_len(&self, payload_len: usize) -> usize {
        (self.start.len() + payload_len + self.end.len()) * 8
    }

    /// wraps the payload in the markers and expands every byte into 8 bits, most significant bit first
    pub fn frame(&self, payload: &[u8]) -> Result<Vec<bool>> {
        if find(payload, &self.start).is_some() || find(payload, &self.end).is_some() {
            return Err(ShroudError::PayloadContainsMarker);
        }

        let mut bytes = Vec::with_capacity(self.start.len() + payload.len() + self.end.len());
        bytes.extend_from_slice(&self.start);
        bytes.extend_from_slice(payload);
        bytes.extend_from_slice(&self.end);

        let bit_len = bytes.len() * 8;
        let mut reader = BitReader::endian(Cursor::new(bytes), BigEndian);
        let mut bits = Vec::with_capacity(bit_len);
        for _ in 0..bit_len {
            bits.push(reader.read_bit()?);
        }

        Ok(bits)
    }

    /// regroups bits into bytes and returns what is strictly between the first start marker
    /// and the first end marker after it, a trailing incomplete byte is ignored
    pub fn unframe(&self, bits: &[bool]) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(bits.len() / 8);
        {
            let mut writer = BitWriter::endian(&mut bytes, BigEndian);
            for bit in &bits[..bits.len() - bits.len() % 8] {
                writer.write_bit(*bit)?;
            }
        }

        let begin = find(&bytes, &self.start).ok_or(ShroudError::MarkerNotFound)? + self.start.len();
        let len = find(&bytes[begin..], &self.end).ok_or(ShroudError::MarkerNotFound)?;

        Ok(bytes[begin..begin + len].to_vec())
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
