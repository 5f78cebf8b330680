//! Bit string type for MMS values

use crate::error::{MmsError, MmsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte-aligned string of bits with an explicit bit length.
///
/// Bits are stored MSB first. Bytes past `(num_bits + 7) / 8` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBitString")]
pub struct BitString {
    bytes: Vec<u8>,
    num_bits: usize,
}

/// Unchecked wire form, validated through [`BitString::new`]
#[derive(Deserialize)]
struct RawBitString {
    bytes: Vec<u8>,
    num_bits: usize,
}

impl TryFrom<RawBitString> for BitString {
    type Error = MmsError;

    fn try_from(raw: RawBitString) -> MmsResult<Self> {
        Self::new(raw.bytes, raw.num_bits)
    }
}

impl BitString {
    /// Construct a new bit string object.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The bit string as a byte array
    /// * `num_bits` - The number of bits
    ///
    /// # Errors
    ///
    /// Returns an error if `num_bits > bytes.len() * 8`
    pub fn new(bytes: Vec<u8>, num_bits: usize) -> MmsResult<Self> {
        if num_bits > bytes.len() * 8 {
            return Err(MmsError::InvalidData(format!(
                "bit string is too short to hold all bits. Need {} bytes for {} bits",
                num_bits.div_ceil(8),
                num_bits
            )));
        }

        Ok(Self { bytes, num_bits })
    }

    /// Create a bit string that uses every bit of `bytes`
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let num_bits = bytes.len() * 8;
        Self { bytes, num_bits }
    }

    /// The significant bytes, `(num_bits + 7) / 8` of them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.byte_size()]
    }

    /// The number of bits.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Number of bytes needed to hold all bits
    pub fn byte_size(&self) -> usize {
        self.num_bits.div_ceil(8).min(self.bytes.len())
    }

    /// Interpret a short bit string as an unsigned integer.
    ///
    /// Zero bytes decode to `0`, one byte to its value and two bytes to a
    /// big-endian `u16`. Longer bit strings have no integer interpretation
    /// and return `None`.
    pub fn as_small_integer(&self) -> Option<u16> {
        match self.as_bytes() {
            [] => Some(0),
            [b0] => Some(u16::from(*b0)),
            [b0, b1] => Some(u16::from_be_bytes([*b0, *b1])),
            _ => None,
        }
    }

    /// Lowercase hex of the significant bytes, prefixed with `0x`
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + self.byte_size() * 2);
        out.push_str("0x");
        for byte in self.as_bytes() {
            out.push_str(&format!("{:02x}", byte));
        }
        out
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.num_bits.min(self.bytes.len() * 8) {
            let byte = self.bytes[index / 8];
            let bit = (byte >> (7 - (index % 8))) & 1;
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}
