//! Decoded MMS data values

use crate::datatypes::bit_string::BitString;
use crate::datatypes::time::{BinaryTime, UtcTime};
use crate::error::{MmsError, MmsResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value read from an MMS server
///
/// Structures and arrays nest other values; the tree is finite and owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MmsValue {
    /// Boolean value
    Boolean(bool),
    /// Signed integer, any width up to 64 bits
    Integer(i64),
    /// Unsigned integer, any width up to 64 bits
    Unsigned(u64),
    /// Floating point, 32 or 64 bits on the wire
    Float(f64),
    /// Visible string
    VisibleString(String),
    /// MMS (UTF-8) string
    String(String),
    /// Bit string
    BitString(BitString),
    /// Octet string
    OctetString(Vec<u8>),
    /// Structure, heterogeneous ordered members
    Structure(Vec<MmsValue>),
    /// Array, homogeneous ordered elements
    Array(Vec<MmsValue>),
    /// Object identifier arcs
    ObjectIdentifier(Vec<u32>),
    /// Generalized time, kept in its textual form
    GeneralizedTime(String),
    /// Binary time (TimeOfDay)
    BinaryTime(BinaryTime),
    /// Binary coded decimal
    Bcd(i32),
    /// UTC time
    UtcTime(UtcTime),
}

/// Raw MMS type of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MmsType {
    Array,
    Structure,
    Boolean,
    BitString,
    Integer,
    Unsigned,
    Float,
    OctetString,
    VisibleString,
    GeneralizedTime,
    BinaryTime,
    Bcd,
    ObjectIdentifier,
    String,
    UtcTime,
}

impl MmsType {
    /// Name used by the MMS client stack, e.g. `MMS_BIT_STRING`
    pub const fn name(self) -> &'static str {
        match self {
            MmsType::Array => "MMS_ARRAY",
            MmsType::Structure => "MMS_STRUCTURE",
            MmsType::Boolean => "MMS_BOOLEAN",
            MmsType::BitString => "MMS_BIT_STRING",
            MmsType::Integer => "MMS_INTEGER",
            MmsType::Unsigned => "MMS_UNSIGNED",
            MmsType::Float => "MMS_FLOAT",
            MmsType::OctetString => "MMS_OCTET_STRING",
            MmsType::VisibleString => "MMS_VISIBLE_STRING",
            MmsType::GeneralizedTime => "MMS_GENERALIZED_TIME",
            MmsType::BinaryTime => "MMS_BINARY_TIME",
            MmsType::Bcd => "MMS_BCD",
            MmsType::ObjectIdentifier => "MMS_OBJ_ID",
            MmsType::String => "MMS_STRING",
            MmsType::UtcTime => "MMS_UTC_TIME",
        }
    }
}

impl fmt::Display for MmsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MmsValue {
    /// Get the type of this value
    pub fn get_type(&self) -> MmsType {
        match self {
            MmsValue::Boolean(_) => MmsType::Boolean,
            MmsValue::Integer(_) => MmsType::Integer,
            MmsValue::Unsigned(_) => MmsType::Unsigned,
            MmsValue::Float(_) => MmsType::Float,
            MmsValue::VisibleString(_) => MmsType::VisibleString,
            MmsValue::String(_) => MmsType::String,
            MmsValue::BitString(_) => MmsType::BitString,
            MmsValue::OctetString(_) => MmsType::OctetString,
            MmsValue::Structure(_) => MmsType::Structure,
            MmsValue::Array(_) => MmsType::Array,
            MmsValue::ObjectIdentifier(_) => MmsType::ObjectIdentifier,
            MmsValue::GeneralizedTime(_) => MmsType::GeneralizedTime,
            MmsValue::BinaryTime(_) => MmsType::BinaryTime,
            MmsValue::Bcd(_) => MmsType::Bcd,
            MmsValue::UtcTime(_) => MmsType::UtcTime,
        }
    }

    /// Constructs a visible string
    pub fn new_visible_string(string: impl Into<String>) -> Self {
        MmsValue::VisibleString(string.into())
    }

    /// Constructs a bit string from whole bytes
    pub fn new_bit_string(bytes: Vec<u8>) -> Self {
        MmsValue::BitString(BitString::from_bytes(bytes))
    }

    /// Constructs a structure
    pub fn new_structure(members: Vec<MmsValue>) -> Self {
        MmsValue::Structure(members)
    }

    /// Constructs an array
    ///
    /// # Errors
    ///
    /// Returns an error if array elements have different types
    pub fn new_array(array: Vec<MmsValue>) -> MmsResult<Self> {
        if let Some(first) = array.first() {
            let array_type = first.get_type();
            for (index, element) in array.iter().enumerate() {
                if element.get_type() != array_type {
                    return Err(MmsError::InvalidData(format!(
                        "Array is of type {}, but element at {} is of type {}",
                        array_type,
                        index,
                        element.get_type()
                    )));
                }
            }
        }
        Ok(MmsValue::Array(array))
    }
}

/// Upper case hex of an octet string, prefixed with `0x`
pub fn octets_to_upper_hex(octets: &[u8]) -> String {
    let mut out = String::with_capacity(2 + octets.len() * 2);
    out.push_str("0x");
    for byte in octets {
        out.push_str(&format!("{:02X}", byte));
    }
    out
}

/// Textual form in the style of the MMS client stack's value printer
impl fmt::Display for MmsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmsValue::Boolean(b) => write!(f, "{}", b),
            MmsValue::Integer(i) => write!(f, "{}", i),
            MmsValue::Unsigned(u) => write!(f, "{}", u),
            MmsValue::Float(fl) => write!(f, "{}", fl),
            MmsValue::VisibleString(s) | MmsValue::String(s) => f.write_str(s),
            MmsValue::BitString(bits) => write!(f, "{}", bits),
            MmsValue::OctetString(octets) => {
                for byte in octets {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            MmsValue::Structure(members) | MmsValue::Array(members) => {
                f.write_str("{")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", member)?;
                }
                f.write_str("}")
            }
            MmsValue::ObjectIdentifier(arcs) => {
                for (i, arc) in arcs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    write!(f, "{}", arc)?;
                }
                Ok(())
            }
            MmsValue::GeneralizedTime(text) => f.write_str(text),
            MmsValue::BinaryTime(t) => write!(f, "{}", t),
            MmsValue::Bcd(v) => write!(f, "{}", v),
            MmsValue::UtcTime(t) => write!(f, "{}", t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types() {
        assert_eq!(MmsValue::Float(1.0).get_type(), MmsType::Float);
        assert_eq!(MmsValue::new_bit_string(vec![1]).get_type(), MmsType::BitString);
        assert_eq!(MmsValue::ObjectIdentifier(vec![1, 2]).get_type().name(), "MMS_OBJ_ID");
        assert_eq!(MmsType::VisibleString.to_string(), "MMS_VISIBLE_STRING");
    }

    #[test]
    fn test_array_mixed_types() {
        let arr = vec![MmsValue::Integer(1), MmsValue::Boolean(true)];
        assert!(MmsValue::new_array(arr).is_err());

        let arr = vec![MmsValue::Integer(1), MmsValue::Integer(2)];
        let value = MmsValue::new_array(arr).unwrap();
        assert_eq!(value.get_type(), MmsType::Array);
    }

    #[test]
    fn test_display_of_nested_values() {
        let value = MmsValue::new_structure(vec![
            MmsValue::Integer(-4),
            MmsValue::ObjectIdentifier(vec![1, 0, 9506]),
            MmsValue::OctetString(vec![0xAB, 0x01]),
        ]);
        assert_eq!(value.to_string(), "{-4,1.0.9506,ab01}");
    }

    #[test]
    fn test_octets_to_upper_hex() {
        assert_eq!(octets_to_upper_hex(&[0xAB, 0x0C]), "0xAB0C");
        assert_eq!(octets_to_upper_hex(&[]), "0x");
    }
}
