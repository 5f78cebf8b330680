//! TASE.2 semantic classification of MMS values

use mms_core::MmsValue;
use serde::Serialize;
use std::fmt;

/// TASE.2 semantic type recovered from the shape of an MMS value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SemanticType {
    /// Analog measurement
    #[serde(rename = "Real")]
    Real,
    /// Discrete value or state, usually with a quality bit string
    #[serde(rename = "Discrete_Or_State")]
    DiscreteOrState,
    /// Unsigned counter or code
    #[serde(rename = "Unsigned")]
    Unsigned,
    /// Boolean flag
    #[serde(rename = "Bool")]
    Bool,
    /// Text
    #[serde(rename = "String")]
    String,
    /// Shape not recognized
    #[serde(rename = "unknown")]
    Unknown,
}

impl SemanticType {
    /// Name written to the `"type"` field
    pub const fn name(self) -> &'static str {
        match self {
            SemanticType::Real => "Real",
            SemanticType::DiscreteOrState => "Discrete_Or_State",
            SemanticType::Unsigned => "Unsigned",
            SemanticType::Bool => "Bool",
            SemanticType::String => "String",
            SemanticType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a value read from a server.
///
/// `None` (the read produced neither a value nor an error) is
/// [`SemanticType::Unknown`]. Scalars map directly; a bit string at top
/// level is always a discrete/state encoding. Structures are classified by
/// their first member.
pub fn classify(value: Option<&MmsValue>) -> SemanticType {
    let Some(value) = value else {
        return SemanticType::Unknown;
    };

    match value {
        MmsValue::Float(_) => SemanticType::Real,
        MmsValue::Integer(_) => SemanticType::DiscreteOrState,
        MmsValue::Unsigned(_) => SemanticType::Unsigned,
        MmsValue::Boolean(_) => SemanticType::Bool,
        MmsValue::VisibleString(_) | MmsValue::String(_) => SemanticType::String,
        MmsValue::BitString(_) => SemanticType::DiscreteOrState,
        MmsValue::Structure(members) => classify_structure(members),
        MmsValue::Array(_)
        | MmsValue::OctetString(_)
        | MmsValue::ObjectIdentifier(_)
        | MmsValue::GeneralizedTime(_)
        | MmsValue::BinaryTime(_)
        | MmsValue::Bcd(_)
        | MmsValue::UtcTime(_) => SemanticType::Unknown,
    }
}

fn classify_structure(members: &[MmsValue]) -> SemanticType {
    match members {
        [MmsValue::Float(_), ..] => SemanticType::Real,
        // Also covers the (Integer, quality BitString) pair.
        [MmsValue::Integer(_), ..] => SemanticType::DiscreteOrState,
        [MmsValue::Unsigned(_), ..] => SemanticType::Unsigned,
        [MmsValue::BitString(bits), ..] if bits.as_small_integer().is_some() => {
            SemanticType::DiscreteOrState
        }
        _ => SemanticType::Unknown,
    }
}
