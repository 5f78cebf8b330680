//! JSON rendering of MMS values
//!
//! Rendering is total: every value produces some JSON, unknown shapes
//! degrade to text and nothing here returns an error.
//!
//! # Structure flattening
//!
//! A non-empty structure is reduced to a single scalar when its members
//! match one of these rules, tried in order:
//!
//! 1. first member `Float`: that float
//! 2. first member `Integer` or `Unsigned`: that integer
//! 3. first member a bit string of at most two bytes: its integer value
//! 4. `(Integer, BitString)` or `(decodable BitString, BitString)`: the first member's integer
//! 5. second member `Integer`: that integer
//!
//! Anything else, including the empty structure, is rendered as an array of
//! all members.

use mms_core::datatypes::octets_to_upper_hex;
use mms_core::MmsValue;
use serde_json::{Number, Value};

/// Maximum length in bytes of the text rendered for time, BCD and object
/// identifier values.
///
/// Longer text is cut at the last UTF-8 character boundary at or below the
/// limit.
pub const TEXT_RENDER_LIMIT: usize = 1024;

/// Render an optional value. `None` renders as JSON `null`.
pub fn render(value: Option<&MmsValue>) -> Value {
    value.map_or(Value::Null, render_value)
}

/// Render a value as JSON
pub fn render_value(value: &MmsValue) -> Value {
    match value {
        MmsValue::Float(f) => float_to_json(*f),
        MmsValue::Integer(i) => Value::from(*i),
        MmsValue::Unsigned(u) => Value::from(*u),
        MmsValue::Boolean(b) => Value::Bool(*b),
        MmsValue::VisibleString(s) | MmsValue::String(s) => Value::String(s.clone()),
        MmsValue::BitString(bits) => match bits.as_small_integer() {
            Some(n) => Value::from(n),
            None => Value::String(bits.to_hex()),
        },
        MmsValue::OctetString(octets) => Value::String(octets_to_upper_hex(octets)),
        MmsValue::Structure(members) => {
            flatten_structure(members).unwrap_or_else(|| render_all(members))
        }
        MmsValue::Array(elements) => render_all(elements),
        MmsValue::ObjectIdentifier(_)
        | MmsValue::GeneralizedTime(_)
        | MmsValue::BinaryTime(_)
        | MmsValue::Bcd(_)
        | MmsValue::UtcTime(_) => Value::String(bounded_text(value.to_string())),
    }
}

/// Render a version pair as `"major.minor"`.
///
/// Applies only to a structure of exactly two integer members (signed or
/// unsigned); every other value goes through [`render_text`].
pub fn render_version(value: Option<&MmsValue>) -> Value {
    if let Some(MmsValue::Structure(members)) = value {
        if let [major, minor] = members.as_slice() {
            if let (Some(major), Some(minor)) = (integer_text(major), integer_text(minor)) {
                return Value::String(format!("{}.{}", major, minor));
            }
        }
    }
    render_text(value)
}

/// Render a value as a JSON string.
///
/// Scalars become their text; a bit string becomes its integer value in
/// decimal or, past two bytes, lowercase hex. A structure is reduced to
/// the text of its first member and an empty structure, like `None`,
/// renders as `null`. Other shapes use their bounded textual form.
pub fn render_text(value: Option<&MmsValue>) -> Value {
    let Some(value) = value else {
        return Value::Null;
    };

    match value {
        MmsValue::Integer(i) => Value::String(i.to_string()),
        MmsValue::Unsigned(u) => Value::String(u.to_string()),
        MmsValue::Float(f) => Value::String(f.to_string()),
        MmsValue::Boolean(b) => Value::String(b.to_string()),
        MmsValue::VisibleString(s) | MmsValue::String(s) => Value::String(s.clone()),
        MmsValue::BitString(bits) => Value::String(match bits.as_small_integer() {
            Some(n) => n.to_string(),
            None => bounded_text(bits.to_hex()),
        }),
        MmsValue::Structure(members) => render_text(members.first()),
        MmsValue::OctetString(_)
        | MmsValue::Array(_)
        | MmsValue::ObjectIdentifier(_)
        | MmsValue::GeneralizedTime(_)
        | MmsValue::BinaryTime(_)
        | MmsValue::Bcd(_)
        | MmsValue::UtcTime(_) => Value::String(bounded_text(value.to_string())),
    }
}

fn integer_text(value: &MmsValue) -> Option<String> {
    match value {
        MmsValue::Integer(i) => Some(i.to_string()),
        MmsValue::Unsigned(u) => Some(u.to_string()),
        _ => None,
    }
}

fn flatten_structure(members: &[MmsValue]) -> Option<Value> {
    let first = members.first()?;

    // Rules 1 to 3
    match first {
        MmsValue::Float(f) => return Some(float_to_json(*f)),
        MmsValue::Integer(i) => return Some(Value::from(*i)),
        MmsValue::Unsigned(u) => return Some(Value::from(*u)),
        MmsValue::BitString(bits) => {
            if let Some(n) = bits.as_small_integer() {
                return Some(Value::from(n));
            }
        }
        _ => {}
    }

    // Rule 4: every input it accepts was already taken by rules 2 and 3.
    if let [first, MmsValue::BitString(_), ..] = members {
        match first {
            MmsValue::Integer(i) => return Some(Value::from(*i)),
            MmsValue::BitString(bits) => {
                if let Some(n) = bits.as_small_integer() {
                    return Some(Value::from(n));
                }
            }
            _ => {}
        }
    }

    // Rule 5: no documented TASE.2 data object has this layout.
    if let [_, MmsValue::Integer(second), ..] = members {
        return Some(Value::from(*second));
    }

    None
}

fn render_all(values: &[MmsValue]) -> Value {
    Value::Array(values.iter().map(render_value).collect())
}

/// Non-finite floats have no JSON number form and render as text.
fn float_to_json(f: f64) -> Value {
    Number::from_f64(f).map_or_else(|| Value::String(f.to_string()), Value::Number)
}

fn bounded_text(mut text: String) -> String {
    if text.len() > TEXT_RENDER_LIMIT {
        let mut cut = TEXT_RENDER_LIMIT;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        log::debug!("Truncating rendered text from {} to {} bytes", text.len(), cut);
        text.truncate(cut);
    }
    text
}
