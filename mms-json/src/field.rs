//! Per-variable JSON records

use crate::classify::{classify, SemanticType};
use crate::render::render;
use mms_core::{MmsErrorCode, MmsValue, ReadOutcome};
use serde::Serialize;
use serde_json::Value;

/// One entry of a domain's `"variables"` list.
///
/// Serializes as `{"name", "type", "mms_type", "value"}` for a successful
/// read and `{"name", "type", "mms_type", "error"}` for a failed one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub semantic_type: SemanticType,
    pub mms_type: &'static str,
    #[serde(flatten)]
    pub outcome: FieldOutcome,
}

/// Value or error part of a [`FieldRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOutcome {
    Value(Value),
    Error(MmsErrorCode),
}

impl FieldRecord {
    /// Check if the read failed
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, FieldOutcome::Error(_))
    }
}

/// Raw MMS type name reported in `"mms_type"`.
///
/// A structure reports the type of its first member, or `UNKNOWN` when it
/// has none. A missing value reports `null`.
pub fn raw_type_name(value: Option<&MmsValue>) -> &'static str {
    match value {
        None => "null",
        Some(MmsValue::Structure(members)) => members
            .first()
            .map_or("UNKNOWN", |first| first.get_type().name()),
        Some(other) => other.get_type().name(),
    }
}

/// Build the record for one variable read.
///
/// A read that reports `MMS_ERROR_NONE` is not a failure; it is rendered
/// like a read that returned no value.
pub fn render_field(name: &str, outcome: &ReadOutcome) -> FieldRecord {
    match outcome {
        Ok(value) => value_record(name, value.as_ref()),
        Err(code) if code.is_none() => value_record(name, None),
        Err(code) => FieldRecord {
            name: name.to_string(),
            semantic_type: SemanticType::Unknown,
            mms_type: "unknown",
            outcome: FieldOutcome::Error(*code),
        },
    }
}

fn value_record(name: &str, value: Option<&MmsValue>) -> FieldRecord {
    FieldRecord {
        name: name.to_string(),
        semantic_type: classify(value),
        mms_type: raw_type_name(value),
        outcome: FieldOutcome::Value(render(value)),
    }
}
