//! tase2-inspect - describe MMS/TASE.2 servers as JSON
//!
//! # Architecture
//!
//! - `mms-core`: decoded MMS values, error codes and the error type
//! - `mms-json`: TASE.2 classification and JSON rendering of values
//! - `mms-explorer`: connection trait, configuration and document assembly
//!
//! The MMS client stack is supplied by the caller through
//! [`explorer::MmsConnection`].
//!
//! # Usage
//!
//! ```rust
//! use tase2_inspect::{classify, render_field, MmsValue, SemanticType};
//!
//! let value = MmsValue::new_structure(vec![
//!     MmsValue::Float(49.98),
//!     MmsValue::new_bit_string(vec![0x00]),
//! ]);
//! assert_eq!(classify(Some(&value)), SemanticType::Real);
//!
//! let record = render_field("Frequency", &Ok(Some(value)));
//! assert_eq!(record.mms_type, "MMS_FLOAT");
//! ```

// Re-export core types
pub use mms_core::{BitString, MmsError, MmsErrorCode, MmsResult, MmsType, MmsValue, ReadOutcome};

// Re-export rendering API
pub use mms_json::{
    classify, render, render_field, render_value, render_version, FieldOutcome, FieldRecord,
    SemanticType, SuppressedNames,
};

// Re-export explorer API
pub mod explorer {
    pub use mms_explorer::*;
}
