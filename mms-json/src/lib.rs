//! TASE.2 classification and JSON rendering of MMS values
//!
//! TASE.2 data objects are MMS structures whose first member is the
//! primary value and whose following members carry quality or timestamp
//! information. Servers rarely publish the schema, so this crate recovers
//! the intended semantic type from the value shape and flattens such
//! structures into the primary scalar when it recognizes the pattern.
//!
//! - [`classify`]: semantic type of a value ([`SemanticType`])
//! - [`render`]: JSON rendering of a value
//! - [`render_version`]: `"major.minor"` rendering of a version pair
//! - [`render_text`]: string rendering used when a version is not a pair
//! - [`render_field`]: per-variable record with type, raw type and value or error
//! - [`SuppressedNames`]: case-insensitive set of variable names to skip
//!
//! # Usage
//!
//! ```rust
//! use mms_core::MmsValue;
//! use mms_json::{classify, render, SemanticType};
//!
//! let value = MmsValue::new_structure(vec![
//!     MmsValue::Integer(7),
//!     MmsValue::new_bit_string(vec![0x03]),
//! ]);
//! assert_eq!(classify(Some(&value)), SemanticType::DiscreteOrState);
//! assert_eq!(render(Some(&value)), serde_json::json!(7));
//! ```

pub mod classify;
pub mod field;
pub mod filter;
pub mod render;

pub use classify::{classify, SemanticType};
pub use field::{raw_type_name, render_field, FieldOutcome, FieldRecord};
pub use filter::{SuppressedNames, BILATERAL_TABLE_ID};
pub use render::{render, render_text, render_value, render_version, TEXT_RENDER_LIMIT};
