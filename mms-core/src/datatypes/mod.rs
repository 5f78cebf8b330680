//! Decoded MMS data types

pub mod bit_string;
pub mod mms_value;
pub mod time;

// Re-export types
pub use bit_string::BitString;
pub use mms_value::{octets_to_upper_hex, MmsType, MmsValue};
pub use time::{BinaryTime, UtcTime};
