//! Core types for MMS/TASE.2 inspection
//!
//! This crate provides the decoded MMS value model, the closed set of MMS
//! service error codes and the error type shared by the rest of the workspace.

pub mod datatypes;
pub mod error;
pub mod error_code;

pub use datatypes::{BinaryTime, BitString, MmsType, MmsValue, UtcTime};
pub use error::{MmsError, MmsResult};
pub use error_code::MmsErrorCode;

/// Result of reading one named variable from a server.
///
/// `Ok(None)` means the read completed without an error code but produced
/// no value.
pub type ReadOutcome = Result<Option<MmsValue>, MmsErrorCode>;
