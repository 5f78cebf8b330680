//! MMS/TASE.2 server exploration
//!
//! This crate drives an MMS client through the reads needed to describe a
//! TASE.2 server and assembles the results into one JSON document:
//!
//! ```text
//! {
//!   "server_identity": {"vendor": .., "model": .., "revision": ..} | null,
//!   "TASE2_Version": "<major>.<minor>" | .. | null,
//!   "Supported_Features": .. | null,
//!   "domains": [
//!     {"name": .., "bilateral_table_id": .. | null, "variables": [..]}
//!   ]
//! }
//! ```
//!
//! The MMS client itself is not part of this crate; it plugs in through the
//! [`MmsConnection`] trait.

pub mod config;
pub mod connection;
pub mod explorer;

pub use config::{ExplorerConfig, DEFAULT_PORT};
pub use connection::{MmsConnection, ServerIdentity};
pub use explorer::{
    DomainReport, Explorer, ExplorerDocument, IdentityReport, SUPPORTED_FEATURES, TASE2_VERSION,
};
