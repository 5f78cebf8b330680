//! Connection trait for MMS clients
//!
//! The explorer never speaks the MMS wire protocol itself. Any client stack
//! that can identify the server, list domains and variables and read a
//! named variable can be driven through [`MmsConnection`].

use mms_core::{MmsErrorCode, MmsResult, ReadOutcome};
use serde::{Deserialize, Serialize};

/// Answer to the MMS Identify service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerIdentity {
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub revision: Option<String>,
}

/// Connection trait for MMS client operations
///
/// # Connection Lifecycle
/// 1. **Open**: establish the association with the server
/// 2. **Use**: identify, list domains and variables, read variables
/// 3. **Close**: conclude the association
///
/// Service failures reported by the server are returned as
/// [`MmsErrorCode`]s; only `open` and `close` use [`MmsResult`], since
/// their failures are local (network, timeout) rather than per request.
#[async_trait::async_trait]
pub trait MmsConnection: Send {
    /// Open the connection
    async fn open(&mut self) -> MmsResult<()>;

    /// Close the connection
    async fn close(&mut self) -> MmsResult<()>;

    /// Check if the connection is open
    fn is_open(&self) -> bool;

    /// Query vendor, model and revision of the server
    async fn identify(&mut self) -> Result<ServerIdentity, MmsErrorCode>;

    /// Read a named variable
    ///
    /// # Arguments
    /// * `domain` - Domain of the variable, `None` for VMD scope
    /// * `name` - Variable name
    async fn read_variable(&mut self, domain: Option<&str>, name: &str) -> ReadOutcome;

    /// List the domain names of the server, in server order
    async fn domain_names(&mut self) -> Result<Vec<String>, MmsErrorCode>;

    /// List the variable names of one domain, in server order
    async fn domain_variable_names(&mut self, domain: &str) -> Result<Vec<String>, MmsErrorCode>;
}
