//! Explorer configuration
//!
//! # Usage Example
//!
//! ```rust
//! use mms_explorer::ExplorerConfig;
//! use std::time::Duration;
//!
//! let config = ExplorerConfig::new()
//!     .with_host("10.0.0.5")
//!     .with_timeout(Duration::from_secs(5))
//!     .suppress("Transfer_Set_Name");
//! assert_eq!(config.address(), "10.0.0.5:102");
//! ```

use mms_core::{MmsError, MmsResult};
use mms_json::SuppressedNames;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// ISO transport over TCP (RFC 1006) port
pub const DEFAULT_PORT: u16 = 102;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for one exploration run
///
/// # Default Settings
/// - Host: `localhost`
/// - Port: 102
/// - Timeout: 30 seconds for opening the connection
/// - Suppressed names: `Bilateral_Table_ID`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Server host name or IP address
    pub host: String,
    /// Server TCP port
    pub port: u16,
    /// Connection timeout in seconds, `None` to wait indefinitely
    pub timeout_secs: Option<u64>,
    /// Variable names left out of every domain's variable list
    pub suppressed_names: SuppressedNames,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            suppressed_names: SuppressedNames::default(),
        }
    }
}

impl ExplorerConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from TOML
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    /// Returns `MmsError::Config` if the text is not valid TOML for this
    /// structure or fails [`ExplorerConfig::validate`]
    pub fn from_toml_str(text: &str) -> MmsResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| MmsError::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the server host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the connection timeout
    ///
    /// Sub-second parts are rounded up to the next whole second.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.timeout_secs = Some(secs);
        self
    }

    /// Wait for the connection without a time limit
    pub fn without_timeout(mut self) -> Self {
        self.timeout_secs = None;
        self
    }

    /// Add a variable name to suppress
    pub fn suppress(mut self, name: impl Into<String>) -> Self {
        self.suppressed_names.insert(name);
        self
    }

    /// Replace the suppressed name set
    pub fn with_suppressed_names(mut self, names: SuppressedNames) -> Self {
        self.suppressed_names = names;
        self
    }

    /// Connection timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Address in `host:port` form
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the configuration
    ///
    /// # Errors
    /// Returns `MmsError::Config` if the host is empty or the port is 0
    pub fn validate(&self) -> MmsResult<()> {
        if self.host.trim().is_empty() {
            return Err(MmsError::Config("host must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(MmsError::Config("port must be in 1..=65535".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.address(), "localhost:102");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(config.suppressed_names.contains("bilateral_table_id"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ExplorerConfig::new()
            .with_host("192.168.1.10")
            .with_port(10102)
            .with_timeout(Duration::from_millis(1500))
            .suppress("Extra");
        assert_eq!(config.address(), "192.168.1.10:10102");
        assert_eq!(config.timeout_secs, Some(2));
        assert!(config.suppressed_names.contains("EXTRA"));
        assert!(config.suppressed_names.contains("Bilateral_Table_ID"));
        assert_eq!(config.clone().without_timeout().timeout(), None);
    }

    #[test]
    fn test_from_toml() {
        let config = ExplorerConfig::from_toml_str(
            r#"
            host = "scada.example"
            suppressed_names = ["Foo", "BAR"]
            "#,
        )
        .unwrap();
        assert_eq!(config.host, "scada.example");
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.suppressed_names.contains("bar"));
        assert!(!config.suppressed_names.contains("Bilateral_Table_ID"));
    }

    #[test]
    fn test_from_toml_rejects_port_zero() {
        let result = ExplorerConfig::from_toml_str("port = 0");
        assert!(matches!(result, Err(MmsError::Config(_))));
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let result = ExplorerConfig::from_toml_str("port = \"abc\"");
        assert!(matches!(result, Err(MmsError::Config(_))));
    }

    #[test]
    fn test_empty_host_is_invalid() {
        let config = ExplorerConfig::new().with_host("  ");
        assert!(config.validate().is_err());
    }
}
