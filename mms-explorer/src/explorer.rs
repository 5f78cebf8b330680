//! Server exploration and document assembly

use crate::config::ExplorerConfig;
use crate::connection::{MmsConnection, ServerIdentity};
use mms_core::{MmsError, MmsResult, MmsValue};
use mms_json::{render, render_field, render_version, FieldRecord, BILATERAL_TABLE_ID};
use serde::Serialize;
use serde_json::{json, Value};

/// VMD-scope variable holding the TASE.2 version pair
pub const TASE2_VERSION: &str = "TASE2_Version";

/// VMD-scope variable holding the supported conformance blocks
pub const SUPPORTED_FEATURES: &str = "Supported_Features";

/// Server identity as written to the document; missing fields are `""`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityReport {
    pub vendor: String,
    pub model: String,
    pub revision: String,
}

impl From<ServerIdentity> for IdentityReport {
    fn from(identity: ServerIdentity) -> Self {
        Self {
            vendor: identity.vendor.unwrap_or_default(),
            model: identity.model.unwrap_or_default(),
            revision: identity.revision.unwrap_or_default(),
        }
    }
}

/// One entry of the `"domains"` list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReport {
    pub name: String,
    pub bilateral_table_id: Value,
    pub variables: Vec<FieldRecord>,
}

/// Complete description of a server
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerDocument {
    pub server_identity: Option<IdentityReport>,
    #[serde(rename = "TASE2_Version")]
    pub tase2_version: Value,
    #[serde(rename = "Supported_Features")]
    pub supported_features: Value,
    pub domains: Vec<DomainReport>,
}

impl ExplorerDocument {
    /// Serialize as indented JSON text
    pub fn to_json_pretty(&self) -> MmsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as a JSON value
    pub fn to_json_value(&self) -> MmsResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Document written when the server cannot be reached at all
    pub fn unreachable() -> Value {
        json!({ "server_identity": null })
    }
}

/// Walks a server through an [`MmsConnection`]
///
/// # Usage Example
///
/// ```rust,no_run
/// use mms_explorer::{Explorer, ExplorerConfig, ExplorerDocument, MmsConnection};
///
/// async fn describe(conn: &mut dyn MmsConnection) -> String {
///     let explorer = Explorer::new(ExplorerConfig::default());
///     match explorer.run(conn).await {
///         Ok(document) => document.to_json_pretty().unwrap_or_default(),
///         Err(_) => ExplorerDocument::unreachable().to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    config: ExplorerConfig,
}

impl Explorer {
    /// Create an explorer
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    /// Open the connection, explore the server and close the connection
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the connection
    /// cannot be opened within the configured timeout. Failures after the
    /// connection is open are reported inside the document.
    pub async fn run<C>(&self, conn: &mut C) -> MmsResult<ExplorerDocument>
    where
        C: MmsConnection + ?Sized,
    {
        self.config.validate()?;

        log::info!("Connecting to MMS server at {}", self.config.address());
        match self.config.timeout() {
            Some(timeout) => tokio::time::timeout(timeout, conn.open())
                .await
                .map_err(|_| MmsError::Timeout)??,
            None => conn.open().await?,
        }

        let document = self.explore(conn).await;

        if let Err(e) = conn.close().await {
            log::warn!("Error closing connection to {}: {}", self.config.address(), e);
        }
        log::info!("Closed connection to {}", self.config.address());
        Ok(document)
    }

    /// Explore an already open connection
    ///
    /// Never fails: reads that fail render as `null`, a failed domain
    /// listing yields no domains and a failed variable listing yields no
    /// variables.
    pub async fn explore<C>(&self, conn: &mut C) -> ExplorerDocument
    where
        C: MmsConnection + ?Sized,
    {
        let server_identity = match conn.identify().await {
            Ok(identity) => Some(IdentityReport::from(identity)),
            Err(code) => {
                log::warn!("Identify failed: {}", code);
                None
            }
        };

        let version = read_optional(conn, None, TASE2_VERSION).await;
        let features = read_optional(conn, None, SUPPORTED_FEATURES).await;

        let domains = match conn.domain_names().await {
            Ok(names) => {
                let mut domains = Vec::with_capacity(names.len());
                for name in names {
                    domains.push(self.explore_domain(conn, name).await);
                }
                domains
            }
            Err(code) => {
                log::error!("Domain list failed: {}", code);
                Vec::new()
            }
        };

        ExplorerDocument {
            server_identity,
            tase2_version: render_version(version.as_ref()),
            supported_features: render(features.as_ref()),
            domains,
        }
    }

    async fn explore_domain<C>(&self, conn: &mut C, name: String) -> DomainReport
    where
        C: MmsConnection + ?Sized,
    {
        let bilateral_table_id = read_optional(conn, Some(name.as_str()), BILATERAL_TABLE_ID).await;

        let variable_names = match conn.domain_variable_names(&name).await {
            Ok(names) => names,
            Err(code) => {
                log::warn!("Variable list of domain {} failed: {}", name, code);
                Vec::new()
            }
        };

        let listed = variable_names.len();
        let variable_names = self.config.suppressed_names.retain_visible(variable_names);
        if variable_names.len() < listed {
            log::debug!(
                "Skipping {} suppressed variable(s) of domain {}",
                listed - variable_names.len(),
                name
            );
        }

        let mut variables = Vec::with_capacity(variable_names.len());
        for variable in variable_names {
            let outcome = conn.read_variable(Some(name.as_str()), &variable).await;
            if let Err(code) = &outcome {
                log::debug!("Read of {}/{} failed: {}", name, variable, code);
            }
            variables.push(render_field(&variable, &outcome));
        }

        DomainReport {
            name,
            bilateral_table_id: render(bilateral_table_id.as_ref()),
            variables,
        }
    }
}

/// Read a variable whose failure only means "absent"
async fn read_optional<C>(conn: &mut C, domain: Option<&str>, name: &str) -> Option<MmsValue>
where
    C: MmsConnection + ?Sized,
{
    match conn.read_variable(domain, name).await {
        Ok(value) => value,
        Err(code) => {
            log::debug!("Read of {} failed: {}", name, code);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mms_core::{MmsErrorCode, ReadOutcome};
    use mms_json::SuppressedNames;
    use std::collections::HashMap;

    /// In-memory server
    #[derive(Default)]
    struct FakeServer {
        open: bool,
        refuse_open: bool,
        identity: Option<ServerIdentity>,
        values: HashMap<(Option<String>, String), ReadOutcome>,
        domains: Option<Vec<String>>,
        variables: HashMap<String, Vec<String>>,
        reads: Vec<(Option<String>, String)>,
    }

    impl FakeServer {
        fn with_value(mut self, domain: Option<&str>, name: &str, outcome: ReadOutcome) -> Self {
            self.values
                .insert((domain.map(str::to_string), name.to_string()), outcome);
            self
        }

        fn with_domain(mut self, domain: &str, variables: &[&str]) -> Self {
            self.domains
                .get_or_insert_with(Vec::new)
                .push(domain.to_string());
            self.variables.insert(
                domain.to_string(),
                variables.iter().map(|v| v.to_string()).collect(),
            );
            self
        }
    }

    #[async_trait::async_trait]
    impl MmsConnection for FakeServer {
        async fn open(&mut self) -> MmsResult<()> {
            if self.refuse_open {
                return Err(MmsError::Connection(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "refused",
                )));
            }
            self.open = true;
            Ok(())
        }

        async fn close(&mut self) -> MmsResult<()> {
            self.open = false;
            Ok(())
        }

        fn is_open(&self) -> bool {
            self.open
        }

        async fn identify(&mut self) -> Result<ServerIdentity, MmsErrorCode> {
            self.identity.clone().ok_or(MmsErrorCode::ServiceTimeout)
        }

        async fn read_variable(&mut self, domain: Option<&str>, name: &str) -> ReadOutcome {
            let key = (domain.map(str::to_string), name.to_string());
            self.reads.push(key.clone());
            self.values
                .get(&key)
                .cloned()
                .unwrap_or(Err(MmsErrorCode::AccessObjectNonExistent))
        }

        async fn domain_names(&mut self) -> Result<Vec<String>, MmsErrorCode> {
            self.domains.clone().ok_or(MmsErrorCode::ServiceOther)
        }

        async fn domain_variable_names(&mut self, domain: &str) -> Result<Vec<String>, MmsErrorCode> {
            self.variables
                .get(domain)
                .cloned()
                .ok_or(MmsErrorCode::DefinitionObjectUndefined)
        }
    }

    fn tase2_server() -> FakeServer {
        FakeServer {
            identity: Some(ServerIdentity {
                vendor: Some("ACME".to_string()),
                model: None,
                revision: Some("1.0".to_string()),
            }),
            ..Default::default()
        }
        .with_value(
            None,
            TASE2_VERSION,
            Ok(Some(MmsValue::new_structure(vec![
                MmsValue::Integer(2000),
                MmsValue::Unsigned(8),
            ]))),
        )
        .with_value(
            None,
            SUPPORTED_FEATURES,
            Ok(Some(MmsValue::new_bit_string(vec![0xC0, 0x00]))),
        )
        .with_domain("CC_A", &["Freq", "Bilateral_Table_ID", "Breaker", "Secret"])
        .with_value(
            Some("CC_A"),
            BILATERAL_TABLE_ID,
            Ok(Some(MmsValue::new_visible_string("BLT_A_B"))),
        )
        .with_value(
            Some("CC_A"),
            "Freq",
            Ok(Some(MmsValue::new_structure(vec![
                MmsValue::Float(50.0),
                MmsValue::new_bit_string(vec![0x00]),
            ]))),
        )
        .with_value(
            Some("CC_A"),
            "Breaker",
            Ok(Some(MmsValue::new_structure(vec![
                MmsValue::Integer(2),
                MmsValue::new_bit_string(vec![0x03]),
            ]))),
        )
        .with_value(
            Some("CC_A"),
            "Secret",
            Err(MmsErrorCode::AccessObjectAccessDenied),
        )
    }

    #[tokio::test]
    async fn test_full_document() {
        let mut server = tase2_server();
        let explorer = Explorer::default();
        let document = explorer.run(&mut server).await.unwrap();

        assert_eq!(
            document.to_json_value().unwrap(),
            json!({
                "server_identity": {"vendor": "ACME", "model": "", "revision": "1.0"},
                "TASE2_Version": "2000.8",
                "Supported_Features": 49152,
                "domains": [{
                    "name": "CC_A",
                    "bilateral_table_id": "BLT_A_B",
                    "variables": [
                        {"name": "Freq", "type": "Real", "mms_type": "MMS_FLOAT", "value": 50.0},
                        {"name": "Breaker", "type": "Discrete_Or_State", "mms_type": "MMS_INTEGER", "value": 2},
                        {
                            "name": "Secret",
                            "type": "unknown",
                            "mms_type": "unknown",
                            "error": "MMS_ERROR_ACCESS_OBJECT_ACCESS_DENIED"
                        }
                    ]
                }]
            })
        );
        assert!(!server.is_open());
    }

    #[tokio::test]
    async fn test_document_key_order() {
        let mut server = tase2_server();
        let document = Explorer::default().explore(&mut server).await;
        let text = serde_json::to_string(&document).unwrap();
        let positions: Vec<usize> = [
            "\"server_identity\"",
            "\"TASE2_Version\"",
            "\"Supported_Features\"",
            "\"domains\"",
            "\"bilateral_table_id\"",
            "\"variables\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_suppressed_variables_are_not_read() {
        let mut server = tase2_server();
        let config = ExplorerConfig::default().suppress("SECRET");
        let document = Explorer::new(config).explore(&mut server).await;

        let names: Vec<&str> = document.domains[0]
            .variables
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["Freq", "Breaker"]);
        assert!(!server
            .reads
            .contains(&(Some("CC_A".to_string()), "Secret".to_string())));
    }

    #[tokio::test]
    async fn test_empty_suppression_lists_every_variable() {
        let mut server = tase2_server();
        let config = ExplorerConfig::default().with_suppressed_names(SuppressedNames::empty());
        let document = Explorer::new(config).explore(&mut server).await;
        assert_eq!(document.domains[0].variables.len(), 4);
        assert_eq!(document.domains[0].variables[1].name, "Bilateral_Table_ID");
    }

    #[tokio::test]
    async fn test_failures_render_as_null() {
        let mut server = FakeServer::default().with_domain("D", &[]);
        let document = Explorer::default().explore(&mut server).await;
        assert_eq!(
            document.to_json_value().unwrap(),
            json!({
                "server_identity": null,
                "TASE2_Version": null,
                "Supported_Features": null,
                "domains": [{"name": "D", "bilateral_table_id": null, "variables": []}]
            })
        );
    }

    #[tokio::test]
    async fn test_domain_list_failure_yields_no_domains() {
        let mut server = FakeServer::default();
        let document = Explorer::default().explore(&mut server).await;
        assert!(document.domains.is_empty());
    }

    #[tokio::test]
    async fn test_variable_list_failure_yields_no_variables() {
        let mut server = FakeServer {
            domains: Some(vec!["Ghost".to_string()]),
            ..Default::default()
        };
        let document = Explorer::default().explore(&mut server).await;
        assert_eq!(document.domains.len(), 1);
        assert!(document.domains[0].variables.is_empty());
    }

    #[tokio::test]
    async fn test_version_fallback_to_text_rendering() {
        let mut server = FakeServer::default().with_value(
            None,
            TASE2_VERSION,
            Ok(Some(MmsValue::new_visible_string("2000.8"))),
        );
        let document = Explorer::default().explore(&mut server).await;
        assert_eq!(document.tase2_version, json!("2000.8"));
    }

    #[tokio::test]
    async fn test_open_failure_is_returned() {
        let mut server = FakeServer {
            refuse_open: true,
            ..Default::default()
        };
        let result = Explorer::default().run(&mut server).await;
        assert!(matches!(result, Err(MmsError::Connection(_))));
        assert!(server.reads.is_empty());
        assert_eq!(ExplorerDocument::unreachable().to_string(), r#"{"server_identity":null}"#);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected_before_connecting() {
        let mut server = tase2_server();
        let explorer = Explorer::new(ExplorerConfig::new().with_port(0));
        assert!(matches!(explorer.run(&mut server).await, Err(MmsError::Config(_))));
        assert!(!server.is_open());
    }

    #[tokio::test]
    async fn test_run_through_trait_object() {
        let mut server = tase2_server();
        let conn: &mut dyn MmsConnection = &mut server;
        let document = Explorer::default().run(conn).await.unwrap();
        assert_eq!(document.domains.len(), 1);
    }
}
